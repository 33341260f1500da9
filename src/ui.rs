use std::io::{self, Write};

use crossterm::{
    QueueableCommand,
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{
        Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};

use crate::game::{Direction, GameSession};

/// Run an interactive game in the alternate screen. Arrow keys move, `r`
/// restarts, `q` quits. Each key event is handled to completion before the
/// next is read, so the session never observes a partial move.
pub fn play(mut session: GameSession) -> io::Result<()> {
    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, Hide)?;

    let outcome = run(&mut stdout, &mut session);

    execute!(stdout, LeaveAlternateScreen, Show)?;
    disable_raw_mode()?;

    outcome
}

fn run(stdout: &mut io::Stdout, session: &mut GameSession) -> io::Result<()> {
    loop {
        draw(stdout, session)?;

        let event = event::read()?;
        let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            continue;
        };

        let direction = match code {
            KeyCode::Left => Direction::Left,
            KeyCode::Right => Direction::Right,
            KeyCode::Up => Direction::Up,
            KeyCode::Down => Direction::Down,
            KeyCode::Char('r') => {
                session.restart();
                continue;
            }
            KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
            _ => continue,
        };

        session.apply_move(direction);
    }
}

fn draw(stdout: &mut io::Stdout, session: &GameSession) -> io::Result<()> {
    stdout.queue(Clear(ClearType::All))?;
    stdout.queue(MoveTo(0, 0))?;

    stdout.queue(Print(format!("score: {}\r\n\r\n", session.score())))?;

    for row in session.board().to_rows() {
        for value in row {
            stdout.queue(SetForegroundColor(tile_color(value)))?;

            if value == 0 {
                stdout.queue(Print(format!("{:>6}", ".")))?;
            } else {
                stdout.queue(Print(format!("{value:>6}")))?;
            }

            stdout.queue(ResetColor)?;
        }

        stdout.queue(Print("\r\n\r\n"))?;
    }

    if session.is_over() {
        stdout
            .queue(SetForegroundColor(Color::Red))?
            .queue(Print("GAME OVER - press r to restart\r\n"))?
            .queue(ResetColor)?;
    }

    stdout.queue(Print("\r\narrows: move  r: restart  q: quit\r\n"))?;
    stdout.flush()
}

fn tile_color(value: u32) -> Color {
    match value {
        0 => Color::DarkGrey,
        2 | 4 => Color::White,
        8 | 16 => Color::Yellow,
        32 | 64 => Color::DarkYellow,
        128 | 256 | 512 => Color::Magenta,
        1024 | 2048 => Color::Cyan,
        _ => Color::Green,
    }
}
