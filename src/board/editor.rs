use std::io::{self, Write};

use clipboard::ClipboardProvider;
use crossterm::{
    QueueableCommand,
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{
        Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};

use super::Board;

/// Interactive editor for setting up a starting position. Cells are edited
/// as exponents: `.` is empty, `1`..`9` are 2..512, `a`..`h` are
/// 1024..131072. Returns the finished position as a validated board.
pub fn grid_editor() -> anyhow::Result<Board> {
    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, Hide)?;

    let mut grid = [0u8; 16];

    // Attempt to read a 16-cell sketch from the clipboard
    if let Ok(mut ctx) = clipboard::ClipboardContext::new() {
        if let Ok(content) = ctx.get_contents() {
            let mut index = 0;
            for c in content.chars() {
                if index >= 16 {
                    break;
                }

                if c.is_whitespace() {
                    continue;
                }

                grid[index] = match c {
                    '.' => 0,
                    '0'..='9' => c.to_digit(10).unwrap() as u8,
                    'a'..='h' => 10 + (c as u8 - b'a'),
                    'A'..='H' => 10 + (c.to_ascii_lowercase() as u8 - b'a'),
                    _ => continue,
                };

                index += 1;
            }
        }
    }

    let mut cursor = 0;

    loop {
        // Draw grid
        stdout.queue(Clear(ClearType::All))?;
        stdout.queue(MoveTo(0, 0))?;
        cursor %= 16;

        for i in 0..4 {
            for j in 0..4 {
                let idx = i * 4 + j;
                let exponent = grid[idx];

                let ch = exponent_char(exponent);
                let color = exponent_color(exponent);

                if idx == cursor {
                    stdout.queue(SetBackgroundColor(Color::DarkGrey))?;
                } else {
                    stdout.queue(SetBackgroundColor(Color::Reset))?;
                }

                stdout
                    .queue(SetForegroundColor(color))?
                    .queue(Print(ch))?
                    .queue(SetBackgroundColor(Color::Reset))?
                    .queue(Print(' '))?
                    .queue(ResetColor)?;
            }

            stdout.queue(Print("\r\n"))?;
        }

        stdout.queue(Print("\r\nenter/q: play from here  +/-: bump tile\r\n"))?;
        stdout.flush()?;

        // Handle input
        let event = event::read()?;
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event
        {
            match code {
                KeyCode::Enter | KeyCode::Char('q') => break,
                KeyCode::Char('+' | '=') => grid[cursor] = (grid[cursor] + 1).min(17),
                KeyCode::Char('-') => grid[cursor] = grid[cursor].saturating_sub(1),
                KeyCode::Char(c) => {
                    grid[cursor] = match c {
                        '.' => 0,
                        '0'..='9' => c.to_digit(10).map(|n| n as u8).unwrap_or(grid[cursor]),
                        'a'..='h' => 10 + (c.to_ascii_lowercase() as u8 - b'a'),
                        _ => continue,
                    };

                    cursor += 1;
                }
                KeyCode::Up => cursor = cursor.wrapping_sub(4),
                KeyCode::Down => cursor = cursor.wrapping_add(4),
                KeyCode::Left => cursor = cursor.wrapping_sub(1),
                KeyCode::Right => cursor = cursor.wrapping_add(1),
                _ => {}
            }
        }
    }

    execute!(stdout, LeaveAlternateScreen, Show)?;
    disable_raw_mode()?;

    let mut rows = [[0u32; 4]; 4];
    for (idx, &exponent) in grid.iter().enumerate() {
        if exponent > 0 {
            rows[idx / 4][idx % 4] = 1 << exponent;
        }
    }

    Ok(Board::from_rows(rows)?)
}

fn exponent_char(exponent: u8) -> char {
    match exponent {
        0 => '.',
        1..=9 => (b'0' + exponent) as char,
        _ => (b'a' + exponent - 10) as char,
    }
}

fn exponent_color(exponent: u8) -> Color {
    match exponent {
        0 => Color::DarkGrey,
        1..=9 => Color::White,
        10..=17 => Color::Yellow,
        _ => Color::Reset,
    }
}
