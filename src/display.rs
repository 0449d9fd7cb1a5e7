/// Rendering layer — all terminal I/O lives here.
///
/// `TerminalScreen` is the frame buffer of the terminal build. The game draws
/// into a 128x64 monochrome `PixelBuffer`; presenting packs two pixel rows
/// into each terminal row with half-block characters and lays the text
/// labels over the top.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use witch_shooter::entities::{HEIGHT, WIDTH};
use witch_shooter::platform::FrameBuffer;
use witch_shooter::screen::{Bitmap, PixelBuffer};

// ── Palette ───────────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkGrey;
const C_PIXEL: Color = Color::White;
const C_HINT: Color = Color::DarkGrey;

/// Terminal rows used by the play field (two pixel rows per cell).
const FIELD_ROWS: u16 = (HEIGHT / 2) as u16;
const FIELD_COLS: u16 = WIDTH as u16;

/// Text drawn at a pixel position, rendered as terminal characters.
struct Label {
    x: i32,
    y: i32,
    text: String,
}

pub struct TerminalScreen<W: Write> {
    out: W,
    pixels: PixelBuffer,
    labels: Vec<Label>,
}

impl<W: Write> TerminalScreen<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            pixels: PixelBuffer::new(),
            labels: Vec::new(),
        }
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }

    fn present(&mut self) -> std::io::Result<()> {
        let out = &mut self.out;
        out.queue(terminal::Clear(terminal::ClearType::All))?;

        draw_border(out)?;

        out.queue(style::SetForegroundColor(C_PIXEL))?;
        for row in 0..FIELD_ROWS {
            let line: String = (0..WIDTH)
                .map(|x| {
                    let top = self.pixels.get(x, row as i32 * 2);
                    let bottom = self.pixels.get(x, row as i32 * 2 + 1);
                    half_block(top, bottom)
                })
                .collect();
            out.queue(cursor::MoveTo(1, row + 1))?;
            out.queue(Print(line))?;
        }

        for label in &self.labels {
            if label.x < 0 || label.y < 0 || label.x >= WIDTH || label.y >= HEIGHT {
                continue;
            }
            let room = (WIDTH - label.x) as usize;
            let text: String = label.text.chars().take(room).collect();
            out.queue(cursor::MoveTo(label.x as u16 + 1, (label.y / 2) as u16 + 1))?;
            out.queue(Print(text))?;
        }

        draw_controls_hint(out)?;

        // Park cursor in a harmless spot and flush
        out.queue(style::ResetColor)?;
        out.queue(cursor::MoveTo(0, FIELD_ROWS + 3))?;
        out.flush()
    }
}

impl<W: Write> FrameBuffer for TerminalScreen<W> {
    fn clear(&mut self) {
        self.pixels.clear();
        self.labels.clear();
    }

    fn draw_bitmap(&mut self, x: i32, y: i32, bitmap: &Bitmap) {
        self.pixels.draw_bitmap(x, y, bitmap);
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str) {
        self.labels.push(Label {
            x,
            y,
            text: text.to_string(),
        });
    }

    fn display(&mut self) -> std::io::Result<()> {
        self.present()
    }
}

fn half_block(top: bool, bottom: bool) -> char {
    match (top, bottom) {
        (false, false) => ' ',
        (true, false) => '▀',
        (false, true) => '▄',
        (true, true) => '█',
    }
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W) -> std::io::Result<()> {
    let w = FIELD_COLS as usize;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 0))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w))))?;

    out.queue(cursor::MoveTo(0, FIELD_ROWS + 1))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w))))?;

    for row in 1..=FIELD_ROWS {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(FIELD_COLS + 1, row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── Controls hint (below the field) ───────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, FIELD_ROWS + 2))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("↑ ↓ / W S : Move   Z / SPACE : A (fire)   X : B (guard)   Q : Quit"))?;
    Ok(())
}
