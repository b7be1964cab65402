//! Terminal backend built on crossterm
//!
//! Each character cell shows two canvas pixels using the upper-half block:
//! foreground is the top pixel, background the bottom one.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor};
use crossterm::{cursor, execute, queue, terminal};

use super::{InputSource, Presenter};
use crate::renderer::{Canvas, Rgb, ScenePainter, TextSize, hud_lines};
use crate::settings::Settings;
use crate::sim::{InputEvent, Snapshot};

const HALF_BLOCK: char = '▀';

#[inline]
fn color(c: Rgb) -> Color {
    Color::Rgb {
        r: c.0,
        g: c.1,
        b: c.2,
    }
}

/// Raw mode + alternate screen for as long as this lives
pub struct TerminalSession {
    _private: (),
}

impl TerminalSession {
    pub fn start() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        if let Err(e) = execute!(io::stdout(), terminal::EnterAlternateScreen, cursor::Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(e);
        }
        Ok(Self { _private: () })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(e) = execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen) {
            log::warn!("Failed to leave alternate screen: {}", e);
        }
        if let Err(e) = terminal::disable_raw_mode() {
            log::warn!("Failed to disable raw mode: {}", e);
        }
    }
}

/// Map a terminal event to a game input. Everything unmapped is ignored.
pub fn map_event(event: &Event) -> Option<InputEvent> {
    let Event::Key(KeyEvent {
        code,
        modifiers,
        kind,
        ..
    }) = event
    else {
        return None;
    };
    // Key-down edges only; auto-repeat and release never flap
    if *kind != KeyEventKind::Press {
        return None;
    }
    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(InputEvent::Quit),
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Char('w') => Some(InputEvent::Activate),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(InputEvent::Quit),
        _ => None,
    }
}

/// Keyboard input from the controlling terminal
#[derive(Debug, Default)]
pub struct TerminalInput;

impl InputSource for TerminalInput {
    fn poll_events(&mut self) -> io::Result<Vec<InputEvent>> {
        let mut events = Vec::new();
        while event::poll(Duration::ZERO)? {
            let raw = event::read()?;
            match map_event(&raw) {
                Some(input) => events.push(input),
                None => log::trace!("Ignored terminal event {:?}", raw),
            }
        }
        Ok(events)
    }
}

/// Draws frames as half-block characters
pub struct TerminalPresenter<W: Write> {
    out: W,
    painter: ScenePainter,
    canvas: Canvas,
    field_height: f32,
    text_color: Rgb,
    started: Instant,
}

impl TerminalPresenter<io::Stdout> {
    pub fn stdout(settings: &Settings) -> Self {
        Self::new(io::stdout(), settings)
    }
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W, settings: &Settings) -> Self {
        Self {
            out,
            painter: ScenePainter::new(settings.palette.clone(), settings.tuning.clone()),
            canvas: Canvas::new(0, 0),
            field_height: settings.tuning.field_height,
            text_color: settings.palette.text,
            started: Instant::now(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Draw into a `cols` x `rows` cell area
    pub fn present_sized(
        &mut self,
        snapshot: &Snapshot,
        cols: u16,
        rows: u16,
        time_ms: u64,
    ) -> io::Result<()> {
        let (w, h) = (cols as usize, rows as usize * 2);
        if self.canvas.width() != w || self.canvas.height() != h {
            self.canvas.resize(w, h);
        }
        self.painter.paint(&mut self.canvas, snapshot, time_ms);

        for row in 0..rows {
            queue!(self.out, cursor::MoveTo(0, row))?;
            let mut last: Option<(Rgb, Rgb)> = None;
            for col in 0..w {
                let top = self.canvas.get(col, row as usize * 2);
                let bottom = self.canvas.get(col, row as usize * 2 + 1);
                if last != Some((top, bottom)) {
                    queue!(
                        self.out,
                        SetForegroundColor(color(top)),
                        SetBackgroundColor(color(bottom))
                    )?;
                    last = Some((top, bottom));
                }
                queue!(self.out, Print(HALF_BLOCK))?;
            }
        }

        for line in hud_lines(snapshot, self.field_height) {
            let len = line.text.chars().count() as u16;
            if rows == 0 || len > cols {
                continue;
            }
            let row = ((line.y / self.field_height) * rows as f32) as u16;
            let row = row.min(rows - 1);
            let col = (cols - len) / 2;
            // Keep the sky behind the text
            let bg = self.canvas.get((col + len / 2) as usize, row as usize * 2 + 1);
            queue!(
                self.out,
                cursor::MoveTo(col, row),
                SetForegroundColor(color(self.text_color)),
                SetBackgroundColor(color(bg))
            )?;
            if line.size == TextSize::Large {
                queue!(self.out, SetAttribute(Attribute::Bold))?;
            }
            queue!(self.out, Print(&line.text), SetAttribute(Attribute::Reset))?;
        }

        self.out.flush()
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn present(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        let time_ms = self.started.elapsed().as_millis() as u64;
        self.present_sized(snapshot, cols, rows, time_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameState;
    use crate::tuning::Tuning;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(map_event(&key(KeyCode::Char(' '))), Some(InputEvent::Activate));
        assert_eq!(map_event(&key(KeyCode::Up)), Some(InputEvent::Activate));
        assert_eq!(map_event(&key(KeyCode::Char('q'))), Some(InputEvent::Quit));
        assert_eq!(map_event(&key(KeyCode::Esc)), Some(InputEvent::Quit));
        assert_eq!(
            map_event(&Event::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL
            ))),
            Some(InputEvent::Quit)
        );
    }

    #[test]
    fn test_unmapped_and_repeat_events_are_ignored() {
        assert_eq!(map_event(&key(KeyCode::Char('x'))), None);
        assert_eq!(map_event(&Event::FocusGained), None);
        assert_eq!(map_event(&Event::Resize(80, 24)), None);

        let mut repeat = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        repeat.kind = KeyEventKind::Repeat;
        assert_eq!(map_event(&Event::Key(repeat)), None);
    }

    #[test]
    fn test_present_writes_start_prompt() {
        let settings = Settings::default();
        let state = GameState::new(1, Tuning::default()).unwrap();
        let mut presenter = TerminalPresenter::new(Vec::new(), &settings);
        presenter.present_sized(&state.snapshot(), 40, 30, 0).unwrap();

        let output = String::from_utf8(presenter.into_inner()).unwrap();
        assert!(output.contains("Score: 0"));
        assert!(output.contains("Press SPACE to Start"));
        assert_eq!(output.matches(HALF_BLOCK).count(), 40 * 30);
    }

    #[test]
    fn test_present_skips_text_wider_than_terminal() {
        let settings = Settings::default();
        let state = GameState::new(1, Tuning::default()).unwrap();
        let mut presenter = TerminalPresenter::new(Vec::new(), &settings);
        presenter.present_sized(&state.snapshot(), 10, 5, 0).unwrap();

        let output = String::from_utf8(presenter.into_inner()).unwrap();
        assert!(!output.contains("Press SPACE to Start"));
        assert!(output.contains("Score: 0"));
    }
}
