//! Terminal bowling tracker (default binary).
//!
//! Type the pins knocked down, press Enter to throw, `r` to restart, `q` to quit.
//! Rendering goes through the framebuffer-based sheet view.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_bowling::input::{handle_key_event, should_quit};
use tui_bowling::journal::{Journal, SessionConfig};
use tui_bowling::term::{FrameBuffer, SheetView, TerminalRenderer, Viewport};
use tui_bowling::Session;

fn main() -> Result<()> {
    let config = SessionConfig::from_env();
    let journal = Journal::open(&config)?;
    let mut session = Session::new(journal)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, session: &mut Session, config: &SessionConfig) -> Result<()> {
    let view = SheetView::default();
    let poll = Duration::from_millis(config.poll_ms);
    let mut fb = FrameBuffer::new(0, 0);
    let mut dirty = true;

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&session.sheet_model(), Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        if !event::poll(poll)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    session.apply(action)?;
                    dirty = true;
                }
            }
            Event::Resize(_, _) => {
                term.invalidate();
                dirty = true;
            }
            _ => {}
        }
    }
}
