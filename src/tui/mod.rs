//! Interactive screen: event loop over crossterm mouse and key events.

mod app;
mod keys;
mod render;

use std::io;
use std::time::{Duration, Instant};

use anyhow::Context as _;
use crossterm::event::{self, Event, MouseEvent, MouseEventKind};
use tracing::{debug, error, info};

use entropass::{PointerSample, Session, Settings, SystemRandom, rng};

use crate::terminal::TerminalSession;
use app::{App, Severity};
use keys::Action;

/// Redraw at least this often so the copied indicator expires.
const TICK: Duration = Duration::from_millis(250);

pub fn run(settings: &Settings) -> anyhow::Result<()> {
    let mut session = Session::with_system_random(
        settings.generation_config(),
        settings.accrual_rates(),
    );
    let mut app = App::new(settings.export_file.clone());

    if let Err(e) = rng::probe(&mut SystemRandom) {
        error!(error = %e, "random source probe failed");
        app.advise(Severity::Error, e.to_string());
    } else {
        debug!(source = rng::source_name(), "random source ready");
    }

    let mut terminal = TerminalSession::new().context("failed to set up the terminal")?;
    info!("session started");

    let started = Instant::now();
    let mut stdout = io::stdout();
    loop {
        let now = Instant::now();
        let (frame, region) = render::draw(&session, &app, now);
        session.set_display_region(Some(region));
        frame.flush_to(&mut stdout).context("failed to draw")?;

        if !event::poll(TICK).context("failed to poll terminal events")? {
            continue;
        }
        match event::read().context("failed to read terminal event")? {
            Event::Mouse(mouse) => {
                let elapsed = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
                if let Some(sample) = sample_from_mouse(&mouse, elapsed) {
                    let outcome = session.submit(sample);
                    app.note(outcome);
                }
            }
            Event::Key(key) => match keys::action_for(&key) {
                Some(Action::Quit) => break,
                Some(action) => app.perform(action, &mut session, Instant::now()),
                None => {}
            },
            _ => {}
        }
    }

    terminal.restore();
    info!(generated = session.history().len(), "session ended");
    Ok(())
}

/// Plain motion counts as pointer input, dragging as touch input.
fn sample_from_mouse(mouse: &MouseEvent, timestamp_ms: u64) -> Option<PointerSample> {
    let x = f64::from(mouse.column);
    let y = f64::from(mouse.row);
    match mouse.kind {
        MouseEventKind::Moved => Some(PointerSample::pointer(x, y, timestamp_ms)),
        MouseEventKind::Drag(_) => Some(PointerSample::touch(x, y, timestamp_ms)),
        _ => None,
    }
}
