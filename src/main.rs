//! Terminal blockdrop runner (default binary).
//!
//! Owns the frame loop: crossterm input in, engine commands and elapsed
//! time through the engine, snapshot out to the framebuffer renderer, and
//! engine events out to the highscore client.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockdrop::core::{Engine, GameEvent, GameSnapshot};
use blockdrop::highscore::HighscoreClient;
use blockdrop::input::{handle_key_press, handle_key_release, is_reset, should_quit};
use blockdrop::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockdrop::types::{Command, SOFT_DROP_GRACE_MS, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut engine = Engine::new(wall_clock_seed());
    let mut client = HighscoreClient::from_env()?;

    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(u64::from(TICK_MS));

    // Most terminals never report key releases, so soft drop stays on for a
    // short grace window that each repeat of the key refreshes.
    let mut soft_drop_timer_ms: i32 = 0;

    loop {
        // Forward engine requests to the highscore service.
        for ev in engine.drain_events() {
            match ev {
                GameEvent::FetchHighscore => client.fetch(),
                GameEvent::SubmitHighscore { score } => client.submit(score),
                GameEvent::Locked { .. } | GameEvent::LinesCleared { .. } | GameEvent::GameOver => {}
            }
        }
        if let Some(best) = client.try_recv() {
            snap.highscore = best;
        }

        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        engine.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.present(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Resize(..) => term.invalidate(),
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if is_reset(key) {
                            engine.reset();
                            continue;
                        }
                        if let Some(cmd) = handle_key_press(key) {
                            if cmd == Command::SoftDropOn {
                                soft_drop_timer_ms = SOFT_DROP_GRACE_MS as i32;
                            }
                            engine.apply_command(cmd);
                        }
                    }
                    KeyEventKind::Release => {
                        if let Some(cmd) = handle_key_release(key) {
                            soft_drop_timer_ms = 0;
                            engine.apply_command(cmd);
                        }
                    }
                },
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            if soft_drop_timer_ms > 0 {
                soft_drop_timer_ms -= TICK_MS as i32;
                if soft_drop_timer_ms <= 0 {
                    engine.apply_command(Command::SoftDropOff);
                }
            }

            engine.advance(TICK_MS);
        }
    }
}

fn wall_clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1)
}
