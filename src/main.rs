//! Terminal snake runner (default binary).
//!
//! Single-threaded host loop: poll crossterm input until the engine's clock is
//! due, apply commands, run at most one tick, hand engine events to the
//! effects adapters and repaint from a fresh snapshot.

use std::fs::File;
use std::io::BufWriter;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, trace, warn};

use tui_snake::core::{Engine, EngineEvent, GameSnapshot, IntervalClock, SimpleRng};
use tui_snake::input::{map_key, should_quit};
use tui_snake::term::{Chime, FrameBuffer, GameOverBlink, GameView, TerminalRenderer, Viewport};
use tui_snake::{logging, EventLog, SnakeConfig};

/// Poll timeout when nothing is scheduled (idle / game over).
const IDLE_POLL: Duration = Duration::from_millis(250);

type FileLog = EventLog<BufWriter<File>>;

fn main() -> Result<()> {
    let config = SnakeConfig::from_env();
    logging::init(&config)?;
    let mut event_log = match config.event_log_path.as_deref() {
        Some(path) => Some(EventLog::open(path)?),
        None => None,
    };
    info!(seed = config.seed, sound = config.sound, "tui-snake starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, event_log.as_mut());

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &SnakeConfig, mut event_log: Option<&mut FileLog>) -> Result<()> {
    let mut engine = Engine::new(IntervalClock::new(), SimpleRng::new(config.seed));
    let view = GameView::default();
    let mut chime = Chime::stdout(config.sound);
    let mut blink = GameOverBlink::default();

    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let epoch = Instant::now();
    let mut dirty = true;

    loop {
        let now_ms = epoch.elapsed().as_millis() as u64;

        let events = engine.drain_events();
        if !events.is_empty() {
            engine.snapshot_into(&mut snap);
            dirty = true;
        }
        for ev in &events {
            trace!(event = ev.name(), "engine event");
            match ev {
                EngineEvent::Started { .. } => blink.clear(),
                EngineEvent::GameOver { .. } => blink.trigger(now_ms),
                EngineEvent::Frame | EngineEvent::AteFood { .. } => {}
            }
            chime.on_event(ev)?;
            if let Some(log) = event_log.as_deref_mut() {
                if let Err(e) = log.record(engine.games(), ev) {
                    warn!(error = %e, "event log write failed");
                }
            }
        }

        if dirty || blink.is_active(now_ms) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&snap, blink.visible(now_ms), Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        // Input with timeout until the next tick (or blink toggle).
        let mut timeout = engine
            .clock()
            .time_until_due(Instant::now())
            .unwrap_or(IDLE_POLL);
        if let Some(ms) = blink.next_change_in(now_ms) {
            timeout = timeout.min(Duration::from_millis(ms));
        }

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!(score = engine.score(), "quit requested");
                        return Ok(());
                    }
                    if let Some(command) = map_key(key, engine.is_running()) {
                        let accepted = engine.apply(command);
                        if let Some(log) = event_log.as_deref_mut() {
                            if let Err(e) = log.record_command(engine.games(), command, accepted) {
                                warn!(error = %e, "event log write failed");
                            }
                        }
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        // Tick.
        if engine.clock_mut().take_due(Instant::now()) {
            engine.tick();
        }
    }
}
