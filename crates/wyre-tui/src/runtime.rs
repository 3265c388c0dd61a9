//! Demo runtime - owns the terminal, runs the event loop, routes events.
//!
//! All side effects happen here or in the reducer's effect application;
//! the render path stays pure. The loop is fully synchronous: events are
//! delivered on this single thread, matching the dispatch discipline the
//! registry is built for.

use std::io::Stdout;

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use wyre_core::Dispatcher;

use crate::bindings::{self, DEMO_SCOPE};
use crate::config::DemoConfig;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Demo screen runtime.
///
/// Owns the terminal, state, and dispatcher. Terminal state is restored on
/// drop or panic.
pub struct DemoRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    dispatcher: Dispatcher,
    last_tick: std::time::Instant,
}

impl DemoRuntime {
    /// Creates the runtime: terminal setup, binding installation, and
    /// slider seeding.
    pub fn new(config: DemoConfig) -> Result<Self> {
        // Set up panic hook BEFORE entering alternate screen
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        let mut state = AppState::new(config);
        let mut dispatcher = Dispatcher::new();
        bindings::install(&mut dispatcher);
        update::seed_sliders(&mut state, &mut dispatcher);

        Ok(Self {
            terminal,
            state,
            dispatcher,
            last_tick: std::time::Instant::now(),
        })
    }

    /// Runs the main event loop, tearing down the binding scope on exit.
    pub fn run(&mut self) -> Result<()> {
        let result = self.event_loop();

        // Release callbacks before the screen goes away.
        self.dispatcher.unbind_all(DEMO_SCOPE);
        tracing::debug!("demo scope unbound");

        result
    }

    fn event_loop(&mut self) -> Result<()> {
        let tick_rate = self.state.config.tick_rate();
        let mut dirty = true; // Start dirty to ensure initial render

        while !self.state.should_quit {
            let events = self.collect_events(tick_rate)?;
            if !events.is_empty() {
                dirty = true;
            }

            for event in events {
                update::update(&mut self.state, &mut self.dispatcher, event);
            }

            if dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }
        }

        Ok(())
    }

    /// Collects terminal events, blocking until input arrives or the next
    /// tick is due, then emits `Tick` when the interval elapsed.
    fn collect_events(&mut self, tick_rate: std::time::Duration) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        let poll_duration = tick_rate.saturating_sub(self.last_tick.elapsed());
        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            // Drain any remaining buffered events (non-blocking)
            while event::poll(std::time::Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_rate {
            events.push(UiEvent::Tick);
            self.last_tick = std::time::Instant::now();
        }

        Ok(events)
    }
}

impl Drop for DemoRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
