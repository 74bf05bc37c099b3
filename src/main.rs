mod config;
mod llm;
mod logger;
mod machine;
mod scan;
mod state;
mod ui;

use std::{
    error::Error,
    io,
    sync::mpsc,
    time::{Duration, Instant},
};

use clap::Parser;
use crossterm::event::{self, Event};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::llm::client::{GeminiClient, DEFAULT_MODEL};
use crate::llm::orchestrator::{spawn_generation, GenEvent};
use crate::state::{AppState, Phase};
use crate::ui::{events, tui};

#[derive(Parser)]
#[command(
    name = "agency-terminal",
    version,
    about = "Agency Enrollment Terminal: a themed enrollment flow that generates a secret-agent identity card."
)]
struct Cli {
    /// Gemini model used for identity generation
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    tui::setup_terminal()?;
    let outcome = run_tui(GeminiClient::new(cli.model));
    tui::restore_terminal()?;

    outcome
}

fn run_tui(client: GeminiClient) -> Result<(), Box<dyn Error>> {
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let initial = if config::resolve_key().is_some() {
        Phase::Input
    } else {
        Phase::KeyRequired
    };
    let mut state = AppState::new(initial);

    let (gen_tx, gen_rx) = mpsc::channel::<GenEvent>();

    /* ---------- MAIN LOOP ---------- */

    loop {
        tui::draw_ui(&mut terminal, &state)?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                events::handle_key(&mut state, key, Instant::now());
            }
        }

        let now = Instant::now();
        state.spinner_tick = state.spinner_tick.wrapping_add(1);

        // Scan completion is the only entry into Processing, so at most
        // one generation request is ever in flight.
        if state.phase == Phase::Scan && state.scan.tick(now) {
            if let Some((session, data)) = machine::begin_processing(&mut state, now) {
                spawn_generation(
                    gen_tx.clone(),
                    session,
                    client.clone(),
                    config::resolve_key(),
                    data,
                );
            }
        }

        logger::tick_processing_log(&mut state, now);
        machine::tick_pending(&mut state, now);

        loop {
            match gen_rx.try_recv() {
                Ok(GenEvent::Finished { session, result }) => match result {
                    Ok(profile) => machine::generation_succeeded(&mut state, session, profile),
                    Err(err) => {
                        machine::generation_failed(&mut state, session, &err, Instant::now())
                    }
                },
                Err(mpsc::TryRecvError::Empty) | Err(mpsc::TryRecvError::Disconnected) => break,
            }
        }

        if state.should_exit {
            return Ok(());
        }
    }
}
