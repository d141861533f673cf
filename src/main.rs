//! CY Weather TUI entry point

use std::collections::VecDeque;
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use cy_weather::action::Action;
use cy_weather::components::{Component, WeatherDisplay, WeatherDisplayProps};
use cy_weather::effect::Effect;
use cy_weather::input::SnapshotSource;
use cy_weather::reducer::reducer;
use cy_weather::state::AppState;

const ABOUT: &str = "Affiche la météo actuelle d'un document CY Weather";

const LONG_ABOUT: &str = "
TUI d'affichage de la météo actuelle.

Le document fourni est un JSON écrit par le collaborateur de récupération
(champs `weather`, `loading`, `error`). Il est relu périodiquement et à la
demande avec la touche r ; la récupération elle-même reste hors du
périmètre de ce programme.
";

#[derive(Parser, Debug)]
#[command(name = "cy-weather", version, about = ABOUT, long_about = LONG_ABOUT)]
struct Args {
    /// Chemin du document météo JSON
    snapshot: PathBuf,

    /// Intervalle de relecture du document en secondes (minimum 1)
    #[arg(long, short, default_value = "30", value_parser = clap::value_parser!(u64).range(1..))]
    refresh_interval: u64,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let source = SnapshotSource::new(&args.snapshot);

    // ===== Terminal setup =====
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(
        &mut terminal,
        &source,
        Duration::from_secs(args.refresh_interval),
    );

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

/// Run one action through the reducer, then its effects to completion.
/// Returns whether the state changed.
fn dispatch(state: &mut AppState, source: &SnapshotSource, action: Action) -> bool {
    let mut pending = VecDeque::from([action]);
    let mut changed = false;

    while let Some(action) = pending.pop_front() {
        let transition = reducer(state, action);
        changed |= transition.changed;

        for effect in transition.effects {
            match effect {
                Effect::LoadSnapshot => {
                    let follow_up = match source.load() {
                        Ok(doc) => Action::SnapshotApply(doc),
                        Err(e) => Action::SnapshotDidError(e.to_string()),
                    };
                    pending.push_back(follow_up);
                }
            }
        }
    }

    changed
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    source: &SnapshotSource,
    refresh_interval: Duration,
) -> io::Result<()> {
    let mut state = AppState::default();
    let mut display = WeatherDisplay;

    dispatch(&mut state, source, Action::SnapshotReload);
    let mut last_refresh = Instant::now();
    let mut needs_draw = true;

    loop {
        if needs_draw {
            terminal.draw(|frame| {
                display.render(
                    frame,
                    frame.area(),
                    WeatherDisplayProps {
                        state: &state,
                        is_focused: true,
                    },
                );
            })?;
            needs_draw = false;
        }

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let actions: Vec<_> = display
                        .handle_event(
                            &key,
                            WeatherDisplayProps {
                                state: &state,
                                is_focused: true,
                            },
                        )
                        .into_iter()
                        .collect();

                    for action in actions {
                        if matches!(action, Action::Quit) {
                            return Ok(());
                        }
                        if dispatch(&mut state, source, action) {
                            needs_draw = true;
                        }
                    }
                }
                Event::Resize(_, _) => needs_draw = true,
                _ => {}
            }
        }

        if last_refresh.elapsed() >= refresh_interval {
            last_refresh = Instant::now();
            if dispatch(&mut state, source, Action::SnapshotReload) {
                needs_draw = true;
            }
        }
    }
}
