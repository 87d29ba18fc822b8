mod app;
mod config;
mod domain;
mod error;
mod input;
mod logging;
mod persistence;
mod registry;
mod report;
mod ticker;
mod timer;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use clap::{Parser, Subcommand};
use config::Config;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::FilterMode;
use persistence::{init_local_dir, JsonTaskStore};
use ratatui::{backend::CrosstermBackend, Terminal};
use registry::TaskRegistry;
use std::io;
use std::path::PathBuf;
use timer::SystemClock;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(name = "mindea")]
#[command(about = "Track time spent on named tasks, one timer at a time", long_about = None)]
struct Cli {
    /// Data directory (defaults to $MINDEA_DIR, a local .mindea, or ~/.mindea)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log level written to <data-dir>/logs (defaults to $RUST_LOG or info)
    #[arg(long, global = true)]
    log_level: Option<LevelFilter>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .mindea directory in the current directory
    Init,
    /// Add a task
    Add {
        /// Task name
        name: String,
    },
    /// Delete a task and its recorded time
    Delete {
        /// Task name
        name: String,
    },
    /// List tasks with their accumulated time
    List {
        /// Only tasks last active today
        #[arg(long, conflicts_with = "previous")]
        today: bool,
        /// Only tasks last active before today
        #[arg(long)]
        previous: bool,
    },
    /// Print the time distribution across tasks
    Report,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Init) = cli.command {
        let current_dir = std::env::current_dir().context("Could not determine current directory")?;
        let dir = init_local_dir(&current_dir)?;
        println!("Initialized data directory: {}", dir.display());
        println!("Run 'mindea' from here or below to use it.");
        return Ok(());
    }

    let config = Config::resolve(cli.data_dir, cli.log_level)?;
    logging::enable_logging(&config.logs_dir(), config.log_level)?;
    tracing::info!(data_dir = %config.data_dir.display(), "starting");

    match cli.command {
        Some(Commands::Add { name }) => {
            let mut registry = open_registry(&config)?;
            let task = registry.add_task(&name)?;
            println!("Added '{}'", task.name());
            Ok(())
        }
        Some(Commands::Delete { name }) => {
            let mut registry = open_registry(&config)?;
            registry.delete_task(name.trim())?;
            println!("Deleted '{}'", name.trim());
            Ok(())
        }
        Some(Commands::List { today, previous }) => {
            let registry = open_registry(&config)?;
            let filter = if today {
                FilterMode::TodayOnly
            } else if previous {
                FilterMode::PreviousOnly
            } else {
                FilterMode::All
            };
            for task in filter.apply(registry.snapshot(), registry.clock().today()) {
                println!(
                    "{}  {}  {}",
                    task.name,
                    report::format_clock(task.elapsed_secs),
                    task.last_active
                );
            }
            Ok(())
        }
        Some(Commands::Report) => {
            let registry = open_registry(&config)?;
            let slices = report::time_distribution(&registry.report_entries());
            print!("{}", report::render_report(&slices, registry.clock().today()));
            Ok(())
        }
        Some(Commands::Init) | None => run_tui(&config),
    }
}

fn open_registry(config: &Config) -> Result<TaskRegistry> {
    let store = JsonTaskStore::new(config.tasks_file());
    let registry = TaskRegistry::load(Box::new(store), Box::new(SystemClock))
        .with_context(|| format!("Failed to load tasks from {}", config.tasks_file().display()))?;
    tracing::info!(tasks = registry.len(), "loaded tasks");
    Ok(registry)
}

fn run_tui(config: &Config) -> Result<()> {
    eprintln!("Using data directory: {}", config.data_dir.display());

    // A corrupt task file stops startup here, before the terminal is touched
    let registry = open_registry(config)?;
    let mut app = AppState::new(registry);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Fold running time into the totals and save, before anything else can fail
    let saved = app.shutdown();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        tracing::error!(error = %err, "terminal loop failed");
    }

    result?;
    saved.context("Failed to save tasks on exit")
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let tick_rate = ticker::tick_duration();

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key) {
                    return Ok(());
                }
            }
        }

        app.tick();
    }
}
