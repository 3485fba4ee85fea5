//! ScholarFlow TUI - Editorial Office Console
//!
//! Terminal UI for screening, assigning and reviewing submitted manuscripts.

mod app;
mod keybindings;
mod mode;
mod views;
mod widgets;

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use scholarflow_core::{Navigation, Route, SampleData, ScholarflowConfig};

use app::App;

#[derive(Parser, Debug)]
#[command(name = "scholarflow", version, about = "Editorial manuscript workflow console")]
struct Args {
    /// Config file (defaults to the user config dir)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Sample data JSON file (defaults to the built-in fixture)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Path to open at start-up
    #[arg(short, long, default_value = "/")]
    route: String,

    /// Manuscript handed to the start-up view
    #[arg(short, long)]
    manuscript: Option<String>,

    /// Print the built-in sample data as JSON and exit
    #[arg(long)]
    dump_sample: bool,
}

impl Args {
    /// `--dump-sample` only writes JSON to stdout and leaves the log alone
    fn wants_log_file(&self) -> bool {
        !self.dump_sample
    }
}

/// Log to a file under the cache dir; the terminal belongs to the UI.
fn init_logging() {
    let Some(dir) = dirs::cache_dir().map(|d| d.join("scholarflow")) else {
        return;
    };
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = File::create(dir.join("scholarflow.log")) else {
        return;
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("scholarflow=info,scholarflow_core=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    // Before loading, so config and data file events reach the log
    if args.wants_log_file() {
        init_logging();
    }

    let config = match &args.config {
        Some(path) => ScholarflowConfig::from_path(path)?,
        None => ScholarflowConfig::load_standard()?,
    };
    let data = match &args.data {
        Some(path) => SampleData::from_path(path, &config)?,
        None => SampleData::builtin(&config),
    };

    if args.dump_sample {
        println!("{}", data.to_json()?);
        return Ok(());
    }

    tracing::info!(route = %args.route, "Starting scholarflow");

    let route = Route::from_path(&args.route);
    let start = match args.manuscript {
        Some(id) => Navigation::with_manuscript(route, id.as_str().into()),
        None => Navigation::to(route),
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(data, config, start);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!("{}", err);
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| app.render(f))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && app.handle_key(key.code, key.modifiers) {
                return Ok(());
            }
        }
    }
}
