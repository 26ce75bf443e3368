use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use number_balance::config::AppConfig;
use number_balance::ui::text::Locale;
use number_balance::ui::App;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

/// Play The Number Balance: hide a number, let your opponent balance the scale.
#[derive(Parser)]
#[command(name = "number-balance", about = "A two-player math game for the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "number_balance.toml")]
    config: PathBuf,

    /// Prefill the first player's name
    #[arg(long)]
    player1: Option<String>,

    /// Prefill the second player's name
    #[arg(long)]
    player2: Option<String>,

    /// Override the interface language (en or pt)
    #[arg(long, value_parser = parse_locale)]
    locale: Option<Locale>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn parse_locale(s: &str) -> Result<Locale, String> {
    match s {
        "en" => Ok(Locale::En),
        "pt" => Ok(Locale::Pt),
        other => Err(format!("unknown locale '{other}' (expected 'en' or 'pt')")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(locale) = cli.locale {
        config.ui.locale = locale;
    }
    if let Some(path) = cli.log_file {
        config.logging.file = Some(path);
    }

    if let Some(path) = &config.logging.file {
        init_logging(path, &config.logging.level)
            .with_context(|| format!("opening log file {}", path.display()))?;
    }

    let app = App::new(config).with_player_names(
        cli.player1.as_deref().unwrap_or(""),
        cli.player2.as_deref().unwrap_or(""),
    );
    run(app).context("running terminal UI")
}

/// Log to a file; the terminal itself belongs to the UI.
fn init_logging(path: &Path, level: &str) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(mut app: App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal even when the app returned an error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    tracing::info!(round = app.game_state().round(), "session ended");
    res
}
