mod app;
mod config;
mod error;
mod links;
mod theme;
mod ui;
mod venue;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app::App;
use config::ShowcaseConfig;

#[derive(Parser, Debug)]
#[command(name = "tikihit")]
#[command(version)]
#[command(about = "Ranked tiki bar reviews in your terminal")]
struct Args {
    /// Load the showcase from this TOML file
    #[arg(short, long, value_name = "PATH")]
    venues: Option<PathBuf>,

    /// Print every card as plain text and exit
    #[arg(short, long, conflicts_with = "json")]
    print: bool,

    /// Print the cards as JSON and exit
    #[arg(short, long)]
    json: bool,

    /// Write the bundled showcase to the config directory for editing
    #[arg(long, conflicts_with_all = ["print", "json", "venues"])]
    init: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so they stay out of --print/--json output
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    if args.init {
        let path = ShowcaseConfig::write_default()?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    let config = ShowcaseConfig::load(args.venues.as_deref()).context("Could not load showcase")?;

    if args.json {
        return print_json(&config);
    }

    if args.print {
        let cards = config.ranked_views();
        print!("{}", ui::plain::render_showcase(&config.title, &config.tagline, &cards));
        return Ok(());
    }

    run_tui(&config).await
}

fn print_json(config: &ShowcaseConfig) -> Result<()> {
    let cards = config.ranked_views();
    println!("{}", serde_json::to_string_pretty(&cards)?);
    Ok(())
}

async fn run_tui(config: &ShowcaseConfig) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') if !app.overlay_open() => return Ok(()),
                        KeyCode::Char('c') if key.modifiers.contains(event::KeyModifiers::CONTROL) => {
                            return Ok(())
                        }
                        _ => {
                            if let Err(e) = app.handle_key(key).await {
                                tracing::warn!("Key handling failed: {}", e);
                            }
                        }
                    }
                }
            }
        }

        app.tick().await?;
    }
}
