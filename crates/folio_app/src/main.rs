//! Folio CLI
//!
//! Plays the portfolio's pages in a terminal and serves the CV document.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use folio_app::{render_text, DocumentEndpoint, Events, FolioConfig, Route, Session};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Portfolio site runtime
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Play the portfolio's interactive pages in a terminal")]
#[command(version)]
struct Cli {
    /// Configuration file, or a directory containing folio.toml
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every route
    Routes,

    /// Fetch the CV document and write it to a file
    Cv {
        /// Output file
        #[arg(short, long)]
        out: PathBuf,
    },

    /// Mount a page and play it in real time
    Play(PlayArgs),
}

#[derive(Args, Debug)]
struct PlayArgs {
    /// Route to open, e.g. `/` or `/about`
    #[arg(default_value = "/")]
    route: String,

    /// How long to play
    #[arg(long, default_value = "6000")]
    duration_ms: u64,

    /// Pixels to scroll every 100 ms
    #[arg(long, default_value = "0")]
    scroll_step: f32,

    /// Toggle the theme after this many milliseconds
    #[arg(long)]
    toggle_theme_at: Option<u64>,

    /// Project category to select after mounting
    #[arg(long)]
    category: Option<String>,

    /// Press the contact page's copy button after mounting
    #[arg(long)]
    copy: bool,

    /// Print frames as JSON
    #[arg(long)]
    json: bool,
}

const SCROLL_TICK_MS: u64 = 100;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => FolioConfig::load(path)?,
        None => FolioConfig::load_or_default(Path::new("."))?,
    };

    match cli.command {
        Commands::Routes => {
            list_routes();
            Ok(())
        }
        Commands::Cv { out } => write_cv(&config, &out),
        Commands::Play(args) => play(config, args).await,
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn list_routes() {
    for route in Route::ALL {
        let kind = if route.is_page() { "page" } else { "document" };
        println!("{:<14} {:<9} {}", route.path(), kind, route.title());
    }
}

fn write_cv(config: &FolioConfig, out: &Path) -> Result<()> {
    let response = DocumentEndpoint::new(&config.document.path).fetch()?;
    fs::write(out, &response.body)
        .with_context(|| format!("Failed to write {}", out.display()))?;
    tracing::info!(
        out = %out.display(),
        bytes = response.body.len(),
        content_type = response.content_type,
        "CV written"
    );
    Ok(())
}

async fn play(config: FolioConfig, args: PlayArgs) -> Result<()> {
    let route: Route = args.route.parse()?;
    let mut session = Session::new(config)?;

    let mut events = session.navigate(route)?;
    if let Some(category) = &args.category {
        events.extend(session.select_category(category)?);
    }
    if args.copy {
        session.copy_email()?;
    }
    print_frame(&session, &events, args.json)?;

    let end = session.now().saturating_add(args.duration_ms);
    let toggle_at = args.toggle_theme_at.map(|at| session.now().saturating_add(at));
    let mut toggled = false;
    let mut next_scroll = session.now() + SCROLL_TICK_MS;

    while session.now() < end {
        let now = session.now();
        let mut wake = end;
        if let Some(deadline) = session.next_deadline() {
            wake = wake.min(deadline);
        }
        if args.scroll_step != 0.0 {
            wake = wake.min(next_scroll);
        }
        if let Some(at) = toggle_at.filter(|_| !toggled) {
            wake = wake.min(at);
        }

        let wait = wake.saturating_sub(now);
        tokio::time::sleep(Duration::from_millis(wait)).await;
        let mut events = session.advance(wait);
        let mut restyled = false;

        if args.scroll_step != 0.0 && session.now() >= next_scroll {
            events.extend(session.scroll_by(args.scroll_step));
            next_scroll += SCROLL_TICK_MS;
        }
        if let Some(at) = toggle_at.filter(|_| !toggled) {
            if session.now() >= at {
                let scheme = session.toggle_theme();
                tracing::info!(%scheme, "theme toggled");
                toggled = true;
                restyled = true;
            }
        }

        if !events.is_empty() || restyled {
            print_frame(&session, &events, args.json)?;
        }
    }

    session.shutdown();
    tracing::info!(
        observations = session.live_observations(),
        timers = session.pending_timers(),
        "session closed"
    );
    Ok(())
}

fn print_frame(session: &Session, events: &Events, json: bool) -> Result<()> {
    for event in events {
        tracing::debug!(%event, "session event");
    }
    let Some(snapshot) = session.snapshot() else {
        return Ok(());
    };
    if json {
        println!(
            "{}",
            serde_json::to_string(&snapshot).context("Failed to serialize frame")?
        );
    } else {
        print!("{}", render_text(&snapshot));
    }
    Ok(())
}
