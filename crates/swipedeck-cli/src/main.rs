use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use swipedeck_core::CarouselConfig;

mod commands;
mod view;

#[derive(Parser)]
#[command(name = "swipedeck")]
#[command(author, version, about = "Carousel gesture and navigation playground")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use this configuration file instead of ~/.config/swipedeck/config.toml
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Drive a carousel interactively in the terminal
    Run {
        /// Number of items in the carousel
        #[arg(short = 'n', long, default_value_t = 8)]
        items: usize,
    },
    /// Print the geometry derived for a container
    Layout {
        /// Container width in px
        #[arg(short = 'w', long, default_value_t = 390.0)]
        width: f64,
        #[arg(short = 'n', long, default_value_t = 8)]
        items: usize,
        /// Override the configured column count
        #[arg(long)]
        columns: Option<u32>,
    },
    /// Classify a single drag release
    Classify {
        /// Horizontal drag distance in px
        #[arg(short = 'd', long)]
        distance: f64,
        /// Release velocity in px/s
        #[arg(short = 'v', long)]
        velocity: f64,
        /// Peak change between velocity samples
        #[arg(short = 'a', long, default_value_t = 0.0)]
        acceleration: f64,
        /// Drag towards earlier items instead of later ones
        #[arg(short = 'b', long)]
        backward: bool,
        /// Index the carousel rests on before the drag
        #[arg(short = 'i', long, default_value_t = 0)]
        index: usize,
        #[arg(short = 'w', long, default_value_t = 390.0)]
        width: f64,
        #[arg(short = 'n', long, default_value_t = 8)]
        items: usize,
    },
    /// Replay a recorded gesture trace (JSON)
    Simulate {
        trace: PathBuf,
        /// Pace frames in real time instead of replaying instantly
        #[arg(long)]
        realtime: bool,
        /// Print every animation frame
        #[arg(long)]
        frames: bool,
    },
    /// Show the effective configuration
    Config {
        /// Write it to the configuration path
        #[arg(long)]
        write: bool,
        /// Overwrite an existing file when writing
        #[arg(long, requires = "write")]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging (stderr keeps the terminal view and command output clean)
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = match &cli.config {
        Some(path) => CarouselConfig::load_from(path)?,
        None => CarouselConfig::load()?,
    };

    match cli.command {
        Some(Commands::Run { items }) => commands::run::run(config, items).await,
        None => commands::run::run(config, 8).await,
        Some(Commands::Layout {
            width,
            items,
            columns,
        }) => commands::layout::run(&config, width, items, columns),
        Some(Commands::Classify {
            distance,
            velocity,
            acceleration,
            backward,
            index,
            width,
            items,
        }) => commands::classify::run(
            &config,
            commands::classify::DragInput {
                distance,
                velocity,
                acceleration,
                backward,
            },
            index,
            width,
            items,
        ),
        Some(Commands::Simulate {
            trace,
            realtime,
            frames,
        }) => commands::simulate::run(&config, &trace, realtime, frames).await,
        Some(Commands::Config { write, force }) => commands::config::run(&config, write, force),
    }
}
