mod logger;
mod viewer;

use clap::{Parser, Subcommand};
use galaxy_core::diagnostics::format_error;
use galaxy_core::{build_simulation_context, step_simulation, PopulationStats, Settings, Viewport};
use logger::Logger;
use std::path::PathBuf;
use viewer::ViewerApp;

#[derive(Parser)]
#[command(name = "galaxy")]
#[command(about = "Galaxy - an interactive 2D star field under gravity", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulation without a window and print population statistics
    Run {
        /// JSON settings file; missing fields use defaults
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Number of ticks to simulate
        #[arg(short, long, default_value_t = 600)]
        ticks: u64,
        /// Override the configured star count
        #[arg(long)]
        stars: Option<usize>,
        /// Seed for reproducible spawning
        #[arg(long)]
        seed: Option<u64>,
        /// Print statistics every N ticks
        #[arg(long, default_value_t = 60)]
        report_every: u64,
        /// Canvas width
        #[arg(long, default_value_t = 1280.0)]
        width: f32,
        /// Canvas height
        #[arg(long, default_value_t = 720.0)]
        height: f32,
    },
    /// Open the interactive viewer
    View {
        /// JSON settings file, reloaded whenever it changes on disk
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Seed for reproducible spawning
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() {
    let cli = Cli::parse();
    Logger::init(cli.verbose);

    let result = match cli.command {
        Commands::Run {
            config,
            ticks,
            stars,
            seed,
            report_every,
            width,
            height,
        } => run_headless(config, ticks, stars, seed, report_every, width, height),
        Commands::View { config, seed } => run_viewer(config, seed),
    };

    if let Err(e) = result {
        eprintln!("{}", format_error(e.as_ref()));
        std::process::exit(1);
    }
}

fn load_settings(config: Option<&PathBuf>) -> galaxy_core::Result<Settings> {
    match config {
        Some(path) => {
            log::info!("loading settings from {}", path.display());
            Settings::load(path)
        }
        None => Ok(Settings::default()),
    }
}

fn run_headless(
    config: Option<PathBuf>,
    ticks: u64,
    stars: Option<usize>,
    seed: Option<u64>,
    report_every: u64,
    width: f32,
    height: f32,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut settings = load_settings(config.as_ref())?;
    if let Some(count) = stars {
        settings.star_count = count;
    }
    let viewport = Viewport::new(width, height)?;
    let mut ctx = build_simulation_context(settings, viewport, seed);

    println!("tick {:>6}  {}", 0, PopulationStats::collect(&ctx.world));
    for _ in 0..ticks {
        step_simulation(&mut ctx);
        if report_every > 0 && ctx.current_tick % report_every == 0 {
            println!(
                "tick {:>6}  {}",
                ctx.current_tick,
                PopulationStats::collect(&ctx.world)
            );
        }
    }

    Ok(())
}

fn run_viewer(
    config: Option<PathBuf>,
    seed: Option<u64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let settings = load_settings(config.as_ref())?;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Galaxy")
            .with_inner_size([1280.0, 720.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Galaxy",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(ViewerApp::new(settings, config, seed)))
        }),
    )?;
    Ok(())
}
