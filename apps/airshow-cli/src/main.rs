use airshow_common::{GeoCoord, map_from_geo};
use airshow_flock::Flock;
use airshow_layer::{LayerConfig, UavLayerSource};
use airshow_render::{MapView, Renderer, TextRenderer};
use airshow_scene::VectorSource;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "airshow-cli", about = "CLI driver for the airshow map core")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Simulate a small show and render text frames of the UAV layer
    Demo {
        /// Number of UAVs in the simulated flock
        #[arg(short, long, default_value = "5")]
        uavs: usize,
        /// Number of ticks to simulate
        #[arg(short, long, default_value = "10")]
        ticks: u64,
        /// Layer config file (JSON) with label color rules
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Validate a layer config file and list its color rules
    Rules {
        /// Path to the config file
        path: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("airshow-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("common: {}", airshow_common::crate_info());
            println!("scene: {}", airshow_scene::crate_info());
            println!("registry: {}", airshow_registry::crate_info());
            println!("flock: {}", airshow_flock::crate_info());
            println!("layer: {}", airshow_layer::crate_info());
            println!("render: {}", airshow_render::crate_info());
        }
        Commands::Demo {
            uavs,
            ticks,
            config,
        } => run_demo(uavs, ticks, config)?,
        Commands::Rules { path } => {
            let config = LayerConfig::load(&path)?;
            println!("{}: {} color rules", path.display(), config.color_rules.len());
            for (index, rule) in config.color_rules.iter().enumerate() {
                let c = rule.color;
                println!(
                    "  {index}: {:?} -> rgba({:.2}, {:.2}, {:.2}, {:.2})",
                    rule.pattern, c.r, c.g, c.b, c.a
                );
            }
        }
    }

    Ok(())
}

/// Fly `uavs` drones in a circle over the home point for `ticks` ticks,
/// syncing the layer from flock events and printing a frame per tick.
fn run_demo(uavs: usize, ticks: u64, config: Option<PathBuf>) -> anyhow::Result<()> {
    let config = match config {
        Some(path) => LayerConfig::load(path)?,
        None => LayerConfig::default(),
    };

    let source = VectorSource::new_shared();
    let mut layer = UavLayerSource::new(source.clone(), config)?;
    let mut flock = Flock::new();
    let renderer = TextRenderer::new();

    let home = GeoCoord::new(19.0402, 47.4979);
    let view = MapView {
        center: map_from_geo(home),
        zoom: 14.0,
    };

    for tick in 0..ticks {
        for i in 0..uavs {
            let phase = std::f64::consts::TAU
                * (tick as f64 / ticks.max(1) as f64 + i as f64 / uavs.max(1) as f64);
            let position = GeoCoord::new(
                home.lon + 0.001 * phase.cos(),
                home.lat + 0.001 * phase.sin(),
            );
            let heading = (phase.to_degrees() + 90.0).rem_euclid(360.0);
            flock.update_uav(&format!("UAV-{:02}", i + 1), position, heading);
        }

        // Halfway through, highlight the lead drone.
        if tick == ticks / 2 && uavs > 0 {
            layer.set_selection(["UAV-01".to_string()]);
            tracing::info!("selected UAV-01");
        }

        layer.apply_events(&flock.drain_events());
        println!("tick {tick}");
        print!("{}", renderer.render(&source.borrow(), &view));
    }

    if uavs > 0 {
        flock.remove_uav("UAV-01");
        layer.apply_events(&flock.drain_events());
        println!("after landing UAV-01");
        print!("{}", renderer.render(&source.borrow(), &view));
    }

    Ok(())
}
