//! foldline CLI
//!
//! Run the folding view headlessly, inspect fold geometry, and print the
//! built-in defaults.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use foldline_animation::{FRAME_INTERVAL, STEP};
use foldline_core::Size;
use foldline_paint::FoldGeometry;
use foldline_platform::headless::{HeadlessEventLoop, HeadlessSurface};
use foldline_platform::{Event, InputEvent};
use foldline_view::{FoldingView, ViewConfig};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod report;

use config::Overrides;
use report::FrameRecord;

#[derive(Parser)]
#[command(name = "foldline")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Folding line view", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the view headlessly against a series of taps
    Run(RunArgs),

    /// Print the fold geometry of a single node
    Geometry {
        /// Node index
        #[arg(short, long)]
        index: usize,

        /// Fold progress in [0, 1]
        #[arg(short, long)]
        scale: f32,

        /// Number of nodes in the row
        #[arg(short, long, default_value = "5")]
        nodes: usize,

        /// Surface width
        #[arg(long, default_value = "1080")]
        width: u32,

        /// Surface height
        #[arg(long, default_value = "1920")]
        height: u32,
    },

    /// Show defaults and timing
    Info,
}

#[derive(Args)]
struct RunArgs {
    /// Config file (defaults to ./foldline.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of nodes, overriding the config file
    #[arg(short, long)]
    nodes: Option<usize>,

    /// Line color as #RRGGBB
    #[arg(long)]
    line_color: Option<String>,

    /// Background color as #RRGGBB
    #[arg(long)]
    background_color: Option<String>,

    /// Number of taps to deliver
    #[arg(short, long, default_value = "1")]
    taps: u32,

    /// Milliseconds between taps
    #[arg(long, default_value = "1000")]
    tap_every: u64,

    /// Surface width
    #[arg(long, default_value = "1080")]
    width: u32,

    /// Surface height
    #[arg(long, default_value = "1920")]
    height: u32,

    /// Sleep between frames in real time
    #[arg(long)]
    paced: bool,

    /// Print one JSON line per frame
    #[arg(long)]
    json: bool,

    /// Abort after this many frames
    #[arg(long, default_value = "10000")]
    max_frames: u64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Run(args) => cmd_run(args),

        Commands::Geometry {
            index,
            scale,
            nodes,
            width,
            height,
        } => cmd_geometry(index, scale, nodes, width, height),

        Commands::Info => cmd_info(),
    }
}

fn load_config(explicit: Option<&Path>) -> Result<ViewConfig> {
    match explicit {
        Some(path) => config::load_file(path),
        None => {
            let cwd = std::env::current_dir().context("Failed to read working directory")?;
            config::load_from_dir(&cwd)
        }
    }
}

fn cmd_run(args: RunArgs) -> Result<()> {
    let overrides = Overrides {
        node_count: args.nodes,
        line_color: args.line_color.clone(),
        background_color: args.background_color.clone(),
    };
    let config = overrides.apply(load_config(args.config.as_deref())?)?;
    let mut view = FoldingView::new(&config).context("Failed to create view")?;

    if args.width == 0 || args.height == 0 {
        warn!("Surface is {}x{}, nothing will be visible", args.width, args.height);
    }

    let (x, y) = (args.width as f32 / 2.0, args.height as f32 / 2.0);
    let interval = Duration::from_millis(args.tap_every);
    let mut event_loop = HeadlessEventLoop::new(HeadlessSurface::new(args.width, args.height))
        .paced(args.paced)
        .max_frames(args.max_frames);
    for i in 0..args.taps {
        event_loop = event_loop.with_input(interval * i, InputEvent::tap(x, y));
    }

    info!(
        "Running {} nodes on {}x{} with {} tap(s) every {}ms",
        config.node_count, args.width, args.height, args.taps, args.tap_every
    );

    let json = args.json;
    let stats = event_loop
        .run_until_idle(|event, surface| {
            let is_frame = matches!(event, Event::Frame);
            let flow = view.handle_event(&event, surface);
            if is_frame {
                let record = FrameRecord::capture(&view, surface.now());
                if json {
                    match serde_json::to_string(&record) {
                        Ok(line) => println!("{}", line),
                        Err(err) => warn!("Failed to encode frame {}: {}", record.frame, err),
                    }
                } else {
                    debug!(
                        frame = record.frame,
                        time_ms = record.time_ms,
                        current = record.current,
                        scales = ?record.scales,
                        "frame"
                    );
                }
            }
            flow
        })
        .context("Headless run failed")?;

    let snapshot = view.snapshot();
    info!(
        "Done: {} frames, {} taps, {}ms; current node {} heading {:?}",
        stats.frames,
        stats.inputs,
        stats.elapsed.as_millis(),
        snapshot.current,
        snapshot.direction
    );
    info!("Scales: {:?}", snapshot.scales);

    Ok(())
}

fn cmd_geometry(index: usize, scale: f32, nodes: usize, width: u32, height: u32) -> Result<()> {
    if nodes == 0 {
        anyhow::bail!("Node count must be at least 1");
    }
    if index >= nodes {
        anyhow::bail!("Index {} out of range for {} nodes", index, nodes);
    }
    if !(0.0..=1.0).contains(&scale) {
        warn!("Scale {} is outside [0, 1]; folds are clamped", scale);
    }

    let size = Size::new(width as f32, height as f32);
    let geometry = FoldGeometry::compute(size, nodes, index, scale);

    println!("Node {} of {} at scale {} on {}x{}", index, nodes, scale, width, height);
    println!("  stroke width: {:.3}", geometry.stroke_width);
    println!("  gap:          {:.3}", geometry.gap);
    println!("  fold:         {:.3}", geometry.fold);
    println!("  lift:         {:.3}", geometry.lift);
    println!(
        "  anchor:       ({:.3}, {:.3})",
        geometry.anchor.x, geometry.anchor.y
    );
    println!(
        "  angles:       {:.3}, {:.3}",
        geometry.angles[0], geometry.angles[1]
    );
    for (j, (from, to)) in geometry.segments().iter().enumerate() {
        println!(
            "  segment {}:    ({:.3}, {:.3}) -> ({:.3}, {:.3})",
            j, from.x, from.y, to.x, to.y
        );
    }

    Ok(())
}

fn cmd_info() -> Result<()> {
    let defaults = ViewConfig::default();

    println!("foldline");
    println!("========");
    println!();
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Defaults:");
    println!("  - nodes: {}", defaults.node_count);
    println!("  - line color: {}", defaults.line_color);
    println!("  - background color: {}", defaults.background_color);
    println!();
    println!("Timing:");
    println!("  - frame interval: {}ms", FRAME_INTERVAL.as_millis());
    println!("  - step per frame: {}", STEP);
    println!(
        "  - frames per leg: {}",
        (1.0 / STEP).round() as u32
    );
    println!();
    println!("Config file ({}):", config::CONFIG_FILE);
    print!("{}", defaults.to_toml_string().context("Failed to render defaults")?);

    Ok(())
}
