use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use live_display::overlays::LandmarkOverlay;
use live_display::sources::{FIGURE_CONNECTIONS, TestPattern, figure_landmarks, spawn_paced_producer};
use live_display::{BackendError, DisplayConfig, DisplayLoop, FrameSize, HeadlessBackend, HeadlessStats};

/// Runs the display loop without a window and reports publish and render rates.
#[derive(Parser, Debug)]
#[command(name = "live_display", about = "Headless live display soak run")]
struct Args {
    /// Presentation width in pixels
    #[arg(long, default_value_t = live_display::DEFAULT_WIDTH)]
    width: u32,

    /// Presentation height in pixels
    #[arg(long, default_value_t = live_display::DEFAULT_HEIGHT)]
    height: u32,

    /// Window title
    #[arg(long, default_value = live_display::DEFAULT_DISPLAY_NAME)]
    display_name: String,

    /// Frames published per second
    #[arg(long, default_value_t = 30)]
    rate: u32,

    /// How long to run, in seconds
    #[arg(long, default_value_t = 5)]
    seconds: u64,

    /// Width of the synthetic source frames
    #[arg(long, default_value_t = 1280)]
    source_width: u32,

    /// Height of the synthetic source frames
    #[arg(long, default_value_t = 720)]
    source_height: u32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let config = DisplayConfig::default()
        .with_size(args.width, args.height)
        .with_display_name(args.display_name);
    let mut display = DisplayLoop::new(config)?;

    let overlay = Arc::new(LandmarkOverlay::new("figure", FIGURE_CONNECTIONS.to_vec()));
    display.add_component(Arc::clone(&overlay) as Arc<dyn live_display::Component>);

    let stats = Arc::new(HeadlessStats::default());
    let backend_stats = Arc::clone(&stats);
    display.start(move || Ok::<_, BackendError>(HeadlessBackend::with_stats(backend_stats)))?;

    let mut pattern = TestPattern::new(FrameSize::new(args.source_width, args.source_height)?);
    let producer = spawn_paced_producer(
        display.frame_buffer(),
        move || {
            overlay.set_landmarks(figure_landmarks(pattern.tick()));
            pattern.next_frame()
        },
        args.rate,
        display.stop_handle(),
    );

    let started = Instant::now();
    let mut last_shown = 0;
    while started.elapsed() < Duration::from_secs(args.seconds) {
        thread::sleep(Duration::from_secs(1));

        let shown = stats.frames_shown();
        let publish_fps = display.fps();
        info!(publish_fps, render_fps = shown - last_shown, "display rates");
        last_shown = shown;
    }

    display.stop();
    let published = producer.join().map_err(|_| "producer thread panicked")?;
    let exit = display.join()?;

    info!(?exit, published, rendered = stats.frames_shown(), "done");

    Ok(())
}
