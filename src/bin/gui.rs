use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use live_display::overlays::LandmarkOverlay;
use live_display::sources::{FIGURE_CONNECTIONS, TestPattern, figure_landmarks, spawn_paced_producer};
use live_display::{DisplayConfig, DisplayLoop, FrameSize, PixelsBackendFactory};

/// Shows a synthetic live feed with a landmark overlay. Press the quit key to exit.
#[derive(Parser, Debug)]
#[command(name = "gui", about = "Live display window")]
struct Args {
    #[arg(long, default_value_t = live_display::DEFAULT_WIDTH)]
    width: u32,

    #[arg(long, default_value_t = live_display::DEFAULT_HEIGHT)]
    height: u32,

    #[arg(long, default_value = live_display::DEFAULT_DISPLAY_NAME)]
    display_name: String,

    #[arg(long, default_value_t = live_display::DEFAULT_QUIT_KEY)]
    quit_key: char,

    /// Frames published per second
    #[arg(long, default_value_t = 30)]
    rate: u32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let config = DisplayConfig::default()
        .with_size(args.width, args.height)
        .with_display_name(args.display_name)
        .with_quit_key(args.quit_key);
    let mut display = DisplayLoop::new(config)?;

    let overlay = Arc::new(LandmarkOverlay::new("figure", FIGURE_CONNECTIONS.to_vec()));
    display.add_component(Arc::clone(&overlay) as Arc<dyn live_display::Component>);

    display.start(PixelsBackendFactory)?;

    let mut pattern = TestPattern::new(FrameSize::new(640, 360)?);
    let producer = spawn_paced_producer(
        display.frame_buffer(),
        move || {
            overlay.set_landmarks(figure_landmarks(pattern.tick()));
            pattern.next_frame()
        },
        args.rate,
        display.stop_handle(),
    );

    let exit = display.join()?;
    let published = producer.join().map_err(|_| "producer thread panicked")?;

    let last_fps = display.fps();
    info!(?exit, published, last_fps, "display closed");

    Ok(())
}
