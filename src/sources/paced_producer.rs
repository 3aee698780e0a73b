use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::warn;

use crate::controllers::display::FrameBuffer;
use crate::core::actions::cancellation::CancelToken;
use crate::core::data::frame::Frame;

/// Publishes `next_frame()` into `buffer` at `rate` frames per second until
/// `stop` is cancelled. The thread returns how many frames it published.
///
/// Publishing is paced against absolute deadlines, so a slow frame is caught
/// up on rather than pushing every later frame back.
pub fn spawn_paced_producer<S, C>(
    buffer: Arc<FrameBuffer>,
    mut next_frame: S,
    rate: u32,
    stop: C,
) -> JoinHandle<u64>
where
    S: FnMut() -> Frame + Send + 'static,
    C: CancelToken + 'static,
{
    let period = Duration::from_secs(1) / rate.max(1);

    thread::spawn(move || {
        let start = Instant::now();
        let mut published: u64 = 0;
        let mut ticks: u32 = 0;

        while !stop.is_cancelled() {
            let deadline = start + period * ticks;
            if let Some(remaining) = deadline.checked_duration_since(Instant::now()) {
                thread::sleep(remaining);
            }

            if stop.is_cancelled() {
                break;
            }

            match buffer.publish(next_frame()) {
                Ok(()) => published += 1,
                Err(err) => warn!(%err, "dropping frame"),
            }

            ticks = ticks.wrapping_add(1);
        }

        published
    })
}
