use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use tracing::debug;

use crate::controllers::display::ports::component::Component;
use crate::core::actions::resize_frame::{fit_to_size, resize_frame};
use crate::core::data::errors::InvalidFrameError;
use crate::core::data::frame::Frame;
use crate::core::data::frame_size::FrameSize;
use crate::core::metrics::fps_meter::FpsMeter;

struct Slot {
    current: Frame,
    fps: FpsMeter,
    frames_published: u64,
    components: Vec<Arc<dyn Component>>,
}

/// Single-slot, lossy hand-off between frame producers and the render thread.
///
/// Publishing replaces the slot wholesale and reading returns a private copy,
/// so the last publisher to take the lock wins and readers never see a
/// partially written frame. Resizing happens before the lock is taken.
pub struct FrameBuffer {
    size: FrameSize,
    slot: Mutex<Slot>,
}

impl FrameBuffer {
    #[must_use]
    pub fn new(size: FrameSize) -> Self {
        Self {
            size,
            slot: Mutex::new(Slot {
                current: Frame::zeroed(size),
                fps: FpsMeter::new(Instant::now()),
                frames_published: 0,
                components: Vec::new(),
            }),
        }
    }

    #[must_use]
    pub fn size(&self) -> FrameSize {
        self.size
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.size.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.size.height()
    }

    /// Stretches `image` to the buffer's size and makes it the current frame.
    ///
    /// On error the current frame and the rate accounting are left unchanged.
    pub fn set_frame(&self, image: &Frame) -> Result<(), InvalidFrameError> {
        let resized = resize_frame(image, self.size)?;
        self.replace(resized);
        Ok(())
    }

    /// Owned variant of [`FrameBuffer::set_frame`]; frames that already have
    /// the buffer's size are moved in without copying.
    pub fn publish(&self, image: Frame) -> Result<(), InvalidFrameError> {
        let resized = fit_to_size(image, self.size)?;
        self.replace(resized);
        Ok(())
    }

    /// A private copy of the current frame.
    #[must_use]
    pub fn get_frame(&self) -> Frame {
        self.lock().current.clone()
    }

    /// Publish rate over the last closed one-second window.
    #[must_use]
    pub fn fps(&self) -> f64 {
        self.lock().fps.fps()
    }

    #[must_use]
    pub fn frames_published(&self) -> u64 {
        self.lock().frames_published
    }

    pub fn add_component(&self, component: Arc<dyn Component>) {
        self.lock().components.push(component);
    }

    /// The registered components in registration order.
    #[must_use]
    pub fn components(&self) -> Vec<Arc<dyn Component>> {
        self.lock().components.clone()
    }

    fn replace(&self, frame: Frame) {
        let now = Instant::now();

        let window_closed = {
            let mut slot = self.lock();
            slot.current = frame;
            slot.frames_published += 1;
            slot.fps.record(now)
        };

        if let Some(fps) = window_closed {
            debug!(fps, "publish rate updated");
        }
    }

    // The slot is only ever replaced wholesale, so a guard recovered from a
    // poisoned lock still holds a complete frame.
    fn lock(&self) -> MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for FrameBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameBuffer")
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}
