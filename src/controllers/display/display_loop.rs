use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{error, info};

use crate::controllers::display::config::DisplayConfig;
use crate::controllers::display::errors::component::ComponentError;
use crate::controllers::display::errors::display::{BackendError, DisplayError};
use crate::controllers::display::frame_buffer::FrameBuffer;
use crate::controllers::display::ports::component::Component;
use crate::controllers::display::ports::error_observer::{ComponentErrorObserver, LogComponentErrors};
use crate::controllers::display::ports::window_backend::{PolledInput, WindowBackend, WindowBackendFactory};
use crate::controllers::display::state::{AtomicLoopState, LoopExit, LoopState};
use crate::core::actions::cancellation::{CancelToken, StopSignal};
use crate::core::data::errors::InvalidFrameError;
use crate::core::data::frame::Frame;

#[derive(Debug)]
struct SharedState {
    state: AtomicLoopState,
    stop: StopSignal,
    render_passes: AtomicU64,
}

impl SharedState {
    /// Raises the stop signal and, if the loop is running, marks it as
    /// stopping. Returns true for the first request only.
    fn request_stop(&self) -> bool {
        let first = self.stop.raise();
        let _ = self.state.transition(LoopState::Running, LoopState::Stopping);
        first
    }
}

/// Everything the render thread needs, moved onto it at start.
struct RenderContext {
    shared: Arc<SharedState>,
    buffer: Arc<FrameBuffer>,
    observer: Arc<dyn ComponentErrorObserver>,
    title: String,
    quit_key: char,
    poll_interval: Duration,
}

/// Requests cooperative shutdown of a display loop from any thread.
#[derive(Debug, Clone)]
pub struct StopHandle {
    shared: Arc<SharedState>,
}

impl StopHandle {
    pub fn stop(&self) {
        self.shared.request_stop();
    }

    #[must_use]
    pub fn is_stop_requested(&self) -> bool {
        self.shared.stop.is_raised()
    }
}

impl CancelToken for StopHandle {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self.shared.stop.is_cancelled()
    }
}

/// Drives a window from a dedicated render thread.
///
/// Each render pass snapshots the frame buffer, runs the registered
/// components on the snapshot in order, presents it and polls for the quit
/// key. The loop is free-running; the presentation and poll steps set its
/// pace. A loop runs at most once: `Idle -> Running -> Stopping -> Stopped`.
pub struct DisplayLoop {
    config: DisplayConfig,
    buffer: Arc<FrameBuffer>,
    observer: Arc<dyn ComponentErrorObserver>,
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<Result<LoopExit, DisplayError>>>,
}

impl DisplayLoop {
    pub fn new(config: DisplayConfig) -> Result<Self, DisplayError> {
        let size = config.frame_size()?;
        let buffer = Arc::new(FrameBuffer::new(size));

        Ok(Self::with_frame_buffer(config, buffer))
    }

    /// Binds the loop to an existing buffer. The window is opened at the
    /// buffer's size; `config.width` and `config.height` are not consulted.
    #[must_use]
    pub fn with_frame_buffer(config: DisplayConfig, buffer: Arc<FrameBuffer>) -> Self {
        info!(
            display = %config.display_name,
            width = buffer.width(),
            height = buffer.height(),
            "display initialized"
        );

        Self {
            config,
            buffer,
            observer: Arc::new(LogComponentErrors),
            shared: Arc::new(SharedState {
                state: AtomicLoopState::new(LoopState::Idle),
                stop: StopSignal::new(),
                render_passes: AtomicU64::new(0),
            }),
            worker: None,
        }
    }

    /// Replaces the sink that receives component failures.
    #[must_use]
    pub fn with_error_observer(mut self, observer: Arc<dyn ComponentErrorObserver>) -> Self {
        self.observer = observer;
        self
    }

    #[must_use]
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// The shared buffer producers publish into.
    #[must_use]
    pub fn frame_buffer(&self) -> Arc<FrameBuffer> {
        Arc::clone(&self.buffer)
    }

    pub fn add_component(&self, component: Arc<dyn Component>) {
        self.buffer.add_component(component);
    }

    pub fn set_frame(&self, image: &Frame) -> Result<(), InvalidFrameError> {
        self.buffer.set_frame(image)
    }

    #[must_use]
    pub fn get_frame(&self) -> Frame {
        self.buffer.get_frame()
    }

    #[must_use]
    pub fn fps(&self) -> f64 {
        self.buffer.fps()
    }

    #[must_use]
    pub fn state(&self) -> LoopState {
        self.shared.state.load()
    }

    #[must_use]
    pub fn render_passes(&self) -> u64 {
        self.shared.render_passes.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn stop_handle(&self) -> StopHandle {
        StopHandle {
            shared: Arc::clone(&self.shared),
        }
    }

    /// Spawns the render thread. The backend is built on that thread.
    pub fn start<B, F>(&mut self, factory: F) -> Result<(), DisplayError>
    where
        B: WindowBackend + 'static,
        F: WindowBackendFactory<B>,
    {
        self.shared
            .state
            .transition(LoopState::Idle, LoopState::Running)
            .map_err(|_| DisplayError::AlreadyStarted)?;

        let context = RenderContext {
            shared: Arc::clone(&self.shared),
            buffer: Arc::clone(&self.buffer),
            observer: Arc::clone(&self.observer),
            title: self.config.display_name.clone(),
            quit_key: self.config.quit_key,
            poll_interval: self.config.poll_interval,
        };

        let spawned = thread::Builder::new()
            .name(format!("display-{}", self.config.display_name))
            .spawn(move || Self::render_thread::<B, F>(factory, &context));

        match spawned {
            Ok(handle) => {
                self.worker = Some(handle);
                Ok(())
            }
            Err(err) => {
                self.shared.state.store(LoopState::Stopped);
                Err(DisplayError::Spawn(err))
            }
        }
    }

    /// Asks the render thread to finish its current pass and exit. Does not
    /// wait for it; see [`DisplayLoop::join`].
    pub fn stop(&self) {
        if self.shared.request_stop() {
            info!(display = %self.config.display_name, "stopping display stream");
        }
    }

    /// Waits for the render thread and reports why it ended.
    pub fn join(&mut self) -> Result<LoopExit, DisplayError> {
        let handle = self.worker.take().ok_or(DisplayError::NotStarted)?;

        handle
            .join()
            .map_err(|payload| DisplayError::RenderThreadPanicked(panic_message(payload.as_ref())))?
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state() == LoopState::Stopped
    }

    fn render_thread<B, F>(factory: F, context: &RenderContext) -> Result<LoopExit, DisplayError>
    where
        B: WindowBackend,
        F: WindowBackendFactory<B>,
    {
        let built = panic::catch_unwind(AssertUnwindSafe(|| factory.build()))
            .unwrap_or_else(|payload| Err(BackendError::Unavailable(panic_message(payload.as_ref()))));

        let mut backend = match built {
            Ok(backend) => backend,
            Err(err) => {
                error!(display = %context.title, %err, "failed to create window backend");
                context.shared.stop.raise();
                context.shared.state.store(LoopState::Stopped);
                return Err(err.into());
            }
        };

        // Teardown below must run however the loop ended, including a panic
        // in the backend or the error observer.
        let result = panic::catch_unwind(AssertUnwindSafe(|| Self::run(&mut backend, context)))
            .unwrap_or_else(|payload| Err(DisplayError::RenderThreadPanicked(panic_message(payload.as_ref()))));

        context.shared.stop.raise();
        context.shared.state.store(LoopState::Stopping);
        backend.close_all();
        context.shared.state.store(LoopState::Stopped);

        match &result {
            Ok(exit) => info!(display = %context.title, ?exit, "display loop stopped"),
            Err(err) => error!(display = %context.title, %err, "display loop aborted"),
        }

        result
    }

    fn run<B: WindowBackend>(backend: &mut B, context: &RenderContext) -> Result<LoopExit, DisplayError> {
        backend.open(&context.title, context.buffer.size())?;

        loop {
            if context.shared.stop.is_cancelled() {
                return Ok(LoopExit::StopRequested);
            }

            let mut display_frame = context.buffer.get_frame();

            for component in context.buffer.components() {
                Self::apply_component(component.as_ref(), &mut display_frame, context.observer.as_ref());
            }

            backend.show(&display_frame)?;
            context.shared.render_passes.fetch_add(1, Ordering::AcqRel);

            match backend.poll(context.poll_interval)? {
                PolledInput::Key(key) if key == context.quit_key => return Ok(LoopExit::QuitKey),
                PolledInput::CloseRequested => return Ok(LoopExit::WindowClosed),
                PolledInput::Key(_) | PolledInput::Nothing => {}
            }
        }
    }

    fn apply_component(
        component: &dyn Component,
        frame: &mut Frame,
        observer: &dyn ComponentErrorObserver,
    ) {
        // The frame is a private copy, so a panic mid-draw cannot leak a
        // half-drawn frame anywhere else.
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| component.annotate(frame)));

        let error = match outcome {
            Ok(Ok(())) => return,
            Ok(Err(error)) => error,
            Err(payload) => ComponentError::Panicked {
                component: component.name().to_string(),
                message: panic_message(payload.as_ref()),
            },
        };

        observer.on_component_error(&error);
    }
}

impl Drop for DisplayLoop {
    fn drop(&mut self) {
        self.shared.request_stop();

        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
