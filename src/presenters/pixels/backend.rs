use std::time::Duration;

use pixels::{Pixels, SurfaceTexture};
use tracing::{debug, info};
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, WindowEvent};
use winit::event_loop::{EventLoop, EventLoopBuilder};
use winit::keyboard::Key;
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowBuilder};

use crate::adapters::pixel_format::{rgb_to_rgba, rgba_len};
use crate::controllers::display::{BackendError, PolledInput, WindowBackend, WindowBackendFactory};
use crate::core::data::frame::Frame;
use crate::core::data::frame_size::FrameSize;

/// Window backend built on winit for the window and pixels for the surface.
///
/// The event loop is owned by the render thread and pumped with a bounded
/// timeout on every poll, so the display never blocks on the window system
/// for longer than the configured poll interval.
pub struct PixelsBackend {
    event_loop: EventLoop<()>,
    window: Option<&'static Window>,
    pixels: Option<Pixels<'static>>,
}

impl PixelsBackend {
    pub fn new() -> Result<Self, BackendError> {
        let mut builder = EventLoopBuilder::new();
        allow_any_thread(&mut builder);

        let event_loop = builder
            .build()
            .map_err(|err| BackendError::Unavailable(err.to_string()))?;

        Ok(Self {
            event_loop,
            window: None,
            pixels: None,
        })
    }
}

impl WindowBackend for PixelsBackend {
    fn open(&mut self, title: &str, size: FrameSize) -> Result<(), BackendError> {
        let open_error = |message: String| BackendError::Open {
            title: title.to_string(),
            message,
        };

        let window = WindowBuilder::new()
            .with_title(title)
            .with_inner_size(LogicalSize::new(size.width(), size.height()))
            .build(&self.event_loop)
            .map_err(|err| open_error(err.to_string()))?;

        // pixels borrows the window for the surface's lifetime; the display
        // owns one window for the life of the process.
        let window: &'static Window = Box::leak(Box::new(window));

        let inner = window.inner_size();
        let surface_texture = SurfaceTexture::new(inner.width, inner.height, window);
        let pixels = Pixels::new(size.width(), size.height(), surface_texture)
            .map_err(|err| open_error(err.to_string()))?;

        info!(title, width = size.width(), height = size.height(), "window opened");

        self.window = Some(window);
        self.pixels = Some(pixels);

        Ok(())
    }

    fn show(&mut self, frame: &Frame) -> Result<(), BackendError> {
        let pixels = self
            .pixels
            .as_mut()
            .ok_or_else(|| BackendError::Present("window is not open".to_string()))?;

        if pixels.frame().len() != rgba_len(frame.data().len()) {
            pixels
                .resize_buffer(frame.width(), frame.height())
                .map_err(|err| BackendError::Present(err.to_string()))?;
        }

        rgb_to_rgba(frame.data(), pixels.frame_mut())
            .map_err(|err| BackendError::Present(err.to_string()))?;

        pixels
            .render()
            .map_err(|err| BackendError::Present(err.to_string()))
    }

    fn poll(&mut self, wait: Duration) -> Result<PolledInput, BackendError> {
        let mut input = PolledInput::Nothing;
        let mut resized = None;

        let status = self.event_loop.pump_events(Some(wait), |event, _| {
            let Event::WindowEvent { event, .. } = event else {
                return;
            };

            match event {
                WindowEvent::CloseRequested => input = PolledInput::CloseRequested,
                WindowEvent::KeyboardInput { event, .. }
                    if event.state == ElementState::Pressed && !event.repeat =>
                {
                    if let (PolledInput::Nothing, Key::Character(text)) = (input, &event.logical_key) {
                        if let Some(key) = text.chars().next() {
                            input = PolledInput::Key(key);
                        }
                    }
                }
                WindowEvent::Resized(size) => resized = Some(size),
                _ => {}
            }
        });

        if let PumpStatus::Exit(code) = status {
            debug!(code, "window event loop exited");
            return Ok(PolledInput::CloseRequested);
        }

        if let (Some(size), Some(pixels)) = (resized, self.pixels.as_mut()) {
            if size.width > 0 && size.height > 0 {
                pixels
                    .resize_surface(size.width, size.height)
                    .map_err(|err| BackendError::Poll(err.to_string()))?;
            }
        }

        Ok(input)
    }

    fn close_all(&mut self) {
        self.pixels = None;

        if let Some(window) = self.window.take() {
            window.set_visible(false);
        }

        let _ = self.event_loop.pump_events(Some(Duration::ZERO), |_, _| {});
        debug!("windows closed");
    }
}

/// Builds a [`PixelsBackend`] on the render thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct PixelsBackendFactory;

impl WindowBackendFactory<PixelsBackend> for PixelsBackendFactory {
    fn build(self) -> Result<PixelsBackend, BackendError> {
        PixelsBackend::new()
    }
}

// The render loop runs off the main thread, which winit only allows when asked.
#[cfg(target_os = "linux")]
fn allow_any_thread(builder: &mut EventLoopBuilder<()>) {
    use winit::platform::x11::EventLoopBuilderExtX11;

    EventLoopBuilderExtX11::with_any_thread(builder, true);
}

#[cfg(target_os = "windows")]
fn allow_any_thread(builder: &mut EventLoopBuilder<()>) {
    use winit::platform::windows::EventLoopBuilderExtWindows;

    builder.with_any_thread(true);
}

#[cfg(not(any(target_os = "linux", target_os = "windows")))]
fn allow_any_thread(_builder: &mut EventLoopBuilder<()>) {}
