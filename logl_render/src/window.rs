//! A window with a GL context and a blocking render loop.
//!
//! The loop is deliberately dumb: call the frame callback, swap buffers, poll events, repeat
//! until someone asks to close. Keyboard state is whatever the last batch of events left
//! behind, so a key that's held down reads as pressed on every frame.

use std::collections::HashSet;
use std::ffi::CStr;
use std::os::raw::c_char;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use glutin::dpi::LogicalSize;
use glutin::event::{ElementState, Event, WindowEvent};
use glutin::event_loop::{ControlFlow, EventLoop};
use glutin::platform::desktop::EventLoopExtDesktop;
use glutin::window::WindowBuilder;
use glutin::{Api, ContextBuilder, GlProfile, GlRequest, PossiblyCurrent, WindowedContext};
use log::{debug, info};

use crate::color::Color;
use crate::config::WindowConfig;
use crate::driver::NativeGl;
use crate::error::{RenderError, Result};
use crate::Key;

static SUBSYSTEM_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Ownership of the process-wide window system. Only one can be alive at a time; dropping it
/// hands the window system back.
#[derive(Debug)]
pub struct Subsystem {
    _private: (),
}

impl Subsystem {
    pub fn acquire() -> Result<Self> {
        if SUBSYSTEM_ACTIVE
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(RenderError::Init(String::from(
                "window system: already initialised in this process",
            )));
        }

        debug!("window system initialised");
        Ok(Subsystem { _private: () })
    }
}

impl Drop for Subsystem {
    fn drop(&mut self) {
        SUBSYSTEM_ACTIVE.store(false, Ordering::SeqCst);
        debug!("window system terminated");
    }
}

/// Where a window is in its life. There is no `Uninitialized` value: until
/// [`Window::new`] returns there is no window to be in any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Open,
    Closing,
    Destroyed,
}

impl Lifecycle {
    /// Moves an open window to `Closing`. Returns whether anything changed.
    pub fn close(&mut self) -> bool {
        match self {
            Lifecycle::Open => {
                *self = Lifecycle::Closing;
                true
            }
            _ => false,
        }
    }

    pub fn destroy(&mut self) {
        *self = Lifecycle::Destroyed;
    }

    pub fn is_open(self) -> bool {
        self == Lifecycle::Open
    }
}

#[derive(Debug, Default)]
struct Keyboard {
    pressed: HashSet<Key>,
}

impl Keyboard {
    fn update(&mut self, key: Key, state: ElementState) {
        match state {
            ElementState::Pressed => self.pressed.insert(key),
            ElementState::Released => self.pressed.remove(&key),
        };
    }

    fn is_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }
}

/// The part of the window the render callback gets to see.
pub struct Frame {
    context: WindowedContext<PossiblyCurrent>,
    keyboard: Keyboard,
    lifecycle: Lifecycle,
    width: i32,
    height: i32,
    started: Instant,
}

impl Frame {
    /// Asks the render loop to stop after the current frame. Calling it again does nothing.
    pub fn close(&mut self) {
        if self.lifecycle.close() {
            info!("closing window");
        }
    }

    pub fn should_close(&self) -> bool {
        !self.lifecycle.is_open()
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.keyboard.is_pressed(key)
    }

    pub fn is_released(&self, key: Key) -> bool {
        !self.keyboard.is_pressed(key)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Seconds since the window was opened.
    pub fn time(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }

    pub fn clear_color(&self, color: Color) {
        unsafe { gl::ClearColor(color.r, color.g, color.b, color.a) }
    }

    pub fn gl(&self) -> NativeGl {
        NativeGl::loaded()
    }

    fn resize(&mut self, width: i32, height: i32) {
        unsafe { gl::Viewport(0, 0, width, height) }
        self.width = width;
        self.height = height;
    }

    fn handle(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::Resized(size) => {
                self.context.resize(*size);
                self.resize(size.width as i32, size.height as i32);
            }
            WindowEvent::CloseRequested => {
                if self.lifecycle.close() {
                    info!("window system asked to close the window");
                }
            }
            WindowEvent::KeyboardInput { input, .. } => {
                if let Some(key) = input.virtual_keycode {
                    self.keyboard.update(key, input.state);
                }
            }
            _ => {}
        }
    }
}

/// A window plus its current GL context.
pub struct Window {
    // field order is drop order: the context goes before the event loop and the subsystem
    frame: Frame,
    events: EventLoop<()>,
    _subsystem: Subsystem,
}

impl Window {
    /// Opens a window with an OpenGL 3.3 core context current on this thread. Sizes below 1 fall
    /// back to 800x600.
    pub fn new(title: &str, resizable: bool, width: i32, height: i32) -> Result<Self> {
        Self::with_config(WindowConfig::new(title, resizable, width, height))
    }

    /// Opens a window as described by `config`. A failure to swap buffers later on, once the
    /// context exists, is a [`RenderError::Context`] rather than `Init`.
    pub fn with_config(config: WindowConfig) -> Result<Self> {
        let config = config.sanitised();
        let subsystem = Subsystem::acquire()?;

        let events = EventLoop::new();
        let builder = WindowBuilder::new()
            .with_title(config.title.clone())
            .with_resizable(config.resizable)
            .with_inner_size(LogicalSize::new(config.width as f64, config.height as f64));

        if config.forward_compatible() {
            debug!("core profile on this platform is forward-compatible");
        }

        let context = ContextBuilder::new()
            .with_gl(GlRequest::Specific(Api::OpenGl, config.gl_version))
            .with_gl_profile(GlProfile::Core)
            .with_vsync(config.vsync)
            .build_windowed(builder, &events)
            .map_err(|e| RenderError::Init(format!("window: {}", e)))?;

        let context = unsafe { context.make_current() }
            .map_err(|(_, e)| RenderError::Init(format!("context: {:?}", e)))?;

        gl::load_with(|symbol| context.get_proc_address(symbol) as *const _);
        info!("running with opengl: version = {}", driver_version());

        let size = context.window().inner_size();
        let mut frame = Frame {
            context,
            keyboard: Keyboard::default(),
            lifecycle: Lifecycle::Open,
            width: config.width,
            height: config.height,
            started: Instant::now(),
        };
        frame.resize(size.width as i32, size.height as i32);

        info!(
            "opened window {:?}: {}x{}",
            config.title, frame.width, frame.height
        );

        Ok(Window {
            frame,
            events,
            _subsystem: subsystem,
        })
    }

    /// Runs the render loop until the window is asked to close. `render` is called exactly once
    /// per iteration, before the buffers are swapped and events are polled. An error from
    /// `render` stops the loop and is handed back.
    pub fn render<F, E>(&mut self, mut render: F) -> std::result::Result<(), E>
    where
        F: FnMut(&mut Frame) -> std::result::Result<(), E>,
        E: From<RenderError>,
    {
        while !self.frame.should_close() {
            render(&mut self.frame)?;

            self.frame
                .context
                .swap_buffers()
                .map_err(|e| RenderError::Context(format!("swap buffers: {:?}", e)))?;

            self.poll_events();
        }

        Ok(())
    }

    /// Drains whatever events are waiting, without blocking.
    fn poll_events(&mut self) {
        let frame = &mut self.frame;

        self.events.run_return(|event, _, control_flow| {
            *control_flow = ControlFlow::Poll;

            match event {
                Event::WindowEvent { event, .. } => frame.handle(&event),
                Event::MainEventsCleared => *control_flow = ControlFlow::Exit,
                _ => {}
            }
        });
    }

    /// Tears down the window, its context and the window system.
    pub fn destroy(mut self) {
        self.frame.lifecycle.destroy();
        info!("window destroyed");
    }

    pub fn close(&mut self) {
        self.frame.close();
    }

    pub fn should_close(&self) -> bool {
        self.frame.should_close()
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.frame.lifecycle()
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.frame.is_pressed(key)
    }

    pub fn is_released(&self, key: Key) -> bool {
        self.frame.is_released(key)
    }

    pub fn width(&self) -> i32 {
        self.frame.width()
    }

    pub fn height(&self) -> i32 {
        self.frame.height()
    }

    pub fn time(&self) -> f64 {
        self.frame.time()
    }

    pub fn clear_color(&self, color: Color) {
        self.frame.clear_color(color);
    }

    pub fn gl(&self) -> NativeGl {
        self.frame.gl()
    }
}

fn driver_version() -> String {
    unsafe {
        let version = gl::GetString(gl::VERSION);
        if version.is_null() {
            return String::from("unknown");
        }

        CStr::from_ptr(version as *const c_char)
            .to_string_lossy()
            .into_owned()
    }
}
