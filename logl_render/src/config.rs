/// Size used when the caller asks for a zero or negative dimension.
pub const DEFAULT_WIDTH: i32 = 800;
pub const DEFAULT_HEIGHT: i32 = 600;

/// Everything needed to open a window and its GL context.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    pub resizable: bool,
    pub width: i32,
    pub height: i32,
    /// Requested (major, minor) core profile version.
    pub gl_version: (u8, u8),
    pub vsync: bool,
}

impl WindowConfig {
    pub fn new(title: &str, resizable: bool, width: i32, height: i32) -> Self {
        WindowConfig {
            title: title.to_string(),
            resizable,
            width,
            height,
            ..Default::default()
        }
        .sanitised()
    }

    /// Replaces unusable dimensions with the defaults.
    pub fn sanitised(mut self) -> Self {
        if self.width < 1 {
            self.width = DEFAULT_WIDTH;
        }

        if self.height < 1 {
            self.height = DEFAULT_HEIGHT;
        }

        self
    }

    /// Whether the context will come back forward-compatible. glutin 0.23 has no flag to ask for
    /// that, so nothing is passed to the context builder; on macOS the core-profile request
    /// alone yields a forward-compatible context. The value is only reported and logged.
    pub fn forward_compatible(&self) -> bool {
        cfg!(target_os = "macos")
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: String::from("LearnOpenGL"),
            resizable: true,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            gl_version: (3, 3),
            vsync: true,
        }
    }
}
