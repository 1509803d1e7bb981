use std::fmt;

/// Failures while setting up the window and its framebuffer.
#[derive(Debug)]
pub enum Error {
    /// The window could not be created.
    Window(winit::error::OsError),
    /// The pixel surface could not be created.
    Pixels(pixels::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Window(err) => write!(f, "failed to create window: {err}"),
            Self::Pixels(err) => write!(f, "failed to create pixel surface: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Window(err) => Some(err),
            Self::Pixels(err) => Some(err),
        }
    }
}

impl From<winit::error::OsError> for Error {
    fn from(err: winit::error::OsError) -> Self {
        Self::Window(err)
    }
}

impl From<pixels::Error> for Error {
    fn from(err: pixels::Error) -> Self {
        Self::Pixels(err)
    }
}
