use std::error::Error;
use std::fmt;

use crate::core::data::render_config::RenderConfigError;
use crate::core::data::viewport::ViewportError;

#[derive(Debug, Clone, PartialEq)]
pub enum ControllerError {
    /// A render is in flight; the request or viewport change was dropped.
    Busy,
    Config(RenderConfigError),
    Viewport(ViewportError),
}

impl fmt::Display for ControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Busy => write!(f, "a render is already in progress"),
            Self::Config(err) => write!(f, "invalid render settings: {}", err),
            Self::Viewport(err) => write!(f, "invalid viewport change: {}", err),
        }
    }
}

impl Error for ControllerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Busy => None,
            Self::Config(err) => Some(err),
            Self::Viewport(err) => Some(err),
        }
    }
}

impl From<RenderConfigError> for ControllerError {
    fn from(err: RenderConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<ViewportError> for ControllerError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}
