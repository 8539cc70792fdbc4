use std::fmt;
use std::io;

/// Fatal simulator errors.
///
/// Unparseable input lines are deliberately not represented here: the
/// driver skips them with a warning and keeps going, so only conditions
/// that must abort the run appear as variants.
#[derive(Debug)]
pub enum SimError {
    /// Invalid construction parameters (frame count, policy name).
    /// Detected before any translation runs.
    Config(String),
    /// The page store could not be opened, or a positioned read came up
    /// short. Physical memory for the affected frame would be undefined,
    /// so the run aborts.
    BackingStore {
        page: Option<u16>,
        source: io::Error,
    },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::Config(msg) => write!(f, "configuration error: {}", msg),
            SimError::BackingStore {
                page: Some(page),
                source,
            } => {
                write!(f, "backing store error reading page {}: {}", page, source)
            }
            SimError::BackingStore { page: None, source } => {
                write!(f, "backing store error: {}", source)
            }
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimError::Config(_) => None,
            SimError::BackingStore { source, .. } => Some(source),
        }
    }
}
