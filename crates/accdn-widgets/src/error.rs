//! Error types for configuring and attaching an accordion.
//!
//! State transitions never fail; only construction can.

use std::fmt;

/// An invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The breakpoint width was zero, which would force tabbed mode everywhere.
    ZeroBreakpoint,
    /// A batch-control label was empty.
    EmptyLabel {
        /// Option name of the label.
        which: &'static str,
    },
    /// An option value could not be parsed.
    InvalidValue {
        /// Option name as given by the host.
        key: String,
        /// The offending raw value.
        value: String,
    },
    /// An option name that no setting recognizes.
    UnknownOption(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroBreakpoint => write!(f, "breakpoint width must be greater than zero"),
            Self::EmptyLabel { which } => write!(f, "{which} must not be empty"),
            Self::InvalidValue { key, value } => {
                write!(f, "invalid value {value:?} for option {key}")
            }
            Self::UnknownOption(key) => write!(f, "unknown option {key}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Failure to attach a controller to a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttachError {
    /// The configuration did not validate.
    Config(ConfigError),
    /// The container has no identifier, so batch controls cannot reference it.
    EmptyContainerId,
    /// A panel at the given document position has no identifier.
    EmptyPanelId {
        /// Zero-based document position.
        index: usize,
    },
    /// Two panels share an identifier.
    DuplicatePanelId(String),
}

impl fmt::Display for AttachError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "configuration error: {err}"),
            Self::EmptyContainerId => write!(f, "container id must not be empty"),
            Self::EmptyPanelId { index } => write!(f, "panel #{index} has an empty id"),
            Self::DuplicatePanelId(id) => write!(f, "duplicate panel id {id:?}"),
        }
    }
}

impl std::error::Error for AttachError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConfigError> for AttachError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}
