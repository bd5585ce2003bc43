//! Accordion configuration.
//!
//! Hosts build an [`AccordionConfig`] directly, from a string option map
//! (`data-*` attributes, a query string, a JS options object flattened to
//! strings) via [`AccordionConfig::from_options`], or with the `serde`
//! feature from any serde format.
//!
//! Option names accepted by [`from_options`](AccordionConfig::from_options):
//!
//! | Setting                  | Names                                    | Default      |
//! |--------------------------|------------------------------------------|--------------|
//! | `breakpoint_width`       | `breakpointWidth`, `tabsAt`              | 700          |
//! | `exclusive_open`         | `exclusiveOpen`, `exclusiveItems`        | `false`      |
//! | `transition_duration_ms` | `transitionDurationMs`, `effectSpeed`    | 700          |
//! | `batch_open_label`       | `batchOpenLabel`, `textForBatchOpen`     | `"Open all"` |
//! | `batch_close_label`      | `batchCloseLabel`, `textForBatchClose`   | `"Close all"`|

use std::time::Duration;

use crate::error::ConfigError;

/// Viewport width (pixels) at and above which the accordion becomes tabs.
pub const DEFAULT_BREAKPOINT_WIDTH: u32 = 700;

/// Slide duration for animated transitions.
pub const DEFAULT_TRANSITION_DURATION_MS: u64 = 700;

/// Batch-control label offering to open everything.
pub const DEFAULT_BATCH_OPEN_LABEL: &str = "Open all";

/// Batch-control label offering to close everything.
pub const DEFAULT_BATCH_CLOSE_LABEL: &str = "Close all";

/// Per-instance settings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct AccordionConfig {
    /// Viewport width (pixels) at which tabbed mode starts.
    pub breakpoint_width: u32,
    /// In stacked mode, opening a panel closes all others.
    pub exclusive_open: bool,
    /// Duration of animated transitions in milliseconds.
    pub transition_duration_ms: u64,
    /// Batch-control text when its next action opens every panel.
    pub batch_open_label: String,
    /// Batch-control text when its next action closes every panel.
    pub batch_close_label: String,
}

impl Default for AccordionConfig {
    fn default() -> Self {
        Self {
            breakpoint_width: DEFAULT_BREAKPOINT_WIDTH,
            exclusive_open: false,
            transition_duration_ms: DEFAULT_TRANSITION_DURATION_MS,
            batch_open_label: DEFAULT_BATCH_OPEN_LABEL.to_owned(),
            batch_close_label: DEFAULT_BATCH_CLOSE_LABEL.to_owned(),
        }
    }
}

impl AccordionConfig {
    /// Default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the breakpoint width (builder).
    #[must_use]
    pub fn breakpoint_width(mut self, width: u32) -> Self {
        self.breakpoint_width = width;
        self
    }

    /// Set exclusive-open behavior (builder).
    #[must_use]
    pub fn exclusive_open(mut self, exclusive: bool) -> Self {
        self.exclusive_open = exclusive;
        self
    }

    /// Set the transition duration (builder).
    #[must_use]
    pub fn transition_duration(mut self, duration: Duration) -> Self {
        self.transition_duration_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set both batch-control labels (builder).
    #[must_use]
    pub fn batch_labels(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.batch_open_label = open.into();
        self.batch_close_label = close.into();
        self
    }

    /// Transition duration as a [`Duration`].
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.transition_duration_ms)
    }

    /// Check every field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.breakpoint_width == 0 {
            return Err(ConfigError::ZeroBreakpoint);
        }
        if self.batch_open_label.trim().is_empty() {
            return Err(ConfigError::EmptyLabel { which: "batchOpenLabel" });
        }
        if self.batch_close_label.trim().is_empty() {
            return Err(ConfigError::EmptyLabel { which: "batchCloseLabel" });
        }
        Ok(())
    }

    /// Replace every invalid field by its default.
    ///
    /// This is the lenient path for hosts that prefer a working widget over
    /// an error; [`validate`](Self::validate) is the strict one.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.breakpoint_width == 0 {
            self.breakpoint_width = defaults.breakpoint_width;
        }
        if self.batch_open_label.trim().is_empty() {
            self.batch_open_label = defaults.batch_open_label;
        }
        if self.batch_close_label.trim().is_empty() {
            self.batch_close_label = defaults.batch_close_label;
        }
        self
    }

    /// Build a configuration from string options over the defaults.
    ///
    /// Unknown names and unparsable values are errors. The result is
    /// validated before it is returned.
    pub fn from_options<I, K, V>(options: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = Self::default();
        for (key, value) in options {
            config.apply_option(key.as_ref(), value.as_ref())?;
        }
        config.validate()?;
        Ok(config)
    }

    fn apply_option(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            key: key.to_owned(),
            value: value.to_owned(),
        };
        match key {
            "breakpointWidth" | "tabsAt" => {
                self.breakpoint_width = parse_pixels(value).ok_or_else(invalid)?;
            }
            "exclusiveOpen" | "exclusiveItems" => {
                self.exclusive_open = parse_bool(value).ok_or_else(invalid)?;
            }
            "transitionDurationMs" | "effectSpeed" => {
                self.transition_duration_ms = parse_millis(value).ok_or_else(invalid)?;
            }
            "batchOpenLabel" | "textForBatchOpen" => self.batch_open_label = value.to_owned(),
            "batchCloseLabel" | "textForBatchClose" => self.batch_close_label = value.to_owned(),
            _ => return Err(ConfigError::UnknownOption(key.to_owned())),
        }
        Ok(())
    }
}

/// `740`, `740px`.
fn parse_pixels(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    raw.strip_suffix("px").unwrap_or(raw).trim().parse().ok()
}

/// `700`, `700ms`, plus the named speeds of slide effects.
fn parse_millis(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    match raw {
        "fast" => Some(200),
        "normal" => Some(400),
        "slow" => Some(600),
        _ => raw.strip_suffix("ms").unwrap_or(raw).trim().parse().ok(),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
