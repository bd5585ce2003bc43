//! Batch control state: the external "open all / close all" button.
//!
//! The button itself lives outside the container. It holds a handle to its
//! accordion (see the page adapter) and reads [`BatchControl::next_action`]
//! to know which batch operation a click performs.

use std::fmt;

use crate::config::AccordionConfig;

/// What a batch control does when activated next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum BatchAction {
    /// Open every panel.
    Open,
    /// Close every panel.
    Close,
}

impl BatchAction {
    /// Value of the control's `data-next-action` attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Close => "close",
        }
    }

    /// Parse a `data-next-action` attribute value.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "open" => Some(Self::Open),
            "close" => Some(Self::Close),
            _ => None,
        }
    }
}

impl fmt::Display for BatchAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label, next action, and visibility of an accordion's batch control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchControl {
    next_action: BatchAction,
    label: String,
    visible: bool,
}

impl BatchControl {
    pub(crate) fn new(config: &AccordionConfig) -> Self {
        Self {
            next_action: BatchAction::Open,
            label: config.batch_open_label.clone(),
            visible: true,
        }
    }

    /// The action a click performs.
    #[must_use]
    pub fn next_action(&self) -> BatchAction {
        self.next_action
    }

    /// Current button text.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Shown in stacked mode, hidden in tabbed mode.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Advertise opening while anything is closed, closing otherwise.
    ///
    /// Returns whether the next action changed.
    pub(crate) fn refresh(&mut self, any_closed: bool, config: &AccordionConfig) -> bool {
        let (next, label) = if any_closed {
            (BatchAction::Open, &config.batch_open_label)
        } else {
            (BatchAction::Close, &config.batch_close_label)
        };
        let changed = next != self.next_action;
        self.next_action = next;
        if self.label != *label {
            self.label.clone_from(label);
        }
        changed
    }

    pub(crate) fn set_visible(&mut self, visible: bool) -> bool {
        let changed = self.visible != visible;
        self.visible = visible;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_attribute_round_trip() {
        assert_eq!(BatchAction::parse("open"), Some(BatchAction::Open));
        assert_eq!(BatchAction::parse(" close "), Some(BatchAction::Close));
        assert_eq!(BatchAction::parse("toggle"), None);
        assert_eq!(BatchAction::Close.to_string(), "close");
    }

    #[test]
    fn refresh_advertises_state_changing_action() {
        let config = AccordionConfig::new().batch_labels("Expand", "Collapse");
        let mut control = BatchControl::new(&config);
        assert_eq!(control.label(), "Expand");

        assert!(control.refresh(false, &config));
        assert_eq!(control.next_action(), BatchAction::Close);
        assert_eq!(control.label(), "Collapse");

        assert!(!control.refresh(false, &config));
        assert!(control.refresh(true, &config));
        assert_eq!(control.label(), "Expand");
    }

    #[test]
    fn visibility_change_reported_once() {
        let mut control = BatchControl::new(&AccordionConfig::default());
        assert!(control.is_visible());
        assert!(control.set_visible(false));
        assert!(!control.set_visible(false));
        assert!(!control.is_visible());
    }
}
