//! Responsive display mode.

use std::fmt;

/// How an accordion lays out its panels.
///
/// | Mode      | Viewport                 | Layout                          |
/// |-----------|--------------------------|---------------------------------|
/// | `Stacked` | `width < breakpoint`     | Vertical accordion              |
/// | `Tabbed`  | `width >= breakpoint`    | Tab strip, one page at a time   |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum DisplayMode {
    /// Narrow viewport: panels stack vertically.
    #[default]
    Stacked,
    /// Wide viewport: panels render as mutually exclusive tab pages.
    Tabbed,
}

impl DisplayMode {
    /// Classify a viewport width against a breakpoint.
    ///
    /// A width exactly at the breakpoint is `Tabbed`.
    #[inline]
    #[must_use]
    pub const fn for_width(width: u32, breakpoint: u32) -> Self {
        if width >= breakpoint {
            Self::Tabbed
        } else {
            Self::Stacked
        }
    }

    /// Whether this is the tab-strip layout.
    #[inline]
    #[must_use]
    pub const fn is_tabbed(self) -> bool {
        matches!(self, Self::Tabbed)
    }

    /// Short label for display and logging.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Stacked => "stacked",
            Self::Tabbed => "tabbed",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
