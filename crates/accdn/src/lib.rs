#![forbid(unsafe_code)]

//! accdn public facade crate.
//!
//! A responsive accordion: a collapsible list of titled panels that turns
//! into a tab strip when the viewport is at least as wide as a breakpoint.
//! This crate re-exports the common types of the internal crates and offers
//! a prelude for day-to-day usage.
//!
//! ```
//! use accdn::prelude::*;
//!
//! # fn main() -> accdn::Result<()> {
//! let container = ContainerSource::new("faq")
//!     .panel(PanelSource::new("q1", "Question one", "<p>Answer.</p>"))
//!     .panel(PanelSource::new("q2", "Question two", "<p>Answer.</p>"));
//! let config = AccordionConfig::from_options([("tabsAt", "900"), ("exclusiveItems", "true")])?;
//! let mut accordion = Accordion::attach(container, config, 600)?;
//!
//! let q1 = accordion.panel_by_dom_id("q1").unwrap();
//! accordion.toggle_panel(q1);
//! assert!(accordion.is_open(q1));
//!
//! accordion.set_viewport_width(1200);
//! assert_eq!(accordion.mode(), DisplayMode::Tabbed);
//! # Ok(())
//! # }
//! ```

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use accdn_core::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, Modifiers, PointerButton, PointerEvent,
    PointerEventKind,
};

// --- Widget re-exports -----------------------------------------------------

pub use accdn_widgets::markup::{render_batch_toggle, render_html};
pub use accdn_widgets::{
    Accordion, AccordionConfig, AccordionEvent, AttachError, BatchAction, BatchControl,
    ConfigError, ContainerSource, DisplayMode, NoopTransition, Outcome, Panel, PanelId,
    PanelSource, Tab, TabId, Target, Transition, TransitionKind, Visibility,
};

// --- Web re-exports --------------------------------------------------------

#[cfg(feature = "web")]
pub use accdn_web::{BatchToggle, InstanceId, Page, PageError, PageEvent, RevealTransitions};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for accdn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid configuration.
    Config(ConfigError),
    /// A container could not be attached.
    Attach(AttachError),
    /// A page-level failure.
    #[cfg(feature = "web")]
    Page(PageError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
            Self::Attach(err) => write!(f, "{err}"),
            #[cfg(feature = "web")]
            Self::Page(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Attach(err) => Some(err),
            #[cfg(feature = "web")]
            Self::Page(err) => Some(err),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<AttachError> for Error {
    fn from(err: AttachError) -> Self {
        Self::Attach(err)
    }
}

#[cfg(feature = "web")]
impl From<PageError> for Error {
    fn from(err: PageError) -> Self {
        Self::Page(err)
    }
}

/// Standard result type for accdn APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Accordion, AccordionConfig, AccordionEvent, BatchAction, ContainerSource, DisplayMode,
        Error, Event, KeyCode, KeyEvent, Outcome, PanelId, PanelSource, PointerEvent, Result,
        TabId, Target, TransitionKind,
    };

    #[cfg(feature = "web")]
    pub use crate::{BatchToggle, Page, PageEvent};

    pub use crate::{core, widgets};

    #[cfg(feature = "web")]
    pub use crate::web;
}

pub use accdn_core as core;
#[cfg(feature = "web")]
pub use accdn_web as web;
pub use accdn_widgets as widgets;
