#![forbid(unsafe_code)]

//! Responsive accordion/tabs widget: a collapsible list of panels that turns
//! into a tab strip above a breakpoint width.

pub mod accordion;
pub mod batch;
pub mod config;
pub mod error;
pub mod markup;
pub mod mode;
pub mod transition;

pub use accordion::{Accordion, AccordionEvent, Outcome, Panel, PanelId, Tab, TabId, Target};
pub use batch::{BatchAction, BatchControl};
pub use config::AccordionConfig;
pub use error::{AttachError, ConfigError};
pub use markup::{ContainerSource, PanelSource};
pub use mode::DisplayMode;
pub use transition::{NoopTransition, Transition, TransitionKind, TransitionLog, Visibility};
