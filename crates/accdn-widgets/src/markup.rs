//! Markup consumed from and produced for the document.
//!
//! # Consumed
//!
//! A container holding an ordered list of panels, each with a head (label)
//! and a content region, modeled by [`ContainerSource`] / [`PanelSource`].
//! Hosts build these from the live document or from server data.
//!
//! # Produced
//!
//! [`render_html`] emits the container as the controller sees it:
//!
//! ```text
//! div#<id>.accdn[.is-tabs][.accdn-initialized]
//! ├── div.accdn__tabs                        (always the first child)
//! │   └── div.accdn__tab[.is-active][tabindex=0] > span.text     (per panel)
//! └── div#<panel>.accdn__item[.is-open]                           (per panel)
//!     ├── div.accdn__head[tabindex=0] > span.text > span.accdn__head__marker
//!     └── div.accdn__content[tabindex=-1][hidden when closed]
//! ```
//!
//! Head and tab text is escaped. Content is document markup and is emitted
//! verbatim.

use std::fmt::Write as _;

use crate::accordion::Accordion;
use crate::transition::Transition;

/// One panel definition read from the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelSource {
    /// Document identifier of the panel element.
    pub id: String,
    /// Head text.
    pub head: String,
    /// Content region markup.
    pub content: String,
    /// Flagged open by default (`is-open` in the source markup).
    pub open: bool,
}

impl PanelSource {
    /// A closed panel.
    #[must_use]
    pub fn new(id: impl Into<String>, head: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            head: head.into(),
            content: content.into(),
            open: false,
        }
    }

    /// Mark open by default (builder).
    #[must_use]
    pub fn open(mut self) -> Self {
        self.open = true;
        self
    }
}

/// A container and its panels in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerSource {
    /// Document identifier; batch controls reference the container by it.
    pub id: String,
    /// Panels in document order.
    pub panels: Vec<PanelSource>,
}

impl ContainerSource {
    /// An empty container.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            panels: Vec::new(),
        }
    }

    /// Append a panel (builder).
    #[must_use]
    pub fn panel(mut self, panel: PanelSource) -> Self {
        self.panels.push(panel);
        self
    }
}

/// CSS class names shared with the stylesheet.
pub mod class {
    /// Container.
    pub const CONTAINER: &str = "accdn";
    /// Container flag: tabbed mode.
    pub const TABBED: &str = "is-tabs";
    /// Container flag: attach completed.
    pub const INITIALIZED: &str = "accdn-initialized";
    /// Generated tab strip.
    pub const TAB_STRIP: &str = "accdn__tabs";
    /// Generated tab.
    pub const TAB: &str = "accdn__tab";
    /// Tab flag: highlighted.
    pub const ACTIVE: &str = "is-active";
    /// Panel.
    pub const ITEM: &str = "accdn__item";
    /// Panel flag: open.
    pub const OPEN: &str = "is-open";
    /// Panel head.
    pub const HEAD: &str = "accdn__head";
    /// Open/closed marker inside the head.
    pub const HEAD_MARKER: &str = "accdn__head__marker";
    /// Panel content region.
    pub const CONTENT: &str = "accdn__content";
}

/// Attribute a batch control uses to name its container.
pub const BATCH_TOGGLE_ATTR: &str = "data-accdn-batch-toggle";

/// Attribute carrying the batch control's next action.
pub const NEXT_ACTION_ATTR: &str = "data-next-action";

/// Escape text for element content and double-quoted attributes.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the container with its generated tab strip.
#[must_use]
pub fn render_html<T: Transition>(accordion: &Accordion<T>) -> String {
    let mut classes = vec![class::CONTAINER];
    if accordion.mode().is_tabbed() {
        classes.push(class::TABBED);
    }
    if accordion.is_initialized() {
        classes.push(class::INITIALIZED);
    }

    let mut html = String::new();
    // Writing into a String cannot fail.
    let _ = write!(
        html,
        r#"<div id="{}" class="{}">"#,
        escape(accordion.id()),
        classes.join(" ")
    );

    html.push_str(r#"<div class=""#);
    html.push_str(class::TAB_STRIP);
    html.push_str(r#"">"#);
    for tab in accordion.tabs() {
        let active = if tab.is_active() {
            format!(" {}", class::ACTIVE)
        } else {
            String::new()
        };
        let _ = write!(
            html,
            r#"<div class="{}{active}" tabindex="0"><span class="text">{}</span></div>"#,
            class::TAB,
            escape(tab.label())
        );
    }
    html.push_str("</div>");

    for panel in accordion.panels() {
        let (open, hidden) = if panel.is_open() {
            (format!(" {}", class::OPEN), "")
        } else {
            (String::new(), " hidden")
        };
        let _ = write!(
            html,
            concat!(
                r#"<div id="{id}" class="{item}{open}">"#,
                r#"<div class="{head}" tabindex="0"><span class="text"><span class="{marker}"></span>{label}</span></div>"#,
                r#"<div class="{content_class}" tabindex="-1"{hidden}>{content}</div>"#,
                "</div>"
            ),
            id = escape(panel.dom_id()),
            item = class::ITEM,
            open = open,
            head = class::HEAD,
            marker = class::HEAD_MARKER,
            label = escape(panel.label()),
            content_class = class::CONTENT,
            hidden = hidden,
            content = panel.content(),
        );
    }

    html.push_str("</div>");
    html
}

/// Render the external batch-toggle control for `accordion`.
#[must_use]
pub fn render_batch_toggle<T: Transition>(accordion: &Accordion<T>) -> String {
    let batch = accordion.batch();
    let hidden = if batch.is_visible() { "" } else { " hidden" };
    format!(
        r#"<button type="button" {BATCH_TOGGLE_ATTR}="{}" {NEXT_ACTION_ATTR}="{}"{hidden}>{}</button>"#,
        escape(accordion.id()),
        batch.next_action(),
        escape(batch.label())
    )
}
