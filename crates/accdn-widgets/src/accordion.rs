//! Responsive accordion controller.
//!
//! An [`Accordion`] owns one container's panels, the tab generated for each
//! panel, the display mode, and the batch-control state. Every operation runs
//! to completion synchronously; visual changes are handed to a
//! [`Transition`] and never awaited.
//!
//! # Invariants
//!
//! 1. Panel ↔ tab is a 1:1 relation fixed at attach time ([`Accordion::tab_of`],
//!    [`Accordion::panel_of`]).
//! 2. In tabbed mode exactly one panel is open (when there is at least one
//!    panel), and its tab is the only active tab.
//! 3. In stacked mode with exclusive-open, user toggles leave at most one
//!    panel open.
//! 4. An active tab always belongs to an open panel.
//! 5. The display mode is `for_width(last viewport width, breakpoint)`.
//!
//! # Example
//!
//! ```
//! use accdn_widgets::accordion::Accordion;
//! use accdn_widgets::config::AccordionConfig;
//! use accdn_widgets::markup::{ContainerSource, PanelSource};
//! use accdn_widgets::mode::DisplayMode;
//!
//! let container = ContainerSource::new("faq")
//!     .panel(PanelSource::new("shipping", "Shipping", "<p>Two days.</p>"))
//!     .panel(PanelSource::new("returns", "Returns", "<p>Thirty days.</p>").open());
//!
//! let mut accordion = Accordion::attach(container, AccordionConfig::default(), 480).unwrap();
//! assert_eq!(accordion.mode(), DisplayMode::Stacked);
//!
//! let shipping = accordion.panel_by_dom_id("shipping").unwrap();
//! accordion.toggle_panel(shipping);
//! assert_eq!(accordion.open_panels().len(), 2);
//!
//! accordion.set_viewport_width(1024);
//! assert_eq!(accordion.open_panels(), vec![shipping]);
//! ```

use std::collections::HashSet;
use std::fmt;

use accdn_core::event::Event;
use bitflags::bitflags;

use crate::batch::{BatchAction, BatchControl};
use crate::config::AccordionConfig;
use crate::error::AttachError;
use crate::markup::ContainerSource;
use crate::mode::DisplayMode;
use crate::transition::{NoopTransition, Transition, TransitionKind, Visibility};

/// Position of a panel in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PanelId(usize);

impl PanelId {
    /// Handle for the panel at `index`.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Zero-based document position.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "panel#{}", self.0)
    }
}

/// Position of a generated tab in the tab strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TabId(usize);

impl TabId {
    /// Handle for the tab at `index`.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Zero-based strip position.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tab#{}", self.0)
    }
}

/// A titled, collapsible content block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    dom_id: String,
    label: String,
    content: String,
    open: bool,
}

impl Panel {
    /// Document identifier of the panel element.
    #[must_use]
    pub fn dom_id(&self) -> &str {
        &self.dom_id
    }

    /// Head text.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Content region markup.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Whether the panel is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }
}

/// The generated tab-strip label of a panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    label: String,
    active: bool,
}

impl Tab {
    /// Tab text, copied from the panel head.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the tab is highlighted.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// Bidirectional panel ↔ tab index.
#[derive(Debug, Clone)]
struct Bindings {
    tab_of_panel: Vec<TabId>,
    panel_of_tab: Vec<PanelId>,
}

impl Bindings {
    /// Tabs are generated one per panel, in panel order.
    fn generate(count: usize) -> Self {
        Self {
            tab_of_panel: (0..count).map(TabId).collect(),
            panel_of_tab: (0..count).map(PanelId).collect(),
        }
    }

    fn tab_of(&self, panel: PanelId) -> Option<TabId> {
        self.tab_of_panel.get(panel.0).copied()
    }

    fn panel_of(&self, tab: TabId) -> Option<PanelId> {
        self.panel_of_tab.get(tab.0).copied()
    }
}

/// Element an input event was delivered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// A panel head in the stacked layout.
    Head(PanelId),
    /// A tab in the tab strip.
    Tab(TabId),
    /// The viewport.
    Window,
    /// The external batch-toggle control bound to this accordion.
    BatchToggle,
}

bitflags! {
    /// Result of [`Accordion::handle_event`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Outcome: u8 {
        /// The event changed accordion state.
        const HANDLED = 0b01;
        /// The host must suppress the event's default action
        /// (page scroll on Space, form submit on Enter).
        const PREVENT_DEFAULT = 0b10;
    }
}

/// State change reported to the host.
///
/// Events are queued during an operation and drained with
/// [`Accordion::drain_events`]. Transient flips inside one operation are not
/// reported; only the net change is. A focus move is queued last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccordionEvent {
    /// A panel became open.
    PanelOpened(PanelId),
    /// A panel became closed.
    PanelClosed(PanelId),
    /// A tab became active.
    TabActivated(TabId),
    /// A tab stopped being active.
    TabDeactivated(TabId),
    /// The viewport crossed the breakpoint.
    ModeChanged {
        /// Previous mode.
        from: DisplayMode,
        /// New mode.
        to: DisplayMode,
    },
    /// Focus moved to a panel's content region.
    FocusMoved(PanelId),
    /// The batch control's next action or visibility changed.
    BatchUpdated {
        /// What the control does next.
        next_action: BatchAction,
        /// Whether the control is shown.
        visible: bool,
    },
}

#[derive(Debug)]
struct Snapshot {
    open: Vec<bool>,
    active: Vec<bool>,
    batch_next: BatchAction,
    batch_visible: bool,
}

/// One accordion instance bound to one container.
#[derive(Debug)]
pub struct Accordion<T = NoopTransition> {
    id: String,
    config: AccordionConfig,
    panels: Vec<Panel>,
    tabs: Vec<Tab>,
    bindings: Bindings,
    mode: DisplayMode,
    viewport_width: u32,
    initialized: bool,
    focus: Option<PanelId>,
    /// Focus move requested by the running operation, reported last.
    focus_request: Option<PanelId>,
    batch: BatchControl,
    transition: T,
    events: Vec<AccordionEvent>,
}

impl Accordion<NoopTransition> {
    /// Attach a headless controller (state only, no visual transitions).
    pub fn attach(
        container: ContainerSource,
        config: AccordionConfig,
        viewport_width: u32,
    ) -> Result<Self, AttachError> {
        Self::attach_with(container, config, viewport_width, NoopTransition)
    }
}

impl<T: Transition> Accordion<T> {
    /// Attach a controller to `container`.
    ///
    /// Generates one tab per panel in document order, opens the panels
    /// marked open (immediately, no animation), then derives the display
    /// mode from `viewport_width`. Events produced while attaching are
    /// discarded; the returned instance is ready for interaction.
    pub fn attach_with(
        container: ContainerSource,
        config: AccordionConfig,
        viewport_width: u32,
        transition: T,
    ) -> Result<Self, AttachError> {
        config.validate()?;
        if container.id.trim().is_empty() {
            return Err(AttachError::EmptyContainerId);
        }
        let mut seen = HashSet::new();
        for (index, panel) in container.panels.iter().enumerate() {
            if panel.id.trim().is_empty() {
                return Err(AttachError::EmptyPanelId { index });
            }
            if !seen.insert(panel.id.as_str()) {
                return Err(AttachError::DuplicatePanelId(panel.id.clone()));
            }
        }

        let initially_open: Vec<bool> = container.panels.iter().map(|p| p.open).collect();
        let panels: Vec<Panel> = container
            .panels
            .into_iter()
            .map(|source| Panel {
                dom_id: source.id,
                label: source.head,
                content: source.content,
                open: false,
            })
            .collect();
        let tabs = panels
            .iter()
            .map(|panel| Tab {
                label: panel.label.clone(),
                active: false,
            })
            .collect();
        let bindings = Bindings::generate(panels.len());
        let batch = BatchControl::new(&config);

        let mut accordion = Self {
            id: container.id,
            config,
            panels,
            tabs,
            bindings,
            mode: DisplayMode::Stacked,
            viewport_width,
            initialized: false,
            focus: None,
            focus_request: None,
            batch,
            transition,
            events: Vec::new(),
        };

        for (index, open) in initially_open.into_iter().enumerate() {
            if open {
                accordion.open_panel_inner(PanelId(index), TransitionKind::Immediate, false);
            }
        }
        let mode = DisplayMode::for_width(viewport_width, accordion.config.breakpoint_width);
        accordion.apply_mode(mode);
        accordion.refresh_batch();
        accordion.events.clear();
        accordion.initialized = true;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            container = %accordion.id,
            panels = accordion.panels.len(),
            mode = %accordion.mode,
            "accordion attached"
        );

        Ok(accordion)
    }

    // --- Accessors ----------------------------------------------------------

    /// Container identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &AccordionConfig {
        &self.config
    }

    /// Current display mode.
    #[must_use]
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Last viewport width seen.
    #[must_use]
    pub fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    /// Set once attaching completes.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Panels in document order.
    #[must_use]
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// Tabs in strip order.
    #[must_use]
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    /// Panel by handle.
    #[must_use]
    pub fn panel(&self, panel: PanelId) -> Option<&Panel> {
        self.panels.get(panel.0)
    }

    /// Tab by handle.
    #[must_use]
    pub fn tab(&self, tab: TabId) -> Option<&Tab> {
        self.tabs.get(tab.0)
    }

    /// The tab generated for `panel`.
    #[must_use]
    pub fn tab_of(&self, panel: PanelId) -> Option<TabId> {
        self.bindings.tab_of(panel)
    }

    /// The panel `tab` was generated for.
    #[must_use]
    pub fn panel_of(&self, tab: TabId) -> Option<PanelId> {
        self.bindings.panel_of(tab)
    }

    /// Look up a panel by its document identifier.
    #[must_use]
    pub fn panel_by_dom_id(&self, dom_id: &str) -> Option<PanelId> {
        self.panels
            .iter()
            .position(|panel| panel.dom_id == dom_id)
            .map(PanelId)
    }

    /// Open panels in document order.
    #[must_use]
    pub fn open_panels(&self) -> Vec<PanelId> {
        self.panels
            .iter()
            .enumerate()
            .filter(|(_, panel)| panel.open)
            .map(|(index, _)| PanelId(index))
            .collect()
    }

    /// Active tabs in strip order.
    #[must_use]
    pub fn active_tabs(&self) -> Vec<TabId> {
        self.tabs
            .iter()
            .enumerate()
            .filter(|(_, tab)| tab.active)
            .map(|(index, _)| TabId(index))
            .collect()
    }

    /// Whether `panel` is open. Unknown handles are closed.
    #[must_use]
    pub fn is_open(&self, panel: PanelId) -> bool {
        self.panel(panel).is_some_and(Panel::is_open)
    }

    /// Whether `tab` is active. Unknown handles are inactive.
    #[must_use]
    pub fn is_active(&self, tab: TabId) -> bool {
        self.tab(tab).is_some_and(Tab::is_active)
    }

    /// Batch-control state.
    #[must_use]
    pub fn batch(&self) -> &BatchControl {
        &self.batch
    }

    /// Panel whose content region holds focus after the last focus move.
    #[must_use]
    pub fn focused_content(&self) -> Option<PanelId> {
        self.focus
    }

    /// The transition capability.
    #[must_use]
    pub fn transition(&self) -> &T {
        &self.transition
    }

    /// Mutable access to the transition capability (to tick animations).
    pub fn transition_mut(&mut self) -> &mut T {
        &mut self.transition
    }

    /// Take all queued events.
    pub fn drain_events(&mut self) -> Vec<AccordionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Number of queued events.
    #[must_use]
    pub fn pending_event_count(&self) -> usize {
        self.events.len()
    }

    // --- Operations ---------------------------------------------------------

    /// Re-evaluate the display mode for a new viewport width.
    ///
    /// Entering tabbed mode opens the panel of the active tab (or the first
    /// panel when no tab is active) and closes every other one. Entering
    /// stacked mode leaves panels as they are. Returns `false` when the
    /// width stays on the same side of the breakpoint.
    pub fn set_viewport_width(&mut self, width: u32) -> bool {
        self.viewport_width = width;
        let mode = DisplayMode::for_width(width, self.config.breakpoint_width);
        if mode == self.mode {
            return false;
        }

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "accordion.set_viewport_width",
            container = %self.id,
            width,
            from = %self.mode,
            to = %mode
        )
        .entered();

        self.record(|accordion| accordion.apply_mode(mode));
        true
    }

    /// Open `panel`: mark it open, activate its tab, start the transition.
    ///
    /// With `grab_focus` in tabbed mode, focus moves to the content region.
    /// In stacked mode other panels are left alone; in tabbed mode the
    /// panel's tab is opened instead, which closes the others.
    pub fn open_panel(&mut self, panel: PanelId, kind: TransitionKind, grab_focus: bool) -> bool {
        let Some(tab) = self.tab_of(panel) else {
            return false;
        };

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "accordion.open_panel",
            container = %self.id,
            panel = panel.0,
            mode = %self.mode
        )
        .entered();

        self.record(|accordion| {
            if accordion.mode.is_tabbed() {
                accordion.open_tab_inner(tab, grab_focus, kind);
            } else {
                accordion.open_panel_inner(panel, kind, grab_focus);
            }
        });
        true
    }

    /// Close `panel`: mark it closed, deactivate its tab, start the transition.
    ///
    /// If other panels remain open, the tab of the first of them (document
    /// order) is highlighted. Returns `false` in tabbed mode, where one page
    /// is always shown.
    pub fn close_panel(&mut self, panel: PanelId, kind: TransitionKind) -> bool {
        if self.panel(panel).is_none() || self.mode.is_tabbed() {
            return false;
        }

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "accordion.close_panel",
            container = %self.id,
            panel = panel.0,
            mode = %self.mode
        )
        .entered();

        self.record(|accordion| accordion.close_panel_inner(panel, kind));
        true
    }

    /// Toggle `panel` from its head (click or Enter/Space).
    ///
    /// Opening closes every other panel first when exclusive-open is set.
    /// Animated, never grabs focus. Returns `false` in tabbed mode, where
    /// tabs drive the panels.
    pub fn toggle_panel(&mut self, panel: PanelId) -> bool {
        if self.panel(panel).is_none() || self.mode.is_tabbed() {
            return false;
        }

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "accordion.toggle_panel",
            container = %self.id,
            panel = panel.0,
            exclusive = self.config.exclusive_open
        )
        .entered();

        self.record(|accordion| {
            for tab in &mut accordion.tabs {
                tab.active = false;
            }
            if accordion.panels[panel.0].open {
                accordion.close_panel_inner(panel, TransitionKind::Animated);
            } else {
                if accordion.config.exclusive_open {
                    accordion.close_others(panel, TransitionKind::Animated);
                }
                accordion.open_panel_inner(panel, TransitionKind::Animated, false);
            }
        });
        true
    }

    /// Activate `tab` from the tab strip (click or Enter/Space).
    ///
    /// Always exclusive: every other panel closes and the bound panel opens,
    /// regardless of the exclusive-open setting.
    pub fn open_tab(&mut self, tab: TabId, grab_focus: bool) -> bool {
        if self.tab(tab).is_none() {
            return false;
        }

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "accordion.open_tab",
            container = %self.id,
            tab = tab.0,
            grab_focus
        )
        .entered();

        self.record(|accordion| {
            accordion.open_tab_inner(tab, grab_focus, TransitionKind::Animated);
        });
        true
    }

    /// Open or close every panel. Stacked mode only.
    ///
    /// Returns `false` in tabbed mode and for an empty container.
    pub fn toggle_all(&mut self, action: BatchAction) -> bool {
        if self.mode.is_tabbed() || self.panels.is_empty() {
            return false;
        }

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "accordion.toggle_all",
            container = %self.id,
            action = %action
        )
        .entered();

        self.record(|accordion| match action {
            BatchAction::Open => {
                for index in 0..accordion.panels.len() {
                    accordion.open_panel_inner(PanelId(index), TransitionKind::Animated, false);
                }
            }
            BatchAction::Close => {
                for index in 0..accordion.panels.len() {
                    if accordion.panels[index].open {
                        accordion.close_panel_inner(PanelId(index), TransitionKind::Animated);
                    }
                }
            }
        });
        true
    }

    /// Perform the batch control's advertised next action.
    pub fn activate_batch(&mut self) -> bool {
        self.toggle_all(self.batch.next_action())
    }

    /// Route an input event delivered to `target`.
    ///
    /// Enter/Space on a head or tab always requests `PREVENT_DEFAULT`, even
    /// when the activation changes nothing.
    pub fn handle_event(&mut self, target: Target, event: &Event) -> Outcome {
        let mut outcome = Outcome::empty();
        match (target, event) {
            (Target::Window, Event::Resize { width, .. }) => {
                if self.set_viewport_width(*width) {
                    outcome |= Outcome::HANDLED;
                }
            }
            (Target::Head(panel), event) if event.is_activation() => {
                if matches!(event, Event::Key(_)) {
                    outcome |= Outcome::PREVENT_DEFAULT;
                }
                if self.toggle_panel(panel) {
                    outcome |= Outcome::HANDLED;
                }
            }
            (Target::Tab(tab), event) if event.is_activation() => {
                if matches!(event, Event::Key(_)) {
                    outcome |= Outcome::PREVENT_DEFAULT;
                }
                if self.open_tab(tab, true) {
                    outcome |= Outcome::HANDLED;
                }
            }
            // Buttons synthesize a click for Enter/Space themselves.
            (Target::BatchToggle, Event::Pointer(pointer)) if pointer.is_activation() => {
                if self.activate_batch() {
                    outcome |= Outcome::HANDLED;
                }
            }
            _ => {}
        }
        outcome
    }

    // --- Internals ----------------------------------------------------------

    fn record<R>(&mut self, op: impl FnOnce(&mut Self) -> R) -> R {
        let before = self.snapshot();
        let result = op(self);
        self.emit_changes(&before);
        result
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            open: self.panels.iter().map(|panel| panel.open).collect(),
            active: self.tabs.iter().map(|tab| tab.active).collect(),
            batch_next: self.batch.next_action(),
            batch_visible: self.batch.is_visible(),
        }
    }

    fn emit_changes(&mut self, before: &Snapshot) {
        for (index, panel) in self.panels.iter().enumerate() {
            if before.open[index] != panel.open {
                self.events.push(if panel.open {
                    AccordionEvent::PanelOpened(PanelId(index))
                } else {
                    AccordionEvent::PanelClosed(PanelId(index))
                });
            }
        }
        for (index, tab) in self.tabs.iter().enumerate() {
            if before.active[index] != tab.active {
                self.events.push(if tab.active {
                    AccordionEvent::TabActivated(TabId(index))
                } else {
                    AccordionEvent::TabDeactivated(TabId(index))
                });
            }
        }
        if before.batch_next != self.batch.next_action()
            || before.batch_visible != self.batch.is_visible()
        {
            self.events.push(AccordionEvent::BatchUpdated {
                next_action: self.batch.next_action(),
                visible: self.batch.is_visible(),
            });
        }
        // The content region exists only once its panel opened.
        if let Some(panel) = self.focus_request.take() {
            self.events.push(AccordionEvent::FocusMoved(panel));
        }
    }

    fn apply_mode(&mut self, mode: DisplayMode) {
        let from = self.mode;
        self.mode = mode;
        if from != mode {
            #[cfg(feature = "tracing")]
            tracing::debug!(container = %self.id, %from, to = %mode, "display mode changed");
            self.events.push(AccordionEvent::ModeChanged { from, to: mode });
        }

        if mode.is_tabbed() {
            // Layout change, not a user action: no animation, no focus grab.
            let tab = self
                .tabs
                .iter()
                .position(|tab| tab.active)
                .or_else(|| (!self.tabs.is_empty()).then_some(0));
            if let Some(index) = tab {
                self.open_tab_inner(TabId(index), false, TransitionKind::Immediate);
            }
        }
        self.batch.set_visible(!mode.is_tabbed());
    }

    fn open_tab_inner(&mut self, tab: TabId, grab_focus: bool, kind: TransitionKind) {
        let Some(panel) = self.bindings.panel_of(tab) else {
            return;
        };
        for (index, other) in self.tabs.iter_mut().enumerate() {
            if index != tab.0 {
                other.active = false;
            }
        }
        self.close_others(panel, kind);
        self.open_panel_inner(panel, kind, grab_focus);
    }

    fn close_others(&mut self, keep: PanelId, kind: TransitionKind) {
        for index in 0..self.panels.len() {
            if index != keep.0 && self.panels[index].open {
                self.close_panel_inner(PanelId(index), kind);
            }
        }
    }

    fn open_panel_inner(&mut self, panel: PanelId, kind: TransitionKind, grab_focus: bool) {
        let Some(tab) = self.bindings.tab_of(panel) else {
            return;
        };
        self.panels[panel.0].open = true;
        self.tabs[tab.0].active = true;
        self.transition
            .start(panel, Visibility::Shown, kind, self.config.duration());

        if self.mode.is_tabbed() && grab_focus {
            self.focus = Some(panel);
            self.focus_request = Some(panel);
        }
        self.refresh_batch();
    }

    fn close_panel_inner(&mut self, panel: PanelId, kind: TransitionKind) {
        let Some(tab) = self.bindings.tab_of(panel) else {
            return;
        };
        self.panels[panel.0].open = false;
        self.tabs[tab.0].active = false;

        // Keep a tab highlighted while anything is still open.
        if let Some(first_open) = self.panels.iter().position(|p| p.open)
            && let Some(fallback) = self.bindings.tab_of(PanelId(first_open))
        {
            self.tabs[fallback.0].active = true;
        }

        self.transition
            .start(panel, Visibility::Hidden, kind, self.config.duration());
        if self.focus == Some(panel) {
            self.focus = None;
        }
        self.refresh_batch();
    }

    fn refresh_batch(&mut self) {
        let any_closed = self.panels.iter().any(|panel| !panel.open);
        self.batch.refresh(any_closed, &self.config);
    }
}
