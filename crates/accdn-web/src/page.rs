//! A page holding any number of accordions.
//!
//! The host owns the event loop. It:
//! - attaches containers via [`Page::attach`]
//! - forwards viewport resizes via [`Page::resize`] (coalesced, latest wins)
//! - forwards head/tab input via [`Page::dispatch`]
//! - hands each external batch button a [`BatchToggle`] from [`Page::batch_toggle`]
//! - advances time once per frame via [`Page::advance`]
//! - reads what changed via [`Page::drain_events`] and re-renders

use std::collections::HashMap;
use std::time::Duration;

use accdn_core::event::{Event, PointerEvent};
use accdn_core::event_coalescer::ResizeCoalescer;
use accdn_widgets::markup::{render_batch_toggle, render_html};
use accdn_widgets::{
    Accordion, AccordionConfig, AccordionEvent, ContainerSource, Outcome, PanelId, Target,
    Visibility,
};

use crate::reveal::{RevealCompleted, RevealTransitions};
use crate::{DeterministicClock, PageError};

/// Handle to one accordion attached to a [`Page`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InstanceId(usize);

impl InstanceId {
    /// Attach order on the page.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Something the host may need to react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// An accordion changed state.
    Accordion {
        /// Originating instance.
        instance: InstanceId,
        /// The change.
        event: AccordionEvent,
    },
    /// A panel's content finished moving.
    RevealCompleted {
        /// Originating instance.
        instance: InstanceId,
        /// Panel whose content settled.
        panel: PanelId,
        /// Visibility it settled at.
        visibility: Visibility,
        /// Page clock time the completion was observed.
        at: Duration,
    },
}

/// An external "open all / close all" control bound to one accordion.
///
/// Obtained from [`Page::batch_toggle`]; the binding is fixed for the
/// handle's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BatchToggle {
    instance: InstanceId,
}

impl BatchToggle {
    /// The accordion this control drives.
    #[must_use]
    pub const fn instance(self) -> InstanceId {
        self.instance
    }

    /// Deliver a click to the control.
    pub fn click(self, page: &mut Page) -> Outcome {
        page.dispatch(
            self.instance,
            Target::BatchToggle,
            &Event::Pointer(PointerEvent::click()),
        )
    }

    /// Current button text.
    #[must_use]
    pub fn label(self, page: &Page) -> Option<&str> {
        page.instance(self.instance)
            .map(|accordion| accordion.batch().label())
    }

    /// Render the button markup.
    #[must_use]
    pub fn render(self, page: &Page) -> Option<String> {
        page.instance(self.instance).map(render_batch_toggle)
    }
}

/// All accordions on a page plus the host-driven clock and viewport.
#[derive(Debug)]
pub struct Page {
    instances: Vec<Accordion<RevealTransitions>>,
    by_container: HashMap<String, InstanceId>,
    clock: DeterministicClock,
    viewport: (u32, u32),
    resizes: ResizeCoalescer,
    coalesced_resizes: u64,
    events: Vec<PageEvent>,
}

impl Page {
    /// An empty page with the given viewport size.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            instances: Vec::new(),
            by_container: HashMap::new(),
            clock: DeterministicClock::new(),
            viewport: (width, height),
            resizes: ResizeCoalescer::new(),
            coalesced_resizes: 0,
            events: Vec::new(),
        }
    }

    /// Attach an accordion to `container`.
    ///
    /// The instance starts in the mode of the current viewport (pending
    /// resizes are applied first). Attach-time transitions are settled and
    /// not reported.
    pub fn attach(
        &mut self,
        container: ContainerSource,
        config: AccordionConfig,
    ) -> Result<InstanceId, PageError> {
        if self.by_container.contains_key(&container.id) {
            return Err(PageError::DuplicateContainer(container.id));
        }
        self.flush_resize();

        let mut accordion = Accordion::attach_with(
            container,
            config,
            self.viewport.0,
            RevealTransitions::new(),
        )?;
        accordion.transition_mut().drain_completed();

        let id = InstanceId(self.instances.len());
        accdn_core::debug!(
            container = accordion.id(),
            instance = id.0,
            mode = %accordion.mode(),
            "accordion attached to page"
        );
        self.by_container.insert(accordion.id().to_owned(), id);
        self.instances.push(accordion);
        Ok(id)
    }

    /// Find the instance attached to `container_id`.
    pub fn lookup(&self, container_id: &str) -> Result<InstanceId, PageError> {
        self.by_container
            .get(container_id)
            .copied()
            .ok_or_else(|| PageError::UnknownContainer(container_id.to_owned()))
    }

    /// Bind an external batch control to the accordion of `container_id`.
    pub fn batch_toggle(&self, container_id: &str) -> Result<BatchToggle, PageError> {
        let instance = self.lookup(container_id)?;
        Ok(BatchToggle { instance })
    }

    /// An attached accordion.
    #[must_use]
    pub fn instance(&self, id: InstanceId) -> Option<&Accordion<RevealTransitions>> {
        self.instances.get(id.0)
    }

    /// Mutable access to an attached accordion.
    ///
    /// Events it queues are picked up by the next [`drain_events`](Self::drain_events).
    pub fn instance_mut(&mut self, id: InstanceId) -> Option<&mut Accordion<RevealTransitions>> {
        self.instances.get_mut(id.0)
    }

    /// Handles of every attached accordion, in attach order.
    pub fn instance_ids(&self) -> impl Iterator<Item = InstanceId> + '_ {
        (0..self.instances.len()).map(InstanceId)
    }

    /// Number of attached accordions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Whether nothing is attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Page clock time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    /// Last applied viewport size.
    #[must_use]
    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    /// Resize events dropped in favor of a later one, over the page lifetime.
    #[must_use]
    pub fn coalesced_resizes(&self) -> u64 {
        self.coalesced_resizes
    }

    /// Queue a viewport resize. Applied on the next flush, dispatch, or frame.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.resizes.push(Event::Resize { width, height });
    }

    /// Whether a resize is waiting to be applied.
    #[must_use]
    pub fn has_pending_resize(&self) -> bool {
        self.resizes.has_pending()
    }

    /// Apply the pending resize to every accordion.
    ///
    /// Returns `false` when nothing was pending.
    pub fn flush_resize(&mut self) -> bool {
        let coalesced = self.resizes.coalesced_count();
        let Some(event) = self.resizes.flush() else {
            return false;
        };
        if let Event::Resize { width, height } = event {
            self.viewport = (width, height);
        }
        self.coalesced_resizes += u64::from(coalesced);
        accdn_core::trace!(
            width = self.viewport.0,
            height = self.viewport.1,
            coalesced,
            "viewport resize applied"
        );

        for index in 0..self.instances.len() {
            self.instances[index].handle_event(Target::Window, &event);
            self.collect(InstanceId(index));
        }
        true
    }

    /// Deliver an input event to `target` within accordion `id`.
    ///
    /// Resize events are queued like [`resize`](Self::resize) regardless of
    /// the target. Anything else first applies a pending resize so the
    /// accordion acts in its current mode.
    pub fn dispatch(&mut self, id: InstanceId, target: Target, event: &Event) -> Outcome {
        let Some(event) = self.resizes.push(event.clone()) else {
            return Outcome::empty();
        };
        self.flush_resize();

        let Some(accordion) = self.instances.get_mut(id.0) else {
            return Outcome::empty();
        };
        let outcome = accordion.handle_event(target, &event);
        self.collect(id);
        outcome
    }

    /// Advance the page by one frame of `dt`.
    ///
    /// Applies a pending resize, moves the clock, and ticks every running
    /// reveal.
    pub fn advance(&mut self, dt: Duration) {
        self.flush_resize();
        self.clock.advance(dt);
        for index in 0..self.instances.len() {
            self.instances[index].transition_mut().tick(dt);
            self.collect(InstanceId(index));
        }
    }

    /// Take everything that happened since the last call, oldest first.
    pub fn drain_events(&mut self) -> Vec<PageEvent> {
        for index in 0..self.instances.len() {
            self.collect(InstanceId(index));
        }
        std::mem::take(&mut self.events)
    }

    /// Render accordion `id` with its tab strip.
    #[must_use]
    pub fn render(&self, id: InstanceId) -> Option<String> {
        self.instance(id).map(render_html)
    }

    fn collect(&mut self, instance: InstanceId) {
        let at = self.clock.now();
        let Some(accordion) = self.instances.get_mut(instance.0) else {
            return;
        };
        self.events.extend(
            accordion
                .drain_events()
                .into_iter()
                .map(|event| PageEvent::Accordion { instance, event }),
        );
        self.events.extend(
            accordion
                .transition_mut()
                .drain_completed()
                .into_iter()
                .map(|RevealCompleted { panel, visibility }| PageEvent::RevealCompleted {
                    instance,
                    panel,
                    visibility,
                    at,
                }),
        );
    }
}
