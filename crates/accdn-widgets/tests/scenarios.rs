#![forbid(unsafe_code)]

//! End-to-end behavior of the accordion controller.
//!
//! Each test drives a fresh instance through public operations only and
//! checks the observable panel, tab, mode, and batch-control state.
//!
//! ```sh
//! cargo test -p accdn-widgets --test scenarios
//! ```

use accdn_core::event::{Event, KeyCode, KeyEvent, PointerEvent};
use accdn_widgets::{
    Accordion, AccordionConfig, AccordionEvent, BatchAction, ContainerSource, DisplayMode,
    Outcome, PanelId, PanelSource, TabId, Target, TransitionKind, TransitionLog, Visibility,
};

const BREAKPOINT: u32 = 740;
const NARROW: u32 = 600;
const WIDE: u32 = 1280;

/// Panels [A(closed), B(open), C(closed)].
fn container() -> ContainerSource {
    ContainerSource::new("accordion-1")
        .panel(PanelSource::new("a", "Alpha", "<p>a</p>"))
        .panel(PanelSource::new("b", "Beta", "<p>b</p>").open())
        .panel(PanelSource::new("c", "Gamma", "<p>c</p>"))
}

fn config(exclusive: bool) -> AccordionConfig {
    AccordionConfig::default()
        .breakpoint_width(BREAKPOINT)
        .exclusive_open(exclusive)
        .batch_labels("Expand everything", "Collapse everything")
}

fn attach(exclusive: bool, width: u32) -> Accordion<TransitionLog> {
    Accordion::attach_with(container(), config(exclusive), width, TransitionLog::new())
        .expect("valid container")
}

fn panel(accordion: &Accordion<TransitionLog>, dom_id: &str) -> PanelId {
    accordion.panel_by_dom_id(dom_id).expect("known panel")
}

// ============================================================================
// Display mode
// ============================================================================

#[test]
fn breakpoint_boundary_selects_tabbed() {
    let mut acc = attach(false, NARROW);
    assert_eq!(acc.mode(), DisplayMode::Stacked);
    acc.set_viewport_width(BREAKPOINT - 1);
    assert_eq!(acc.mode(), DisplayMode::Stacked);
    acc.set_viewport_width(BREAKPOINT);
    assert_eq!(acc.mode(), DisplayMode::Tabbed);
}

#[test]
fn second_resize_on_same_side_changes_nothing() {
    let mut acc = attach(false, NARROW);
    assert!(acc.set_viewport_width(WIDE));
    let open = acc.open_panels();
    let active = acc.active_tabs();
    acc.drain_events();
    let calls = acc.transition().calls().len();

    assert!(!acc.set_viewport_width(WIDE + 100));
    assert_eq!(acc.open_panels(), open);
    assert_eq!(acc.active_tabs(), active);
    assert_eq!(acc.transition().calls().len(), calls);
    assert!(acc.drain_events().is_empty());
}

#[test]
fn stacked_to_tabbed_opens_first_panel_when_nothing_preferred() {
    // A and C open by default: both tabs get highlighted, the first wins.
    let source = ContainerSource::new("acc")
        .panel(PanelSource::new("a", "A", "").open())
        .panel(PanelSource::new("b", "B", ""))
        .panel(PanelSource::new("c", "C", "").open());
    let mut acc = Accordion::attach(source, config(false), NARROW).unwrap();
    assert_eq!(acc.open_panels(), vec![PanelId::new(0), PanelId::new(2)]);

    acc.set_viewport_width(WIDE);
    assert_eq!(acc.open_panels(), vec![PanelId::new(0)]);
    assert_eq!(acc.active_tabs(), vec![TabId::new(0)]);
}

#[test]
fn tabbed_attach_with_nothing_open_opens_first() {
    let source = ContainerSource::new("acc")
        .panel(PanelSource::new("a", "A", ""))
        .panel(PanelSource::new("b", "B", ""));
    let acc = Accordion::attach(source, config(false), WIDE).unwrap();
    assert_eq!(acc.open_panels(), vec![PanelId::new(0)]);
    assert_eq!(acc.active_tabs(), vec![TabId::new(0)]);
}

#[test]
fn mode_entry_is_immediate() {
    let mut acc = attach(false, NARROW);
    acc.transition_mut().drain();
    acc.set_viewport_width(WIDE);
    let calls = acc.transition().calls();
    assert!(!calls.is_empty());
    assert!(calls.iter().all(|c| c.kind == TransitionKind::Immediate));
}

// ============================================================================
// Panel toggles
// ============================================================================

#[test]
fn non_exclusive_toggles() {
    let mut acc = attach(false, NARROW);
    let (a, b) = (panel(&acc, "a"), panel(&acc, "b"));
    acc.toggle_panel(a);
    assert_eq!(acc.open_panels(), vec![a, b]);
    acc.toggle_panel(b);
    assert_eq!(acc.open_panels(), vec![a]);
}

#[test]
fn exclusive_toggle_force_closes_others() {
    let mut acc = attach(true, NARROW);
    let (a, b) = (panel(&acc, "a"), panel(&acc, "b"));
    acc.transition_mut().drain();

    acc.toggle_panel(a);
    assert_eq!(acc.open_panels(), vec![a]);
    assert_eq!(acc.transition().last_visibility(b), Some(Visibility::Hidden));
    assert_eq!(acc.transition().last_visibility(a), Some(Visibility::Shown));
}

#[test]
fn exclusive_stacked_never_exceeds_one_open_through_toggles() {
    let mut acc = attach(true, NARROW);
    for dom_id in ["a", "c", "c", "b", "a", "a", "b"] {
        let target = panel(&acc, dom_id);
        acc.toggle_panel(target);
        assert!(acc.open_panels().len() <= 1);
    }
}

#[test]
fn open_close_round_trip_restores_flags() {
    let mut acc = attach(false, NARROW);
    let c = panel(&acc, "c");
    let tab = acc.tab_of(c).unwrap();
    let was_open = acc.is_open(c);

    acc.open_panel(c, TransitionKind::Animated, false);
    acc.close_panel(c, TransitionKind::Animated);
    assert_eq!(acc.is_open(c), was_open);
    assert!(!acc.is_active(tab));
}

// ============================================================================
// Tabs
// ============================================================================

#[test]
fn tabs_ignore_exclusive_setting() {
    let mut acc = attach(false, WIDE);
    for index in [2, 0, 1, 1] {
        acc.open_tab(TabId::new(index), true);
        assert_eq!(acc.open_panels(), vec![PanelId::new(index)]);
        assert_eq!(acc.active_tabs(), vec![TabId::new(index)]);
        assert_eq!(acc.focused_content(), Some(PanelId::new(index)));
    }
}

#[test]
fn tabbed_keeps_exactly_one_open_through_mixed_input() {
    let mut acc = attach(false, WIDE);
    let enter = Event::Key(KeyEvent::new(KeyCode::Enter));
    let click = Event::Pointer(PointerEvent::click());

    acc.handle_event(Target::Tab(TabId::new(2)), &click);
    acc.handle_event(Target::Head(PanelId::new(0)), &enter);
    acc.handle_event(Target::BatchToggle, &click);
    acc.toggle_all(BatchAction::Open);
    acc.close_panel(PanelId::new(2), TransitionKind::Animated);
    acc.handle_event(Target::Tab(TabId::new(1)), &enter);

    assert_eq!(acc.open_panels(), vec![PanelId::new(1)]);
    assert_eq!(acc.active_tabs(), vec![TabId::new(1)]);
}

// ============================================================================
// Batch control
// ============================================================================

#[test]
fn batch_labels_track_configured_strings() {
    let mut acc = attach(false, NARROW);
    assert_eq!(acc.batch().label(), "Expand everything");
    assert_eq!(acc.batch().next_action(), BatchAction::Open);

    assert!(acc.toggle_all(BatchAction::Open));
    assert_eq!(acc.batch().label(), "Collapse everything");
    assert_eq!(acc.batch().next_action(), BatchAction::Close);

    assert!(acc.toggle_all(BatchAction::Close));
    assert_eq!(acc.batch().label(), "Expand everything");
    assert_eq!(acc.batch().next_action(), BatchAction::Open);
}

#[test]
fn batch_label_follows_individual_toggles() {
    let mut acc = attach(false, NARROW);
    for dom_id in ["a", "c"] {
        let target = panel(&acc, dom_id);
        acc.toggle_panel(target);
    }
    assert_eq!(acc.batch().next_action(), BatchAction::Close);
    assert_eq!(acc.batch().label(), "Collapse everything");
}

#[test]
fn batch_refused_in_tabbed_mode() {
    let mut acc = attach(false, WIDE);
    let before = acc.open_panels();
    assert!(!acc.toggle_all(BatchAction::Close));
    assert!(!acc.activate_batch());
    assert_eq!(acc.open_panels(), before);
    assert!(!acc.batch().is_visible());
}

#[test]
fn batch_click_reports_events() {
    let mut acc = attach(false, NARROW);
    let out = acc.handle_event(Target::BatchToggle, &Event::Pointer(PointerEvent::click()));
    assert_eq!(out, Outcome::HANDLED);
    let events = acc.drain_events();
    assert!(events.contains(&AccordionEvent::PanelOpened(PanelId::new(0))));
    assert!(events.contains(&AccordionEvent::PanelOpened(PanelId::new(2))));
    assert!(events.contains(&AccordionEvent::BatchUpdated {
        next_action: BatchAction::Close,
        visible: true
    }));
}

// ============================================================================
// Keyboard
// ============================================================================

#[test]
fn space_on_head_toggles_and_suppresses_scroll() {
    let mut acc = attach(false, NARROW);
    let space = Event::Key(KeyEvent::new(KeyCode::Char(' ')));
    let out = acc.handle_event(Target::Head(PanelId::new(1)), &space);
    assert!(out.contains(Outcome::PREVENT_DEFAULT));
    assert!(!acc.is_open(PanelId::new(1)));
}
