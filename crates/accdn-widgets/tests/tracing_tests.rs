#![forbid(unsafe_code)]

//! Tracing integration tests.
//!
//! Verifies that every public accordion operation opens a span carrying the
//! container id and the operation's subject.
//!
//! Spans enabled:
//!   cargo test -p accdn-widgets --features tracing --test tracing_tests
//!
//! Zero-overhead verification (no feature):
//!   cargo test -p accdn-widgets --test tracing_tests -- zero_overhead

use accdn_widgets::{
    Accordion, AccordionConfig, BatchAction, ContainerSource, PanelId, PanelSource, TabId,
    TransitionKind,
};

fn container() -> ContainerSource {
    ContainerSource::new("traced")
        .panel(PanelSource::new("a", "A", ""))
        .panel(PanelSource::new("b", "B", "").open())
        .panel(PanelSource::new("c", "C", ""))
}

// ============================================================================
// Test Infrastructure
// ============================================================================

#[cfg(feature = "tracing")]
mod capture {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::registry::LookupSpan;

    /// A captured span with its fields and parent.
    #[derive(Debug, Clone)]
    pub struct CapturedSpan {
        pub name: String,
        pub fields: HashMap<String, String>,
        pub parent_name: Option<String>,
    }

    /// A tracing Layer that records every span created.
    struct SpanCapture {
        spans: Arc<Mutex<Vec<CapturedSpan>>>,
    }

    /// Handle to read captured spans afterwards.
    pub struct CaptureHandle {
        spans: Arc<Mutex<Vec<CapturedSpan>>>,
    }

    impl CaptureHandle {
        pub fn spans(&self) -> Vec<CapturedSpan> {
            self.spans.lock().unwrap().clone()
        }

        pub fn named(&self, name: &str) -> Vec<CapturedSpan> {
            self.spans()
                .into_iter()
                .filter(|span| span.name == name)
                .collect()
        }
    }

    struct FieldVisitor(Vec<(String, String)>);

    impl tracing::field::Visit for FieldVisitor {
        fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
            self.0.push((field.name().to_string(), format!("{value:?}")));
        }

        fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
            self.0.push((field.name().to_string(), value.to_string()));
        }

        fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
            self.0.push((field.name().to_string(), value.to_string()));
        }
    }

    impl<S> tracing_subscriber::Layer<S> for SpanCapture
    where
        S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    {
        fn on_new_span(
            &self,
            attrs: &tracing::span::Attributes<'_>,
            _id: &tracing::span::Id,
            ctx: tracing_subscriber::layer::Context<'_, S>,
        ) {
            let mut visitor = FieldVisitor(Vec::new());
            attrs.record(&mut visitor);

            let parent_name = ctx
                .current_span()
                .id()
                .and_then(|id| ctx.span(id))
                .map(|span_ref| span_ref.name().to_string());

            self.spans.lock().unwrap().push(CapturedSpan {
                name: attrs.metadata().name().to_string(),
                fields: visitor.0.into_iter().collect(),
                parent_name,
            });
        }
    }

    /// Run `f` under a subscriber that captures spans.
    pub fn with_captured_spans<F: FnOnce()>(f: F) -> CaptureHandle {
        let spans = Arc::new(Mutex::new(Vec::new()));
        let layer = SpanCapture {
            spans: spans.clone(),
        };
        let subscriber = tracing_subscriber::registry().with(layer);
        tracing::subscriber::with_default(subscriber, f);
        CaptureHandle { spans }
    }
}

// ============================================================================
// Span Tests
// ============================================================================

#[test]
#[cfg(feature = "tracing")]
fn toggle_panel_span_carries_panel_and_exclusive() {
    let handle = capture::with_captured_spans(|| {
        let config = AccordionConfig::default().exclusive_open(true);
        let mut acc = Accordion::attach(container(), config, 480).unwrap();
        acc.toggle_panel(PanelId::new(2));
    });

    let spans = handle.named("accordion.toggle_panel");
    assert_eq!(spans.len(), 1);
    let span = &spans[0];
    assert_eq!(span.fields.get("container").map(String::as_str), Some("traced"));
    assert_eq!(span.fields.get("panel").map(String::as_str), Some("2"));
    assert_eq!(span.fields.get("exclusive").map(String::as_str), Some("true"));
}

#[test]
#[cfg(feature = "tracing")]
fn every_operation_opens_its_span() {
    let handle = capture::with_captured_spans(|| {
        let mut acc = Accordion::attach(container(), AccordionConfig::default(), 480).unwrap();
        acc.open_panel(PanelId::new(0), TransitionKind::Animated, false);
        acc.close_panel(PanelId::new(0), TransitionKind::Animated);
        acc.toggle_all(BatchAction::Open);
        acc.set_viewport_width(1200);
        acc.open_tab(TabId::new(1), true);
    });

    for name in [
        "accordion.open_panel",
        "accordion.close_panel",
        "accordion.toggle_all",
        "accordion.set_viewport_width",
        "accordion.open_tab",
    ] {
        assert_eq!(handle.named(name).len(), 1, "missing span {name}");
    }

    let resize = &handle.named("accordion.set_viewport_width")[0];
    assert_eq!(resize.fields.get("from").map(String::as_str), Some("stacked"));
    assert_eq!(resize.fields.get("to").map(String::as_str), Some("tabbed"));
}

#[test]
#[cfg(feature = "tracing")]
fn refused_operations_open_no_span() {
    let handle = capture::with_captured_spans(|| {
        let mut acc = Accordion::attach(container(), AccordionConfig::default(), 1200).unwrap();
        acc.toggle_panel(PanelId::new(0));
        acc.toggle_all(BatchAction::Close);
        acc.set_viewport_width(1300);
    });

    assert!(handle.named("accordion.toggle_panel").is_empty());
    assert!(handle.named("accordion.toggle_all").is_empty());
    assert!(handle.named("accordion.set_viewport_width").is_empty());
}

#[test]
#[cfg(feature = "tracing")]
fn operation_spans_are_top_level() {
    let handle = capture::with_captured_spans(|| {
        let mut acc = Accordion::attach(container(), AccordionConfig::default(), 480).unwrap();
        acc.toggle_panel(PanelId::new(0));
    });

    for span in handle.spans() {
        if span.name.starts_with("accordion.") {
            assert_eq!(span.parent_name, None, "{} nested", span.name);
        }
    }
}

// ============================================================================
// Zero Overhead
// ============================================================================

/// Without the feature the operations behave identically and no subscriber
/// is needed.
#[test]
fn zero_overhead_without_subscriber() {
    let mut acc = Accordion::attach(container(), AccordionConfig::default(), 480).unwrap();
    assert!(acc.toggle_panel(PanelId::new(0)));
    assert!(acc.set_viewport_width(1200));
    assert_eq!(acc.open_panels(), vec![PanelId::new(0)]);
}
