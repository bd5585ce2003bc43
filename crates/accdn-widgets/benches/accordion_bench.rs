//! Benchmarks for accordion operations and markup rendering.
//!
//! Run with: cargo bench -p accdn-widgets

use accdn_widgets::markup::render_html;
use accdn_widgets::{Accordion, AccordionConfig, BatchAction, ContainerSource, PanelId, PanelSource, TabId};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const NARROW: u32 = 480;
const WIDE: u32 = 1280;

fn container(count: usize) -> ContainerSource {
    (0..count).fold(ContainerSource::new("bench"), |container, index| {
        container.panel(PanelSource::new(
            format!("p{index}"),
            format!("Panel {index}"),
            "<p>Lorem ipsum dolor sit amet.</p>",
        ))
    })
}

// ============================================================================
// Operations
// ============================================================================

fn bench_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("accordion/ops");

    for count in [4, 32, 256] {
        let config = AccordionConfig::default().exclusive_open(true);
        let mut stacked = Accordion::attach(container(count), config.clone(), NARROW).unwrap();
        group.bench_with_input(BenchmarkId::new("toggle_exclusive", count), &count, |b, &n| {
            let mut i = 0;
            b.iter(|| {
                stacked.toggle_panel(PanelId::new(i % n));
                i += 1;
                black_box(stacked.drain_events());
            })
        });

        let mut tabbed = Accordion::attach(container(count), config.clone(), WIDE).unwrap();
        group.bench_with_input(BenchmarkId::new("open_tab", count), &count, |b, &n| {
            let mut i = 0;
            b.iter(|| {
                tabbed.open_tab(TabId::new(i % n), true);
                i += 1;
                black_box(tabbed.drain_events());
            })
        });

        let mut batch = Accordion::attach(container(count), config.clone(), NARROW).unwrap();
        group.bench_with_input(BenchmarkId::new("toggle_all", count), &(), |b, _| {
            b.iter(|| {
                batch.toggle_all(BatchAction::Open);
                batch.toggle_all(BatchAction::Close);
                black_box(batch.drain_events());
            })
        });

        let mut resized = Accordion::attach(container(count), config.clone(), NARROW).unwrap();
        group.bench_with_input(BenchmarkId::new("mode_flip", count), &(), |b, _| {
            b.iter(|| {
                resized.set_viewport_width(WIDE);
                resized.set_viewport_width(NARROW);
                black_box(resized.drain_events());
            })
        });
    }

    group.finish();
}

// ============================================================================
// Rendering
// ============================================================================

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("accordion/render");

    for count in [4, 32, 256] {
        let accordion = Accordion::attach(container(count), AccordionConfig::default(), WIDE).unwrap();
        group.bench_with_input(BenchmarkId::new("html", count), &(), |b, _| {
            b.iter(|| black_box(render_html(&accordion)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_operations, bench_render);
criterion_main!(benches);
