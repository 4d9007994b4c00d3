//! Reconciliation benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use arbor_core::host::{Document, Host};
use arbor_core::vnode::{h, text, VNode};
use arbor_core::{reconcile, render_new, Context};

fn list(len: usize, offset: usize) -> VNode {
    h(
        "ul",
        None,
        (0..len).map(|i| h("li", None, [text(format!("item {}", i + offset))])),
    )
}

fn bench_reconcile(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconcile");

    for len in [10, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("rewrite_text", len), &len, |b, &len| {
            let mut doc = Document::with_capacity(len * 2 + 2);
            let root = doc.create_element("body");
            let mut cx = Context::new(doc, root);
            let ul = render_new(&mut cx, &list(len, 0)).unwrap();
            let next = list(len, 1);

            b.iter(|| reconcile(&mut cx, Some(ul), black_box(&next), None).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("append_one", len), &len, |b, &len| {
            b.iter_batched(
                || {
                    let mut doc = Document::new();
                    let root = doc.create_element("body");
                    let mut cx = Context::new(doc, root);
                    let ul = render_new(&mut cx, &list(len, 0)).unwrap();
                    (cx, ul, list(len + 1, 0))
                },
                |(mut cx, ul, next)| reconcile(&mut cx, Some(ul), &next, None).unwrap(),
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_reconcile);
criterion_main!(benches);
