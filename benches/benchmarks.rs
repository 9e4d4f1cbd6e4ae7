//! Performance benchmarks for tree

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use dirtree::test_utils::TestTree;
use dirtree::tree::read_and_filter_entries;
use dirtree::{ExclusionSet, TreeRenderer, WalkerConfig};

fn bench_listing(c: &mut Criterion) {
    let tree = TestTree::new();
    tree.populate(0, 0, 1000);
    let exclusions = ExclusionSet::from_config(&WalkerConfig::default());

    c.bench_function("list_1000_files", |b| {
        b.iter(|| read_and_filter_entries(black_box(tree.path()), &exclusions).unwrap())
    });
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let renderer = TreeRenderer::default();

    // (width, depth, files per directory)
    for (label, shape) in [
        ("wide", (20, 1, 20)),
        ("balanced", (4, 4, 5)),
        ("deep", (1, 60, 2)),
    ] {
        let tree = TestTree::new();
        tree.populate(shape.0, shape.1, shape.2);
        group.bench_function(label, |b| {
            b.iter(|| renderer.render_to_string(black_box(tree.path())).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_listing, bench_render);
criterion_main!(benches);
