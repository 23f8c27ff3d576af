// Copyright 2025 the Organogram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use organogram_layout::{CompactorConfig, RowCompactor};
use organogram_tree::{DescendantIndex, Node, NodeId, RolePolicy, filter_with_policy, preorder_ids};
use organogram_view::{OrgChart, find_path};

const ROLES: [&str; 6] = [
    "Coordenador",
    "Supervisor",
    "Técnico",
    "Técnico",
    "Analista",
    "Administrativo",
];

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }
}

/// A random hierarchy of `count` people under `roots` roots. Each new person
/// reports to a random earlier one, so ids are in insertion order.
fn gen_forest(roots: usize, count: usize, seed: u64) -> Vec<Node> {
    let mut rng = Rng::new(seed);
    let mut parent = vec![usize::MAX; count];
    for (i, p) in parent.iter_mut().enumerate().skip(roots) {
        *p = rng.below(i);
    }
    let mut kids: Vec<Vec<usize>> = vec![Vec::new(); count];
    for (i, &p) in parent.iter().enumerate().skip(roots) {
        kids[p].push(i);
    }
    let roles: Vec<&str> = (0..count).map(|_| ROLES[rng.below(ROLES.len())]).collect();
    fn build(i: usize, kids: &[Vec<usize>], roles: &[&str]) -> Node {
        Node::new(i as i64 + 1, format!("p{i}"))
            .with_role(roles[i])
            .with_children(kids[i].iter().map(|&k| build(k, kids, roles)).collect())
    }
    (0..roots.min(count)).map(|r| build(r, &kids, &roles)).collect()
}

fn bench_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree");
    let policy = RolePolicy::default();
    for &n in &[1_000usize, 10_000] {
        let raw = gen_forest(4, n, 0xCAFE_F00D_DEAD_BEEF);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("filter_n{n}"), |b| {
            b.iter(|| black_box(filter_with_policy(&raw, &policy)));
        });
        let filtered = filter_with_policy(&raw, &policy);
        group.bench_function(format!("count_n{n}"), |b| {
            b.iter(|| black_box(DescendantIndex::build(&filtered)));
        });
        let last = preorder_ids(&filtered).last().copied().unwrap_or(NodeId(1));
        group.bench_function(format!("find_path_n{n}"), |b| {
            b.iter(|| black_box(find_path(&filtered, last)));
        });
    }
    group.finish();
}

fn bench_chart(c: &mut Criterion) {
    let mut group = c.benchmark_group("chart");
    let raw = gen_forest(4, 10_000, 0xBADC_F00D_1234_5678);
    group.bench_function("refresh_n10000", |b| {
        b.iter_batched(
            || OrgChart::new(Vec::new()),
            |mut chart| {
                chart.refresh(raw.clone());
                black_box(chart.counts().len());
            },
            BatchSize::LargeInput,
        );
    });

    let mut chart = OrgChart::new(raw);
    chart.collapse_all();
    let ids = preorder_ids(chart.forest());
    group.bench_function("expand_collapse_n10000", |b| {
        let mut i = 0;
        b.iter(|| {
            let id = ids[i % ids.len()];
            i += 7919;
            chart.expand(id);
            chart.collapse(id);
        });
    });
    group.bench_function("view_collapsed_n10000", |b| {
        b.iter(|| black_box(chart.view().len()));
    });
    group.finish();
}

fn bench_compactor(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    let mut rng = Rng::new(0xFACE_FEED_CAFE_BABE);
    let widths: Vec<f64> = (0..1024).map(|_| 780.0 + rng.below(40) as f64).collect();
    group.throughput(Throughput::Elements(widths.len() as u64));
    group.bench_function("observe_jitter", |b| {
        b.iter(|| {
            let mut row = RowCompactor::new(CompactorConfig::default());
            for &w in &widths {
                row.observe(w, 800.0, 4);
            }
            black_box(row.is_compact())
        });
    });
    group.finish();
}

criterion_group!(benches, bench_tree, bench_chart, bench_compactor);
criterion_main!(benches);
