//! Fixture generation for the graph and disjoint-set property tests.
//!
//! Fixtures are generated from a proptest-supplied seed through `SmallRng`,
//! so every failure shrinks to a reproducible seed.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Upper bound on fixture vertices; keeps the brute-force oracles tractable.
const MAX_VERTICES: usize = 6;

/// A connected undirected graph over vertices `0..vertex_count`.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    pub(super) vertex_count: usize,
    pub(super) links: Vec<(usize, usize, f64)>,
}

/// A universe of elements and a sequence of union attempts over it.
#[derive(Clone, Debug)]
pub(super) struct UnionFixture {
    pub(super) element_count: usize,
    pub(super) unions: Vec<(usize, usize)>,
}

pub(super) fn connected_fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    any::<u64>().prop_map(|seed| generate_connected(&mut SmallRng::seed_from_u64(seed)))
}

pub(super) fn union_fixture_strategy() -> impl Strategy<Value = UnionFixture> {
    any::<u64>().prop_map(|seed| generate_unions(&mut SmallRng::seed_from_u64(seed)))
}

fn generate_connected(rng: &mut SmallRng) -> GraphFixture {
    let vertex_count = rng.gen_range(2..=MAX_VERTICES);
    let mut links = Vec::new();

    // A random spanning structure first, so the fixture is connected by
    // construction; extra edges then add cycles and parallel routes.
    for vertex in 1..vertex_count {
        let anchor = rng.gen_range(0..vertex);
        links.push((anchor, vertex, random_weight(rng)));
    }
    for first in 0..vertex_count {
        for second in (first + 1)..vertex_count {
            if rng.gen_bool(0.4) {
                links.push((first, second, random_weight(rng)));
            }
        }
    }

    GraphFixture {
        vertex_count,
        links,
    }
}

fn generate_unions(rng: &mut SmallRng) -> UnionFixture {
    let element_count = rng.gen_range(1..=12);
    let attempts = rng.gen_range(0..=2 * element_count);
    let unions = (0..attempts)
        .map(|_| {
            (
                rng.gen_range(0..element_count),
                rng.gen_range(0..element_count),
            )
        })
        .collect();

    UnionFixture {
        element_count,
        unions,
    }
}

/// Weights drawn from a small integer grid: ties are frequent (stressing the
/// deterministic tie-break) and totals compare exactly.
fn random_weight(rng: &mut SmallRng) -> f64 {
    f64::from(rng.gen_range(0..8_u32))
}
