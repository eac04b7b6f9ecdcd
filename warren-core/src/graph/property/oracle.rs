//! Brute-force oracles for graphs small enough to enumerate.
//!
//! Trusted reference answers for the property tests: the spanning-tree
//! oracle enumerates every edge subset of spanning size, the path oracle
//! enumerates every simple path. Both are exponential and only suitable for
//! the fixture sizes the strategies produce.

/// Returns the minimum total weight over all spanning trees, or `None` when
/// the graph is disconnected.
pub(super) fn minimum_spanning_weight(
    vertex_count: usize,
    links: &[(usize, usize, f64)],
) -> Option<f64> {
    if vertex_count <= 1 {
        return Some(0.0);
    }

    let mut best: Option<f64> = None;
    let mut chosen = Vec::with_capacity(vertex_count - 1);
    enumerate_subsets(links, vertex_count - 1, 0, &mut chosen, &mut |subset| {
        if spans(vertex_count, links, subset) {
            let total: f64 = subset.iter().map(|&index| links[index].2).sum();
            best = Some(best.map_or(total, |current| current.min(total)));
        }
    });
    best
}

/// Returns the minimum total weight over all simple paths from `start` to
/// `end`, or `None` when no path exists. `start == end` yields `0.0`.
pub(super) fn shortest_path_weight(
    vertex_count: usize,
    links: &[(usize, usize, f64)],
    start: usize,
    end: usize,
) -> Option<f64> {
    let mut visited = vec![false; vertex_count];
    visited[start] = true;
    let mut best = None;
    explore(links, &mut visited, start, end, 0.0, &mut best);
    best
}

fn enumerate_subsets(
    links: &[(usize, usize, f64)],
    size: usize,
    from: usize,
    chosen: &mut Vec<usize>,
    visit: &mut impl FnMut(&[usize]),
) {
    if chosen.len() == size {
        visit(chosen);
        return;
    }
    let missing = size - chosen.len();
    for index in from..links.len() {
        if links.len() - index < missing {
            break;
        }
        chosen.push(index);
        enumerate_subsets(links, size, index + 1, chosen, visit);
        chosen.pop();
    }
}

fn spans(vertex_count: usize, links: &[(usize, usize, f64)], subset: &[usize]) -> bool {
    fn find(parent: &mut [usize], node: usize) -> usize {
        let mut current = node;
        while parent[current] != current {
            parent[current] = parent[parent[current]];
            current = parent[current];
        }
        current
    }

    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut components = vertex_count;
    for &index in subset {
        let (first, second, _) = links[index];
        let first_root = find(&mut parent, first);
        let second_root = find(&mut parent, second);
        if first_root != second_root {
            parent[second_root] = first_root;
            components -= 1;
        }
    }
    components == 1
}

fn explore(
    links: &[(usize, usize, f64)],
    visited: &mut Vec<bool>,
    at: usize,
    end: usize,
    travelled: f64,
    best: &mut Option<f64>,
) {
    if at == end {
        *best = Some(best.map_or(travelled, |current| current.min(travelled)));
        return;
    }
    for &(first, second, weight) in links {
        let next = if first == at {
            second
        } else if second == at {
            first
        } else {
            continue;
        };
        if visited[next] {
            continue;
        }
        visited[next] = true;
        explore(links, visited, next, end, travelled + weight, best);
        visited[next] = false;
    }
}
