use{
    rand::Rng,
    rand::distributions::{Distribution, Uniform},
};

#[inline]
pub fn canonical_pair(a: usize, b: usize) -> [usize; 2]
{
    if a < b { [a, b] } else { [b, a] }
}

/// Connections of one node on a ring of `n` nodes: ceil(degree/2) steps
/// clockwise, floor(degree/2) steps counter-clockwise, indices wrapped
/// modulo n in both directions. Pairs come out canonically ordered so
/// callers can deduplicate them as a set. Steps that land back on the
/// node itself (degree >= n) are dropped, the ring carries no self loops.
pub fn lattice_neighbors(node: usize, degree: usize, n: usize) -> Vec<[usize; 2]>
{
    let clockwise = (degree + 1) / 2;
    let counter_clockwise = degree / 2;
    let len = n as i64;

    let mut pairs = Vec::with_capacity(degree);
    for step in 1..=clockwise{
        let neighbor = (node as i64 + step as i64).rem_euclid(len) as usize;
        if neighbor != node{
            pairs.push(canonical_pair(node, neighbor));
        }
    }
    for step in 1..=counter_clockwise{
        let neighbor = (node as i64 - step as i64).rem_euclid(len) as usize;
        if neighbor != node{
            pairs.push(canonical_pair(node, neighbor));
        }
    }
    pairs
}

/// Watts-Strogatz style rewiring over a canonical, deduplicated pair list.
/// Each pair is hit independently with probability `prob`; the first entry
/// of the pair stays as anchor, the other endpoint is redrawn uniformly
/// from the remaining n - 1 nodes. The list is re-canonicalised and
/// deduplicated afterwards, so the edge count can shrink.
pub fn rewire_pairs<R>(pairs: &mut Vec<[usize; 2]>, prob: f64, n: usize, rng: &mut R)
where R: Rng
{
    if prob <= 0.0 || pairs.is_empty(){
        return;
    }

    let coin = Uniform::new_inclusive(0.0, 1.0);
    // sampling over n - 1 candidates, shifted past the anchor below
    let candidates = Uniform::new(0, n - 1);

    for pair in pairs.iter_mut(){
        if coin.sample(rng) < prob{
            let anchor = pair[0];
            let mut neighbor = candidates.sample(rng);
            if neighbor >= anchor{
                neighbor += 1;
            }
            *pair = canonical_pair(anchor, neighbor);
        }
    }

    pairs.sort_unstable();
    pairs.dedup();
}
