//! Element-wise selection over parallel lanes.
//!
//! Batched code never branches per ray; it computes both sides and picks
//! lanes with a boolean mask instead.

/// Picks `a[i]` where `mask[i]` holds, `b[i]` otherwise.
pub fn select(mask: &[bool], a: &[f64], b: &[f64]) -> Vec<f64> {
    assert_lanes(mask.len(), a.len());
    assert_lanes(mask.len(), b.len());

    mask.iter().zip(a).zip(b).map(|((&m, &a), &b)| if m { a } else { b }).collect()
}

/// Lane-wise minimum. Infinity (no hit) loses against any finite distance.
pub fn minimum(a: &[f64], b: &[f64]) -> Vec<f64> {
    assert_lanes(a.len(), b.len());

    a.iter().zip(b).map(|(&a, &b)| a.min(b)).collect()
}

/// Lane-wise `a[i] == b[i]`, one bool per lane.
pub fn lanes_equal(a: &[f64], b: &[f64]) -> Vec<bool> {
    assert_lanes(a.len(), b.len());

    a.iter().zip(b).map(|(a, b)| a == b).collect()
}

pub fn any(mask: &[bool]) -> bool {
    mask.iter().any(|&m| m)
}

pub fn count(mask: &[bool]) -> usize {
    mask.iter().filter(|&&m| m).count()
}

pub(crate) fn assert_lanes(expected: usize, found: usize) {
    assert_eq!(expected, found, "batch lane count mismatch: {} vs {}", expected, found);
}
