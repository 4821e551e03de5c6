use crate::consts::VIRIDIS_STOPS;

/// Map `t` in [0.0, 1.0] onto the viridis ramp. Out-of-range input is clamped.
pub fn viridis(t: f64) -> [u8; 3] {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let segments = (VIRIDIS_STOPS.len() - 1) as f64;
    let x = t * segments;
    let i = x.floor() as usize;

    if i >= VIRIDIS_STOPS.len() - 1 {
        return VIRIDIS_STOPS[VIRIDIS_STOPS.len() - 1];
    }

    let f = x - i as f64;
    let lo = VIRIDIS_STOPS[i];
    let hi = VIRIDIS_STOPS[i + 1];
    let lerp = |a: u8, b: u8| (a as f64 + f * (b as f64 - a as f64)).round() as u8;

    [lerp(lo[0], hi[0]), lerp(lo[1], hi[1]), lerp(lo[2], hi[2])]
}

/// Min and max over the finite values, or `None` if there are none.
pub fn finite_range<'a>(values: impl IntoIterator<Item = &'a f64>) -> Option<(f64, f64)> {
    values
        .into_iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Linear rescale of `v` from `[lo, hi]` to [0.0, 1.0]. A flat range maps to 0.0.
pub fn normalize(v: f64, (lo, hi): (f64, f64)) -> f64 {
    if hi > lo {
        ((v - lo) / (hi - lo)).clamp(0.0, 1.0)
    } else {
        0.0
    }
}
