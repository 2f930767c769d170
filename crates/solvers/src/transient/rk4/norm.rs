//! Local truncation-error norm for the embedded pair.

/// Sums the per-entry relative difference between the two candidate results
/// over the local slice:
///
/// ```text
/// sum over i of |full[i] - half[i]| / (|half[i]| + |full[i]| + atol)
/// ```
///
/// The absolute tolerance in the denominator keeps entries near zero from
/// dominating the norm. The caller reduces this value across workers and
/// normalizes by the global problem size. Summation order is fixed, but the
/// result is only reproducible up to floating-point rounding.
pub(crate) fn local_error(half: &[f64], full: &[f64], atol: f64) -> f64 {
    half.iter()
        .zip(full)
        .map(|(h, f)| (f - h).abs() / (h.abs() + f.abs() + atol))
        .sum()
}
