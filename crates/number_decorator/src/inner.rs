/// Doubles `x`. Saturates at the bounds of `i64` instead of wrapping.
#[must_use]
pub fn double(x: i64) -> i64 {
    x.saturating_mul(2)
}
