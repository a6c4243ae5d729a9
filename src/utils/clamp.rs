use crate::models::TimeStep;

/// Floors `value` and clamps it into `[min, max]`.
/// Missing or non-finite input (NaN, infinities) becomes `min`.
pub fn clamp_int(value: Option<f64>, min: TimeStep, max: TimeStep) -> TimeStep {
    let n = match value {
        Some(v) if v.is_finite() => v.floor(),
        _ => return min,
    };

    if n <= min as f64 {
        min
    } else if n >= max as f64 {
        max
    } else {
        n as TimeStep
    }
}
