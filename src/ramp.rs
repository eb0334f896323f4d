//! The per-tick setpoint advance rule.

/// Advance `current` one tick toward `target`, moving at most `ramp`.
///
/// Returns `None` when nothing changes: either `ramp` is zero (a
/// deliberate hold, even away from the target) or the point has already
/// converged. The step is clamped so the result lands exactly on
/// `target` instead of overshooting, which makes convergence monotonic
/// and exact: `ceil(|target - current| / ramp)` ticks, never more.
pub fn advance(current: u16, ramp: u16, target: u16) -> Option<u16> {
    if ramp == 0 || current == target {
        return None;
    }

    // Widen before stepping; u16 arithmetic would wrap near the bounds.
    let at = i32::from(current);
    let step = i32::from(ramp);
    let goal = i32::from(target);

    let next = if at < goal {
        (at + step).min(goal)
    } else {
        (at - step).max(goal)
    };

    Some(next as u16)
}
