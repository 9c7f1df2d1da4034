use crate::body::{create_segment, Body};
use crate::config::SpeedCurve;

/// Returns the tick delay after one segment of growth, clamped at the floor.
#[must_use]
pub fn reduced_speed(speed: u32, curve: SpeedCurve) -> u32 {
    speed.saturating_sub(curve.step_ms).max(curve.floor_ms)
}

/// Moves the body exactly one cell along its buffered direction.
///
/// Every non-head segment takes the cell of the segment ahead of it, walking
/// from tail to head. A pending growth event re-occupies the pre-shift tail
/// cell with a new segment, so growth never displaces existing segments.
pub fn advance(body: &mut Body) {
    let last = body.tail();

    let segments = body.segments_mut();
    for index in (1..segments.len()).rev() {
        segments[index] = segments[index - 1];
    }

    if body.pending_growth > 0 {
        body.append(create_segment(last.x, last.y));
        body.pending_growth -= 1;
        body.speed = reduced_speed(body.speed, body.curve());
    }

    let next = body.next_direction;
    let head = body.head().step(next);
    body.segments_mut()[0] = head;
    body.direction = next;
}
