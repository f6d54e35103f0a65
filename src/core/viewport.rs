// LogDeck - core/viewport.rs
//
// Viewport arithmetic for the virtualized console list. Pure math, kept
// out of the UI layer so the range semantics are unit-testable.
//
// Per-frame rendering cost is bounded by the viewport: only rows whose
// visible-index falls in `visible_range` are painted, regardless of how
// many rows are buffered.

use std::ops::RangeInclusive;

/// Visible-index range for a pixel viewport of height `viewport_h`
/// scrolled to `scroll_offset`, with fixed-height rows.
///
/// `floor(S/R) ..= ceil((S+H)/R)`, clamped to `[0, visible_count - 1]`.
/// Returns `None` when there are no rows to show.
pub fn visible_range(
    scroll_offset: f32,
    viewport_h: f32,
    row_height: f32,
    visible_count: usize,
) -> Option<RangeInclusive<usize>> {
    if visible_count == 0 || row_height <= 0.0 {
        return None;
    }
    let offset = scroll_offset.max(0.0);
    let first = (offset / row_height).floor() as usize;
    let last = ((offset + viewport_h.max(0.0)) / row_height).ceil() as usize;

    let max_index = visible_count - 1;
    let first = first.min(max_index);
    let last = last.min(max_index);
    Some(first..=last)
}

/// Scroll offset that pins the viewport to the bottom of the content.
/// Applied *before* range computation on auto-scroll frames so the pinned
/// view is never one frame stale.
pub fn pinned_offset(content_h: f32, viewport_h: f32) -> f32 {
    (content_h - viewport_h).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_at_top() {
        // 10 rows of 20px in a 100px viewport: rows 0..=5 are touched
        // (ceil includes the partially visible row at the boundary).
        assert_eq!(visible_range(0.0, 100.0, 20.0, 10), Some(0..=5));
    }

    #[test]
    fn range_mid_scroll_includes_partial_rows() {
        // Offset 30 with 20px rows: row 1 is half visible at the top,
        // row 6 half visible at the bottom.
        assert_eq!(visible_range(30.0, 100.0, 20.0, 10), Some(1..=7));
    }

    #[test]
    fn range_clamps_past_end() {
        assert_eq!(visible_range(500.0, 100.0, 20.0, 10), Some(9..=9));
    }

    #[test]
    fn range_clamps_when_viewport_exceeds_content() {
        assert_eq!(visible_range(0.0, 1000.0, 20.0, 3), Some(0..=2));
    }

    #[test]
    fn empty_list_has_no_range() {
        assert_eq!(visible_range(0.0, 100.0, 20.0, 0), None);
    }

    #[test]
    fn negative_offset_is_treated_as_top() {
        assert_eq!(visible_range(-15.0, 100.0, 20.0, 10), Some(0..=5));
    }

    #[test]
    fn pinned_offset_bottoms_out_at_zero() {
        assert_eq!(pinned_offset(400.0, 100.0), 300.0);
        assert_eq!(pinned_offset(50.0, 100.0), 0.0);
    }
}
