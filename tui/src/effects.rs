//! Toast placement and entrance animation.

use std::time::Duration;

use ratatui::layout::Rect;
use teamsplit_engine::normalized_progress;

/// How long the toast takes to slide into place.
pub const TOAST_ENTRANCE: Duration = Duration::from_millis(180);

const TOAST_MARGIN: u16 = 1;
/// Rows kept clear below the toast: the status bar and the outer margin.
const TOAST_BOTTOM_CLEARANCE: u16 = 2;

/// Resting position of a toast of the given size: bottom-right corner of
/// `viewport`, clamped to fit.
#[must_use]
pub fn toast_rect(viewport: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(viewport.width.saturating_sub(TOAST_MARGIN * 2)).max(1);
    let height = height.min(viewport.height).max(1);
    let right = viewport.x.saturating_add(viewport.width);
    let bottom = viewport.y.saturating_add(viewport.height);
    Rect {
        x: right.saturating_sub(width + TOAST_MARGIN).max(viewport.x),
        y: bottom
            .saturating_sub(height + TOAST_BOTTOM_CLEARANCE)
            .max(viewport.y),
        width,
        height,
    }
}

/// Offset `base` downward while the toast is still entering.
#[must_use]
pub fn apply_toast_entrance(base: Rect, viewport: Rect, shown_for: Duration) -> Rect {
    let t = ease_out_cubic(normalized_progress(shown_for, TOAST_ENTRANCE));
    let viewport_bottom = viewport.y.saturating_add(viewport.height);
    let base_bottom = base.y.saturating_add(base.height);
    let max_offset = viewport_bottom.saturating_sub(base_bottom);
    let offset = max_offset.min(base.height.saturating_div(2)).min(3);
    let y_offset = ((1.0 - t) * f32::from(offset)).round() as u16;
    Rect {
        y: base.y.saturating_add(y_offset),
        ..base
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}
