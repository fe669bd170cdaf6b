use crate::foundation::core::Rect;

/// Viewport-intersection test with a root margin.
///
/// `margin_px` grows the viewport on every side; a negative margin shrinks it, so an
/// element must be that far inside before it counts. Edge contact does not intersect,
/// except for zero-width or zero-height elements, which intersect when they lie within
/// the (adjusted) viewport.
pub fn intersects(element: Rect, viewport: Rect, margin_px: f64) -> bool {
    let root = Rect::new(
        viewport.x0 - margin_px,
        viewport.y0 - margin_px,
        viewport.x1 + margin_px,
        viewport.y1 + margin_px,
    );
    if root.x0 > root.x1 || root.y0 > root.y1 {
        return false;
    }
    overlaps(element.x0, element.x1, root.x0, root.x1)
        && overlaps(element.y0, element.y1, root.y0, root.y1)
}

fn overlaps(a0: f64, a1: f64, b0: f64, b1: f64) -> bool {
    if a0 == a1 {
        b0 <= a0 && a0 <= b1
    } else {
        a0 < b1 && a1 > b0
    }
}

/// Viewport rect for a window of `width`x`height` scrolled to `scroll_y`.
pub fn viewport_at(scroll_y: f64, width: f64, height: f64) -> Rect {
    Rect::new(0.0, scroll_y, width, scroll_y + height)
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/intersect.rs"]
mod tests;
