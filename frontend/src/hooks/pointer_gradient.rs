use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

/// Pointer position as fractions of the viewport, `(0, 0)` top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl Default for PointerPosition {
    fn default() -> Self {
        Self { x: 0.5, y: 0.5 }
    }
}

impl PointerPosition {
    /// CSS custom properties consumed by the `.bg-gradient` rule.
    pub fn style(&self) -> String {
        format!("--mouse-x: {}; --mouse-y: {};", self.x, self.y)
    }

    pub fn from_client(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x: pointer_fraction(x, width),
            y: pointer_fraction(y, height),
        }
    }
}

/// `position / extent` clamped to `[0, 1]` and rounded to three decimals, so
/// sub-pixel moves compare equal.
pub fn pointer_fraction(position: f64, extent: f64) -> f64 {
    if !extent.is_finite() || extent <= 0.0 || !position.is_finite() {
        return 0.5;
    }
    ((position / extent).clamp(0.0, 1.0) * 1000.0).round() / 1000.0
}

/// Tracks the mouse over the window. The listener lives as long as the
/// calling component; moves that land on the same position don't re-render.
#[hook]
pub fn use_pointer_gradient() -> PointerPosition {
    let position = use_state_eq(PointerPosition::default);

    {
        let position = position.clone();
        use_event_with_window("mousemove", move |e: MouseEvent| {
            if let Some(window) = web_sys::window() {
                let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
                let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
                position.set(PointerPosition::from_client(
                    e.client_x() as f64,
                    e.client_y() as f64,
                    width,
                    height,
                ));
            }
        });
    }

    *position
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_of_viewport() {
        assert_eq!(pointer_fraction(0.0, 800.0), 0.0);
        assert_eq!(pointer_fraction(200.0, 800.0), 0.25);
        assert_eq!(pointer_fraction(800.0, 800.0), 1.0);
    }

    #[test]
    fn clamps_outside_the_viewport() {
        assert_eq!(pointer_fraction(-40.0, 800.0), 0.0);
        assert_eq!(pointer_fraction(1200.0, 800.0), 1.0);
    }

    #[test]
    fn degenerate_viewport_centers() {
        assert_eq!(pointer_fraction(10.0, 0.0), 0.5);
        assert_eq!(pointer_fraction(10.0, -5.0), 0.5);
        assert_eq!(pointer_fraction(10.0, f64::NAN), 0.5);
        assert_eq!(pointer_fraction(f64::INFINITY, 800.0), 0.5);
    }

    #[test]
    fn fraction_is_rounded() {
        assert_eq!(pointer_fraction(1.0, 3.0), 0.333);
        assert_eq!(pointer_fraction(2.0, 3.0), 0.667);
    }

    #[test]
    fn sub_pixel_moves_compare_equal() {
        let before = PointerPosition::from_client(100.0, 300.0, 800.0, 600.0);
        let after = PointerPosition::from_client(100.2, 300.1, 800.0, 600.0);
        assert_eq!(before, after);
        assert_eq!(before, PointerPosition { x: 0.125, y: 0.5 });
    }

    #[test]
    fn real_moves_differ() {
        let before = PointerPosition::from_client(100.0, 300.0, 800.0, 600.0);
        let after = PointerPosition::from_client(120.0, 300.0, 800.0, 600.0);
        assert_ne!(before, after);
    }

    #[test]
    fn default_is_centered() {
        let pos = PointerPosition::default();
        assert_eq!(pos.style(), "--mouse-x: 0.5; --mouse-y: 0.5;");
    }

    #[test]
    fn style_carries_both_axes() {
        let pos = PointerPosition { x: 0.25, y: 1.0 };
        assert_eq!(pos.style(), "--mouse-x: 0.25; --mouse-y: 1;");
    }
}
