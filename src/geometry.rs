//! Screen geometry and the tray-anchored placement rule.

use serde::{Deserialize, Serialize};

/// Distance between the tray icon's bottom edge and the popover.
pub const TRAY_GAP: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Read-only access to the live desktop layout.
///
/// Both values are fetched on every placement; displays and the tray can
/// move between activations.
pub trait GeometryProvider {
    /// Bounds of the tray icon in screen coordinates.
    fn tray_bounds(&self) -> Option<Rect>;

    /// Usable area of the display the tray lives on.
    fn screen_area(&self) -> Option<Size>;
}

/// Centers `window` horizontally under `tray`, `gap` below its bottom edge,
/// then pulls it back inside `screen`.
///
/// A window larger than the screen ends up flush with the top-left corner.
pub fn place_near_tray(tray: Rect, window: Size, screen: Size, gap: f64) -> Position {
    let x = round_half_up(tray.x + tray.width / 2.0 - window.width / 2.0);
    let y = round_half_up(tray.y + tray.height + gap);

    // clamp to the visible area
    let x = x.min(screen.width - window.width).max(0.0);
    let y = y.min(screen.height - window.height).max(0.0);

    Position::new(x as i32, y as i32)
}

fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Size = Size {
        width: 400.0,
        height: 600.0,
    };
    const SCREEN: Size = Size {
        width: 800.0,
        height: 600.0,
    };

    #[test]
    fn tray_near_right_edge_clamps_to_screen() {
        let tray = Rect::new(780.0, 0.0, 20.0, 22.0);
        assert_eq!(
            place_near_tray(tray, WINDOW, SCREEN, TRAY_GAP),
            Position::new(400, 0)
        );
    }

    #[test]
    fn tray_near_left_edge_clamps_to_zero() {
        let tray = Rect::new(100.0, 0.0, 20.0, 22.0);
        let short = Size::new(400.0, 300.0);
        assert_eq!(
            place_near_tray(tray, short, SCREEN, TRAY_GAP),
            Position::new(0, 26)
        );
    }

    #[test]
    fn full_height_window_pins_to_top() {
        // 600 tall on a 600 tall screen leaves no room below the tray
        let tray = Rect::new(100.0, 0.0, 20.0, 22.0);
        assert_eq!(
            place_near_tray(tray, WINDOW, SCREEN, TRAY_GAP),
            Position::new(0, 0)
        );

        let tall_screen = Size::new(800.0, 900.0);
        assert_eq!(
            place_near_tray(tray, WINDOW, tall_screen, TRAY_GAP),
            Position::new(0, 26)
        );
    }

    #[test]
    fn centers_under_tray_when_room_allows() {
        let tray = Rect::new(1000.0, 0.0, 24.0, 24.0);
        let screen = Size::new(1920.0, 1080.0);
        let window = Size::new(500.0, 600.0);
        assert_eq!(
            place_near_tray(tray, window, screen, TRAY_GAP),
            Position::new(762, 28)
        );
    }

    #[test]
    fn window_wider_than_screen_is_flush_left() {
        let tray = Rect::new(400.0, 0.0, 20.0, 22.0);
        let wide = Size::new(1200.0, 300.0);
        assert_eq!(
            place_near_tray(tray, wide, SCREEN, TRAY_GAP),
            Position::new(0, 26)
        );
    }

    #[test]
    fn halves_round_toward_positive_infinity() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-0.4), 0.0);

        // 100 + 10.5 - 200 = -89.5, still clamped to zero
        let tray = Rect::new(100.0, 0.5, 21.0, 22.0);
        let pos = place_near_tray(tray, Size::new(400.0, 100.0), SCREEN, TRAY_GAP);
        assert_eq!(pos, Position::new(0, 27));
    }
}
