//! Rink coordinate mapping and drag feedback.
//!
//! ## Coordinate systems
//!
//! **Percent coordinates** (used in drills, placements, demo paths):
//! - X: 0 = left board, 100 = right board
//! - Y: 0 = top board, 100 = bottom board
//!
//! **Pixel coordinates** (pointer events): offsets inside the rink's current
//! rendered bounding box, which changes between normal and fullscreen views.
//!
//! The mapping is pure arithmetic over the viewport passed in on every call;
//! nothing here caches a pixel-to-percent ratio, so a fullscreen toggle
//! between two drags can never produce stale scaling.

use serde::{Deserialize, Serialize};

use crate::models::Drill;

/// Position in rink-percent coordinates (each axis 0-100).
pub type RinkPercent = (f32, f32);

/// Upper bound of the percent space on both axes.
pub const RINK_MAX_PCT: f32 = 100.0;

/// Snap radius in percent units: a drop within this distance of a free
/// player slot lands exactly on the slot.
pub const SNAP_RADIUS_PCT: f32 = 8.0;

/// Default rendered rink size.
pub const NORMAL_WIDTH_PX: f32 = 800.0;
pub const NORMAL_HEIGHT_PX: f32 = 400.0;

/// Fullscreen rendered rink size.
pub const FULLSCREEN_WIDTH_PX: f32 = 1200.0;
pub const FULLSCREEN_HEIGHT_PX: f32 = 600.0;

/// The rink's current rendered bounding box.
///
/// Plain data, rebuilt from the live layout on every interaction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RinkViewport {
    pub width: f32,
    pub height: f32,
}

impl RinkViewport {
    pub fn new(width: f32, height: f32) -> Self {
        // Zero-sized boxes would divide by zero during conversion.
        Self { width: width.max(1.0), height: height.max(1.0) }
    }

    pub fn normal() -> Self {
        Self::new(NORMAL_WIDTH_PX, NORMAL_HEIGHT_PX)
    }

    pub fn fullscreen() -> Self {
        Self::new(FULLSCREEN_WIDTH_PX, FULLSCREEN_HEIGHT_PX)
    }

    /// Convert a pointer offset inside the bounding box to percent space.
    ///
    /// Returns `None` when the pointer is outside the box: a drop out of
    /// bounds is a cancelled drag, not a clamped placement.
    pub fn to_percent(&self, px: f32, py: f32) -> Option<RinkPercent> {
        if px < 0.0 || py < 0.0 || px > self.width || py > self.height {
            return None;
        }
        Some((px / self.width * RINK_MAX_PCT, py / self.height * RINK_MAX_PCT))
    }

    /// Convert a percent coordinate back to pixel offsets, for rendering.
    pub fn to_pixels(&self, pos: RinkPercent) -> (f32, f32) {
        (pos.0 / RINK_MAX_PCT * self.width, pos.1 / RINK_MAX_PCT * self.height)
    }
}

/// Clamp a percent coordinate to the rink on both axes.
pub fn clamp_percent(pos: RinkPercent) -> RinkPercent {
    (pos.0.clamp(0.0, RINK_MAX_PCT), pos.1.clamp(0.0, RINK_MAX_PCT))
}

/// Euclidean distance between two percent coordinates.
#[inline]
pub fn distance_pct(a: RinkPercent, b: RinkPercent) -> f32 {
    distance_squared_pct(a, b).sqrt()
}

/// Squared distance, for comparisons without the sqrt.
#[inline]
pub fn distance_squared_pct(a: RinkPercent, b: RinkPercent) -> f32 {
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    dx * dx + dy * dy
}

/// Live feedback for an in-progress drag.
///
/// Purely visual: nothing is committed to the session until the drop.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DragPreview {
    candidate: Option<RinkPercent>,
    hovered_slot: Option<String>,
}

impl DragPreview {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute the candidate drop position from the current pointer
    /// offset. The viewport is taken fresh on each call.
    pub fn update(
        &mut self,
        viewport: &RinkViewport,
        px: f32,
        py: f32,
        drill: Option<&Drill>,
    ) -> Option<RinkPercent> {
        let pos = match viewport.to_percent(px, py) {
            Some(p) => clamp_percent(p),
            None => {
                self.clear();
                return None;
            }
        };

        self.candidate = Some(pos);
        self.hovered_slot = drill.and_then(|d| {
            d.player_slots()
                .map(|s| (s, s.distance_to(pos.0, pos.1)))
                .filter(|(_, dist)| *dist < SNAP_RADIUS_PCT)
                .min_by(|a, b| a.1.total_cmp(&b.1))
                .map(|(s, _)| s.id.clone())
        });
        self.candidate
    }

    /// Drop finished or left the rink.
    pub fn clear(&mut self) {
        self.candidate = None;
        self.hovered_slot = None;
    }

    pub fn candidate(&self) -> Option<RinkPercent> {
        self.candidate
    }

    /// Player slot the drag currently hovers within snap range, if any.
    pub fn hovered_slot(&self) -> Option<&str> {
        self.hovered_slot.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DrillCategory, Position, Slot};

    fn drill_with_center_slot() -> Drill {
        Drill {
            id: "d".to_string(),
            name: "d".to_string(),
            category: DrillCategory::Skating,
            duration_minutes: 5,
            description: String::new(),
            min_players: 1,
            max_players: 2,
            slots: vec![Slot::player("mid", 50.0, 50.0, Position::Center)],
            instructions: vec![],
        }
    }

    #[test]
    fn test_to_percent_center() {
        let vp = RinkViewport::normal();
        let pos = vp.to_percent(400.0, 200.0).unwrap();
        assert!((pos.0 - 50.0).abs() < 1e-4);
        assert!((pos.1 - 50.0).abs() < 1e-4);
    }

    #[test]
    fn test_to_percent_rejects_out_of_bounds() {
        let vp = RinkViewport::normal();
        assert!(vp.to_percent(-1.0, 200.0).is_none());
        assert!(vp.to_percent(400.0, -0.5).is_none());
        assert!(vp.to_percent(801.0, 200.0).is_none());
        assert!(vp.to_percent(400.0, 400.5).is_none());
        // Edges are inside.
        assert!(vp.to_percent(0.0, 0.0).is_some());
        assert!(vp.to_percent(800.0, 400.0).is_some());
    }

    #[test]
    fn test_scaling_follows_viewport_change() {
        // Same pointer offset lands on different percent coordinates after a
        // fullscreen toggle; the mapping must never reuse the old box.
        let normal = RinkViewport::normal();
        let full = RinkViewport::fullscreen();
        let a = normal.to_percent(600.0, 300.0).unwrap();
        let b = full.to_percent(600.0, 300.0).unwrap();
        assert!((a.0 - 75.0).abs() < 1e-4);
        assert!((b.0 - 50.0).abs() < 1e-4);
        assert!(a != b);
    }

    #[test]
    fn test_pixel_roundtrip() {
        let vp = RinkViewport::fullscreen();
        let pos = (32.5, 81.0);
        let (px, py) = vp.to_pixels(pos);
        let back = vp.to_percent(px, py).unwrap();
        assert!((back.0 - pos.0).abs() < 1e-3);
        assert!((back.1 - pos.1).abs() < 1e-3);
    }

    #[test]
    fn test_clamp_percent() {
        assert_eq!(clamp_percent((-5.0, 120.0)), (0.0, 100.0));
        assert_eq!(clamp_percent((42.0, 17.0)), (42.0, 17.0));
    }

    #[test]
    fn test_drag_preview_hovers_slot_in_range() {
        let drill = drill_with_center_slot();
        let vp = RinkViewport::normal();
        let mut preview = DragPreview::new();

        // (416, 196) -> (52%, 49%), within 8 of (50, 50).
        preview.update(&vp, 416.0, 196.0, Some(&drill));
        assert_eq!(preview.hovered_slot(), Some("mid"));

        // (560, 200) -> (70%, 50%), outside the radius.
        preview.update(&vp, 560.0, 200.0, Some(&drill));
        assert_eq!(preview.hovered_slot(), None);
        assert!(preview.candidate().is_some());
    }

    #[test]
    fn test_drag_preview_clears_outside_rink() {
        let drill = drill_with_center_slot();
        let vp = RinkViewport::normal();
        let mut preview = DragPreview::new();

        preview.update(&vp, 416.0, 196.0, Some(&drill));
        assert!(preview.candidate().is_some());

        assert!(preview.update(&vp, -10.0, 196.0, Some(&drill)).is_none());
        assert!(preview.candidate().is_none());
        assert!(preview.hovered_slot().is_none());
    }

    #[cfg(all(test, feature = "proptest"))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Any in-bounds pointer offset maps into the percent space.
            #[test]
            fn prop_to_percent_in_bounds(
                px in 0.0f32..800.0f32,
                py in 0.0f32..400.0f32
            ) {
                let vp = RinkViewport::normal();
                let pos = vp.to_percent(px, py).unwrap();
                prop_assert!(pos.0 >= 0.0 && pos.0 <= RINK_MAX_PCT);
                prop_assert!(pos.1 >= 0.0 && pos.1 <= RINK_MAX_PCT);
            }

            /// Clamping is idempotent.
            #[test]
            fn prop_clamp_idempotent(
                x in -500.0f32..500.0f32,
                y in -500.0f32..500.0f32
            ) {
                let once = clamp_percent((x, y));
                let twice = clamp_percent(once);
                prop_assert_eq!(once, twice);
            }
        }
    }
}
