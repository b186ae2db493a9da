//! Screen-edge control zones
//!
//! Four rectangular zones hug the viewport edges. Hovering the pointer inside
//! one drives the camera in that zone's direction. Coordinates are in pixels
//! with the origin at the bottom-left corner, +y up.

use edgecam_core::Color;
use glam::{Vec2, Vec3};

use crate::config::{MovementAxis, RigConfig};

/// Highlight color applied to whichever zone the pointer is inside
pub const HOVER_COLOR: Color = Color::rgba(1.0, 1.0, 0.0, 0.7);

/// Which edge of the screen a zone occupies, and the motion it drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoneDirection {
    Left,
    Right,
    Up,
    Down,
}

impl ZoneDirection {
    /// All directions, in the order zones are hit-tested
    pub const ALL: [ZoneDirection; 4] = [
        ZoneDirection::Left,
        ZoneDirection::Right,
        ZoneDirection::Up,
        ZoneDirection::Down,
    ];

    /// Canonical world-space direction for this zone
    pub fn canonical_direction(self) -> Vec3 {
        match self {
            ZoneDirection::Left => Vec3::new(-1.0, 0.0, 0.0),
            ZoneDirection::Right => Vec3::new(1.0, 0.0, 0.0),
            ZoneDirection::Up => Vec3::new(0.0, 1.0, 0.0),
            ZoneDirection::Down => Vec3::new(0.0, -1.0, 0.0),
        }
    }

    /// Whether hovering this zone also drives pitch
    pub fn enables_pitch(self) -> bool {
        matches!(self, ZoneDirection::Up | ZoneDirection::Down)
    }

    /// Guide color drawn by the UI when the zone is not hovered
    pub fn debug_color(self) -> Color {
        match self {
            ZoneDirection::Left => Color::rgba(1.0, 0.2, 0.2, 0.3),
            ZoneDirection::Right => Color::rgba(0.2, 0.6, 1.0, 0.3),
            ZoneDirection::Up => Color::rgba(0.3, 1.0, 0.3, 0.3),
            ZoneDirection::Down => Color::rgba(1.0, 1.0, 0.3, 0.3),
        }
    }

    /// Display label for debug output
    pub fn label(self) -> &'static str {
        match self {
            ZoneDirection::Left => "Left",
            ZoneDirection::Right => "Right",
            ZoneDirection::Up => "Up",
            ZoneDirection::Down => "Down",
        }
    }

    /// Sign of this zone's motion along the active axis
    ///
    /// Left/Right map to -X/+X. Up/Down map to +Y/-Y when the active axis is
    /// Y, and to +Z/-Z when it is Z. A direction with no component on the
    /// active axis contributes 0 (no translation effect).
    pub fn axis_sign(self, axis: MovementAxis) -> f32 {
        let dir = self.canonical_direction();
        let component = match axis {
            MovementAxis::X => dir.x,
            MovementAxis::Y | MovementAxis::Z => dir.y,
        };
        if component > 0.1 {
            1.0
        } else if component < -0.1 {
            -1.0
        } else {
            0.0
        }
    }

    fn index(self) -> usize {
        match self {
            ZoneDirection::Left => 0,
            ZoneDirection::Right => 1,
            ZoneDirection::Up => 2,
            ZoneDirection::Down => 3,
        }
    }
}

/// Axis-aligned rectangle in pixel space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ZoneRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ZoneRect {
    /// Whether a point lies inside the rectangle (inclusive on all sides)
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// Pointer position relative to the rectangle center, each component
    /// in roughly [-0.5, 0.5]
    ///
    /// A zero-size dimension yields 0 for that component rather than
    /// dividing by zero.
    pub fn relative_offset(&self, point: Vec2) -> Vec2 {
        let rx = if self.width > 0.0 {
            (point.x - self.x) / self.width - 0.5
        } else {
            0.0
        };
        let ry = if self.height > 0.0 {
            (point.y - self.y) / self.height - 0.5
        } else {
            0.0
        };
        Vec2::new(rx, ry)
    }
}

/// One edge zone: direction, current screen rectangle, and hover state
#[derive(Debug, Clone, Copy)]
pub struct Zone {
    pub direction: ZoneDirection,
    pub rect: ZoneRect,
    pub hovered: bool,
}

impl Zone {
    /// Color the UI should fill this zone with right now
    pub fn fill_color(&self) -> Color {
        if self.hovered {
            HOVER_COLOR
        } else {
            self.direction.debug_color()
        }
    }
}

/// The four edge zones, hit-tested in a fixed documented order
#[derive(Debug, Clone)]
pub struct EdgeZones {
    zones: [Zone; 4],
    visible: bool,
}

impl EdgeZones {
    /// Zones are tested in this order; the first containing zone wins.
    /// Corner overlaps therefore resolve to Left/Right.
    pub const HIT_TEST_ORDER: [ZoneDirection; 4] = ZoneDirection::ALL;

    /// Create the four zones with empty rectangles (laid out on first update)
    pub fn new() -> Self {
        let zones = ZoneDirection::ALL.map(|direction| Zone {
            direction,
            rect: ZoneRect::default(),
            hovered: false,
        });
        Self {
            zones,
            visible: true,
        }
    }

    /// Recompute the four rectangles from the viewport size and the
    /// configured edge fractions
    ///
    /// A degenerate viewport (zero width or height) leaves the previously
    /// cached rectangles untouched.
    pub fn layout(&mut self, viewport: Vec2, config: &RigConfig) {
        if viewport.x <= 0.0 || viewport.y <= 0.0 {
            return;
        }
        let (w, h) = (viewport.x, viewport.y);
        self.zones[ZoneDirection::Left.index()].rect = ZoneRect {
            x: 0.0,
            y: 0.0,
            width: w * config.left_fraction(),
            height: h,
        };
        let right_width = w * config.right_fraction();
        self.zones[ZoneDirection::Right.index()].rect = ZoneRect {
            x: w - right_width,
            y: 0.0,
            width: right_width,
            height: h,
        };
        let top_height = h * config.top_fraction();
        self.zones[ZoneDirection::Up.index()].rect = ZoneRect {
            x: 0.0,
            y: h - top_height,
            width: w,
            height: top_height,
        };
        self.zones[ZoneDirection::Down.index()].rect = ZoneRect {
            x: 0.0,
            y: 0.0,
            width: w,
            height: h * config.bottom_fraction(),
        };
    }

    /// Find the zone containing the pointer, if any, and refresh hover flags
    ///
    /// At most one zone ends up hovered; all others are cleared. The hover
    /// flags are a signal for the external UI highlighter, not motion state.
    pub fn hit_test(&mut self, pointer: Vec2) -> Option<ZoneDirection> {
        let hit = Self::HIT_TEST_ORDER
            .into_iter()
            .find(|direction| self.zones[direction.index()].rect.contains(pointer));
        for zone in &mut self.zones {
            zone.hovered = hit == Some(zone.direction);
        }
        hit
    }

    /// Access a zone by direction
    pub fn zone(&self, direction: ZoneDirection) -> &Zone {
        &self.zones[direction.index()]
    }

    /// The currently hovered zone, if any
    pub fn hovered(&self) -> Option<ZoneDirection> {
        self.zones
            .iter()
            .find(|zone| zone.hovered)
            .map(|zone| zone.direction)
    }

    /// Clear all hover flags
    pub fn clear_hover(&mut self) {
        for zone in &mut self.zones {
            zone.hovered = false;
        }
    }

    /// Whether the UI should draw the zone guides
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the zone guides
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Iterate over all four zones in hit-test order
    pub fn iter(&self) -> impl Iterator<Item = &Zone> {
        self.zones.iter()
    }
}

impl Default for EdgeZones {
    fn default() -> Self {
        Self::new()
    }
}
