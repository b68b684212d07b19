//! Decoded output types.
//!
//! Everything here is plain owned data: once a decode pass returns, nothing
//! holds a reference back into the decoder.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An absolute needle position in file units.
///
/// Stored as `i64` so that arbitrarily long streams of maximal deltas
/// cannot overflow.
///
/// Coordinates are kept exactly as the file accumulates them, with Y
/// growing in the direction of positive Y deltas. Screen orientation is up
/// to the consumer; see [`Point::flip_y`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    /// The origin every design starts from.
    pub const ORIGIN: Self = Self::new(0, 0);

    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Returns this point moved by `(dx, dy)`.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx as i64,
            y: self.y + dy as i64,
        }
    }

    /// Mirrors the point across the X axis, for renderers whose Y axis
    /// points the other way.
    #[must_use]
    pub const fn flip_y(self) -> Self {
        Self {
            x: self.x,
            y: -self.y,
        }
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

/// Index into a [`Palette`](crate::Palette).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ColorId(u8);

impl ColorId {
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Returns the raw palette index.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl From<u8> for ColorId {
    fn from(index: u8) -> Self {
        Self(index)
    }
}

impl From<ColorId> for u8 {
    fn from(id: ColorId) -> Self {
        id.0
    }
}

/// One contiguous run of same-colored stitches.
///
/// Decoded polylines always have at least two points.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polyline {
    pub color: ColorId,
    pub points: Vec<Point>,
}

impl Polyline {
    /// First point of the run, where the needle lands before stitching.
    #[must_use]
    pub fn start(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// Number of visible segments in the run.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }
}

/// One step of the stitching process, for incremental playback.
///
/// Replaying actions `0..=k` in order reproduces the drawing after `k`
/// steps; the needle sits on the point of the last replayed action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum StitchAction {
    /// Move the needle without drawing.
    Jump { point: Point },
    /// Draw from the current needle position to `point`.
    Draw { point: Point, color: ColorId },
}

impl StitchAction {
    /// Needle position after this action.
    #[must_use]
    pub const fn point(self) -> Point {
        match self {
            Self::Jump { point } | Self::Draw { point, .. } => point,
        }
    }

    /// Thread color, if this action draws.
    #[must_use]
    pub const fn color(self) -> Option<ColorId> {
        match self {
            Self::Jump { .. } => None,
            Self::Draw { color, .. } => Some(color),
        }
    }

    #[must_use]
    pub const fn is_jump(self) -> bool {
        matches!(self, Self::Jump { .. })
    }
}

/// Axis-aligned extent of every needle position visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bounds {
    pub min_x: i64,
    pub min_y: i64,
    pub max_x: i64,
    pub max_y: i64,
}

impl Bounds {
    /// Bounds covering a single point.
    #[must_use]
    pub const fn at(point: Point) -> Self {
        Self {
            min_x: point.x,
            min_y: point.y,
            max_x: point.x,
            max_y: point.y,
        }
    }

    /// Grows the bounds to cover `point`.
    pub fn include(&mut self, point: Point) {
        self.min_x = self.min_x.min(point.x);
        self.min_y = self.min_y.min(point.y);
        self.max_x = self.max_x.max(point.x);
        self.max_y = self.max_y.max(point.y);
    }

    #[must_use]
    pub const fn width(&self) -> i64 {
        self.max_x - self.min_x
    }

    #[must_use]
    pub const fn height(&self) -> i64 {
        self.max_y - self.min_y
    }
}

/// Counters gathered during a decode pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DecodeStats {
    /// Complete records decoded.
    pub records: u64,
    /// Plain stitch records.
    pub stitches: u64,
    /// Jump records that were not color changes.
    pub jumps: u64,
    /// Color-change records, including ones that also carry the jump bit.
    pub color_changes: u64,
    /// Bytes after the last complete record (0 to 2).
    pub trailing_bytes: usize,
    /// Extent of all needle positions, `None` when no record was decoded.
    pub bounds: Option<Bounds>,
}

/// Result of one decode pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Decoded {
    /// Runs in file order, for drawing the finished design.
    pub polylines: Vec<Polyline>,
    /// Jump/draw steps in file order, for animated playback.
    pub actions: Vec<StitchAction>,
    pub stats: DecodeStats,
}

impl Decoded {
    /// Splits into the `(polylines, actions)` pair.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Polyline>, Vec<StitchAction>) {
        (self.polylines, self.actions)
    }

    /// Total number of points across all polylines.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.polylines.iter().map(|polyline| polyline.points.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polylines.is_empty()
    }
}
