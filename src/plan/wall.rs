use crate::math::arc_2d::arc_from_extent;
use crate::math::{Point2, TOLERANCE};

use super::level::LevelId;
use super::style::SideFinish;

slotmap::new_key_type! {
    /// Unique identifier for a wall in the floor plan.
    pub struct WallId;
}

/// One of the two ends of a wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WallEnd {
    Start,
    End,
}

impl WallEnd {
    /// Returns the other end.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Start => Self::End,
            Self::End => Self::Start,
        }
    }
}

/// One of the two faces of a wall, relative to its start-to-end direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// A link from one end of a wall to the end of a neighbor sharing that point.
///
/// Recording the neighbor's end explicitly keeps chains that fold back on
/// themselves unambiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Join {
    /// The neighbor wall.
    pub wall: WallId,
    /// The end of the neighbor that is joined.
    pub end: WallEnd,
}

impl Join {
    #[must_use]
    pub fn new(wall: WallId, end: WallEnd) -> Self {
        Self { wall, end }
    }
}

/// A straight or round wall segment.
///
/// Chain links are non-owning: they are only written through
/// [`FloorPlan`](super::FloorPlan) so that both directions stay in sync.
#[derive(Debug, Clone, PartialEq)]
pub struct Wall {
    pub start: Point2,
    pub end: Point2,
    pub thickness: f64,
    /// Signed arc extent in radians; `None` or zero for a straight wall.
    pub arc_extent: Option<f64>,
    /// Height at start; `None` uses the plan's default wall height.
    pub height: Option<f64>,
    /// Height at end for sloping walls; `None` means same as `height`.
    pub height_at_end: Option<f64>,
    pub level: Option<LevelId>,
    pub left_side: SideFinish,
    pub right_side: SideFinish,
    pub(crate) at_start: Option<Join>,
    pub(crate) at_end: Option<Join>,
}

impl Wall {
    /// Creates a straight wall with default finishes.
    #[must_use]
    pub fn new(start: Point2, end: Point2, thickness: f64) -> Self {
        Self {
            start,
            end,
            thickness,
            arc_extent: None,
            height: None,
            height_at_end: None,
            level: None,
            left_side: SideFinish::default(),
            right_side: SideFinish::default(),
            at_start: None,
            at_end: None,
        }
    }

    #[must_use]
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    #[must_use]
    pub fn with_height_at_end(mut self, height_at_end: f64) -> Self {
        self.height_at_end = Some(height_at_end);
        self
    }

    #[must_use]
    pub fn with_arc_extent(mut self, arc_extent: f64) -> Self {
        self.arc_extent = Some(arc_extent);
        self
    }

    #[must_use]
    pub fn with_level(mut self, level: LevelId) -> Self {
        self.level = Some(level);
        self
    }

    /// Returns `true` for walls drawn along an arc.
    #[must_use]
    pub fn is_round(&self) -> bool {
        self.arc_extent.is_some_and(|extent| extent.abs() > TOLERANCE)
    }

    /// Returns `true` when start and end heights are both set and differ.
    #[must_use]
    pub fn is_trapezoidal(&self) -> bool {
        matches!(
            (self.height, self.height_at_end),
            (Some(h), Some(he)) if (h - he).abs() > TOLERANCE
        )
    }

    /// Length of the wall along its centerline.
    #[must_use]
    pub fn length(&self) -> f64 {
        if let Some(arc) = self
            .arc_extent
            .and_then(|extent| arc_from_extent(&self.start, &self.end, extent))
        {
            return arc.length();
        }
        nalgebra::distance(&self.start, &self.end)
    }

    /// Returns the point at the given end.
    #[must_use]
    pub fn point(&self, end: WallEnd) -> Point2 {
        match end {
            WallEnd::Start => self.start,
            WallEnd::End => self.end,
        }
    }

    /// Returns the link recorded at the given end.
    #[must_use]
    pub fn join(&self, end: WallEnd) -> Option<Join> {
        match end {
            WallEnd::Start => self.at_start,
            WallEnd::End => self.at_end,
        }
    }

    /// Returns the wall joined at the start, if any.
    #[must_use]
    pub fn wall_at_start(&self) -> Option<WallId> {
        self.at_start.map(|join| join.wall)
    }

    /// Returns the wall joined at the end, if any.
    #[must_use]
    pub fn wall_at_end(&self) -> Option<WallId> {
        self.at_end.map(|join| join.wall)
    }

    pub(crate) fn join_slot_mut(&mut self, end: WallEnd) -> &mut Option<Join> {
        match end {
            WallEnd::Start => &mut self.at_start,
            WallEnd::End => &mut self.at_end,
        }
    }

    /// Returns the finish of one side.
    #[must_use]
    pub fn side(&self, side: Side) -> &SideFinish {
        match side {
            Side::Left => &self.left_side,
            Side::Right => &self.right_side,
        }
    }

    /// Returns the finish of one side for modification.
    pub fn side_mut(&mut self, side: Side) -> &mut SideFinish {
        match side {
            Side::Left => &mut self.left_side,
            Side::Right => &mut self.right_side,
        }
    }

    /// Cuts a straight wall in two at `point`, which must lie on it.
    ///
    /// Both halves keep the level, thickness, heights and side finishes of
    /// this wall, and start without chain links. For sloping walls the height
    /// at `point` is interpolated along the wall and becomes the first half's
    /// end height and the second half's start height.
    #[must_use]
    pub fn split_at(&self, point: Point2) -> (Wall, Wall) {
        let mut first = self.clone();
        let mut second = self.clone();
        first.end = point;
        second.start = point;
        for half in [&mut first, &mut second] {
            half.at_start = None;
            half.at_end = None;
        }

        if let (true, Some(height), Some(height_at_end)) =
            (self.is_trapezoidal(), self.height, self.height_at_end)
        {
            let length = self.length();
            if length > TOLERANCE {
                let ratio = nalgebra::distance(&self.start, &point) / length;
                let height_at_point = height + (height_at_end - height) * ratio;
                first.height_at_end = Some(height_at_point);
                second.height = Some(height_at_point);
            }
        }
        (first, second)
    }

    /// Corners of the wall ignoring its joins: left side from start to end,
    /// then right side from end to start.
    ///
    /// The left side is offset by `(dy, -dx)` from the centerline direction,
    /// which is the left face when the plan is viewed with y pointing down.
    #[must_use]
    pub fn unjoined_points(&self) -> [Point2; 4] {
        let d = self.end - self.start;
        let len = d.norm();
        let half = self.thickness * 0.5;
        let offset = if len < TOLERANCE {
            nalgebra::Vector2::zeros()
        } else {
            nalgebra::Vector2::new(d.y, -d.x) * (half / len)
        };
        [
            self.start + offset,
            self.end + offset,
            self.end - offset,
            self.start - offset,
        ]
    }
}
