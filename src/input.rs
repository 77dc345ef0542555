/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Row and column delta of one step in this direction.
    #[must_use]
    pub fn offset(self) -> (i32, i32) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

/// Pointer position in viewport units.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct SwipePoint {
    pub x: i32,
    pub y: i32,
}

/// Classifies a gesture by its dominant axis.
///
/// Returns `None` when the gesture is shorter than `threshold` on both axes.
/// A tie between the axes counts as vertical.
#[must_use]
pub fn classify_swipe(dx: i32, dy: i32, threshold: i32) -> Option<Direction> {
    if dx.abs() < threshold && dy.abs() < threshold {
        return None;
    }

    if dx.abs() > dy.abs() {
        Some(if dx > 0 { Direction::Right } else { Direction::Left })
    } else {
        Some(if dy > 0 { Direction::Down } else { Direction::Up })
    }
}

/// Start/move/end tracking for a single-pointer swipe.
#[derive(Debug, Clone, Copy, Default)]
struct SwipeTracker {
    start: Option<SwipePoint>,
    end: SwipePoint,
}

/// Turns raw key and swipe signals into at most one pending direction.
///
/// Only the latest intent between two ticks is kept.
#[derive(Debug, Clone)]
pub struct InputRouter {
    pending: Option<Direction>,
    swipe: SwipeTracker,
    swipe_threshold: i32,
}

impl InputRouter {
    #[must_use]
    pub fn new(swipe_threshold: i32) -> Self {
        Self {
            pending: None,
            swipe: SwipeTracker::default(),
            swipe_threshold,
        }
    }

    /// Records a directional key press.
    ///
    /// The exact opposite of `committed` is dropped; returns the accepted intent.
    pub fn key(&mut self, direction: Direction, committed: Direction) -> Option<Direction> {
        self.offer(direction, committed)
    }

    /// Starts a swipe at `point`. A tap without movement ends at the same point.
    pub fn swipe_start(&mut self, point: SwipePoint) {
        self.swipe = SwipeTracker {
            start: Some(point),
            end: point,
        };
    }

    /// Updates the current end point of an active swipe.
    pub fn swipe_move(&mut self, point: SwipePoint) {
        if self.swipe.start.is_some() {
            self.swipe.end = point;
        }
    }

    /// Finishes the active swipe and records its direction, if any.
    pub fn swipe_end(&mut self, committed: Direction) -> Option<Direction> {
        let SwipeTracker { start, end } = std::mem::take(&mut self.swipe);
        let start = start?;

        let direction = classify_swipe(end.x - start.x, end.y - start.y, self.swipe_threshold)?;
        self.offer(direction, committed)
    }

    /// Hands the latest intent to the next tick and clears it.
    pub fn take_pending(&mut self) -> Option<Direction> {
        self.pending.take()
    }

    /// Drops any pending intent and active swipe.
    pub fn reset(&mut self) {
        self.pending = None;
        self.swipe = SwipeTracker::default();
    }

    fn offer(&mut self, direction: Direction, committed: Direction) -> Option<Direction> {
        if !direction_change_is_valid(committed, direction) {
            return None;
        }

        self.pending = Some(direction);
        self.pending
    }
}
