use std::fmt;

/// Catalog identity of an item kind. Two stacks of the same `ItemId` hold the
/// same physical thing; stacks are told apart by [`StackId`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

/// Unique identifier of one physical stack, allocated by [`StackIds`].
///
/// Unique across all inventories, merchant stocks, equipped slots, and map
/// items for the lifetime of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StackId(pub u64);

impl fmt::Display for StackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stack#{}", self.0)
    }
}

/// Monotonic allocator for [`StackId`]s. Ids are never reused.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StackIds {
    next: u64,
}

impl StackIds {
    pub fn new() -> Self {
        Self { next: 0 }
    }

    /// Resumes allocation after loading a snapshot: the next id is one past
    /// the highest id observed in the restored state.
    pub fn resume_after(highest: u64) -> Self {
        Self { next: highest + 1 }
    }

    pub fn allocate(&mut self) -> StackId {
        let id = StackId(self.next);
        self.next += 1;
        id
    }
}

/// Identifier of a roaming faction. Persists across defeat/respawn cycles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FactionId(pub u32);

impl fmt::Display for FactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "faction#{}", self.0)
    }
}

/// Absolute simulation-clock time in milliseconds.
///
/// The core never reads a wall clock; callers sample their clock once per
/// tick/turn and pass the value in. All countdowns are stored as absolute
/// deadlines in this unit and re-armed explicitly on state transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Millis(pub u64);

impl Millis {
    pub const ZERO: Self = Self(0);

    pub fn new(value: u64) -> Self {
        Self(value)
    }
}

impl std::ops::Add<u64> for Millis {
    type Output = Millis;
    fn add(self, rhs: u64) -> Millis {
        Millis(self.0 + rhs)
    }
}

impl std::ops::Sub<u64> for Millis {
    type Output = Millis;
    fn sub(self, rhs: u64) -> Millis {
        Millis(self.0.saturating_sub(rhs))
    }
}

impl fmt::Display for Millis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// Continuous overworld position in map units.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldPos {
    pub x: f32,
    pub y: f32,
}

impl WorldPos {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance. Overworld proximity checks (cities, factions,
    /// pickups) are all radius-based.
    pub fn distance_to(self, other: WorldPos) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Advances toward `target` by `step` along the normalized direction.
    /// Does not overshoot-clamp; the caller's arrival tolerance absorbs it.
    pub fn step_toward(self, target: WorldPos, step: f32) -> WorldPos {
        let dist = self.distance_to(target);
        if dist <= f32::EPSILON {
            return self;
        }
        WorldPos {
            x: self.x + (target.x - self.x) / dist * step,
            y: self.y + (target.y - self.y) / dist * step,
        }
    }

    pub fn clamped(self, max_x: f32, max_y: f32) -> WorldPos {
        WorldPos {
            x: self.x.clamp(0.0, max_x),
            y: self.y.clamp(0.0, max_y),
        }
    }
}

/// Discrete combat-grid position expressed in cell coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Chebyshev (king-move) distance.
    pub fn chebyshev(self, other: GridPos) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }

    /// True if `other` is one king-move away (distance exactly 1, never the
    /// same cell). Both attacks and moves use this reach.
    pub fn is_adjacent(self, other: GridPos) -> bool {
        self.chebyshev(other) == 1
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
