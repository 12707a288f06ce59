/// Horizontal/vertical intent carried by a navigation key.
///
/// `Up` and `Down` are reserved: they are classified but the navigation
/// engine does not act on them yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// Monotonic revision of a document snapshot.
///
/// Every installed replacement tree gets `previous.next()`; rejected edits
/// leave the version untouched, which makes "nothing happened" observable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocVersion(pub u64);

impl DocVersion {
    pub const INITIAL: DocVersion = DocVersion(0);

    pub fn next(self) -> Self {
        DocVersion(self.0.wrapping_add(1))
    }
}

/// A point in host coordinates (px).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
