//! 2D cursor with 8-direction stepping, and the direction ring it steps by.
//!
//! Directions follow the displayed image: north is up (row index
//! decreasing), east is right (column index increasing).

use core::fmt;

use crate::container::{Container2D, Container2DMut, Position};

/// The eight compass directions, in counter-clockwise order from east.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    E,
    NE,
    N,
    NW,
    W,
    SW,
    S,
    SE,
}

impl Direction {
    /// Counter-clockwise ring, starting at east.
    pub const ALL: [Self; 8] = [
        Self::E,
        Self::NE,
        Self::N,
        Self::NW,
        Self::W,
        Self::SW,
        Self::S,
        Self::SE,
    ];

    /// Unit step `(dx, dy)` with y pointing up.
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Self::E => (1, 0),
            Self::NE => (1, 1),
            Self::N => (0, 1),
            Self::NW => (-1, 1),
            Self::W => (-1, 0),
            Self::SW => (-1, -1),
            Self::S => (0, -1),
            Self::SE => (1, -1),
        }
    }

    pub const fn opposite(self) -> Self {
        Self::ALL[(self as usize + 4) % 8]
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::E => "E",
            Self::NE => "NE",
            Self::N => "N",
            Self::NW => "NW",
            Self::W => "W",
            Self::SW => "SW",
            Self::S => "S",
            Self::SE => "SE",
        };
        f.write_str(s)
    }
}

#[derive(Copy, Clone)]
enum Component {
    X,
    Y,
}

/// One 45° step on the ring: the next direction and the single component
/// that changes to reach it.
#[derive(Copy, Clone)]
struct Turn {
    next: Direction,
    component: Component,
    value: i8,
}

const fn turn(next: Direction, component: Component, value: i8) -> Turn {
    Turn {
        next,
        component,
        value,
    }
}

// Indexed by `Direction as usize`.
const TURN_CCW: [Turn; 8] = [
    turn(Direction::NE, Component::Y, 1),
    turn(Direction::N, Component::X, 0),
    turn(Direction::NW, Component::X, -1),
    turn(Direction::W, Component::Y, 0),
    turn(Direction::SW, Component::Y, -1),
    turn(Direction::S, Component::X, 0),
    turn(Direction::SE, Component::X, 1),
    turn(Direction::E, Component::Y, 0),
];

const TURN_CW: [Turn; 8] = [
    turn(Direction::SE, Component::Y, -1),
    turn(Direction::E, Component::Y, 0),
    turn(Direction::NE, Component::X, 1),
    turn(Direction::N, Component::X, 0),
    turn(Direction::NW, Component::Y, 1),
    turn(Direction::W, Component::Y, 0),
    turn(Direction::SW, Component::X, -1),
    turn(Direction::S, Component::X, 0),
];

/// A unit step vector tagged with its compass direction.
///
/// Rotation by 45° walks the direction ring and rewrites exactly one of the
/// two components, which keeps contour walkers that turn at every pixel
/// cheap.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DirectionVector {
    x: i8,
    y: i8,
    direction: Direction,
}

impl DirectionVector {
    pub const fn new(direction: Direction) -> Self {
        let (x, y) = direction.delta();
        Self { x, y, direction }
    }

    pub const fn x(&self) -> i8 {
        self.x
    }

    pub const fn y(&self) -> i8 {
        self.y
    }

    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Rotate by +45° (counter-clockwise) when `positive`, else by -45°.
    pub fn rotate_45(&mut self, positive: bool) {
        let table = if positive { &TURN_CCW } else { &TURN_CW };
        let t = table[self.direction as usize];
        match t.component {
            Component::X => self.x = t.value,
            Component::Y => self.y = t.value,
        }
        self.direction = t.next;
    }

    pub fn rotate_90(&mut self, positive: bool) {
        self.rotate_45(positive);
        self.rotate_45(positive);
    }
}

impl From<Direction> for DirectionVector {
    fn from(d: Direction) -> Self {
        Self::new(d)
    }
}

/// A position inside (or just outside) a container, moved one pixel at a
/// time.
///
/// Moving never checks bounds. A cursor that left the container keeps its
/// position; [`Cursor2D::is_outside`] tells, and [`Cursor2D::get`] returns
/// `None` there.
///
/// Two cursors compare equal when their positions are equal, regardless of
/// the container they walk.
#[derive(Clone, Debug)]
pub struct Cursor2D<C> {
    container: C,
    pos: Position,
}

impl<C: Container2D> Cursor2D<C> {
    pub fn new(container: C, pos: Position) -> Self {
        Self { container, pos }
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    pub fn set_position(&mut self, pos: Position) {
        self.pos = pos;
    }

    pub fn container(&self) -> &C {
        &self.container
    }

    pub fn move_right(&mut self) {
        self.pos.j += 1;
    }

    pub fn move_left(&mut self) {
        self.pos.j -= 1;
    }

    pub fn move_up(&mut self) {
        self.pos.i -= 1;
    }

    pub fn move_down(&mut self) {
        self.pos.i += 1;
    }

    /// One step toward `d`; diagonals move on both axes at once.
    pub fn go(&mut self, d: Direction) {
        self.step(DirectionVector::new(d));
    }

    /// Apply `v` with y pointing up: `j += v.x`, `i -= v.y`.
    pub fn step(&mut self, v: DirectionVector) {
        self.pos = Self::stepped(self.pos, v);
    }

    fn stepped(pos: Position, v: DirectionVector) -> Position {
        Position::new(pos.i - isize::from(v.y), pos.j + isize::from(v.x))
    }

    pub fn is_inside(&self) -> bool {
        self.container.contains(self.pos)
    }

    pub fn is_outside(&self) -> bool {
        !self.is_inside()
    }

    pub fn can_move_right(&self) -> bool {
        self.pos.j + 1 < self.container.cols() as isize
    }

    pub fn can_move_left(&self) -> bool {
        self.pos.j > 0
    }

    pub fn can_move_up(&self) -> bool {
        self.pos.i > 0
    }

    pub fn can_move_down(&self) -> bool {
        self.pos.i + 1 < self.container.rows() as isize
    }

    /// Whether one step along `v` stays inside the container.
    pub fn can_move(&self, v: DirectionVector) -> bool {
        self.container.contains(Self::stepped(self.pos, v))
    }

    /// Element under the cursor, `None` outside the container.
    pub fn get(&self) -> Option<&C::Item> {
        self.container.at_pos(self.pos)
    }
}

impl<C: Container2DMut> Cursor2D<C> {
    pub fn get_mut(&mut self) -> Option<&mut C::Item> {
        self.container.at_pos_mut(self.pos)
    }
}

impl<C, D> PartialEq<Cursor2D<D>> for Cursor2D<C> {
    fn eq(&self, other: &Cursor2D<D>) -> bool {
        self.pos == other.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Image, PixelBuffer, Rgb};
    use alloc::vec::Vec;

    #[test]
    fn rotate_45_changes_one_component() {
        let mut v = DirectionVector::new(Direction::E);
        v.rotate_45(true);
        assert_eq!((v.x(), v.y(), v.direction()), (1, 1, Direction::NE));
        v.rotate_45(true);
        assert_eq!((v.x(), v.y(), v.direction()), (0, 1, Direction::N));
    }

    #[test]
    fn ring_walks_agree_with_deltas() {
        for &d in &Direction::ALL {
            for positive in [true, false] {
                let mut v = DirectionVector::new(d);
                for step in 0..8 {
                    let before = (v.x(), v.y());
                    v.rotate_45(positive);
                    let after = (v.x(), v.y());
                    assert_eq!(
                        after,
                        v.direction().delta(),
                        "{d} step {step} positive={positive}"
                    );
                    let changed = usize::from(before.0 != after.0) + usize::from(before.1 != after.1);
                    assert_eq!(changed, 1, "{d} step {step}: {before:?} -> {after:?}");
                }
                assert_eq!(v.direction(), d, "8 turns must close the ring");
            }
        }
    }

    #[test]
    fn rotations_are_inverse() {
        for &d in &Direction::ALL {
            let mut v = DirectionVector::new(d);
            v.rotate_45(true);
            v.rotate_45(false);
            assert_eq!(v, DirectionVector::new(d));
            v.rotate_90(true);
            v.rotate_90(true);
            assert_eq!(v.direction(), d.opposite());
        }
    }

    #[test]
    fn direction_display() {
        let names: Vec<alloc::string::String> =
            Direction::ALL.iter().map(|d| alloc::format!("{d}")).collect();
        assert_eq!(names, ["E", "NE", "N", "NW", "W", "SW", "S", "SE"]);
    }

    #[test]
    fn moves_follow_display_orientation() {
        let img = Image::new(3, 3);
        let mut c = Cursor2D::new(&img, Position::new(1, 1));
        c.go(Direction::N);
        assert_eq!(c.position(), Position::new(0, 1));
        c.go(Direction::SE);
        assert_eq!(c.position(), Position::new(1, 2));
        c.move_left();
        c.move_down();
        assert_eq!(c.position(), Position::new(2, 1));
        c.move_up();
        c.move_right();
        assert_eq!(c.position(), Position::new(1, 2));
    }

    #[test]
    fn boundary_queries() {
        let img = Image::new(2, 3);
        let c = Cursor2D::new(&img, Position::new(0, 0));
        assert!(c.can_move_right() && c.can_move_down());
        assert!(!c.can_move_left() && !c.can_move_up());
        assert!(c.can_move(Direction::SE.into()));
        assert!(!c.can_move(Direction::NE.into()));

        let c = Cursor2D::new(&img, Position::new(1, 2));
        assert!(!c.can_move_right() && !c.can_move_down());
        assert!(c.can_move(Direction::NW.into()));
        assert_eq!(c.position(), Position::new(1, 2), "queries must not move");
    }

    #[test]
    fn stepping_off_the_edge() {
        let img = PixelBuffer::from_fn(2, 2, |i, j| i * 2 + j);
        let mut c = Cursor2D::new(&img, Position::new(0, 1));
        assert_eq!(c.get(), Some(&1));
        c.move_right();
        assert!(c.is_outside());
        assert_eq!(c.get(), None);
        c.move_left();
        assert!(c.is_inside());
    }

    #[test]
    fn write_under_cursor() {
        let mut img = Image::new(2, 2);
        let mut c = Cursor2D::new(&mut img, Position::new(1, 0));
        *c.get_mut().unwrap() = Rgb::GREEN;
        assert_eq!(img[(1, 0)], Rgb::GREEN);
    }

    #[test]
    fn equality_ignores_container() {
        let a = Image::new(2, 2);
        let b = Image::new(5, 5);
        let ca = Cursor2D::new(&a, Position::new(1, 1));
        let mut cb = Cursor2D::new(&b, Position::new(1, 0));
        assert!(ca != cb);
        cb.move_right();
        assert!(ca == cb);
    }
}
