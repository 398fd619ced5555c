//! Geometric types for toolbar placement and pointer tracking

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// A logical-pixel coordinate relative to the toolbar's host layer
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Difference between two points
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Offset {
    pub dx: f32,
    pub dy: f32,
}

impl Offset {
    pub fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }
}

impl Sub for Point {
    type Output = Offset;

    fn sub(self, other: Point) -> Offset {
        Offset {
            dx: self.x - other.x,
            dy: self.y - other.y,
        }
    }
}

impl Sub<Offset> for Point {
    type Output = Point;

    fn sub(self, offset: Offset) -> Point {
        Point {
            x: self.x - offset.dx,
            y: self.y - offset.dy,
        }
    }
}

impl Add<Offset> for Point {
    type Output = Point;

    fn add(self, offset: Offset) -> Point {
        Point {
            x: self.x + offset.dx,
            y: self.y + offset.dy,
        }
    }
}

/// Width and height in logical pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when either side has no extent (the element has not been laid out)
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}
