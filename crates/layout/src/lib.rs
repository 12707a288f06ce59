//! Position resolution between host coordinates and document positions.
//!
//! The host owns real layout and rendering. This crate only talks to it
//! through three delegates: [`HitTester`] (point → host element), [`HostTree`]
//! (element parent and identity), and [`TextMeasurer`] (text width).

pub mod caret;
pub mod hit_test;
pub mod text;

use core_types::Point;

pub use caret::{CaretPos, resolve_caret_geometry};
pub use hit_test::{
    HitTester, HostElement, HostHit, HostTree, MapHost, PointerEvent, resolve_from_hit,
    resolve_pointer,
};
pub use text::{FixedAdvanceMeasurer, TextMeasurer};

/// A rectangle in host px.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rectangle {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }
}
