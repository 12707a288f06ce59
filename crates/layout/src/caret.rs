use core_types::Direction;
use doctree::StyleStack;

use crate::text::TextMeasurer;

/// Caret placement in host px.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CaretPos {
    pub x: f32,
    pub y: f32,
    pub height: f32,
}

/// Shift the caret across `crossed`.
///
/// Right adds the character's width, Left subtracts it, and `x` never goes
/// below 0. Nothing crossed (or a vertical direction) leaves `x` alone.
/// `height` always becomes the measurer's line height for `styling`.
pub fn resolve_caret_geometry(
    prev: CaretPos,
    styling: &StyleStack,
    crossed: Option<char>,
    direction: Direction,
    measurer: &dyn TextMeasurer,
) -> CaretPos {
    let width = crossed.map_or(0.0, |ch| {
        let mut buf = [0u8; 4];
        measurer.measure(ch.encode_utf8(&mut buf), styling)
    });
    let x = match direction {
        Direction::Right => prev.x + width,
        Direction::Left => (prev.x - width).max(0.0),
        Direction::Up | Direction::Down => prev.x,
    };
    CaretPos {
        x,
        y: prev.y,
        height: measurer.line_height(styling),
    }
}
