//! Type definitions and enums shared by the engine and the terminal host.

use ratatui::style::Color;

/// A single drawing primitive, centered on the point it is placed at.
///
/// Sizes are expressed in canvas pixels. The host decides how those pixels map onto its own
/// output surface.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Solid rectangle.
    Rectangle {
        /// Width in canvas pixels.
        width: u16,
        /// Height in canvas pixels.
        height: u16,
        /// Fill color.
        color: Color,
    },
    /// A line of text.
    Text {
        /// The string to draw.
        content: String,
        /// Font size in canvas pixels.
        size: u16,
        /// Text color.
        color: Color,
    },
}

/// Renderable descriptor made of stacked [`Shape`]s.
///
/// Layers are ordered bottom to top and all share the same center.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Sprite {
    /// Shapes in drawing order.
    pub layers: Vec<Shape>,
}

impl Sprite {
    /// Builds a sprite from its layers, bottom first.
    #[must_use]
    pub const fn new(layers: Vec<Shape>) -> Self {
        Self { layers }
    }
}

/// Directional command understood by the move engine.
///
/// The direction names the way a tile slides into the blank, so [`Direction::Right`] swaps the
/// blank with its left neighbor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Slide the tile below the blank upwards.
    Up,
    /// Slide the tile above the blank downwards.
    Down,
    /// Slide the tile right of the blank to the left.
    Left,
    /// Slide the tile left of the blank to the right.
    Right,
}

impl Direction {
    /// Parses one of the four command strings.
    ///
    /// Returns `None` for anything other than `"up"`, `"down"`, `"left"` or `"right"`.
    #[must_use]
    pub fn parse(command: &str) -> Option<Self> {
        match command {
            "up" => Some(Self::Up),
            "down" => Some(Self::Down),
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            _ => None,
        }
    }

    /// Returns the command string for this direction.
    #[must_use]
    pub const fn repr(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Lifecycle state of a game session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// The board is not yet in order.
    Playing,
    /// Every tile is at its correct position.
    Solved,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_parse_known_commands() {
        assert_eq!(Direction::parse("up"), Some(Direction::Up));
        assert_eq!(Direction::parse("down"), Some(Direction::Down));
        assert_eq!(Direction::parse("left"), Some(Direction::Left));
        assert_eq!(Direction::parse("right"), Some(Direction::Right));
    }

    #[test]
    fn test_direction_parse_unknown_commands() {
        assert_eq!(Direction::parse("u"), None);
        assert_eq!(Direction::parse("Up"), None);
        assert_eq!(Direction::parse(""), None);
        assert_eq!(Direction::parse(" left"), None);
    }

    #[test]
    fn test_direction_repr_matches_parse() {
        for direction in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            assert_eq!(Direction::parse(direction.repr()), Some(direction));
        }
    }

    #[test]
    fn test_sprite_equality() {
        let first = Sprite::new(vec![Shape::Rectangle {
            width: 10,
            height: 10,
            color: Color::Black,
        }]);
        let second = Sprite::new(vec![Shape::Rectangle {
            width: 10,
            height: 10,
            color: Color::Black,
        }]);

        assert_eq!(first, second);
        assert_ne!(first, Sprite::default());
    }

    #[test]
    fn test_debug_implementations() {
        assert_eq!(format!("{:?}", SessionState::Solved), "Solved");
        assert_eq!(format!("{:?}", Direction::Left), "Left");
    }
}
