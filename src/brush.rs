use std::fmt;

use image::Rgb;

/// One of the five label brushes. Each brush produces its own mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Brush {
    #[default]
    One,
    Two,
    Three,
    Four,
    Five,
}

impl Brush {
    pub const COUNT: usize = 5;

    /// Ascending order; masks and outlines are produced in this order.
    pub const ALL: [Brush; Brush::COUNT] = [
        Brush::One,
        Brush::Two,
        Brush::Three,
        Brush::Four,
        Brush::Five,
    ];

    /// 0-based position in `ALL`.
    pub fn index(self) -> usize {
        match self {
            Brush::One => 0,
            Brush::Two => 1,
            Brush::Three => 2,
            Brush::Four => 3,
            Brush::Five => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Brush> {
        Brush::ALL.get(index).copied()
    }
}

impl fmt::Display for Brush {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Outline color for every brush.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgb<u8>; Brush::COUNT],
}

impl Palette {
    pub const RED: Rgb<u8> = Rgb([255, 0, 0]);
    pub const GREEN: Rgb<u8> = Rgb([0, 255, 0]);
    pub const BLUE: Rgb<u8> = Rgb([0, 0, 255]);
    pub const YELLOW: Rgb<u8> = Rgb([255, 255, 0]);
    pub const PURPLE: Rgb<u8> = Rgb([255, 0, 255]);

    pub const fn new(colors: [Rgb<u8>; Brush::COUNT]) -> Self {
        Self { colors }
    }

    pub fn color(&self, brush: Brush) -> Rgb<u8> {
        self.colors[brush.index()]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new([
            Self::RED,
            Self::GREEN,
            Self::BLUE,
            Self::YELLOW,
            Self::PURPLE,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trips_through_all() {
        for (i, brush) in Brush::ALL.iter().enumerate() {
            assert_eq!(brush.index(), i);
            assert_eq!(Brush::from_index(i), Some(*brush));
        }
        assert_eq!(Brush::from_index(Brush::COUNT), None);
    }

    #[test]
    fn test_default_brush_is_first() {
        assert_eq!(Brush::default(), Brush::One);
    }

    #[test]
    fn test_default_palette_colors() {
        let palette = Palette::default();
        assert_eq!(palette.color(Brush::One), Palette::RED);
        assert_eq!(palette.color(Brush::Three), Palette::BLUE);
        assert_eq!(palette.color(Brush::Five), Palette::PURPLE);
    }
}
