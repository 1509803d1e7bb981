/// One of the ten selectable color buttons.
///
/// The discriminant is the digit the color encodes in the standard resistor
/// color code, so `Swatch::Red.index() == 2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Swatch {
    Black = 0,
    Brown,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Violet,
    Grey,
    White,
}

pub const NUM_SWATCHES: usize = 10;

impl Swatch {
    pub const ALL: [Swatch; NUM_SWATCHES] = [
        Swatch::Black,
        Swatch::Brown,
        Swatch::Red,
        Swatch::Orange,
        Swatch::Yellow,
        Swatch::Green,
        Swatch::Blue,
        Swatch::Violet,
        Swatch::Grey,
        Swatch::White,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Swatch> {
        Self::ALL.get(index).copied()
    }

    pub fn rgb(self) -> [u8; 3] {
        match self {
            Swatch::Black => [0, 0, 0],
            Swatch::Brown => [130, 82, 45],
            Swatch::Red => [230, 41, 55],
            Swatch::Orange => [255, 161, 0],
            Swatch::Yellow => [253, 249, 0],
            Swatch::Green => [0, 228, 48],
            Swatch::Blue => [0, 121, 241],
            Swatch::Violet => [135, 60, 190],
            Swatch::Grey => [130, 130, 130],
            Swatch::White => [255, 255, 255],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Swatch::Black => "Black",
            Swatch::Brown => "Brown",
            Swatch::Red => "Red",
            Swatch::Orange => "Orange",
            Swatch::Yellow => "Yellow",
            Swatch::Green => "Green",
            Swatch::Blue => "Blue",
            Swatch::Violet => "Violet",
            Swatch::Grey => "Grey",
            Swatch::White => "White",
        }
    }
}

#[cfg(test)]
pub mod tests {
    use crate::swatch::*;

    #[test]
    fn test_index_matches_position() {
        for (i, swatch) in Swatch::ALL.into_iter().enumerate() {
            assert!(
                swatch.index() == i,
                "{} has index {} but sits at position {}!",
                swatch.name(),
                swatch.index(),
                i
            );
            assert!(
                Swatch::from_index(i) == Some(swatch),
                "from_index({}) didn't return {}!",
                i,
                swatch.name()
            );
        }

        assert!(Swatch::from_index(NUM_SWATCHES).is_none());
    }

    #[test]
    fn test_colors_are_distinct() {
        for a in Swatch::ALL {
            for b in Swatch::ALL {
                if a != b {
                    assert!(
                        a.rgb() != b.rgb(),
                        "{} and {} share a color!",
                        a.name(),
                        b.name()
                    );
                }
            }
        }
    }
}
