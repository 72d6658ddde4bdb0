//! Color tokens for the gesture settings grid.

/// A single color token with a stable name and CSS value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorToken {
    /// Semantic identifier for the token.
    pub name: &'static str,
    /// CSS color value.
    pub hex: &'static str,
}

/// Background of the tile matching the current selection.
pub const TILE_SELECTED: ColorToken = ColorToken {
    name: "tile-selected",
    hex: "#b81212",
};

/// Background of every other tile.
pub const TILE_DEFAULT: ColorToken = ColorToken {
    name: "tile-default",
    hex: "#081a2d",
};

/// Label text color.
pub const TILE_TEXT: ColorToken = ColorToken {
    name: "tile-text",
    hex: "white",
};

/// Separator drawn on the right edge of each tile.
pub const TILE_BORDER: ColorToken = ColorToken {
    name: "tile-border",
    hex: "white",
};

/// Every tile token.
pub const ALL: [ColorToken; 4] = [TILE_SELECTED, TILE_DEFAULT, TILE_TEXT, TILE_BORDER];

#[cfg(test)]
mod tests {
    use super::{ALL, TILE_DEFAULT, TILE_SELECTED};

    #[test]
    fn highlight_and_default_backgrounds_differ() {
        assert_ne!(TILE_SELECTED.hex, TILE_DEFAULT.hex);
    }

    #[test]
    fn token_names_are_unique() {
        for (idx, token) in ALL.iter().enumerate() {
            assert!(
                ALL.iter().skip(idx + 1).all(|other| other.name != token.name),
                "duplicate token {}",
                token.name
            );
        }
    }
}
