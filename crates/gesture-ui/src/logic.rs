//! Pure tile helpers extracted from components for non-wasm testing.

use crate::config::GridConfig;
use crate::theme::{TILE_BORDER, TILE_DEFAULT, TILE_SELECTED, TILE_TEXT};
use yew::{AttrValue, Callback};

/// Highlight state of a tile relative to the parent's selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileTone {
    /// The tile's label equals the selected identifier.
    Selected,
    /// Any other tile.
    Default,
}

impl TileTone {
    /// Background color for the tone.
    #[must_use]
    pub const fn background(self) -> &'static str {
        match self {
            Self::Selected => TILE_SELECTED.hex,
            Self::Default => TILE_DEFAULT.hex,
        }
    }
}

/// Derive the tone of a tile. Comparison is exact string equality.
#[must_use]
pub fn tile_tone(label: &str, selected: &str) -> TileTone {
    if label == selected {
        TileTone::Selected
    } else {
        TileTone::Default
    }
}

/// Inline style for the clickable region of a tile.
#[must_use]
pub fn tile_style(tone: TileTone) -> String {
    format!(
        "flex: 1; text-align: center; border-right: 1px solid {}; color: {}; background: {};",
        TILE_BORDER.hex,
        TILE_TEXT.hex,
        tone.background()
    )
}

/// Inline style for the label wrapper inside a tile.
pub const TILE_LABEL_STYLE: &str = "padding: 5vh;";

/// Everything a tile renders, derived from its inputs on every render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileModel {
    /// Label shown in the tile and reported on activation.
    pub label: AttrValue,
    /// Highlight derived from the selection.
    pub tone: TileTone,
}

impl TileModel {
    /// Build the view state for `label` given the parent's `selected` identifier.
    #[must_use]
    pub fn new(label: AttrValue, selected: &str) -> Self {
        let tone = tile_tone(&label, selected);
        Self { label, tone }
    }

    /// Whether this tile is the selected one.
    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.tone == TileTone::Selected
    }

    /// Outer region style.
    #[must_use]
    pub fn style(&self) -> String {
        tile_style(self.tone)
    }

    /// Report this tile's label to the parent.
    pub fn activate(&self, on_select: &Callback<AttrValue>) {
        on_select.emit(self.label.clone());
    }
}

/// Split `items` into rows of at most `columns` entries. Zero columns is treated as one.
#[must_use]
pub fn grid_rows<T: Clone>(items: &[T], columns: usize) -> Vec<Vec<T>> {
    items.chunks(columns.max(1)).map(<[T]>::to_vec).collect()
}

/// Tile models for every configured gesture, laid out in rows of `config.columns`.
#[must_use]
pub fn grid_models(config: &GridConfig, selected: &str) -> Vec<Vec<TileModel>> {
    let tiles: Vec<TileModel> = config
        .gestures
        .iter()
        .map(|label| TileModel::new(AttrValue::from(label.clone()), selected))
        .collect();
    grid_rows(&tiles, config.columns)
}

/// Selection after the user picks `label`. The pick is always forwarded to
/// `on_change`, including when `label` is already selected.
#[must_use]
pub fn select_tile(label: AttrValue, on_change: &Callback<AttrValue>) -> Option<AttrValue> {
    let next = Some(label.clone());
    on_change.emit(label);
    next
}

/// Labels of the highlighted tiles, in grid order.
#[must_use]
pub fn highlighted(rows: &[Vec<TileModel>]) -> Vec<AttrValue> {
    rows.iter()
        .flatten()
        .filter(|model| model.is_selected())
        .map(|model| model.label.clone())
        .collect()
}
