pub(crate) mod gesture_grid;
pub(crate) mod selectable_tile;
