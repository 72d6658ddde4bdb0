use crate::logic::{TILE_LABEL_STYLE, TileModel};
use yew::prelude::*;

/// Props for a single option in the settings grid.
#[derive(Properties, PartialEq)]
pub(crate) struct SelectableTileProps {
    /// Text shown in the tile and reported on click.
    pub label: AttrValue,
    /// Label of the option the parent currently has selected.
    pub selected: AttrValue,
    /// Receives this tile's label on click.
    pub on_select: Callback<AttrValue>,
}

/// Stateless tile; highlight and style are derived from props on every render.
#[function_component(SelectableTile)]
pub(crate) fn selectable_tile(props: &SelectableTileProps) -> Html {
    let model = TileModel::new(props.label.clone(), &props.selected);
    let onclick = {
        let model = model.clone();
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| model.activate(&on_select))
    };
    html! {
        <div class="gesture-tile" style={model.style()} onclick={onclick}>
            <div style={TILE_LABEL_STYLE}>{model.label.clone()}</div>
        </div>
    }
}
