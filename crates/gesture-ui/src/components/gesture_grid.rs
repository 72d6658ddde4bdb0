use crate::components::selectable_tile::SelectableTile;
use crate::config::GridConfig;
use crate::logic::{grid_models, select_tile};
use gloo::console;
use yew::prelude::*;

/// Props for the gesture settings grid.
#[derive(Properties, PartialEq)]
pub(crate) struct GestureGridProps {
    /// Layout, labels and initial selection.
    pub config: GridConfig,
    /// Notified with the label of every tile the user picks.
    #[prop_or_default]
    pub on_change: Callback<AttrValue>,
}

/// Owns the current selection and renders one tile per gesture.
#[function_component(GestureGrid)]
pub(crate) fn gesture_grid(props: &GestureGridProps) -> Html {
    let initial = props.config.initial.clone().map(AttrValue::from);
    let selected = use_state(move || initial);

    let on_select = {
        let selected = selected.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |label: AttrValue| {
            console::log!("gesture selected", label.to_string());
            selected.set(select_tile(label, &on_change));
        })
    };

    let current = (*selected).clone().unwrap_or_default();
    let rows = grid_models(&props.config, &current);

    html! {
        <div class="gesture-grid">
            {for rows.into_iter().map(|row| html! {
                <div class="gesture-row" style="display: flex;">
                    {for row.into_iter().map(|model| html! {
                        <SelectableTile
                            key={model.label.to_string()}
                            label={model.label.clone()}
                            selected={current.clone()}
                            on_select={on_select.clone()}
                        />
                    })}
                </div>
            })}
        </div>
    }
}
