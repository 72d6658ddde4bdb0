//! Application shell: reads the host page configuration and mounts the grid.

use crate::components::gesture_grid::GestureGrid;
use crate::config::GridConfig;
use gloo::console;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::Element;
use yew::prelude::*;

const ROOT_ID: &str = "root";
const CONFIG_ATTR: &str = "data-config";

#[derive(Properties, PartialEq)]
struct AppProps {
    config: GridConfig,
}

#[function_component(GestureSettingsApp)]
fn gesture_settings_app(props: &AppProps) -> Html {
    html! {
        <main class="gesture-settings">
            <GestureGrid config={props.config.clone()} />
        </main>
    }
}

fn load_config(root: Option<&Element>) -> GridConfig {
    let Some(raw) = root.and_then(|el| el.get_attribute(CONFIG_ATTR)) else {
        return GridConfig::default();
    };
    GridConfig::from_json(&raw).unwrap_or_else(|err| {
        console::error!("grid config rejected, using defaults", err.to_string());
        GridConfig::default()
    })
}

/// Runs when the wasm module is instantiated.
#[wasm_bindgen(start)]
pub(crate) fn run_app() {
    console_error_panic_hook::set_once();
    let root = gloo::utils::document().get_element_by_id(ROOT_ID);
    let props = AppProps {
        config: load_config(root.as_ref()),
    };
    if let Some(root) = root {
        yew::Renderer::<GestureSettingsApp>::with_root_and_props(root, props).render();
    } else {
        yew::Renderer::<GestureSettingsApp>::with_props(props).render();
    }
}
