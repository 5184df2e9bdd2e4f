// ============================================================================
// SEARCH BAR VIEW - Búsqueda de documentos por contenido
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, KeyboardEvent};

use crate::dom::{append_child, on_keydown, ElementBuilder};
use crate::services::ApiClient;
use crate::state::ViewState;
use crate::viewmodels::SessionController;

/// Renderizar la barra de búsqueda. Enter lanza la búsqueda en el servidor;
/// con el campo vacío se recarga la lista normal.
pub fn render_search_bar(
    state: &ViewState,
    controller: &SessionController<ApiClient>,
) -> Result<Element, JsValue> {
    let bar = ElementBuilder::new("div")?.class("search-bar").build();

    let input = ElementBuilder::new("input")?
        .id("search-input")?
        .attr("type", "text")?
        .attr("placeholder", "Search documents...")?
        .attr("value", &state.search_query())?
        .class("search-input")
        .build();

    let controller = controller.clone();
    on_keydown(&input, move |event: KeyboardEvent| {
        if event.key() != "Enter" {
            return;
        }
        let Some(target) = event.target() else {
            return;
        };
        let Ok(input) = target.dyn_into::<HtmlInputElement>() else {
            return;
        };

        let query = input.value();
        let controller = controller.clone();
        wasm_bindgen_futures::spawn_local(async move {
            controller.search(&query).await;
        });
    })?;

    append_child(&bar, &input)?;
    Ok(bar)
}
