// ============================================================================
// UPLOAD PANEL VIEW - Selector de archivo y estado de subida
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement};

use crate::dom::{alert, append_child, on_change, set_attribute, ElementBuilder};
use crate::services::ApiClient;
use crate::state::ViewState;
use crate::viewmodels::SessionController;

/// Renderizar la sección de upload.
/// El input queda deshabilitado mientras hay una subida en curso.
pub fn render_upload_panel(
    state: &ViewState,
    controller: &SessionController<ApiClient>,
) -> Result<Element, JsValue> {
    let section = ElementBuilder::new("div")?
        .class("upload-section")
        .child(ElementBuilder::new("h2")?.text("Upload Document").build())?
        .build();

    let input = ElementBuilder::new("input")?
        .id("upload-input")?
        .attr("type", "file")?
        .build();
    if state.is_uploading() {
        set_attribute(&input, "disabled", "disabled")?;
    }

    let controller = controller.clone();
    on_change(&input, move |event: Event| {
        let Some(target) = event.target() else {
            return;
        };
        let Ok(input) = target.dyn_into::<HtmlInputElement>() else {
            return;
        };

        // Sin archivo seleccionado no hay transición ni request
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        let controller = controller.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match controller.upload(file).await {
                Ok(()) => alert("Document uploaded successfully!"),
                Err(e) => {
                    log::error!("❌ Upload falló: {}", e);
                    alert("Upload failed");
                }
            }
        });
    })?;
    append_child(&section, &input)?;

    if state.is_uploading() {
        let notice = ElementBuilder::new("p")?
            .text("Uploading and processing...")
            .build();
        append_child(&section, &notice)?;
    }

    Ok(section)
}
