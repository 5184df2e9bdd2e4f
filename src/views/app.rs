// ============================================================================
// APP VIEW - COMPONENTE PRINCIPAL
// ============================================================================
// Solo composición: cada sección se renderiza con el snapshot actual del
// estado. Las secciones sin datos simplemente se omiten.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::services::ApiClient;
use crate::state::ViewState;
use crate::viewmodels::SessionController;
use crate::views::{
    render_breakdown_section, render_documents_section, render_stats_section,
    render_upload_panel,
};

/// Renderizar el dashboard completo
pub fn render_app(
    state: &ViewState,
    controller: &SessionController<ApiClient>,
) -> Result<Element, JsValue> {
    let app = ElementBuilder::new("div")?.class("App").build();

    let header = ElementBuilder::new("header")?
        .class("App-header")
        .child(
            ElementBuilder::new("h1")?
                .text("AI Document Management")
                .build(),
        )?
        .child(
            ElementBuilder::new("p")?
                .text("Intelligent document reduction and deduplication")
                .build(),
        )?
        .build();
    append_child(&app, &header)?;

    append_child(&app, &render_upload_panel(state, controller)?)?;

    // Sin stats cargadas no hay sección: el dashboard degrada solo
    if let Some(stats) = state.stats() {
        append_child(&app, &render_stats_section(&stats)?)?;
    }

    let breakdown = state.breakdown();
    if !breakdown.is_empty() {
        append_child(&app, &render_breakdown_section(&breakdown)?)?;
    }

    append_child(&app, &render_documents_section(state, controller)?)?;

    Ok(app)
}
