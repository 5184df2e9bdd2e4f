// ============================================================================
// DOCUMENT TABLE VIEW - Catálogo de documentos recientes
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::services::ApiClient;
use crate::state::ViewState;
use crate::viewmodels::catalog_viewmodel::DocumentRow;
use crate::viewmodels::{CatalogViewModel, SessionController};
use crate::views::render_search_bar;

const COLUMNS: [&str; 8] = [
    "Filename",
    "Type",
    "Original Size",
    "Optimized Size",
    "Savings",
    "Tier",
    "Uploaded",
    "Status",
];

/// Renderizar la sección de documentos recientes (búsqueda + tabla)
pub fn render_documents_section(
    state: &ViewState,
    controller: &SessionController<ApiClient>,
) -> Result<Element, JsValue> {
    let section = ElementBuilder::new("div")?
        .class("documents-section")
        .child(ElementBuilder::new("h2")?.text("Recent Documents").build())?
        .child(render_search_bar(state, controller)?)?
        .build();

    let table = ElementBuilder::new("table")?.class("documents-table").build();

    // Cabecera
    let header_row = ElementBuilder::new("tr")?.build();
    for column in COLUMNS {
        append_child(&header_row, &ElementBuilder::new("th")?.text(column).build())?;
    }
    let thead = ElementBuilder::new("thead")?.child(header_row)?.build();
    append_child(&table, &thead)?;

    // Filas: solo los primeros N documentos, en el orden del servidor
    let tbody = ElementBuilder::new("tbody")?.build();
    let catalog = CatalogViewModel::new(state.clone());
    for doc in catalog.displayed_documents() {
        let row = CatalogViewModel::display_row(&doc);
        append_child(&tbody, &render_document_row(&row)?)?;
    }
    append_child(&table, &tbody)?;
    append_child(&section, &table)?;

    Ok(section)
}

fn render_document_row(row: &DocumentRow) -> Result<Element, JsValue> {
    let tier_badge = ElementBuilder::new("span")?
        .class(&format!("tier-badge {}", row.tier_class))
        .text(row.tier_label)
        .build();

    let status_badge = ElementBuilder::new("span")?
        .class(row.badge_class)
        .text(row.badge_label)
        .build();

    Ok(ElementBuilder::new("tr")?
        .child(ElementBuilder::new("td")?.text(&row.filename).build())?
        .child(ElementBuilder::new("td")?.text(&row.file_type).build())?
        .child(ElementBuilder::new("td")?.text(&row.original_size).build())?
        .child(ElementBuilder::new("td")?.text(&row.optimized_size).build())?
        .child(
            ElementBuilder::new("td")?
                .class(row.savings_class)
                .text(&row.savings_text)
                .build(),
        )?
        .child(ElementBuilder::new("td")?.child(tier_badge)?.build())?
        .child(ElementBuilder::new("td")?.text(&row.upload_date).build())?
        .child(ElementBuilder::new("td")?.child(status_badge)?.build())?
        .build())
}
