// ============================================================================
// BREAKDOWN TABLE VIEW - Desglose de almacenamiento por tipo de archivo
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::models::FileTypeBreakdown;
use crate::viewmodels::CatalogViewModel;

const COLUMNS: [&str; 5] = ["Type", "Count", "Original Size", "Optimized Size", "Savings"];

/// Renderizar la sección de desglose por tipo
pub fn render_breakdown_section(breakdown: &[FileTypeBreakdown]) -> Result<Element, JsValue> {
    let section = ElementBuilder::new("div")?
        .class("breakdown-section")
        .child(
            ElementBuilder::new("h2")?
                .text("Storage by File Type")
                .build(),
        )?
        .build();

    let table = ElementBuilder::new("table")?.class("breakdown-table").build();

    let header_row = ElementBuilder::new("tr")?.build();
    for column in COLUMNS {
        append_child(&header_row, &ElementBuilder::new("th")?.text(column).build())?;
    }
    let thead = ElementBuilder::new("thead")?.child(header_row)?.build();
    append_child(&table, &thead)?;

    let tbody = ElementBuilder::new("tbody")?.build();
    for entry in breakdown {
        let row = CatalogViewModel::display_breakdown_row(entry);
        let tr = ElementBuilder::new("tr")?
            .child(ElementBuilder::new("td")?.text(&row.file_type).build())?
            .child(ElementBuilder::new("td")?.text(&row.count).build())?
            .child(ElementBuilder::new("td")?.text(&row.original_size).build())?
            .child(ElementBuilder::new("td")?.text(&row.optimized_size).build())?
            .child(
                ElementBuilder::new("td")?
                    .class(row.savings_class)
                    .text(&row.savings_text)
                    .build(),
            )?
            .build();
        append_child(&tbody, &tr)?;
    }
    append_child(&table, &tbody)?;
    append_child(&section, &table)?;

    Ok(section)
}
