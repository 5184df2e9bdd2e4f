// ============================================================================
// STATS CARDS VIEW - Tarjetas de estadísticas agregadas
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::models::StorageStats;
use crate::viewmodels::CatalogViewModel;

/// Renderizar la sección de estadísticas (cuatro tarjetas)
pub fn render_stats_section(stats: &StorageStats) -> Result<Element, JsValue> {
    let cards = CatalogViewModel::display_stats(stats);

    let section = ElementBuilder::new("div")?
        .class("stats-section")
        .child(ElementBuilder::new("h2")?.text("Storage Statistics").build())?
        .build();

    let grid = ElementBuilder::new("div")?.class("stats-grid").build();
    append_child(&grid, &stat_card("Total Documents", &cards.total_documents, None)?)?;
    append_child(&grid, &stat_card("Original Size", &cards.original_size, None)?)?;
    append_child(&grid, &stat_card("Optimized Size", &cards.optimized_size, None)?)?;
    append_child(
        &grid,
        &stat_card("Total Savings", &cards.savings_text, Some(cards.savings_class))?,
    )?;
    append_child(&section, &grid)?;

    Ok(section)
}

fn stat_card(title: &str, value: &str, extra_class: Option<&str>) -> Result<Element, JsValue> {
    let value_class = match extra_class {
        Some(class) => format!("stat-value {}", class),
        None => "stat-value".to_string(),
    };

    Ok(ElementBuilder::new("div")?
        .class("stat-card")
        .child(ElementBuilder::new("h3")?.text(title).build())?
        .child(
            ElementBuilder::new("p")?
                .class(&value_class)
                .text(value)
                .build(),
        )?
        .build())
}
