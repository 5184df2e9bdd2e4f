// ============================================================================
// CATALOG VIEWMODEL - Proyección de catálogo y estadísticas para la vista
// ============================================================================
// Devuelve valores presentacionales; las vistas solo construyen DOM con ellos.
// ============================================================================

use chrono::{DateTime, NaiveDateTime};

use crate::models::{Document, FileTypeBreakdown, StorageStats};
use crate::state::ViewState;
use crate::utils::constants::MAX_DISPLAYED_DOCUMENTS;
use crate::utils::format::{format_bytes, savings_color, savings_text};

/// Fila presentacional de un documento del catálogo
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentRow {
    pub filename: String,
    pub file_type: String,
    pub original_size: String,
    pub optimized_size: String,
    pub savings_text: String,
    pub savings_class: &'static str,
    pub tier_label: &'static str,
    pub tier_class: String,
    pub badge_label: &'static str,
    pub badge_class: &'static str,
    pub upload_date: String,
}

/// Las cuatro tarjetas de estadísticas agregadas
#[derive(Clone, Debug, PartialEq)]
pub struct StatsCards {
    pub total_documents: String,
    pub original_size: String,
    pub optimized_size: String,
    pub savings_text: String,
    pub savings_class: &'static str,
}

/// Fila presentacional del desglose por tipo de archivo
#[derive(Clone, Debug, PartialEq)]
pub struct BreakdownRow {
    pub file_type: String,
    pub count: String,
    pub original_size: String,
    pub optimized_size: String,
    pub savings_text: String,
    pub savings_class: &'static str,
}

/// ViewModel del catálogo - SOLO lógica de presentación
pub struct CatalogViewModel {
    state: ViewState,
}

impl CatalogViewModel {
    pub fn new(state: ViewState) -> Self {
        Self { state }
    }

    /// Los primeros N documentos en el orden del servidor.
    /// Proyección sobre el snapshot: no muta la lista subyacente.
    pub fn displayed_documents(&self) -> Vec<Document> {
        self.state
            .documents()
            .into_iter()
            .take(MAX_DISPLAYED_DOCUMENTS)
            .collect()
    }

    /// Mapear un documento a su fila presentacional
    pub fn display_row(doc: &Document) -> DocumentRow {
        let savings = savings_color(doc.original_size, doc.optimized_size);
        let (badge_label, badge_class) = if doc.is_duplicate {
            ("Duplicate", "duplicate-badge")
        } else {
            ("Original", "original-badge")
        };

        DocumentRow {
            filename: doc.original_filename.clone(),
            file_type: doc.file_type.clone(),
            original_size: format_bytes(doc.original_size),
            optimized_size: format_bytes(doc.optimized_size),
            savings_text: savings_text(doc.original_size, doc.optimized_size),
            savings_class: savings.css_class(),
            tier_label: doc.tier.label(),
            tier_class: doc.tier.css_class(),
            badge_label,
            badge_class,
            upload_date: format_upload_date(doc.upload_date.as_deref()),
        }
    }

    /// Mapear las estadísticas agregadas a sus tarjetas
    pub fn display_stats(stats: &StorageStats) -> StatsCards {
        let original = Some(stats.total_original_size);
        let optimized = Some(stats.total_optimized_size);

        StatsCards {
            total_documents: stats.total_documents.to_string(),
            original_size: format_bytes(original),
            optimized_size: format_bytes(optimized),
            savings_text: savings_text(original, optimized),
            savings_class: savings_color(original, optimized).css_class(),
        }
    }

    /// Mapear una entrada del desglose por tipo a su fila
    pub fn display_breakdown_row(entry: &FileTypeBreakdown) -> BreakdownRow {
        let savings = savings_color(entry.original_size, entry.optimized_size);

        BreakdownRow {
            file_type: entry.file_type.clone(),
            count: entry.count.to_string(),
            original_size: format_bytes(entry.original_size),
            optimized_size: format_bytes(entry.optimized_size),
            savings_text: savings_text(entry.original_size, entry.optimized_size),
            savings_class: savings.css_class(),
        }
    }
}

/// Fecha de subida como "YYYY-MM-DD". El backend manda datetimes naive
/// (sin zona), pero aceptamos también RFC3339 completo.
fn format_upload_date(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return "-".to_string();
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%Y-%m-%d").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%Y-%m-%d").to_string();
    }
    "-".to_string()
}
