// ============================================================================
// DOCUMENT - Documento del backend + normalización en la frontera de ingesta
// ============================================================================
// Los defaults de campos opcionales se rellenan UNA vez en `Document::from_raw`,
// nunca en las rutas de presentación.
// ============================================================================

use serde::{Deserialize, Serialize};

/// Tier de almacenamiento asignado por el backend según su política de acceso
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Hot,
    Warm,
    Archive,
    // Tier ausente o desconocido se trata como cold
    #[default]
    #[serde(other)]
    Cold,
}

impl Tier {
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Hot => "hot",
            Tier::Warm => "warm",
            Tier::Cold => "cold",
            Tier::Archive => "archive",
        }
    }

    pub fn css_class(&self) -> String {
        format!("tier-{}", self.label())
    }
}

/// Documento tal como llega del backend (campos opcionales sin resolver)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RawDocument {
    pub id: u64,
    pub original_filename: String,
    #[serde(default)]
    pub file_type: Option<String>,
    #[serde(default)]
    pub original_size: Option<u64>,
    #[serde(default)]
    pub optimized_size: Option<u64>,
    #[serde(default)]
    pub tier: Option<Tier>,
    #[serde(default)]
    pub is_duplicate: Option<bool>,
    #[serde(default)]
    pub upload_date: Option<String>,
}

/// Documento normalizado, inmutable para el resto de la app.
/// Los tamaños siguen siendo opcionales: ausente NO es lo mismo que cero
/// para el cálculo de ahorro.
#[derive(Clone, PartialEq, Debug)]
pub struct Document {
    pub id: u64,
    pub original_filename: String,
    pub file_type: String,
    pub original_size: Option<u64>,
    pub optimized_size: Option<u64>,
    pub tier: Tier,
    pub is_duplicate: bool,
    pub upload_date: Option<String>,
}

impl Document {
    /// Normalizar un documento crudo rellenando los defaults documentados:
    /// file_type ausente => "N/A", tier ausente => cold, is_duplicate
    /// ausente => false.
    pub fn from_raw(raw: RawDocument) -> Self {
        Self {
            id: raw.id,
            original_filename: raw.original_filename,
            file_type: raw.file_type.unwrap_or_else(|| "N/A".to_string()),
            original_size: raw.original_size,
            optimized_size: raw.optimized_size,
            tier: raw.tier.unwrap_or_default(),
            is_duplicate: raw.is_duplicate.unwrap_or(false),
            upload_date: raw.upload_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normaliza_campos_ausentes() {
        let raw: RawDocument =
            serde_json::from_str(r#"{"id": 1, "original_filename": "a.pdf"}"#).unwrap();
        let doc = Document::from_raw(raw);

        assert_eq!(doc.file_type, "N/A");
        assert_eq!(doc.tier, Tier::Cold);
        assert!(!doc.is_duplicate);
        assert_eq!(doc.original_size, None);
        assert_eq!(doc.optimized_size, None);
        assert_eq!(doc.upload_date, None);
    }

    #[test]
    fn conserva_campos_presentes() {
        let raw: RawDocument = serde_json::from_str(
            r#"{
                "id": 7,
                "original_filename": "informe.docx",
                "file_type": "docx",
                "original_size": 2048,
                "optimized_size": 1024,
                "tier": "hot",
                "is_duplicate": true,
                "upload_date": "2024-01-15T10:30:00"
            }"#,
        )
        .unwrap();
        let doc = Document::from_raw(raw);

        assert_eq!(doc.file_type, "docx");
        assert_eq!(doc.tier, Tier::Hot);
        assert!(doc.is_duplicate);
        assert_eq!(doc.original_size, Some(2048));
        assert_eq!(doc.optimized_size, Some(1024));
    }

    #[test]
    fn tier_archive_y_desconocido() {
        let raw: RawDocument = serde_json::from_str(
            r#"{"id": 2, "original_filename": "b.pdf", "tier": "archive"}"#,
        )
        .unwrap();
        assert_eq!(Document::from_raw(raw).tier, Tier::Archive);

        // Un tier que el cliente no conoce cae en cold, igual que ausente
        let raw: RawDocument = serde_json::from_str(
            r#"{"id": 3, "original_filename": "c.pdf", "tier": "glacier"}"#,
        )
        .unwrap();
        assert_eq!(Document::from_raw(raw).tier, Tier::Cold);
    }

    #[test]
    fn ignora_campos_extra_del_backend() {
        // El backend también envía reduction_percentage, etc.
        let raw: RawDocument = serde_json::from_str(
            r#"{"id": 4, "original_filename": "d.jpg", "reduction_percentage": 41.5}"#,
        )
        .unwrap();
        assert_eq!(raw.id, 4);
    }
}
