// ============================================================================
// STATS - Agregados de almacenamiento del backend
// ============================================================================

use serde::{Deserialize, Serialize};

/// Estadísticas agregadas de `/stats/`.
/// El backend también envía `total_savings` y `savings_percentage`; se ignoran
/// porque el dashboard deriva sus propias cifras con el mismo cálculo que usa
/// para cada fila.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct StorageStats {
    #[serde(default)]
    pub total_documents: u64,
    #[serde(default)]
    pub total_original_size: u64,
    #[serde(default)]
    pub total_optimized_size: u64,
}

/// Una entrada de `/metrics/breakdown`: agregados por tipo de archivo.
/// El backend manda "unknown" para documentos sin tipo.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct FileTypeBreakdown {
    pub file_type: String,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub original_size: Option<u64>,
    #[serde(default)]
    pub optimized_size: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_ignora_campos_derivados() {
        let stats: StorageStats = serde_json::from_str(
            r#"{
                "total_documents": 5,
                "total_original_size": 1000,
                "total_optimized_size": 600,
                "total_savings": 400,
                "savings_percentage": 40.0
            }"#,
        )
        .unwrap();
        assert_eq!(stats.total_documents, 5);
        assert_eq!(stats.total_original_size, 1000);
        assert_eq!(stats.total_optimized_size, 600);
    }

    #[test]
    fn breakdown_parsea_entrada() {
        let rows: Vec<FileTypeBreakdown> = serde_json::from_str(
            r#"[{
                "file_type": "pdf",
                "count": 3,
                "original_size": 3000,
                "optimized_size": 1800,
                "savings": 1200,
                "savings_percent": 40.0
            }]"#,
        )
        .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].file_type, "pdf");
        assert_eq!(rows[0].count, 3);
        assert_eq!(rows[0].original_size, Some(3000));
    }
}
