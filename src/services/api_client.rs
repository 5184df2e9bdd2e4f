// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::config::CONFIG;
use crate::models::{Document, FileTypeBreakdown, RawDocument, StorageStats};

/// Operaciones del servicio de documentos que consume el dashboard.
/// El SessionController es genérico sobre este trait para poder ejercitar
/// su máquina de estados sin navegador.
#[async_trait(?Send)]
pub trait DocumentApi {
    /// Tipo del payload de upload (en producción, un `web_sys::File`)
    type Upload;

    async fn fetch_stats(&self) -> Result<StorageStats, String>;
    async fn fetch_documents(&self) -> Result<Vec<Document>, String>;
    async fn fetch_breakdown(&self) -> Result<Vec<FileTypeBreakdown>, String>;
    async fn search_documents(&self, query: &str) -> Result<Vec<Document>, String>;
    async fn upload(&self, file: Self::Upload) -> Result<(), String>;
}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.backend_url().to_string(),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl DocumentApi for ApiClient {
    type Upload = File;

    /// Obtener estadísticas agregadas de almacenamiento
    async fn fetch_stats(&self) -> Result<StorageStats, String> {
        let url = format!("{}/stats/", self.base_url);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }

        response
            .json::<StorageStats>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Listar documentos (orden del servidor)
    async fn fetch_documents(&self) -> Result<Vec<Document>, String> {
        let url = format!("{}/documents/", self.base_url);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }

        let raw = response
            .json::<Vec<RawDocument>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;

        log::info!("📄 Documentos recibidos: {}", raw.len());
        Ok(raw.into_iter().map(Document::from_raw).collect())
    }

    /// Desglose de almacenamiento por tipo de archivo
    async fn fetch_breakdown(&self) -> Result<Vec<FileTypeBreakdown>, String> {
        let url = format!("{}/metrics/breakdown", self.base_url);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }

        response
            .json::<Vec<FileTypeBreakdown>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Buscar documentos por contenido
    async fn search_documents(&self, query: &str) -> Result<Vec<Document>, String> {
        let url = format!("{}/documents/search", self.base_url);

        log::info!("🔍 Buscando documentos: {:?}", query);

        let response = Request::get(&url)
            .query([("query", query)])
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }

        let raw = response
            .json::<Vec<RawDocument>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;

        log::info!("✅ Búsqueda completada: {} resultados", raw.len());
        Ok(raw.into_iter().map(Document::from_raw).collect())
    }

    /// Subir un archivo como multipart (campo "file")
    async fn upload(&self, file: File) -> Result<(), String> {
        let url = format!("{}/upload/", self.base_url);

        log::info!("📤 Subiendo archivo: {}", file.name());

        let form = FormData::new().map_err(|e| format!("Form error: {:?}", e))?;
        form.append_with_blob_and_filename("file", &file, &file.name())
            .map_err(|e| format!("Form error: {:?}", e))?;

        let response = Request::post(&url)
            .body(form)
            .map_err(|e| format!("Request build error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if response.ok() {
            log::info!("✅ Archivo subido: {}", file.name());
            Ok(())
        } else {
            Err(format!("HTTP {}: {}", response.status(), response.status_text()))
        }
    }
}
