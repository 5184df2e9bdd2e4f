// ============================================================================
// SESSION CONTROLLER - Ciclo de vida de fetch/upload
// ============================================================================
// Único dueño del ViewState: las vistas leen snapshots y llaman aquí.
// Máquina de estados explícita en lugar de flags sueltos.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use futures::join;

use crate::services::DocumentApi;
use crate::state::ViewState;

/// Fase de la sesión del dashboard
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// Recién creada, sin fetches emitidos
    Idle,
    /// Fetches iniciales en vuelo
    Loading,
    /// Datos asentados (con o sin errores parciales)
    Ready,
    /// Upload en curso
    Uploading,
}

/// Controlador de sesión, genérico sobre el API para poder probarse sin red
pub struct SessionController<A: DocumentApi> {
    api: A,
    state: ViewState,
    phase: Rc<RefCell<SessionPhase>>,
}

impl<A: DocumentApi + Clone> Clone for SessionController<A> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            state: self.state.clone(),
            phase: self.phase.clone(),
        }
    }
}

impl<A: DocumentApi> SessionController<A> {
    pub fn new(api: A, state: ViewState) -> Self {
        Self {
            api,
            state,
            phase: Rc::new(RefCell::new(SessionPhase::Idle)),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        *self.phase.borrow()
    }

    fn set_phase(&self, phase: SessionPhase) {
        *self.phase.borrow_mut() = phase;
    }

    /// Carga inicial: los fetches son independientes y concurrentes, sin
    /// orden definido entre ellos. Cada uno actualiza solo su slice; un
    /// fallo en uno no bloquea a los demás. Ready cuando todos asentaron.
    pub async fn load(&self) {
        self.set_phase(SessionPhase::Loading);
        join!(
            self.refresh_stats(),
            self.refresh_documents(),
            self.refresh_breakdown()
        );
        self.set_phase(SessionPhase::Ready);
    }

    /// Subir un archivo. En éxito se re-piden stats, documentos y desglose
    /// (refresh completo, nunca merge incremental); en fallo el ViewState
    /// queda intacto y el error se devuelve para que la vista lo notifique.
    pub async fn upload(&self, file: A::Upload) -> Result<(), String> {
        if self.phase() == SessionPhase::Uploading {
            log::warn!("⚠️ Upload ignorado: ya hay una subida en curso");
            return Err("Ya hay una subida en curso".to_string());
        }

        self.set_phase(SessionPhase::Uploading);
        self.state.set_uploading(true);

        let result = self.api.upload(file).await;

        // La bandera vuelve a false incondicionalmente al asentarse
        self.state.set_uploading(false);
        self.set_phase(SessionPhase::Ready);

        match result {
            Ok(()) => {
                join!(
                    self.refresh_stats(),
                    self.refresh_documents(),
                    self.refresh_breakdown()
                );
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Error subiendo archivo: {}", e);
                Err(e)
            }
        }
    }

    /// Buscar en el catálogo. Query vacía vuelve a la lista normal; el
    /// resultado reemplaza el slice de documentos completo.
    pub async fn search(&self, query: &str) {
        let query = query.trim();
        self.state.set_search_query(query.to_string());
        if query.is_empty() {
            self.refresh_documents().await;
            return;
        }

        match self.api.search_documents(query).await {
            Ok(documents) => self.state.apply_documents(documents),
            Err(e) => log::error!("❌ Error buscando documentos: {}", e),
        }
    }

    async fn refresh_stats(&self) {
        match self.api.fetch_stats().await {
            Ok(stats) => self.state.apply_stats(stats),
            // El slice conserva su valor anterior; la vista degrada sola
            Err(e) => log::error!("❌ Error obteniendo estadísticas: {}", e),
        }
    }

    async fn refresh_documents(&self) {
        match self.api.fetch_documents().await {
            Ok(documents) => self.state.apply_documents(documents),
            Err(e) => log::error!("❌ Error obteniendo documentos: {}", e),
        }
    }

    async fn refresh_breakdown(&self) {
        match self.api.fetch_breakdown().await {
            Ok(breakdown) => self.state.apply_breakdown(breakdown),
            Err(e) => log::error!("❌ Error obteniendo desglose: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Document, FileTypeBreakdown, RawDocument, StorageStats};
    use async_trait::async_trait;
    use futures::executor::block_on;
    use std::cell::Cell;

    fn doc(id: u64) -> Document {
        Document::from_raw(RawDocument {
            id,
            original_filename: format!("doc-{}.pdf", id),
            file_type: None,
            original_size: Some(1000),
            optimized_size: Some(600),
            tier: None,
            is_duplicate: None,
            upload_date: None,
        })
    }

    fn stats(total: u64) -> StorageStats {
        StorageStats {
            total_documents: total,
            total_original_size: 1000,
            total_optimized_size: 600,
        }
    }

    /// API en memoria que cuenta llamadas y devuelve resultados fijados
    #[derive(Clone)]
    struct FakeApi {
        inner: Rc<FakeInner>,
    }

    struct FakeInner {
        stats_calls: Cell<u32>,
        docs_calls: Cell<u32>,
        breakdown_calls: Cell<u32>,
        search_calls: Cell<u32>,
        upload_calls: Cell<u32>,
        stats_result: RefCell<Result<StorageStats, String>>,
        docs_result: RefCell<Result<Vec<Document>, String>>,
        search_result: RefCell<Result<Vec<Document>, String>>,
        upload_result: RefCell<Result<(), String>>,
    }

    impl FakeApi {
        fn new() -> Self {
            Self {
                inner: Rc::new(FakeInner {
                    stats_calls: Cell::new(0),
                    docs_calls: Cell::new(0),
                    breakdown_calls: Cell::new(0),
                    search_calls: Cell::new(0),
                    upload_calls: Cell::new(0),
                    stats_result: RefCell::new(Ok(stats(5))),
                    docs_result: RefCell::new(Ok(vec![doc(1), doc(2)])),
                    search_result: RefCell::new(Ok(vec![doc(7)])),
                    upload_result: RefCell::new(Ok(())),
                }),
            }
        }
    }

    #[async_trait(?Send)]
    impl DocumentApi for FakeApi {
        type Upload = ();

        async fn fetch_stats(&self) -> Result<StorageStats, String> {
            self.inner.stats_calls.set(self.inner.stats_calls.get() + 1);
            self.inner.stats_result.borrow().clone()
        }

        async fn fetch_documents(&self) -> Result<Vec<Document>, String> {
            self.inner.docs_calls.set(self.inner.docs_calls.get() + 1);
            self.inner.docs_result.borrow().clone()
        }

        async fn fetch_breakdown(&self) -> Result<Vec<FileTypeBreakdown>, String> {
            self.inner
                .breakdown_calls
                .set(self.inner.breakdown_calls.get() + 1);
            Ok(Vec::new())
        }

        async fn search_documents(&self, _query: &str) -> Result<Vec<Document>, String> {
            self.inner.search_calls.set(self.inner.search_calls.get() + 1);
            self.inner.search_result.borrow().clone()
        }

        async fn upload(&self, _file: ()) -> Result<(), String> {
            self.inner.upload_calls.set(self.inner.upload_calls.get() + 1);
            self.inner.upload_result.borrow().clone()
        }
    }

    fn controller(api: FakeApi) -> SessionController<FakeApi> {
        SessionController::new(api, ViewState::new())
    }

    #[test]
    fn carga_inicial_puebla_el_estado() {
        let api = FakeApi::new();
        let ctrl = controller(api.clone());
        assert_eq!(ctrl.phase(), SessionPhase::Idle);

        block_on(ctrl.load());

        assert_eq!(ctrl.phase(), SessionPhase::Ready);
        assert_eq!(api.inner.stats_calls.get(), 1);
        assert_eq!(api.inner.docs_calls.get(), 1);
        assert_eq!(api.inner.breakdown_calls.get(), 1);
        assert_eq!(ctrl.state.documents().len(), 2);
        assert_eq!(ctrl.state.stats().unwrap().total_documents, 5);
    }

    #[test]
    fn fallo_en_un_fetch_no_bloquea_al_otro() {
        let api = FakeApi::new();
        *api.inner.stats_result.borrow_mut() = Err("HTTP 500: error".to_string());
        let ctrl = controller(api.clone());

        block_on(ctrl.load());

        // stats quedó sin cargar pero los documentos se aplicaron
        assert_eq!(ctrl.phase(), SessionPhase::Ready);
        assert!(ctrl.state.stats().is_none());
        assert_eq!(ctrl.state.documents().len(), 2);
    }

    #[test]
    fn upload_fallido_no_toca_los_datos() {
        let api = FakeApi::new();
        let ctrl = controller(api.clone());
        block_on(ctrl.load());
        *api.inner.upload_result.borrow_mut() = Err("HTTP 500: boom".to_string());

        let result = block_on(ctrl.upload(()));

        assert!(result.is_err());
        assert!(!ctrl.state.is_uploading());
        assert_eq!(ctrl.phase(), SessionPhase::Ready);
        // Sin refresh: una sola llamada de la carga inicial
        assert_eq!(api.inner.stats_calls.get(), 1);
        assert_eq!(api.inner.docs_calls.get(), 1);
        assert_eq!(ctrl.state.documents().len(), 2);
        assert!(ctrl.state.stats().is_some());
    }

    #[test]
    fn upload_exitoso_refresca_todo_una_vez() {
        let api = FakeApi::new();
        let ctrl = controller(api.clone());
        block_on(ctrl.load());

        let result = block_on(ctrl.upload(()));

        assert!(result.is_ok());
        assert!(!ctrl.state.is_uploading());
        assert_eq!(ctrl.phase(), SessionPhase::Ready);
        assert_eq!(api.inner.upload_calls.get(), 1);
        // Carga inicial + refresh post-upload: exactamente una re-petición
        assert_eq!(api.inner.stats_calls.get(), 2);
        assert_eq!(api.inner.docs_calls.get(), 2);
        assert_eq!(api.inner.breakdown_calls.get(), 2);
    }

    #[test]
    fn upload_doble_rechazado() {
        let api = FakeApi::new();
        let ctrl = controller(api.clone());
        ctrl.set_phase(SessionPhase::Uploading);

        let result = block_on(ctrl.upload(()));

        assert!(result.is_err());
        assert_eq!(api.inner.upload_calls.get(), 0);
    }

    #[test]
    fn bandera_uploading_durante_la_subida() {
        let api = FakeApi::new();
        let ctrl = controller(api.clone());

        // El subscriber observa la bandera en el momento de la notificación
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = seen.clone();
        let state_clone = ctrl.state.clone();
        ctrl.state
            .subscribe(move || seen_clone.borrow_mut().push(state_clone.is_uploading()));

        block_on(ctrl.upload(())).unwrap();

        // true al empezar, false al asentarse
        assert_eq!(seen.borrow().first(), Some(&true));
        assert!(!ctrl.state.is_uploading());
    }

    #[test]
    fn busqueda_reemplaza_documentos() {
        let api = FakeApi::new();
        let ctrl = controller(api.clone());
        block_on(ctrl.load());

        block_on(ctrl.search("factura"));

        assert_eq!(api.inner.search_calls.get(), 1);
        assert_eq!(ctrl.state.search_query(), "factura");
        let docs = ctrl.state.documents();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].id, 7);
    }

    #[test]
    fn busqueda_vacia_recarga_la_lista() {
        let api = FakeApi::new();
        let ctrl = controller(api.clone());
        block_on(ctrl.load());

        block_on(ctrl.search("   "));

        assert_eq!(api.inner.search_calls.get(), 0);
        assert_eq!(api.inner.docs_calls.get(), 2);
        assert_eq!(ctrl.state.documents().len(), 2);
    }

    #[test]
    fn busqueda_fallida_conserva_documentos() {
        let api = FakeApi::new();
        let ctrl = controller(api.clone());
        block_on(ctrl.load());
        *api.inner.search_result.borrow_mut() = Err("Network error: offline".to_string());

        block_on(ctrl.search("factura"));

        assert_eq!(ctrl.state.documents().len(), 2);
    }
}
