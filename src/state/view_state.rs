// ============================================================================
// VIEW STATE - Estado de la vista con Rc<RefCell> + notificaciones
// ============================================================================
// Contenedor propiedad del SessionController: las vistas solo leen snapshots.
// Cada operación de actualización es un reemplazo atómico del slice completo.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{Document, FileTypeBreakdown, StorageStats};

/// Estado de la vista del dashboard
#[derive(Clone)]
pub struct ViewState {
    documents: Rc<RefCell<Vec<Document>>>,
    stats: Rc<RefCell<Option<StorageStats>>>,
    breakdown: Rc<RefCell<Vec<FileTypeBreakdown>>>,
    uploading: Rc<RefCell<bool>>,
    search_query: Rc<RefCell<String>>,

    // Callbacks para re-renderizar cuando cambia el estado
    change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl ViewState {
    /// Crear estado vacío (inicio de sesión de dashboard)
    pub fn new() -> Self {
        Self {
            documents: Rc::new(RefCell::new(Vec::new())),
            stats: Rc::new(RefCell::new(None)),
            breakdown: Rc::new(RefCell::new(Vec::new())),
            uploading: Rc::new(RefCell::new(false)),
            search_query: Rc::new(RefCell::new(String::new())),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Reemplazar la lista de documentos completa
    pub fn apply_documents(&self, documents: Vec<Document>) {
        *self.documents.borrow_mut() = documents;
        self.notify_change();
    }

    /// Reemplazar las estadísticas agregadas
    pub fn apply_stats(&self, stats: StorageStats) {
        *self.stats.borrow_mut() = Some(stats);
        self.notify_change();
    }

    /// Reemplazar el desglose por tipo de archivo
    pub fn apply_breakdown(&self, breakdown: Vec<FileTypeBreakdown>) {
        *self.breakdown.borrow_mut() = breakdown;
        self.notify_change();
    }

    /// Marcar si hay un upload en curso
    pub fn set_uploading(&self, uploading: bool) {
        *self.uploading.borrow_mut() = uploading;
        self.notify_change();
    }

    /// Guardar el texto de búsqueda SIN notificar: se actualiza en cada
    /// pulsación y un re-render aquí perdería el foco del input
    pub fn set_search_query(&self, query: String) {
        *self.search_query.borrow_mut() = query;
    }

    /// Snapshot de documentos
    pub fn documents(&self) -> Vec<Document> {
        self.documents.borrow().clone()
    }

    /// Snapshot de estadísticas (None = aún no cargadas)
    pub fn stats(&self) -> Option<StorageStats> {
        self.stats.borrow().clone()
    }

    /// Snapshot del desglose por tipo
    pub fn breakdown(&self) -> Vec<FileTypeBreakdown> {
        self.breakdown.borrow().clone()
    }

    pub fn is_uploading(&self) -> bool {
        *self.uploading.borrow()
    }

    pub fn search_query(&self) -> String {
        self.search_query.borrow().clone()
    }

    /// Suscribirse a cambios de estado
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers
    fn notify_change(&self) {
        let subscribers: Vec<Rc<dyn Fn()>> = self.change_subscribers.borrow().clone();
        for callback in subscribers {
            callback();
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
