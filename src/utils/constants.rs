/// Máximo de documentos mostrados en el catálogo de recientes.
/// El backend devuelve la lista completa; la proyección es solo visual.
pub const MAX_DISPLAYED_DOCUMENTS: usize = 10;
