// ============================================================================
// MODELS - Estructuras compartidas con el backend
// ============================================================================

pub mod document;
pub mod stats;

pub use document::{Document, RawDocument, Tier};
pub use stats::{FileTypeBreakdown, StorageStats};
