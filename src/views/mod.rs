pub mod app;
pub mod breakdown_table;
pub mod document_table;
pub mod search_bar;
pub mod stats_cards;
pub mod upload_panel;

pub use app::render_app;
pub use breakdown_table::render_breakdown_section;
pub use document_table::render_documents_section;
pub use search_bar::render_search_bar;
pub use stats_cards::render_stats_section;
pub use upload_panel::render_upload_panel;
