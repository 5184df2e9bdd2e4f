pub mod catalog_viewmodel;
pub mod session_controller;

pub use catalog_viewmodel::CatalogViewModel;
pub use session_controller::{SessionController, SessionPhase};
