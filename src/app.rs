// ============================================================================
// APP - Aplicación principal
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::services::ApiClient;
use crate::state::ViewState;
use crate::viewmodels::SessionController;
use crate::views::render_app;

/// Aplicación principal: dueña del estado, el controller y el nodo raíz
pub struct App {
    state: ViewState,
    controller: SessionController<ApiClient>,
    root: Option<Element>,
}

impl App {
    /// Crear nueva aplicación y lanzar la carga inicial
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = ViewState::new();
        let controller = SessionController::new(ApiClient::new(), state.clone());

        // Re-renderizar en cada cambio de estado, batcheado con un Timeout
        // de 0ms para agrupar actualizaciones consecutivas
        state.subscribe(move || {
            Timeout::new(0, crate::rerender_app).forget();
        });

        // Carga inicial: stats, documentos y desglose concurrentes
        let controller_init = controller.clone();
        wasm_bindgen_futures::spawn_local(async move {
            controller_init.load().await;
        });

        Ok(Self {
            state,
            controller,
            root: Some(root),
        })
    }

    /// Renderizar aplicación (re-render completo)
    pub fn render(&mut self) -> Result<(), JsValue> {
        if let Some(root) = &self.root {
            // Limpiar contenido anterior
            set_inner_html(root, "");

            let app_view = render_app(&self.state, &self.controller)?;
            append_child(root, &app_view)?;
        }
        Ok(())
    }

    /// Obtener referencia al estado
    pub fn state(&self) -> &ViewState {
        &self.state
    }
}
