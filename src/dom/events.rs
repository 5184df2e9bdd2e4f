// ============================================================================
// EVENT HANDLING - Sistema de eventos
// ============================================================================
// Los listeners se registran con Closure + forget(). Cuando el elemento se
// destruye (p.ej. con set_inner_html("")), el navegador limpia los listeners
// asociados, así que forget() es seguro para listeners locales.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, KeyboardEvent};

/// Helper para crear change handler simple (inputs de archivo, selects)
pub fn on_change<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    element.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())?;
    // forget() mantiene el closure vivo mientras exista el elemento
    closure.forget();
    Ok(())
}

/// Helper para crear keydown handler simple
pub fn on_keydown<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(KeyboardEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(KeyboardEvent)>);
    element.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
