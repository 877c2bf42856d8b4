// ============================================================================
// EVENT HANDLING - Sistema de eventos
// ============================================================================
// GESTIÓN DE MEMORY LEAKS:
// - Para listeners en elementos del DOM: cuando el elemento se destruye,
//   el navegador automáticamente limpia los listeners asociados. Por lo tanto,
//   closure.forget() es seguro para listeners locales.
// - Este crate solo REGISTRA listeners; el despacho y el orden de invocación
//   pertenecen al navegador.
// ============================================================================

use std::fmt;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event};

use crate::error::Result;

/// Callable clonable para registrar como listener.
/// Envuelve un `Rc<dyn Fn(Event)>`: clonar un Handler comparte el mismo
/// callable, de modo que un Value puede copiarse sin duplicar estado.
#[derive(Clone)]
pub struct Handler {
    f: Rc<dyn Fn(Event)>,
}

impl Handler {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(Event) + 'static,
    {
        Self { f: Rc::new(f) }
    }

    /// Invocar el callable directamente
    pub fn call(&self, event: Event) {
        (self.f)(event);
    }

    /// Convertir a función JS (para property fallback o argumentos de métodos
    /// nativos). El closure se cede al runtime JS con forget().
    pub fn to_js(&self) -> JsValue {
        let f = self.f.clone();
        let closure = Closure::wrap(Box::new(move |event: Event| {
            f(event);
        }) as Box<dyn FnMut(Event)>);
        let js = closure.as_ref().clone();
        closure.forget();
        js
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Handler")
    }
}

/// Registrar un handler para un evento sobre el elemento.
/// Nota: closure.forget() es necesario para mantener el closure vivo en
/// Rust WASM; el navegador lo libera junto con el elemento.
pub fn add_listener(element: &Element, event_type: &str, handler: &Handler) -> Result<()> {
    let f = handler.f.clone();
    let closure = Closure::wrap(Box::new(move |event: Event| {
        f(event);
    }) as Box<dyn FnMut(Event)>);
    element.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Helper para registrar un closure Rust directamente, sin pasar por Handler
pub fn on<F>(element: &Element, event_type: &str, f: F) -> Result<()>
where
    F: Fn(Event) + 'static,
{
    add_listener(element, event_type, &Handler::new(f))
}
