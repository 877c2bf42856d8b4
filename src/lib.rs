// ============================================================================
// NEXUS-DOM - Construcción declarativa de elementos DOM (RUST PURO)
// ============================================================================
// Dos puntos de entrada:
// - ElementBuilder: builder fluido sobre un único elemento nativo
//   (clases, atributos, dataset, listeners, hijos)
// - build(): factory que arma un elemento completo desde un mapa de opciones
//   y devuelve el elemento nativo crudo
// Todo es síncrono y de un solo hilo; los callbacks de eventos los invoca el
// navegador, este crate solo los registra.
// ============================================================================

mod config;
mod error;
mod value;

pub mod dom;

pub use config::Config;
pub use dom::builder::ElementBuilder;
pub use dom::events::Handler;
pub use dom::factory::{build, Children};
pub use error::{DomError, Result};
pub use value::{Map, Value};

/// Inicializar logging y panic hook según la configuración.
/// Pensado para llamarse una sola vez al arranque de la app anfitriona.
pub fn init(config: &Config) {
    if config.panic_hook {
        console_error_panic_hook::set_once();
    }
    if config.enable_logging {
        let level = if config.debug {
            log::Level::Debug
        } else {
            log::Level::Info
        };
        wasm_logger::init(wasm_logger::Config::new(level));
    }
    log::info!("🚀 nexus-dom inicializado");
}
