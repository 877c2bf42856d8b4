use serde::{Deserialize, Serialize};

/// Configuración de inicialización del crate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Activar logging hacia la consola del navegador
    pub enable_logging: bool,
    /// Nivel debug en lugar de info
    pub debug: bool,
    /// Instalar console_error_panic_hook
    pub panic_hook: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enable_logging: true,
            debug: false,
            panic_hook: true,
        }
    }
}
