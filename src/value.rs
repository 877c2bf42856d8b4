// ============================================================================
// VALUE - Modelo de valores dinámicos para las opciones del factory
// ============================================================================
// Las opciones de `build()` son heterogéneas: strings, números, booleans,
// mapas anidados, handlers de eventos, elementos nativos o builders. Este
// enum las representa de forma explícita, con coerción a string para
// atributos y conversión a JsValue para los tiers que cruzan a JS.
// ============================================================================

use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::dom::builder::ElementBuilder;
use crate::dom::events::Handler;
use crate::error::{DomError, Result};

/// Valor dinámico de una opción
#[derive(Clone, Debug, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Num(f64),
    Str(String),
    List(Vec<Value>),
    Map(Map),
    Handler(Handler),
    Node(Element),
    Builder(ElementBuilder),
}

impl Value {
    /// Nombre del tipo, para mensajes de error
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Num(_) => "number",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Handler(_) => "handler",
            Value::Node(_) => "node",
            Value::Builder(_) => "builder",
        }
    }

    /// Coerción a string para valores de atributo/dataset.
    /// Null se convierte en string vacío; los valores estructurados no
    /// tienen representación de atributo y se rechazan.
    pub fn to_attr_string(&self) -> Result<String> {
        match self {
            Value::Null => Ok(String::new()),
            Value::Str(s) => Ok(s.clone()),
            Value::Bool(b) => Ok(b.to_string()),
            Value::Num(n) => {
                if n.fract() == 0.0 && n.is_finite() && n.abs() < 9e15 {
                    Ok(format!("{}", *n as i64))
                } else {
                    Ok(n.to_string())
                }
            }
            other => Err(DomError::invalid(format!(
                "a {} value cannot be used as an attribute string",
                other.kind()
            ))),
        }
    }

    /// Conversión a JsValue para el capability probe y el property fallback
    pub fn to_js(&self) -> JsValue {
        match self {
            Value::Null => JsValue::NULL,
            Value::Bool(b) => JsValue::from_bool(*b),
            Value::Num(n) => JsValue::from_f64(*n),
            Value::Str(s) => JsValue::from_str(s),
            Value::List(items) => {
                let arr = js_sys::Array::new();
                for item in items {
                    arr.push(&item.to_js());
                }
                arr.into()
            }
            Value::Map(map) => {
                let obj = js_sys::Object::new();
                for (key, value) in map.iter() {
                    let _ = js_sys::Reflect::set(&obj, &JsValue::from_str(key), &value.to_js());
                }
                obj.into()
            }
            Value::Handler(handler) => handler.to_js(),
            Value::Node(element) => element.clone().into(),
            Value::Builder(builder) => builder.element().clone().into(),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Num(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Num(value as f64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Num(value as f64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Num(value as f64)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

impl From<Vec<String>> for Value {
    fn from(value: Vec<String>) -> Self {
        Value::List(value.into_iter().map(Value::Str).collect())
    }
}

impl From<Vec<&str>> for Value {
    fn from(value: Vec<&str>) -> Self {
        Value::List(value.into_iter().map(Value::from).collect())
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Map(value)
    }
}

impl From<Handler> for Value {
    fn from(value: Handler) -> Self {
        Value::Handler(value)
    }
}

impl From<Element> for Value {
    fn from(value: Element) -> Self {
        Value::Node(value)
    }
}

impl From<ElementBuilder> for Value {
    fn from(value: ElementBuilder) -> Self {
        Value::Builder(value)
    }
}

/// Mapa string → Value con orden de inserción preservado.
/// Re-insertar una clave existente reemplaza el valor en su posición
/// inicial, igual que la asignación sobre un objeto plano.
#[derive(Clone, Debug, Default)]
pub struct Map {
    entries: Vec<(String, Value)>,
}

impl Map {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Variante encadenable de `insert`
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Map {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Map::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}
