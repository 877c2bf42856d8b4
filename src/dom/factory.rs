// ============================================================================
// FACTORY - Construir un elemento completo desde un mapa de opciones
// ============================================================================
// Despacho por clave en tres niveles, en orden fijo:
//   (a) operaciones del builder (conjunto enumerado)
//   (b) método nativo del elemento (capability probe vía Reflect)
//   (c) asignación directa de propiedad (fallback)
// Así un mismo mapa puede mezclar conveniencias del builder (class, attr)
// con propiedades nativas crudas (p.ej. un tabIndex numérico).
// ============================================================================

use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

use crate::dom::builder::ElementBuilder;
use crate::dom::element;
use crate::error::Result;
use crate::value::{Map, Value};

/// Contenido de un elemento: texto plano o lista de hijos estructurales.
/// Las dos formas son mutuamente excluyentes por construcción.
#[derive(Clone, Debug)]
pub enum Children {
    Text(String),
    Nodes(Vec<Value>),
}

impl Default for Children {
    fn default() -> Self {
        Children::Text(String::new())
    }
}

impl From<&str> for Children {
    fn from(value: &str) -> Self {
        Children::Text(value.to_string())
    }
}

impl From<String> for Children {
    fn from(value: String) -> Self {
        Children::Text(value)
    }
}

impl From<Vec<Value>> for Children {
    fn from(value: Vec<Value>) -> Self {
        Children::Nodes(value)
    }
}

impl From<Vec<Element>> for Children {
    fn from(value: Vec<Element>) -> Self {
        Children::Nodes(value.into_iter().map(Value::Node).collect())
    }
}

impl From<Vec<ElementBuilder>> for Children {
    fn from(value: Vec<ElementBuilder>) -> Self {
        Children::Nodes(value.into_iter().map(Value::Builder).collect())
    }
}

/// Construir un elemento: tipo + opciones + contenido.
/// Devuelve el elemento nativo crudo; el builder no escapa de esta llamada.
pub fn build(tag: &str, options: Map, children: impl Into<Children>) -> Result<Element> {
    log::debug!("🔨 build <{}> con {} opciones", tag, options.len());

    let mut builder = ElementBuilder::new(tag)?;
    for (key, value) in options.iter() {
        builder = dispatch(builder, key, value)?;
    }

    match children.into() {
        Children::Text(text) => element::set_text_content(builder.element(), &text),
        Children::Nodes(nodes) => {
            builder = builder.children(nodes)?;
        }
    }

    Ok(builder.build())
}

fn dispatch(builder: ElementBuilder, key: &str, value: &Value) -> Result<ElementBuilder> {
    // (a) operaciones del builder, conjunto fijo
    match key {
        "class" => return builder.class(value.clone()),
        "attr" => return builder.attr(value.clone(), None),
        "data" => return builder.data(value.clone(), None),
        "attribute" => return apply_attribute(builder, value),
        "listeners" => return builder.listeners(value.clone()),
        "children" => return builder.children(value.clone()),
        _ => {}
    }

    let target: JsValue = builder.element().clone().into();
    let key_js = JsValue::from_str(key);

    // (b) método nativo del elemento
    let prop = Reflect::get(&target, &key_js)?;
    if prop.is_function() {
        let method: Function = prop.unchecked_into();
        method.call1(&target, &value.to_js())?;
        return Ok(builder);
    }

    // (c) asignación directa de propiedad
    log::debug!("↪ propiedad directa: {}", key);
    Reflect::set(&target, &key_js, &value.to_js())?;
    Ok(builder)
}

/// La clave "attribute" acepta dos formas: un mapa fija cada par como un
/// atributo; un valor escalar fija un atributo llamado literalmente
/// "attribute".
fn apply_attribute(builder: ElementBuilder, value: &Value) -> Result<ElementBuilder> {
    match value {
        Value::Map(map) => {
            let mut builder = builder;
            for (key, value) in map.iter() {
                builder = builder.attribute(key, value.clone())?;
            }
            Ok(builder)
        }
        other => builder.attribute("attribute", other.clone()),
    }
}
