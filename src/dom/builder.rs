// ============================================================================
// ELEMENT BUILDER - Builder pattern para crear elementos fácilmente
// ============================================================================

use web_sys::Element;

use crate::dom::{element, events};
use crate::error::{DomError, Result};
use crate::value::Value;

/// Builder fluido sobre un único elemento recién creado.
/// Cada operación valida su entrada, muta el elemento envuelto y devuelve el
/// mismo builder para encadenar; una llamada rechazada no deja mutación
/// parcial. El elemento se fija en la construcción y nunca se reemplaza.
#[derive(Clone, Debug)]
pub struct ElementBuilder {
    element: Element,
}

impl ElementBuilder {
    /// Crear nuevo builder para un elemento
    pub fn new(tag: &str) -> Result<Self> {
        Ok(Self {
            element: element::create_element(tag)?,
        })
    }

    /// Agregar clases. Acepta un string (lista de tokens separados por
    /// espacios) o una lista de strings; null o vacío no hace nada.
    pub fn class(self, value: impl Into<Value>) -> Result<Self> {
        let tokens = class_tokens(&value.into())?;
        if tokens.is_empty() {
            return Ok(self);
        }
        let refs: Vec<&str> = tokens.iter().map(String::as_str).collect();
        element::add_classes(&self.element, &refs)?;
        Ok(self)
    }

    /// Establecer atributos. Acepta un mapa nombre → valor, o un nombre
    /// suelto acompañado de `value` (ausente → string vacío).
    pub fn attr(self, attributes: impl Into<Value>, value: Option<&str>) -> Result<Self> {
        match attributes.into() {
            Value::Str(key) => {
                element::set_attribute(&self.element, &key, value.unwrap_or(""))?;
            }
            Value::Map(map) => {
                let mut pairs = Vec::with_capacity(map.len());
                for (key, value) in map.iter() {
                    pairs.push((key.to_string(), value.to_attr_string()?));
                }
                for (key, value) in &pairs {
                    element::set_attribute(&self.element, key, value)?;
                }
            }
            Value::List(_) => {
                return Err(DomError::invalid(
                    "the attributes argument cannot be a list; use a map or a string instead",
                ));
            }
            other => {
                return Err(DomError::invalid(format!(
                    "the attributes argument must be a map or a string, not {}",
                    other.kind()
                )));
            }
        }
        Ok(self)
    }

    /// Establecer entradas del dataset. Mismas formas que `attr`.
    pub fn data(self, data: impl Into<Value>, value: Option<&str>) -> Result<Self> {
        match data.into() {
            Value::Null => {
                return Err(DomError::invalid("the data argument cannot be null"));
            }
            Value::Str(key) => {
                element::set_data(&self.element, &key, value.unwrap_or(""))?;
            }
            Value::Map(map) => {
                let mut pairs = Vec::with_capacity(map.len());
                for (key, value) in map.iter() {
                    pairs.push((key.to_string(), value.to_attr_string()?));
                }
                for (key, value) in &pairs {
                    element::set_data(&self.element, key, value)?;
                }
            }
            Value::List(_) => {
                return Err(DomError::invalid(
                    "the data argument cannot be a list; use a map or a string instead",
                ));
            }
            other => {
                return Err(DomError::invalid(format!(
                    "the data argument must be a map or a string, not {}",
                    other.kind()
                )));
            }
        }
        Ok(self)
    }

    /// Establecer un único atributo. El valor se coerciona a string
    /// (null → string vacío).
    pub fn attribute(self, key: &str, value: impl Into<Value>) -> Result<Self> {
        let value = value.into().to_attr_string()?;
        element::set_attribute(&self.element, key, &value)?;
        Ok(self)
    }

    /// Registrar listeners: mapa nombre-de-evento → handler.
    /// Validación todo-o-nada: si alguna entrada no es un handler, no se
    /// registra ningún listener de esta llamada. Un mapa vacío no hace nada.
    pub fn listeners(self, listeners: impl Into<Value>) -> Result<Self> {
        let map = match listeners.into() {
            Value::Map(map) => map,
            Value::List(_) => {
                return Err(DomError::invalid(
                    "the listeners argument cannot be a list; use a map of event names to handlers",
                ));
            }
            other => {
                return Err(DomError::invalid(format!(
                    "the listeners argument must be a map of event names to handlers, not {}",
                    other.kind()
                )));
            }
        };
        if map.is_empty() {
            return Ok(self);
        }
        let mut pairs = Vec::with_capacity(map.len());
        for (event, value) in map.iter() {
            match value {
                Value::Handler(handler) => pairs.push((event.to_string(), handler.clone())),
                other => {
                    return Err(DomError::invalid(format!(
                        "the handler for event \"{}\" must be callable, not {}",
                        event,
                        other.kind()
                    )));
                }
            }
        }
        for (event, handler) in &pairs {
            events::add_listener(&self.element, event, handler)?;
        }
        Ok(self)
    }

    /// Agregar hijos en orden: lista de elementos nativos o builders.
    /// Se valida la lista completa antes del primer append.
    pub fn children(self, children: impl Into<Value>) -> Result<Self> {
        let items = match children.into() {
            Value::List(items) => items,
            other => {
                return Err(DomError::invalid(format!(
                    "the children argument must be a list of elements or builders, not {}",
                    other.kind()
                )));
            }
        };
        if items.is_empty() {
            return Ok(self);
        }
        let mut nodes = Vec::with_capacity(items.len());
        for item in &items {
            match item {
                Value::Node(element) => nodes.push(element.clone()),
                Value::Builder(builder) => nodes.push(builder.element().clone()),
                other => {
                    return Err(DomError::invalid(format!(
                        "all children must be elements or builders, found a {}",
                        other.kind()
                    )));
                }
            }
        }
        for node in &nodes {
            element::append_child(&self.element, node)?;
        }
        Ok(self)
    }

    /// Establecer ID
    pub fn id(self, id: &str) -> Result<Self> {
        element::set_attribute(&self.element, "id", id)?;
        Ok(self)
    }

    /// Establecer text content
    pub fn text(self, text: &str) -> Self {
        element::set_text_content(&self.element, text);
        self
    }

    /// Establecer inner HTML
    pub fn html(self, html: &str) -> Self {
        element::set_inner_html(&self.element, html);
        self
    }

    /// Acceso al elemento envuelto, sin consumir el builder
    pub fn element(&self) -> &Element {
        &self.element
    }

    /// Construir y retornar elemento
    pub fn build(self) -> Element {
        self.element
    }
}

/// Tokens de clase a aplicar. Un string se parte por espacios en blanco; una
/// lista acepta solo strings (cada uno partido igual). Null produce una lista
/// vacía.
fn class_tokens(value: &Value) -> Result<Vec<String>> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Str(s) => Ok(s.split_whitespace().map(str::to_string).collect()),
        Value::List(items) => {
            let mut tokens = Vec::new();
            for item in items {
                match item {
                    Value::Str(s) => tokens.extend(s.split_whitespace().map(str::to_string)),
                    other => {
                        return Err(DomError::invalid(format!(
                            "the value argument must be a string or a list of strings, found a {} in the list",
                            other.kind()
                        )));
                    }
                }
            }
            Ok(tokens)
        }
        other => Err(DomError::invalid(format!(
            "the value argument must be a string or a list of strings, not {}",
            other.kind()
        ))),
    }
}
