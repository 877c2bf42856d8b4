// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM
// ============================================================================
// Todas las funciones reciben el elemento destino como primer parámetro
// explícito; ninguna depende de un receptor implícito.
// ============================================================================

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::error::{DomError, Result};

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Crear elemento por nombre de tipo
pub fn create_element(tag: &str) -> Result<Element> {
    if tag.trim().is_empty() {
        return Err(DomError::invalid(
            "the element type must be a non-empty string",
        ));
    }
    let doc = document().ok_or(DomError::NoDocument)?;
    Ok(doc.create_element(tag)?)
}

/// Agregar una clase
pub fn add_class(element: &Element, class: &str) -> Result<()> {
    Ok(element.class_list().add_1(class)?)
}

/// Agregar varias clases (sin reemplazar las existentes)
pub fn add_classes(element: &Element, classes: &[&str]) -> Result<()> {
    for class in classes {
        add_class(element, class)?;
    }
    Ok(())
}

/// Verificar si tiene clase
pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

/// Establecer atributo
pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<()> {
    Ok(element.set_attribute(name, value)?)
}

/// Obtener atributo
pub fn get_attribute(element: &Element, name: &str) -> Option<String> {
    element.get_attribute(name)
}

/// Establecer entrada del dataset (data-*).
/// El mapeo camelCase → data-kebab-case lo hace el propio DomStringMap.
pub fn set_data(element: &Element, key: &str, value: &str) -> Result<()> {
    let html = element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| DomError::invalid("element does not expose a dataset"))?;
    Ok(html.dataset().set(key, value)?)
}

/// Obtener entrada del dataset
pub fn get_data(element: &Element, key: &str) -> Option<String> {
    element.dyn_ref::<HtmlElement>()?.dataset().get(key)
}

/// Establecer text content
pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

/// Establecer inner HTML
pub fn set_inner_html(element: &Element, html: &str) {
    element.set_inner_html(html);
}

/// Agregar hijo
pub fn append_child(parent: &Element, child: &Element) -> Result<()> {
    parent.append_child(child)?;
    Ok(())
}
