// ============================================================================
// TESTS DE INTEGRACIÓN - builder + factory contra el DOM real del navegador
// ============================================================================

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{Event, HtmlElement};

use nexus_dom::dom::element::{get_attribute, get_data, has_class};
use nexus_dom::{build, ElementBuilder, Handler, Map, Value};

wasm_bindgen_test_configure!(run_in_browser);

fn click_counter() -> (Handler, Rc<Cell<u32>>) {
    let counter = Rc::new(Cell::new(0));
    let seen = counter.clone();
    let handler = Handler::new(move |_event: Event| {
        seen.set(seen.get() + 1);
    });
    (handler, counter)
}

fn dispatch_click(element: &web_sys::Element) {
    let event = Event::new("click").unwrap();
    element.dispatch_event(&event).unwrap();
}

// ------------------------------------------------------------------ class --

#[wasm_bindgen_test]
fn class_aplica_tokens_de_un_string() {
    let el = ElementBuilder::new("div")
        .unwrap()
        .class("btn primary")
        .unwrap()
        .build();

    assert!(has_class(&el, "btn"));
    assert!(has_class(&el, "primary"));
}

#[wasm_bindgen_test]
fn class_acepta_lista_y_es_idempotente() {
    let el = ElementBuilder::new("div")
        .unwrap()
        .class(vec!["btn", "primary"])
        .unwrap()
        .class("btn")
        .unwrap()
        .build();

    assert_eq!(el.class_list().length(), 2);
    assert!(has_class(&el, "btn"));
    assert!(has_class(&el, "primary"));
}

#[wasm_bindgen_test]
fn class_null_y_vacio_no_hacen_nada() {
    let el = ElementBuilder::new("div")
        .unwrap()
        .class(Value::Null)
        .unwrap()
        .class("")
        .unwrap()
        .class(Value::List(Vec::new()))
        .unwrap()
        .build();

    assert_eq!(el.class_list().length(), 0);
}

#[wasm_bindgen_test]
fn class_rechaza_tipos_invalidos_sin_mutar() {
    let builder = ElementBuilder::new("div").unwrap();
    let err = builder.clone().class(3).unwrap_err();
    assert!(err.to_string().contains("invalid argument"));
    assert_eq!(builder.element().class_list().length(), 0);
}

// ------------------------------------------------------------------- attr --

#[wasm_bindgen_test]
fn attr_bulk_y_sobrescritura() {
    let el = ElementBuilder::new("input")
        .unwrap()
        .attr(Map::new().with("type", "text").with("title", "uno"), None)
        .unwrap()
        .attr(Map::new().with("title", "dos"), None)
        .unwrap()
        .build();

    assert_eq!(get_attribute(&el, "type").unwrap(), "text");
    assert_eq!(get_attribute(&el, "title").unwrap(), "dos");
}

#[wasm_bindgen_test]
fn attr_clave_suelta_sin_valor_produce_string_vacio() {
    let el = ElementBuilder::new("div")
        .unwrap()
        .attr("hidden", None)
        .unwrap()
        .attr("title", Some("hola"))
        .unwrap()
        .build();

    assert_eq!(get_attribute(&el, "hidden").unwrap(), "");
    assert_eq!(get_attribute(&el, "title").unwrap(), "hola");
}

#[wasm_bindgen_test]
fn attr_rechaza_listas_incluso_vacias() {
    let builder = ElementBuilder::new("div").unwrap();
    assert!(builder.clone().attr(Value::List(Vec::new()), None).is_err());
    assert!(builder
        .attr(Value::List(vec![Value::from("type")]), None)
        .is_err());
}

#[wasm_bindgen_test]
fn attr_valida_el_mapa_completo_antes_de_escribir() {
    let (handler, _) = click_counter();
    let builder = ElementBuilder::new("div").unwrap();
    let err = builder
        .clone()
        .attr(Map::new().with("title", "ok").with("bad", handler), None)
        .unwrap_err();

    assert!(err.to_string().contains("handler"));
    // ninguna escritura parcial
    assert!(get_attribute(builder.element(), "title").is_none());
}

// ------------------------------------------------------------------- data --

#[wasm_bindgen_test]
fn data_bulk_mapea_camel_case_a_kebab() {
    let el = ElementBuilder::new("div")
        .unwrap()
        .data(Map::new().with("userId", "42").with("estado", "activo"), None)
        .unwrap()
        .build();

    assert_eq!(get_attribute(&el, "data-user-id").unwrap(), "42");
    assert_eq!(get_data(&el, "estado").unwrap(), "activo");
}

#[wasm_bindgen_test]
fn data_clave_suelta_y_sobrescritura() {
    let el = ElementBuilder::new("div")
        .unwrap()
        .data("rol", Some("admin"))
        .unwrap()
        .data("rol", Some("viewer"))
        .unwrap()
        .build();

    assert_eq!(get_data(&el, "rol").unwrap(), "viewer");
}

#[wasm_bindgen_test]
fn data_rechaza_null_y_listas() {
    let builder = ElementBuilder::new("div").unwrap();
    let err = builder.clone().data(Value::Null, None).unwrap_err();
    assert!(err.to_string().contains("null"));
    assert!(builder.data(Value::List(Vec::new()), None).is_err());
}

// -------------------------------------------------------------- attribute --

#[wasm_bindgen_test]
fn attribute_coerciona_valores() {
    let el = ElementBuilder::new("div")
        .unwrap()
        .attribute("tabindex", 3)
        .unwrap()
        .attribute("aria-hidden", true)
        .unwrap()
        .attribute("title", Value::Null)
        .unwrap()
        .build();

    assert_eq!(get_attribute(&el, "tabindex").unwrap(), "3");
    assert_eq!(get_attribute(&el, "aria-hidden").unwrap(), "true");
    assert_eq!(get_attribute(&el, "title").unwrap(), "");
}

// -------------------------------------------------------------- listeners --

#[wasm_bindgen_test]
fn listeners_registra_y_el_navegador_despacha() {
    let (handler, counter) = click_counter();
    let el = ElementBuilder::new("button")
        .unwrap()
        .listeners(Map::new().with("click", handler))
        .unwrap()
        .build();

    dispatch_click(&el);
    dispatch_click(&el);
    assert_eq!(counter.get(), 2);
}

#[wasm_bindgen_test]
fn listeners_todo_o_nada() {
    let (handler, counter) = click_counter();
    let builder = ElementBuilder::new("button").unwrap();
    let err = builder
        .clone()
        .listeners(
            Map::new()
                .with("click", handler)
                .with("mouseover", "no soy callable"),
        )
        .unwrap_err();

    assert!(err.to_string().contains("mouseover"));
    // la llamada rechazada no registró nada
    dispatch_click(builder.element());
    assert_eq!(counter.get(), 0);
}

#[wasm_bindgen_test]
fn listeners_mapa_vacio_no_hace_nada() {
    assert!(ElementBuilder::new("div")
        .unwrap()
        .listeners(Map::new())
        .is_ok());
}

// --------------------------------------------------------------- children --

#[wasm_bindgen_test]
fn children_mezcla_elementos_y_builders_en_orden() {
    let primero = ElementBuilder::new("span").unwrap().text("1").build();
    let segundo = ElementBuilder::new("em").unwrap().text("2");
    let tercero = ElementBuilder::new("strong").unwrap().text("3").build();

    let el = ElementBuilder::new("div")
        .unwrap()
        .children(vec![
            Value::from(primero),
            Value::from(segundo),
            Value::from(tercero),
        ])
        .unwrap()
        .build();

    assert_eq!(el.child_element_count(), 3);
    let first = el.first_element_child().unwrap();
    assert_eq!(first.tag_name(), "SPAN");
    assert_eq!(first.next_element_sibling().unwrap().tag_name(), "EM");
    assert_eq!(el.last_element_child().unwrap().tag_name(), "STRONG");
}

#[wasm_bindgen_test]
fn children_valida_todo_antes_de_insertar() {
    let hijo = ElementBuilder::new("span").unwrap().build();
    let builder = ElementBuilder::new("div").unwrap();
    let err = builder
        .clone()
        .children(vec![Value::from(hijo), Value::from("texto")])
        .unwrap_err();

    assert!(err.to_string().contains("children"));
    assert_eq!(builder.element().child_element_count(), 0);
}

#[wasm_bindgen_test]
fn children_lista_vacia_no_hace_nada() {
    let el = ElementBuilder::new("div")
        .unwrap()
        .children(Vec::<Value>::new())
        .unwrap()
        .build();
    assert_eq!(el.child_element_count(), 0);
}

// ---------------------------------------------------------------- factory --

#[wasm_bindgen_test]
fn factory_texto_como_children() {
    let el = build("p", Map::new(), "hola mundo").unwrap();
    assert_eq!(el.tag_name(), "P");
    assert_eq!(el.text_content().unwrap(), "hola mundo");
}

#[wasm_bindgen_test]
fn factory_tier_propiedad_directa() {
    // tabIndex no es operación del builder ni método nativo: cae al tier (c)
    let el = build("div", Map::new().with("class", "a b").with("tabIndex", 3), "").unwrap();

    assert!(has_class(&el, "a"));
    assert!(has_class(&el, "b"));
    let html: HtmlElement = el.dyn_into().unwrap();
    assert_eq!(html.tab_index(), 3);
}

#[wasm_bindgen_test]
fn factory_tier_metodo_nativo() {
    // toggleAttribute es un callable del elemento: tier (b)
    let el = build("input", Map::new().with("toggleAttribute", "disabled"), "").unwrap();
    assert!(get_attribute(&el, "disabled").is_some());
}

#[wasm_bindgen_test]
fn factory_rechaza_tag_vacio() {
    assert!(build("", Map::new(), "").is_err());
    assert!(build("   ", Map::new(), "").is_err());
}

#[wasm_bindgen_test]
fn factory_hijos_estructurales() {
    let hijo = ElementBuilder::new("li").unwrap().text("uno");
    let el = build("ul", Map::new(), vec![hijo]).unwrap();
    assert_eq!(el.first_element_child().unwrap().tag_name(), "LI");
}

#[wasm_bindgen_test]
fn factory_escenario_completo() {
    let (handler, counter) = click_counter();
    let el = build(
        "button",
        Map::new()
            .with("class", vec!["btn", "primary"])
            .with("attr", Map::new().with("type", "button"))
            .with("listeners", Map::new().with("click", handler)),
        "Click me",
    )
    .unwrap();

    assert_eq!(el.tag_name(), "BUTTON");
    assert!(has_class(&el, "btn"));
    assert!(has_class(&el, "primary"));
    assert_eq!(get_attribute(&el, "type").unwrap(), "button");
    assert_eq!(el.text_content().unwrap(), "Click me");

    dispatch_click(&el);
    assert_eq!(counter.get(), 1);
}
