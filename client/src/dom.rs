use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use skwibbew_shared::{BoardLayout, Rect};

pub fn get_element<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Missing element: {id}")))?;
    element
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("Invalid element type: {id}")))
}

pub fn element_bounds(element: &Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

fn set_px(element: &HtmlElement, property: &str, value: f64) {
    let _ = element
        .style()
        .set_property(property, &format!("{value}px"));
}

/// Size and park the eraser widget according to the layout.
pub fn place_eraser(eraser: &HtmlElement, layout: &BoardLayout, left: f64) {
    set_px(eraser, "width", layout.eraser_width);
    set_px(eraser, "height", layout.eraser_height);
    set_px(eraser, "top", layout.eraser_top);
    set_px(eraser, "left", left);
}

pub fn set_eraser_left(eraser: &HtmlElement, left: f64) {
    set_px(eraser, "left", left);
}

pub fn set_eraser_dragging(eraser: &HtmlElement, dragging: bool) {
    let _ = eraser
        .class_list()
        .toggle_with_force("cursor-grabbing", dragging);
}

/// Canvas placement inside the board region.
pub fn place_canvas(canvas: &HtmlElement, layout: &BoardLayout) {
    set_px(canvas, "top", layout.frame_offset);
    set_px(canvas, "left", layout.frame_offset);
}

/// Read the optional `<script type="application/json" id="board-layout">`
/// block. `None` when the page does not carry one.
pub fn layout_source(document: &Document) -> Option<String> {
    document
        .get_element_by_id("board-layout")
        .and_then(|element| element.text_content())
        .filter(|text| !text.trim().is_empty())
}
