use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::Reflect;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Event, HtmlButtonElement, HtmlCanvasElement, HtmlElement, HtmlImageElement, MouseEvent,
};

use skwibbew_shared::{Board, BoardLayout, Draw};

use crate::dom::{
    element_bounds, get_element, layout_source, place_canvas, place_eraser, set_eraser_dragging,
    set_eraser_left,
};
use crate::hook::{DrawCallback, DrawHook};
use crate::listener::Listener;
use crate::render::CanvasSurface;
use crate::state::App;
use crate::util::{debug_enabled, debug_log, error_log};

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

fn document_ready_state(document: &web_sys::Document) -> Option<String> {
    Reflect::get(document.as_ref(), &JsValue::from_str("readyState"))
        .ok()?
        .as_string()
}

fn load_layout(document: &web_sys::Document, debug: bool) -> BoardLayout {
    let Some(text) = layout_source(document) else {
        return BoardLayout::default();
    };
    match BoardLayout::from_json(&text) {
        Ok(layout) => {
            if debug {
                let json = serde_json::to_string(&layout).unwrap_or_default();
                debug_log(true, &format!("Board layout loaded: {json}"));
            }
            layout
        }
        Err(err) => {
            error_log(&format!("Ignoring board layout: {err}"));
            BoardLayout::default()
        }
    }
}

#[wasm_bindgen(start)]
pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("Missing window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("Missing document"))?;
    let started = Rc::new(Cell::new(false));

    if document_ready_state(&document).as_deref() == Some("complete") {
        started.set(true);
        return start_app();
    }

    let onload_started = started.clone();
    let onload = Closure::<dyn FnMut(Event)>::new(move |_| {
        if onload_started.replace(true) {
            return;
        }
        if let Err(err) = start_app() {
            web_sys::console::error_1(&err);
        }
    });
    window.add_event_listener_with_callback("load", onload.as_ref().unchecked_ref())?;
    onload.forget();

    Ok(())
}

/// Tear the board down and remove every listener it registered.
#[wasm_bindgen]
pub fn stop() {
    APP.with(|app| app.borrow_mut().take());
}

fn start_app() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("Missing window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("Missing document"))?;
    let debug = debug_enabled(&window);

    let canvas: HtmlCanvasElement = get_element(&document, "board")?;
    let region: HtmlElement = get_element(&document, "board-region")?;
    let eraser: HtmlImageElement = get_element(&document, "eraser")?;
    let clear_button: HtmlButtonElement = get_element(&document, "clear-canvas")?;

    let layout = load_layout(&document, debug);
    canvas.set_width(layout.canvas_width);
    canvas.set_height(layout.canvas_height);
    place_canvas(&canvas, &layout);

    let board = Rc::new(RefCell::new(Board::new(layout)));
    {
        let board = board.borrow();
        place_eraser(&eraser, board.layout(), board.eraser_left());
    }

    let hook = Rc::new(RefCell::new(DrawHook::new(canvas.clone(), window.clone())));
    let on_draw: DrawCallback = {
        let board = board.clone();
        Rc::new(move |draw: &Draw, surface: &mut CanvasSurface| {
            board.borrow().on_draw(draw, surface)
        })
    };
    hook.borrow_mut().attach(on_draw)?;

    let mut listeners = Vec::new();

    {
        let board = board.clone();
        let canvas = canvas.clone();
        let eraser_el = eraser.clone();
        listeners.push(Listener::add(
            &eraser,
            "mousedown",
            move |event: MouseEvent| {
                event.prevent_default();
                let mut surface = CanvasSurface::from_canvas(&canvas);
                board.borrow_mut().eraser_press(
                    f64::from(event.client_x()),
                    Some(element_bounds(&canvas)),
                    surface.as_mut(),
                );
                set_eraser_dragging(&eraser_el, true);
                debug_log(debug, "Eraser drag started");
            },
        )?);
    }

    {
        let board = board.clone();
        let canvas = canvas.clone();
        let eraser_el = eraser.clone();
        listeners.push(Listener::add(
            &window,
            "mousemove",
            move |event: MouseEvent| {
                {
                    let board = board.borrow();
                    let eraser = board.eraser();
                    if !eraser.is_erasing() || !eraser.is_dragging() {
                        return;
                    }
                }
                event.prevent_default();
                let mut surface = CanvasSurface::from_canvas(&canvas);
                let left = board.borrow_mut().eraser_move(
                    f64::from(event.client_x()),
                    Some(element_bounds(&canvas)),
                    surface.as_mut(),
                );
                if let Some(left) = left {
                    set_eraser_left(&eraser_el, left);
                }
            },
        )?);
    }

    {
        let board = board.clone();
        let eraser_el = eraser.clone();
        listeners.push(Listener::add(
            &window,
            "mouseup",
            move |event: MouseEvent| {
                event.prevent_default();
                let was_dragging = board.borrow().eraser().is_dragging();
                board.borrow_mut().pointer_release();
                set_eraser_dragging(&eraser_el, false);
                if was_dragging {
                    let offset = board.borrow().eraser().offset();
                    debug_log(debug, &format!("Eraser dropped at x={offset}"));
                }
            },
        )?);
    }

    {
        let board = board.clone();
        listeners.push(Listener::add(&region, "click", move |_: MouseEvent| {
            if board.borrow_mut().region_click() {
                debug_log(debug, "Erase mode cancelled");
            }
        })?);
    }

    {
        let hook = hook.clone();
        listeners.push(Listener::add(
            &clear_button,
            "click",
            move |_: MouseEvent| {
                hook.borrow().clear();
                debug_log(debug, "Canvas cleared");
            },
        )?);
    }

    debug_log(debug, "Board ready");

    APP.with(|app| {
        *app.borrow_mut() = Some(App { hook, listeners });
    });

    Ok(())
}
