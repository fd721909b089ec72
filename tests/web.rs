//! Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;
use starfield_backdrop::config;
use starfield_backdrop::error::BackdropError;
use starfield_backdrop::render_loop::AnimationLoop;
use starfield_backdrop::renderer::Renderer;
use starfield_backdrop::scene::Scene;
use starfield_backdrop::viewport::{Viewport, ViewportEvent, ViewportWatcher};
use starfield_backdrop::Backdrop;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, HtmlCanvasElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn dispatch(name: &str) {
    let event = Event::new(name).unwrap();
    web_sys::window().unwrap().dispatch_event(&event).unwrap();
}

// Resolves on the next animation frame
async fn next_frame() {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .unwrap()
            .request_animation_frame(&resolve)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

fn append(tag: &str, id: &str) -> Element {
    let doc = document();
    if let Some(existing) = doc.get_element_by_id(id) {
        existing.remove();
    }
    let element = doc.create_element(tag).unwrap();
    element.set_id(id);
    doc.body().unwrap().append_child(&element).unwrap();
    element
}

#[wasm_bindgen_test]
fn mounts_on_canvas_and_fills_field() {
    let canvas = append("canvas", "backdrop-mount")
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    let backdrop = Backdrop::mount("backdrop-mount").unwrap();

    assert!(backdrop.is_running());
    assert_eq!(backdrop.dot_count(), config::DEFAULT.dots.count);
    assert_eq!(backdrop.star_count(), 0);

    let window = web_sys::window().unwrap();
    let width = window.inner_width().unwrap().as_f64().unwrap() as u32;
    assert_eq!(canvas.width(), width);

    backdrop.unmount();
}

#[wasm_bindgen_test]
fn missing_canvas_is_reported() {
    match Backdrop::mount_with("no-such-canvas", config::DEFAULT) {
        Err(BackdropError::MissingCanvas(id)) => assert_eq!(id, "no-such-canvas"),
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("mounted without a canvas"),
    }
}

#[wasm_bindgen_test]
fn non_canvas_element_is_rejected() {
    append("div", "not-a-canvas");
    assert!(matches!(
        Backdrop::mount_with("not-a-canvas", config::DEFAULT),
        Err(BackdropError::NotACanvas(_))
    ));
}

#[wasm_bindgen_test]
fn invalid_config_is_rejected_before_mounting() {
    append("canvas", "backdrop-config");
    let mut bad = config::DEFAULT;
    bad.dots.colors = &[];
    assert!(matches!(
        Backdrop::mount_with("backdrop-config", bad),
        Err(BackdropError::Config(_))
    ));
}

#[wasm_bindgen_test]
fn navigation_toggles_hidden_attributes() {
    append("canvas", "backdrop-nav");
    let menu = append("div", "nav-menu");
    let button = append("button", "nav-menu-btn");
    let info = append("div", "info-section");
    let about = append("div", "about-panel");
    let projects = append("div", "projects-panel");

    let backdrop = Backdrop::mount("backdrop-nav").unwrap();
    assert!(!menu.has_attribute("hidden"));
    assert!(button.has_attribute("hidden"));
    assert!(info.has_attribute("hidden"));

    backdrop.select_section("about").unwrap();
    assert!(!info.has_attribute("hidden"));
    assert!(!about.has_attribute("hidden"));
    assert!(projects.has_attribute("hidden"));

    backdrop.close_info().unwrap();
    assert!(info.has_attribute("hidden"));
    assert!(about.has_attribute("hidden"));

    backdrop.close_menu().unwrap();
    assert!(menu.has_attribute("hidden"));
    assert!(!button.has_attribute("hidden"));

    assert!(backdrop.select_section("blog").is_err());
    backdrop.unmount();
}

#[wasm_bindgen_test]
fn resize_event_rebuilds_the_scene() {
    let canvas = append("canvas", "backdrop-resize")
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    let backdrop = Backdrop::mount("backdrop-resize").unwrap();

    // Shrink the backing store so the resize handler has to restore it
    canvas.set_width(1);
    dispatch("resize");

    let window = web_sys::window().unwrap();
    let width = window.inner_width().unwrap().as_f64().unwrap() as u32;
    assert_eq!(canvas.width(), width);
    assert_eq!(backdrop.dot_count(), config::DEFAULT.dots.count);
    assert_eq!(backdrop.star_count(), 0);

    backdrop.unmount();
}

#[wasm_bindgen_test]
async fn stopped_loop_no_longer_schedules_frames() {
    let window = web_sys::window().unwrap();
    let frames = Rc::new(Cell::new(0u32));
    let mut animation = {
        let frames = frames.clone();
        AnimationLoop::start(&window, move |_| frames.set(frames.get() + 1)).unwrap()
    };

    for _ in 0..3 {
        next_frame().await;
    }
    assert!(frames.get() > 0);
    assert!(animation.has_pending_frame());

    animation.stop();
    assert!(!animation.is_running());
    assert!(!animation.has_pending_frame());

    let seen = frames.get();
    for _ in 0..3 {
        next_frame().await;
    }
    assert_eq!(frames.get(), seen);
}

#[wasm_bindgen_test]
fn dropped_watcher_stops_listening() {
    let window = web_sys::window().unwrap();
    let events: Rc<RefCell<Vec<ViewportEvent>>> = Rc::new(RefCell::new(Vec::new()));
    let watcher = {
        let events = events.clone();
        ViewportWatcher::watch(&window, move |event| events.borrow_mut().push(event)).unwrap()
    };

    dispatch("resize");
    dispatch("orientationchange");
    {
        let events = events.borrow();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], ViewportEvent::Resized(_)));
        assert!(matches!(events[1], ViewportEvent::OrientationChanged(_)));
    }

    drop(watcher);
    dispatch("resize");
    dispatch("orientationchange");
    assert_eq!(events.borrow().len(), 2);
}

#[wasm_bindgen_test]
fn resize_after_unmount_is_harmless() {
    append("canvas", "backdrop-unmount");
    let backdrop = Backdrop::mount("backdrop-unmount").unwrap();
    backdrop.unmount();

    dispatch("resize");
    dispatch("orientationchange");
}

#[wasm_bindgen_test]
fn zero_sized_canvas_draws_nothing() {
    let canvas = append("canvas", "backdrop-empty")
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    let renderer = Renderer::new(canvas).unwrap();
    renderer.resize(Viewport::new(0.0, 0.0));
    assert!(renderer.surface().is_empty());
    assert!(!renderer.has_surface());

    let mut rng = rand::thread_rng();
    let scene = Scene::new(config::DEFAULT, Viewport::new(800.0, 600.0), 0.0, &mut rng).unwrap();
    assert!(renderer.render(&scene).is_ok());

    renderer.resize(Viewport::new(800.0, 600.0));
    assert!(renderer.has_surface());
    assert!(renderer.render(&scene).is_ok());
}
