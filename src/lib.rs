mod utils;

pub mod color;
pub mod config;
pub mod dot;
pub mod error;
pub mod nav;
pub mod render_loop;
pub mod renderer;
pub mod sample;
pub mod scene;
pub mod shooting_star;
pub mod viewport;

use crate::config::BackdropConfig;
use crate::error::BackdropError;
use crate::nav::{NavState, NavView, Section};
use crate::render_loop::AnimationLoop;
use crate::renderer::Renderer;
use crate::scene::Scene;
use crate::viewport::{Viewport, ViewportEvent, ViewportWatcher};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, HtmlCanvasElement};

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
    utils::init_logging(log::Level::Info);
}

pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}

// The page background: owns the animation loop, the resize watcher and the
// navigation state. Dropping it (or calling `unmount`) stops everything.
#[wasm_bindgen]
pub struct Backdrop {
    animation: AnimationLoop,
    _watcher: ViewportWatcher,
    scene: Rc<RefCell<Scene>>,
    nav: Rc<RefCell<NavState>>,
    nav_view: Rc<NavView>,
}

#[wasm_bindgen]
impl Backdrop {
    pub fn mount(canvas_id: &str) -> Result<Backdrop, JsValue> {
        Ok(Backdrop::mount_with(canvas_id, config::DEFAULT)?)
    }

    // The loop cancels its pending frame and the watcher removes its
    // listeners when dropped
    pub fn unmount(self) {
        drop(self);
        log::info!("backdrop unmounted");
    }

    pub fn is_running(&self) -> bool {
        self.animation.is_running()
    }

    pub fn is_portrait(&self) -> bool {
        self.nav.borrow().is_portrait()
    }

    pub fn dot_count(&self) -> usize {
        self.scene.borrow().dots().len()
    }

    pub fn star_count(&self) -> usize {
        self.scene.borrow().stars().len()
    }

    pub fn select_section(&self, name: &str) -> Result<(), JsValue> {
        let section: Section = name.parse()?;
        self.nav.borrow_mut().select_section(section);
        Ok(self.sync_nav()?)
    }

    pub fn close_info(&self) -> Result<(), JsValue> {
        self.nav.borrow_mut().close_info();
        Ok(self.sync_nav()?)
    }

    pub fn open_menu(&self) -> Result<(), JsValue> {
        self.nav.borrow_mut().open_menu();
        Ok(self.sync_nav()?)
    }

    pub fn close_menu(&self) -> Result<(), JsValue> {
        self.nav.borrow_mut().close_menu();
        Ok(self.sync_nav()?)
    }
}

impl Backdrop {
    pub fn mount_with(canvas_id: &str, config: BackdropConfig) -> Result<Backdrop, BackdropError> {
        config.validate()?;

        let window = web_sys::window().ok_or(BackdropError::NoWindow)?;
        let document = window.document().ok_or(BackdropError::NoDocument)?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| BackdropError::MissingCanvas(canvas_id.to_owned()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| BackdropError::NotACanvas(canvas_id.to_owned()))?;

        let viewport = Viewport::of_window(&window)?;
        let renderer = Rc::new(Renderer::new(canvas)?);
        renderer.resize(viewport);

        let started_at_ms = window.performance().map(|p| p.now()).unwrap_or(0.0);
        let scene = Rc::new(RefCell::new(Scene::new(
            config,
            viewport,
            started_at_ms,
            &mut rand::thread_rng(),
        )?));

        let nav = Rc::new(RefCell::new(NavState::new(viewport.is_portrait())));
        let nav_view = Rc::new(NavView::new(document));
        nav_view.apply(nav.borrow().layout())?;

        let animation = {
            let scene = scene.clone();
            let renderer = renderer.clone();
            AnimationLoop::start(&window, move |timestamp| {
                #[cfg(feature = "frame-timing")]
                let _timer = Timer::new("Backdrop::frame");
                let mut scene = scene.borrow_mut();
                scene.step(timestamp, &mut rand::thread_rng());
                if let Err(err) = renderer.render(&scene) {
                    log::warn!("frame {} not fully drawn: {:?}", scene.frame_count(), err);
                }
            })?
        };

        let watcher = {
            let scene = scene.clone();
            let nav = nav.clone();
            let nav_view = nav_view.clone();
            ViewportWatcher::watch(&window, move |event| {
                let viewport = event.viewport();
                if let ViewportEvent::Resized(_) = event {
                    renderer.resize(viewport);
                    scene.borrow_mut().resize(viewport, &mut rand::thread_rng());
                }
                let mut nav = nav.borrow_mut();
                nav.set_portrait(viewport.is_portrait());
                if let Err(err) = nav_view.apply(nav.layout()) {
                    log::warn!("navigation not updated: {}", err);
                }
            })?
        };

        log::info!(
            "backdrop mounted on #{} at {}x{}",
            canvas_id,
            viewport.width,
            viewport.height
        );

        Ok(Backdrop {
            animation,
            _watcher: watcher,
            scene,
            nav,
            nav_view,
        })
    }

    fn sync_nav(&self) -> Result<(), BackdropError> {
        self.nav_view.apply(self.nav.borrow().layout())
    }
}
