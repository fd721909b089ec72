// Viewport size/orientation, and a watcher that forwards window resize and
// orientation changes until it is dropped

use crate::error::BackdropError;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Viewport { width, height }
    }

    pub fn of_window(window: &Window) -> Result<Self, BackdropError> {
        let width = window.inner_width()?.as_f64().unwrap_or(0.0);
        let height = window.inner_height()?.as_f64().unwrap_or(0.0);
        Ok(Viewport { width, height })
    }

    pub fn is_portrait(&self) -> bool {
        self.height > self.width
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub fn contains(&self, pos: [f64; 2]) -> bool {
        pos[0] >= 0.0 && pos[0] < self.width && pos[1] >= 0.0 && pos[1] < self.height
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ViewportEvent {
    Resized(Viewport),
    OrientationChanged(Viewport),
}

impl ViewportEvent {
    pub fn viewport(&self) -> Viewport {
        match *self {
            ViewportEvent::Resized(v) | ViewportEvent::OrientationChanged(v) => v,
        }
    }
}

type Listener = Closure<dyn FnMut()>;

pub struct ViewportWatcher {
    window: Window,
    resize: Option<Listener>,
    orientation: Option<Listener>,
}

impl ViewportWatcher {
    const RESIZE: &'static str = "resize";
    const ORIENTATION_CHANGE: &'static str = "orientationchange";

    // Both listeners share the callback, it receives the window size read at
    // the time of the event
    pub fn watch<F>(window: &Window, on_change: F) -> Result<Self, BackdropError>
    where
        F: FnMut(ViewportEvent) + 'static,
    {
        let on_change = Rc::new(RefCell::new(on_change));

        let make_listener = |wrap: fn(Viewport) -> ViewportEvent| -> Listener {
            let window = window.clone();
            let on_change = on_change.clone();
            Closure::wrap(Box::new(move || match Viewport::of_window(&window) {
                Ok(viewport) => (&mut *on_change.borrow_mut())(wrap(viewport)),
                Err(err) => log::warn!("could not read viewport size: {}", err),
            }) as Box<dyn FnMut()>)
        };

        let resize = make_listener(ViewportEvent::Resized);
        let orientation = make_listener(ViewportEvent::OrientationChanged);

        window.add_event_listener_with_callback(Self::RESIZE, resize.as_ref().unchecked_ref())?;
        window.add_event_listener_with_callback(
            Self::ORIENTATION_CHANGE,
            orientation.as_ref().unchecked_ref(),
        )?;
        log::debug!("viewport watcher registered");

        Ok(ViewportWatcher {
            window: window.clone(),
            resize: Some(resize),
            orientation: Some(orientation),
        })
    }

    pub fn unwatch(&mut self) {
        if let Some(listener) = self.resize.take() {
            let _ = self
                .window
                .remove_event_listener_with_callback(Self::RESIZE, listener.as_ref().unchecked_ref());
        }
        if let Some(listener) = self.orientation.take() {
            let _ = self.window.remove_event_listener_with_callback(
                Self::ORIENTATION_CHANGE,
                listener.as_ref().unchecked_ref(),
            );
        }
        log::debug!("viewport watcher removed");
    }
}

impl Drop for ViewportWatcher {
    fn drop(&mut self) {
        if self.resize.is_some() || self.orientation.is_some() {
            self.unwatch();
        }
    }
}
