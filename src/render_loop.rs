// requestAnimationFrame driver. Runs the frame callback once per display
// refresh until `stop` is called or the loop is dropped.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

type FrameClosure = Closure<dyn FnMut(f64)>;

pub struct AnimationLoop {
    window: Window,
    // The frame closure holds a clone of this slot so it can reschedule
    // itself; `stop` empties it to break the cycle
    frame: Rc<RefCell<Option<FrameClosure>>>,
    pending: Rc<Cell<Option<i32>>>,
    running: Rc<Cell<bool>>,
}

impl AnimationLoop {
    pub fn start<F>(window: &Window, mut on_frame: F) -> Result<Self, JsValue>
    where
        F: FnMut(f64) + 'static,
    {
        let frame: Rc<RefCell<Option<FrameClosure>>> = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None));
        let running = Rc::new(Cell::new(true));

        let closure = {
            let window = window.clone();
            let frame = frame.clone();
            let pending = pending.clone();
            let running = running.clone();
            Closure::wrap(Box::new(move |timestamp: f64| {
                pending.set(None);
                if !running.get() {
                    return;
                }

                on_frame(timestamp);

                let next = match frame.borrow().as_ref() {
                    Some(closure) => window.request_animation_frame(closure.as_ref().unchecked_ref()),
                    None => return,
                };
                match next {
                    Ok(handle) => pending.set(Some(handle)),
                    Err(err) => {
                        log::error!("requestAnimationFrame failed, stopping: {:?}", err);
                        running.set(false);
                    }
                }
            }) as Box<dyn FnMut(f64)>)
        };

        let handle = window.request_animation_frame(closure.as_ref().unchecked_ref())?;
        pending.set(Some(handle));
        *frame.borrow_mut() = Some(closure);

        Ok(AnimationLoop {
            window: window.clone(),
            frame,
            pending,
            running,
        })
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    pub fn has_pending_frame(&self) -> bool {
        self.pending.get().is_some()
    }

    pub fn stop(&mut self) {
        self.running.set(false);
        if let Some(handle) = self.pending.take() {
            let _ = self.window.cancel_animation_frame(handle);
        }
        self.frame.borrow_mut().take();
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
