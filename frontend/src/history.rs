//! Access to the environment's address bar and session history.
//!
//! The router only talks to [`History`]; [`BrowserHistory`] is the real
//! implementation backed by `window.history` and the `popstate` event.

use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, Event, Window};

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("history call failed: {0}")]
    Js(String),
}

impl From<JsValue> for HistoryError {
    fn from(value: JsValue) -> Self {
        HistoryError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub trait History {
    /// Path component of the current address, e.g. `/pricing`.
    fn current_path(&self) -> String;

    /// Pushes a new entry so the previous address stays reachable with "back".
    /// Must not reload the document.
    fn push(&self, path: &str) -> Result<(), HistoryError>;

    /// Calls `listener` every time the user moves through history with the
    /// back/forward controls.
    fn on_pop(&self, listener: Box<dyn Fn()>) -> Result<(), HistoryError>;
}

pub struct BrowserHistory {
    window: Window,
}

impl BrowserHistory {
    pub fn new() -> Result<Self, HistoryError> {
        window()
            .map(|window| Self { window })
            .ok_or(HistoryError::NoWindow)
    }
}

impl History for BrowserHistory {
    fn current_path(&self) -> String {
        self.window
            .location()
            .pathname()
            .unwrap_or_else(|_| "/".to_string())
    }

    fn push(&self, path: &str) -> Result<(), HistoryError> {
        self.window
            .history()?
            .push_state_with_url(&JsValue::NULL, "", Some(path))?;
        Ok(())
    }

    fn on_pop(&self, listener: Box<dyn Fn()>) -> Result<(), HistoryError> {
        let callback = Closure::wrap(Box::new(move |_: Event| {
            listener();
        }) as Box<dyn FnMut(Event)>);

        self.window
            .add_event_listener_with_callback("popstate", callback.as_ref().unchecked_ref())?;

        // Lives as long as the page.
        callback.forget();
        Ok(())
    }
}

#[cfg(test)]
pub mod memory {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::{History, HistoryError};

    /// In-memory history with the browser's stack semantics: pushing drops
    /// any forward entries, `back`/`forward` fire the pop listeners.
    pub struct MemoryHistory {
        entries: RefCell<Vec<String>>,
        index: Cell<usize>,
        listeners: RefCell<Vec<Rc<dyn Fn()>>>,
        refuse_pushes: Cell<bool>,
    }

    impl MemoryHistory {
        pub fn new(initial: &str) -> Rc<Self> {
            Rc::new(Self {
                entries: RefCell::new(vec![initial.to_string()]),
                index: Cell::new(0),
                listeners: RefCell::new(Vec::new()),
                refuse_pushes: Cell::new(false),
            })
        }

        pub fn back(&self) {
            let index = self.index.get();
            if index > 0 {
                self.index.set(index - 1);
                self.fire();
            }
        }

        pub fn forward(&self) {
            let index = self.index.get();
            if index + 1 < self.entries.borrow().len() {
                self.index.set(index + 1);
                self.fire();
            }
        }

        pub fn len(&self) -> usize {
            self.entries.borrow().len()
        }

        pub fn listener_count(&self) -> usize {
            self.listeners.borrow().len()
        }

        pub fn refuse_pushes(&self) {
            self.refuse_pushes.set(true);
        }

        fn fire(&self) {
            let listeners: Vec<_> = self.listeners.borrow().iter().cloned().collect();
            for listener in listeners {
                listener();
            }
        }
    }

    impl History for MemoryHistory {
        fn current_path(&self) -> String {
            self.entries.borrow()[self.index.get()].clone()
        }

        fn push(&self, path: &str) -> Result<(), HistoryError> {
            if self.refuse_pushes.get() {
                return Err(HistoryError::Js("SecurityError".to_string()));
            }
            let mut entries = self.entries.borrow_mut();
            entries.truncate(self.index.get() + 1);
            entries.push(path.to_string());
            self.index.set(entries.len() - 1);
            Ok(())
        }

        fn on_pop(&self, listener: Box<dyn Fn()>) -> Result<(), HistoryError> {
            self.listeners.borrow_mut().push(Rc::from(listener));
            Ok(())
        }
    }
}
