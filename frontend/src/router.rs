//! Client-side router.
//!
//! Maps paths to zero-argument render handlers and keeps the rendered page
//! in step with the address bar without reloading the document. Every entry
//! point (`navigate`, `resolve`, the back/forward listener) runs to
//! completion synchronously and invokes at most one handler.
//!
//! Navigating to a path that was never registered renders the default (`/`)
//! page while the address bar keeps the requested path, so old bookmarks and
//! shared links still land somewhere.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use log::{debug, info, warn};
use thiserror::Error;

use crate::history::{History, HistoryError};

/// Path of the fallback route.
pub const DEFAULT_PATH: &str = "/";

pub type Handler = Rc<dyn Fn()>;

#[derive(Debug, Error)]
pub enum RouterError {
    #[error("invalid route path {0:?}: paths must start with '/'")]
    InvalidPath(String),
    #[error(transparent)]
    History(#[from] HistoryError),
}

struct RouterInner {
    routes: RefCell<HashMap<String, Handler>>,
    history: Rc<dyn History>,
    listening: Cell<bool>,
}

/// Cheap handle to the single router instance. Clones share the same route
/// table; equality is identity.
#[derive(Clone)]
pub struct Router {
    inner: Rc<RouterInner>,
}

impl PartialEq for Router {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Router {
    pub fn new(history: Rc<dyn History>) -> Self {
        Self {
            inner: Rc::new(RouterInner {
                routes: RefCell::new(HashMap::new()),
                history,
                listening: Cell::new(false),
            }),
        }
    }

    /// Associates `path` with `handler`. Registering a path again replaces
    /// the previous handler.
    pub fn register<F>(&self, path: &str, handler: F) -> Result<(), RouterError>
    where
        F: Fn() + 'static,
    {
        if !path.starts_with('/') {
            return Err(RouterError::InvalidPath(path.to_string()));
        }
        let replaced = self
            .inner
            .routes
            .borrow_mut()
            .insert(path.to_string(), Rc::new(handler));
        if replaced.is_some() {
            debug!("Replaced handler for {}", path);
        }
        Ok(())
    }

    pub fn is_registered(&self, path: &str) -> bool {
        self.inner.routes.borrow().contains_key(path)
    }

    pub fn current_path(&self) -> String {
        self.inner.history.current_path()
    }

    /// Pushes `path` onto the history and renders it. If the push is refused
    /// nothing is rendered.
    pub fn navigate(&self, path: &str) -> Result<(), RouterError> {
        if !self.is_registered(path) {
            warn!("Navigating to unregistered path {}, the default page will be shown", path);
        }
        self.inner.history.push(path)?;
        self.resolve();
        Ok(())
    }

    /// Renders the handler for the current address, falling back to the
    /// default route. Does nothing when neither exists.
    ///
    /// Handler panics are not caught.
    pub fn resolve(&self) {
        let path = self.current_path();
        // The borrow must end before the handler runs: handlers navigate.
        let handler = {
            let routes = self.inner.routes.borrow();
            routes
                .get(&path)
                .or_else(|| routes.get(DEFAULT_PATH))
                .cloned()
        };

        match handler {
            Some(handler) => {
                info!("Resolving {}", path);
                handler();
            }
            None => debug!("No handler for {} and no default route, nothing to render", path),
        }
    }

    /// Subscribes to back/forward navigation and renders the landing path.
    ///
    /// The subscription is made once per router and keeps it alive for as
    /// long as the history does; calling `init` again only re-renders.
    pub fn init(&self) -> Result<(), RouterError> {
        if !self.inner.listening.get() {
            let router = self.clone();
            self.inner.history.on_pop(Box::new(move || router.resolve()))?;
            self.inner.listening.set(true);
        }
        self.resolve();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::memory::MemoryHistory;

    type Calls = Rc<RefCell<Vec<&'static str>>>;

    fn recorder(calls: &Calls, name: &'static str) -> impl Fn() + 'static {
        let calls = calls.clone();
        move || calls.borrow_mut().push(name)
    }

    fn setup(initial: &str) -> (Rc<MemoryHistory>, Router, Calls) {
        let history = MemoryHistory::new(initial);
        let router = Router::new(history.clone());
        (history, router, Rc::new(RefCell::new(Vec::new())))
    }

    #[test]
    fn navigate_invokes_registered_handler_once() {
        let (_history, router, calls) = setup("/");
        router.register("/", recorder(&calls, "home")).unwrap();
        router.register("/pricing", recorder(&calls, "pricing")).unwrap();

        router.navigate("/pricing").unwrap();

        assert_eq!(*calls.borrow(), vec!["pricing"]);
        assert_eq!(router.current_path(), "/pricing");
    }

    #[test]
    fn unknown_path_falls_back_to_default_but_keeps_address() {
        let (_history, router, calls) = setup("/");
        router.register("/", recorder(&calls, "home")).unwrap();

        router.navigate("/missing").unwrap();

        assert_eq!(*calls.borrow(), vec!["home"]);
        assert_eq!(router.current_path(), "/missing");
    }

    #[test]
    fn resolve_without_default_does_nothing() {
        let (_history, router, calls) = setup("/nowhere");
        router.register("/course", recorder(&calls, "course")).unwrap();

        router.resolve();

        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn empty_table_resolves_to_nothing() {
        let (_history, router, _calls) = setup("/");
        router.resolve();
        router.navigate("/anything").unwrap();
        assert_eq!(router.current_path(), "/anything");
    }

    #[test]
    fn later_registration_replaces_earlier_one() {
        let (_history, router, calls) = setup("/");
        router.register("/x", recorder(&calls, "first")).unwrap();
        router.register("/x", recorder(&calls, "second")).unwrap();

        router.navigate("/x").unwrap();

        assert_eq!(*calls.borrow(), vec!["second"]);
    }

    #[test]
    fn paths_must_start_with_slash() {
        let (_history, router, calls) = setup("/");
        assert!(matches!(
            router.register("", recorder(&calls, "empty")),
            Err(RouterError::InvalidPath(_))
        ));
        assert!(matches!(
            router.register("pricing", recorder(&calls, "relative")),
            Err(RouterError::InvalidPath(_))
        ));
        assert!(!router.is_registered("pricing"));
    }

    #[test]
    fn init_renders_landing_path() {
        let (_history, router, calls) = setup("/terms");
        router.register("/", recorder(&calls, "home")).unwrap();
        router.register("/terms", recorder(&calls, "terms")).unwrap();

        router.init().unwrap();

        assert_eq!(*calls.borrow(), vec!["terms"]);
    }

    #[test]
    fn back_and_forward_resolve_once_per_event() {
        let (history, router, calls) = setup("/");
        router.register("/", recorder(&calls, "home")).unwrap();
        router.register("/privacy", recorder(&calls, "privacy")).unwrap();
        router.init().unwrap();
        router.navigate("/privacy").unwrap();
        calls.borrow_mut().clear();

        history.back();
        assert_eq!(*calls.borrow(), vec!["home"]);
        assert_eq!(router.current_path(), "/");

        history.forward();
        assert_eq!(*calls.borrow(), vec!["home", "privacy"]);
    }

    #[test]
    fn repeated_init_subscribes_once() {
        let (history, router, calls) = setup("/");
        router.register("/", recorder(&calls, "home")).unwrap();
        router.register("/shipping", recorder(&calls, "shipping")).unwrap();

        router.init().unwrap();
        router.init().unwrap();
        assert_eq!(history.listener_count(), 1);

        router.navigate("/shipping").unwrap();
        calls.borrow_mut().clear();
        history.back();

        assert_eq!(*calls.borrow(), vec!["home"]);
    }

    #[test]
    fn navigating_twice_pushes_two_entries() {
        let (history, router, calls) = setup("/");
        router.register("/contact", recorder(&calls, "contact")).unwrap();

        router.navigate("/contact").unwrap();
        router.navigate("/contact").unwrap();

        assert_eq!(*calls.borrow(), vec!["contact", "contact"]);
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn refused_push_renders_nothing() {
        let (history, router, calls) = setup("/");
        router.register("/", recorder(&calls, "home")).unwrap();
        router.register("/terms", recorder(&calls, "terms")).unwrap();
        history.refuse_pushes();

        let result = router.navigate("/terms");

        assert!(matches!(result, Err(RouterError::History(_))));
        assert!(calls.borrow().is_empty());
        assert_eq!(router.current_path(), "/");
    }

    #[test]
    fn handler_may_navigate_from_inside_resolve() {
        let (_history, router, calls) = setup("/");
        let redirect = router.clone();
        router
            .register("/old", move || redirect.navigate("/new").unwrap())
            .unwrap();
        router.register("/new", recorder(&calls, "new")).unwrap();

        router.navigate("/old").unwrap();

        assert_eq!(*calls.borrow(), vec!["new"]);
        assert_eq!(router.current_path(), "/new");
    }

    #[test]
    #[should_panic(expected = "broken page")]
    fn handler_panics_propagate() {
        let (_history, router, _calls) = setup("/");
        router.register("/", || panic!("broken page")).unwrap();
        router.resolve();
    }

    #[test]
    fn clones_share_one_route_table() {
        let (_history, router, calls) = setup("/");
        let other = router.clone();
        other.register("/course", recorder(&calls, "course")).unwrap();

        router.navigate("/course").unwrap();

        assert!(router == other);
        assert_eq!(*calls.borrow(), vec!["course"]);
    }

    #[test]
    fn back_still_resolves_after_caller_drops_its_handle() {
        let (history, router, calls) = setup("/");
        router.register("/", recorder(&calls, "home")).unwrap();
        router.register("/terms", recorder(&calls, "terms")).unwrap();
        router.init().unwrap();
        router.navigate("/terms").unwrap();
        drop(router);
        calls.borrow_mut().clear();

        history.back();

        assert_eq!(*calls.borrow(), vec!["home"]);
    }
}
