use std::cell::RefCell;
use std::rc::Rc;

use yew::Callback;

use crate::Route;

#[derive(Default)]
struct OutletState {
    route: Option<Route>,
    listener: Option<Callback<Route>>,
}

/// The page currently on display. Route handlers write to it; the root `App`
/// component subscribes once and re-renders whenever it changes, so the
/// mount point is only ever owned by one Yew app.
#[derive(Clone, Default)]
pub struct Outlet {
    inner: Rc<RefCell<OutletState>>,
}

impl PartialEq for Outlet {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Outlet {
    pub fn current(&self) -> Option<Route> {
        self.inner.borrow().route
    }

    pub fn show(&self, route: Route) {
        let listener = {
            let mut state = self.inner.borrow_mut();
            state.route = Some(route);
            state.listener.clone()
        };
        if let Some(listener) = listener {
            listener.emit(route);
        }
    }

    /// Replaces the listener and immediately tells it what is on display, so
    /// routes shown before the subscription are not lost.
    pub fn subscribe(&self, listener: Callback<Route>) {
        let current = {
            let mut state = self.inner.borrow_mut();
            state.listener = Some(listener.clone());
            state.route
        };
        if let Some(route) = current {
            listener.emit(route);
        }
    }

    pub fn unsubscribe(&self) {
        self.inner.borrow_mut().listener = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recording() -> (Callback<Route>, Rc<RefCell<Vec<Route>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (Callback::from(move |route: Route| sink.borrow_mut().push(route)), seen)
    }

    #[test]
    fn late_subscriber_gets_the_current_page() {
        let outlet = Outlet::default();
        outlet.show(Route::Terms);
        outlet.show(Route::Privacy);

        let (listener, seen) = recording();
        outlet.subscribe(listener);

        assert_eq!(*seen.borrow(), vec![Route::Privacy]);
    }

    #[test]
    fn every_show_reaches_the_subscriber() {
        let outlet = Outlet::default();
        let (listener, seen) = recording();
        outlet.subscribe(listener);

        outlet.show(Route::Home);
        outlet.show(Route::Course);

        assert_eq!(*seen.borrow(), vec![Route::Home, Route::Course]);
        assert_eq!(outlet.current(), Some(Route::Course));
    }

    #[test]
    fn unsubscribed_listener_hears_nothing() {
        let outlet = Outlet::default();
        let (listener, seen) = recording();
        outlet.subscribe(listener);
        outlet.unsubscribe();

        outlet.show(Route::Contact);

        assert!(seen.borrow().is_empty());
        assert_eq!(outlet.current(), Some(Route::Contact));
    }
}
