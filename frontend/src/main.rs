use std::rc::Rc;

use log::{error, info, Level};
use thiserror::Error;
use web_sys::window;
use yew::prelude::*;

mod call;
mod checkout;
mod components;
mod config;
mod history;
mod outlet;
mod pages;
mod plans;
mod purchase;
mod router;
mod services;
mod session;
mod toast;

use call::{RetellCallClient, VoiceCall};
use checkout::RazorpayCheckout;
use history::{BrowserHistory, HistoryError};
use outlet::Outlet;
use pages::{
    contact::ContactPage,
    course::CoursePage,
    home::HomePage,
    policy::{policy_for, PolicyPage},
};
use purchase::Purchase;
use router::{Router, RouterError};
use services::Services;
use session::{BrowserSessionStore, SessionError, SessionStore};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Course,
    CancellationRefunds,
    Terms,
    Shipping,
    Privacy,
    Contact,
}

impl Route {
    pub const ALL: [Route; 7] = [
        Route::Home,
        Route::Course,
        Route::CancellationRefunds,
        Route::Terms,
        Route::Shipping,
        Route::Privacy,
        Route::Contact,
    ];

    /// Linked from the footer of every page.
    pub const POLICIES: [Route; 5] = [
        Route::CancellationRefunds,
        Route::Terms,
        Route::Shipping,
        Route::Privacy,
        Route::Contact,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Course => "/course",
            Route::CancellationRefunds => "/cancellation-refunds",
            Route::Terms => "/terms",
            Route::Shipping => "/shipping",
            Route::Privacy => "/privacy",
            Route::Contact => "/contact",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Course => "Your Course",
            Route::CancellationRefunds => "Cancellation & Refunds",
            Route::Terms => "Terms and Conditions",
            Route::Shipping => "Shipping",
            Route::Privacy => "Privacy Policy",
            Route::Contact => "Contact Us",
        }
    }
}

#[derive(Debug, Error)]
enum StartupError {
    #[error("mount point #{0} not found")]
    NoMount(&'static str),
    #[error(transparent)]
    History(#[from] HistoryError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Router(#[from] RouterError),
}

fn register_routes(router: &Router, render: Rc<dyn Fn(Route)>) -> Result<(), RouterError> {
    for route in Route::ALL {
        let render = render.clone();
        router.register(route.path(), move || render(route))?;
    }
    Ok(())
}

fn switch(services: &Services, route: Route) -> Html {
    let services = services.clone();
    match route {
        Route::Home => {
            info!("Rendering Home page");
            html! { <HomePage services={services} /> }
        }
        Route::Course => {
            info!("Rendering Course page");
            html! { <CoursePage services={services} /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <ContactPage services={services} /> }
        }
        Route::CancellationRefunds | Route::Terms | Route::Shipping | Route::Privacy => {
            match policy_for(route) {
                Some(policy) => {
                    info!("Rendering {} page", route.title());
                    html! { <PolicyPage router={services.router} policy={policy} /> }
                }
                None => {
                    error!("No policy text for {}", route.path());
                    html! {}
                }
            }
        }
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    services: Services,
    outlet: Outlet,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    let route = use_state_eq(|| props.outlet.current());

    {
        let route = route.clone();
        use_effect_with_deps(move |outlet: &Outlet| {
            outlet.subscribe(Callback::from(move |shown: Route| route.set(Some(shown))));
            let outlet = outlet.clone();
            move || outlet.unsubscribe()
        }, props.outlet.clone());
    }

    use_effect_with_deps(|_| {
        if let Some(window) = window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
        || ()
    }, *route);

    match *route {
        Some(route) => switch(&props.services, route),
        None => html! {},
    }
}

fn run() -> Result<(), StartupError> {
    let router = Router::new(Rc::new(BrowserHistory::new()?));
    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(config::MOUNT_ID))
        .ok_or(StartupError::NoMount(config::MOUNT_ID))?;
    let store: Rc<dyn SessionStore> = Rc::new(BrowserSessionStore::new()?);
    let notify = toast::notifier();

    let services = Services {
        router: router.clone(),
        purchase: Purchase::new(
            router.clone(),
            Rc::new(RazorpayCheckout),
            store.clone(),
            notify.clone(),
        ),
        voice: VoiceCall::new(
            Rc::new(RetellCallClient::default()),
            config::get_backend_url(),
            config::RETELL_AGENT_ID,
        ),
        store,
        notify,
    };

    let outlet = Outlet::default();
    let shown = outlet.clone();
    register_routes(&router, Rc::new(move |route: Route| shown.show(route)))?;

    yew::Renderer::<App>::with_root_and_props(root, AppProps { services, outlet }).render();
    router.init()?;
    Ok(())
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    if let Err(e) = run() {
        error!("Failed to start application: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashSet;

    use super::*;
    use crate::history::memory::MemoryHistory;

    fn routed(initial: &str) -> (Router, Rc<RefCell<Vec<Route>>>) {
        let router = Router::new(MemoryHistory::new(initial));
        let rendered = Rc::new(RefCell::new(Vec::new()));
        let sink = rendered.clone();
        register_routes(&router, Rc::new(move |route: Route| sink.borrow_mut().push(route))).unwrap();
        (router, rendered)
    }

    #[test]
    fn route_paths_are_distinct_and_absolute() {
        let paths: HashSet<_> = Route::ALL.iter().map(|r| r.path()).collect();
        assert_eq!(paths.len(), Route::ALL.len());
        assert!(paths.iter().all(|p| p.starts_with('/')));
        assert_eq!(Route::Home.path(), router::DEFAULT_PATH);
    }

    #[test]
    fn every_route_renders_its_own_page() {
        let (router, rendered) = routed("/");
        for route in Route::ALL {
            router.navigate(route.path()).unwrap();
        }
        assert_eq!(*rendered.borrow(), Route::ALL.to_vec());
    }

    #[test]
    fn landing_on_unknown_path_shows_home() {
        let (router, rendered) = routed("/old-campaign");
        router.init().unwrap();
        assert_eq!(*rendered.borrow(), vec![Route::Home]);
        assert_eq!(router.current_path(), "/old-campaign");
    }

    #[test]
    fn navigation_swaps_the_page_in_one_outlet() {
        let router = Router::new(MemoryHistory::new("/"));
        let outlet = Outlet::default();
        let shown = outlet.clone();
        register_routes(&router, Rc::new(move |route: Route| shown.show(route))).unwrap();
        router.init().unwrap();

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        outlet.subscribe(Callback::from(move |route: Route| sink.borrow_mut().push(route)));

        router.navigate(Route::Terms.path()).unwrap();
        router.navigate(Route::Course.path()).unwrap();

        assert_eq!(*seen.borrow(), vec![Route::Home, Route::Terms, Route::Course]);
        assert_eq!(outlet.current(), Some(Route::Course));
    }
}
