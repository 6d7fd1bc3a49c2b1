use log::error;
use yew::prelude::*;

use crate::router::Router;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct NavLinkProps {
    pub router: Router,
    pub to: Route,
    #[prop_or_default]
    pub classes: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Anchor that navigates through the router instead of loading a new document.
#[function_component(NavLink)]
pub fn nav_link(props: &NavLinkProps) -> Html {
    let onclick = {
        let router = props.router.clone();
        let to = props.to;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Err(e) = router.navigate(to.path()) {
                error!("Navigation to {} failed: {}", to.path(), e);
            }
        })
    };

    html! {
        <a href={props.to.path()} class={props.classes.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}
