use chrono::{Datelike, Utc};
use yew::prelude::*;

use crate::components::nav_link::NavLink;
use crate::config;
use crate::router::Router;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub router: Router,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = Utc::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-brand">
                    <h3>{config::BRAND_NAME}</h3>
                    <p>{"Empowering learners worldwide with premium education."}</p>
                </div>
                <div class="footer-links">
                    <h4>{"Policies"}</h4>
                    <ul>
                        {
                            for Route::POLICIES.into_iter().map(|route| html! {
                                <li>
                                    <NavLink router={props.router.clone()} to={route}>
                                        {route.title()}
                                    </NavLink>
                                </li>
                            })
                        }
                    </ul>
                </div>
                <div class="footer-contact">
                    <h4>{"Contact"}</h4>
                    <p>{format!("Email: {}", config::SUPPORT_EMAIL)}</p>
                    <p>{format!("Phone: {}", config::SUPPORT_PHONE)}</p>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{format!("© {} {}. All rights reserved.", year, config::BRAND_NAME)}</p>
            </div>
        </footer>
    }
}

#[derive(Properties, PartialEq)]
pub struct PolicyHeaderProps {
    pub router: Router,
    pub title: AttrValue,
}

#[function_component(PolicyHeader)]
pub fn policy_header(props: &PolicyHeaderProps) -> Html {
    html! {
        <header class="policy-header">
            <NavLink router={props.router.clone()} to={Route::Home} classes="back-link">
                {"← Back to Home"}
            </NavLink>
            <h1>{props.title.clone()}</h1>
        </header>
    }
}
