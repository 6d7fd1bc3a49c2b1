use chrono::Utc;
use yew::prelude::*;

use crate::components::footer::Footer;
use crate::pages::PageProps;
use crate::plans::{format_price, PricingPlan, PLANS};
use crate::purchase::{self, BuyButtonState, Purchase};

#[derive(Properties, PartialEq)]
pub struct PricingCardProps {
    pub plan: &'static PricingPlan,
    pub purchase: Purchase,
}

#[function_component(PricingCard)]
pub fn pricing_card(props: &PricingCardProps) -> Html {
    let plan = props.plan;
    let state = use_state(|| BuyButtonState::Idle);

    let onclick = {
        let state = state.clone();
        let purchase = props.purchase.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if state.is_loading() {
                return;
            }
            let order_id = purchase::order_id(plan.id, Utc::now().timestamp_millis());
            let setter = state.setter();
            purchase.start(plan, order_id, Callback::from(move |next| setter.set(next)));
        })
    };

    html! {
        <div class={classes!("pricing-card", plan.popular.then(|| "popular"))}>
            if plan.popular {
                <div class="popular-badge">{"Most Popular"}</div>
            }
            <div class="plan-icon">{plan.icon}</div>
            <h3 class="plan-name">{plan.name}</h3>
            <p class="plan-description">{plan.description}</p>
            <div class="plan-price">
                <span class="currency">{"₹"}</span>
                <span class="amount">{format_price(plan.price)}</span>
                <span class="period">{"/one-time"}</span>
            </div>
            <ul class="features-list">
                { for plan.features.iter().map(|feature| html! { <li>{*feature}</li> }) }
            </ul>
            <button
                class={classes!(
                    "buy-button",
                    if plan.popular { "primary" } else { "secondary" },
                    state.is_loading().then(|| "loading"),
                )}
                disabled={state.is_loading()}
                {onclick}
            >
                {state.label()}
            </button>
        </div>
    }
}

#[function_component(HomePage)]
pub fn home_page(props: &PageProps) -> Html {
    let services = &props.services;

    html! {
        <main>
            <section class="hero">
                <div class="hero-content">
                    <div class="hero-badge">
                        {"✨ "}<span>{"Limited Time Offer"}</span>{" - 50% Off All Plans"}
                    </div>
                    <h1>{"Unlock Your "}<span class="gradient-text">{"Learning Potential"}</span></h1>
                    <p>{"Join thousands of learners who have transformed their careers with our premium courses. Start your journey today."}</p>
                </div>
            </section>

            <section class="pricing-section" id="pricing">
                <div class="pricing-header">
                    <h2>{"Choose Your Plan"}</h2>
                    <p>{"Simple, transparent pricing that grows with you"}</p>
                </div>

                <div class="pricing-grid">
                    {
                        for PLANS.iter().map(|plan| html! {
                            <PricingCard key={plan.id} plan={plan} purchase={services.purchase.clone()} />
                        })
                    }
                </div>
            </section>
            <Footer router={services.router.clone()} />
        </main>
    }
}
