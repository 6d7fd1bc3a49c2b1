use std::rc::Rc;

use log::{error, info, warn};
use yew::Callback;

use crate::checkout::{
    Checkout, CheckoutConfig, CheckoutFailure, CheckoutHandlers, CheckoutResponse, Notes, Prefill,
    Theme,
};
use crate::config;
use crate::plans::PricingPlan;
use crate::router::Router;
use crate::services::same_instance;
use crate::session::{save_payment, PaymentRecord, SessionStore};
use crate::toast::Toast;
use crate::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuyButtonState {
    Idle,
    Processing,
}

impl BuyButtonState {
    pub fn label(self) -> &'static str {
        match self {
            BuyButtonState::Idle => "Get Started",
            BuyButtonState::Processing => "Processing...",
        }
    }

    pub fn is_loading(self) -> bool {
        self == BuyButtonState::Processing
    }
}

pub fn order_id(plan_id: &str, unix_millis: i64) -> String {
    format!("order_{}_{}", unix_millis, plan_id)
}

pub fn checkout_config(plan: &PricingPlan, order_id: String) -> CheckoutConfig {
    CheckoutConfig {
        key: config::RAZORPAY_KEY_ID.to_string(),
        amount: plan.price * 100,
        currency: config::CHECKOUT_CURRENCY.to_string(),
        name: config::BRAND_NAME.to_string(),
        description: format!("{} Plan Subscription", plan.name),
        order_id,
        prefill: Prefill {
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            contact: "9999999999".to_string(),
        },
        notes: Notes { plan_id: plan.id.to_string() },
        theme: Theme { color: config::CHECKOUT_THEME_COLOR.to_string() },
    }
}

/// Buying a plan: opens the checkout and routes its outcome. Success stores
/// the payment for the course page and navigates there; dismissal and
/// failures put the buy button back and tell the user.
#[derive(Clone)]
pub struct Purchase {
    router: Router,
    checkout: Rc<dyn Checkout>,
    store: Rc<dyn SessionStore>,
    notify: Callback<Toast>,
}

impl PartialEq for Purchase {
    fn eq(&self, other: &Self) -> bool {
        self.router == other.router
            && same_instance(&self.checkout, &other.checkout)
            && same_instance(&self.store, &other.store)
            && self.notify == other.notify
    }
}

impl Purchase {
    pub fn new(
        router: Router,
        checkout: Rc<dyn Checkout>,
        store: Rc<dyn SessionStore>,
        notify: Callback<Toast>,
    ) -> Self {
        Self { router, checkout, store, notify }
    }

    pub fn start(&self, plan: &PricingPlan, order_id: String, button: Callback<BuyButtonState>) {
        info!("Starting checkout for plan {} ({})", plan.id, order_id);
        button.emit(BuyButtonState::Processing);

        let on_success = {
            let router = self.router.clone();
            let store = self.store.clone();
            let plan_id = plan.id.to_string();
            let plan_name = plan.name.to_string();
            let amount = plan.price;
            Box::new(move |response: CheckoutResponse| {
                let record = PaymentRecord {
                    payment_id: response.payment_id,
                    order_id: response.order_id,
                    signature: response.signature,
                    plan_id,
                    plan_name,
                    amount,
                };
                // The course page falls back to generic text without it.
                if let Err(e) = save_payment(&*store, &record) {
                    warn!("Failed to store payment {}: {}", record.payment_id, e);
                }
                if let Err(e) = router.navigate(Route::Course.path()) {
                    error!("Failed to open course page: {}", e);
                }
            })
        };

        let on_failure = {
            let notify = self.notify.clone();
            let button = button.clone();
            Box::new(move |failure: CheckoutFailure| {
                notify.emit(Toast::error(format!("Payment failed: {}", failure.description)));
                button.emit(BuyButtonState::Idle);
            })
        };

        let on_dismiss = {
            let notify = self.notify.clone();
            let button = button.clone();
            Box::new(move || {
                info!("Checkout dismissed");
                notify.emit(Toast::error("Payment was not completed."));
                button.emit(BuyButtonState::Idle);
            })
        };

        let handlers = CheckoutHandlers { on_success, on_failure, on_dismiss };
        if let Err(e) = self.checkout.open(checkout_config(plan, order_id), handlers) {
            error!("Checkout initialization error: {}", e);
            self.notify
                .emit(Toast::error("Payment system unavailable. Please try again later."));
            button.emit(BuyButtonState::Idle);
        }
    }
}
