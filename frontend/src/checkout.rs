//! Payment checkout widget.
//!
//! Pages only see [`Checkout`]: open a modal with a [`CheckoutConfig`] and get
//! exactly one of success or dismissal back, possibly preceded by failure
//! reports. [`RazorpayCheckout`] drives the `Razorpay` global loaded by
//! `checkout.js`.

use std::rc::Rc;

use log::{error, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::{Function, Object, Reflect};
use web_sys::window;

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("checkout widget is not loaded")]
    Unavailable,
    #[error("checkout widget failed: {0}")]
    Js(String),
    #[error("could not encode checkout options: {0}")]
    Options(#[from] serde_wasm_bindgen::Error),
}

impl From<JsValue> for CheckoutError {
    fn from(value: JsValue) -> Self {
        CheckoutError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prefill {
    pub name: String,
    pub email: String,
    pub contact: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notes {
    pub plan_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Theme {
    pub color: String,
}

/// Options handed to the widget. Field names are the widget's own.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutConfig {
    pub key: String,
    /// Minor units (paise).
    pub amount: u32,
    pub currency: String,
    pub name: String,
    pub description: String,
    pub order_id: String,
    pub prefill: Prefill,
    pub notes: Notes,
    pub theme: Theme,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutResponse {
    pub payment_id: String,
    pub order_id: String,
    pub signature: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutFailure {
    pub description: String,
}

pub struct CheckoutHandlers {
    pub on_success: Box<dyn FnOnce(CheckoutResponse)>,
    pub on_failure: Box<dyn Fn(CheckoutFailure)>,
    pub on_dismiss: Box<dyn FnOnce()>,
}

pub trait Checkout {
    /// Opens the checkout modal. An error means the modal never opened and
    /// none of the handlers will run.
    fn open(&self, config: CheckoutConfig, handlers: CheckoutHandlers) -> Result<(), CheckoutError>;
}

#[wasm_bindgen]
extern "C" {
    type Razorpay;

    #[wasm_bindgen(constructor, catch)]
    fn new(options: &JsValue) -> Result<Razorpay, JsValue>;

    #[wasm_bindgen(method)]
    fn on(this: &Razorpay, event: &str, callback: &Function);

    #[wasm_bindgen(method, catch)]
    fn open(this: &Razorpay) -> Result<(), JsValue>;
}

#[derive(Deserialize)]
struct RazorpaySuccess {
    #[serde(default)]
    razorpay_payment_id: String,
    #[serde(default)]
    razorpay_order_id: String,
    #[serde(default)]
    razorpay_signature: String,
}

#[derive(Deserialize, Default)]
struct RazorpayErrorBody {
    #[serde(default)]
    description: String,
}

#[derive(Deserialize)]
struct RazorpayFailure {
    #[serde(default)]
    error: RazorpayErrorBody,
}

pub const UNREADABLE_RESPONSE: &str = "payment response could not be read, please contact support";

/// Routes the widget's success payload. A completed payment whose response
/// cannot be read still has to end the purchase, so it is reported as a
/// failure.
fn deliver_success(
    decoded: Result<CheckoutResponse, String>,
    on_success: Box<dyn FnOnce(CheckoutResponse)>,
    on_failure: &dyn Fn(CheckoutFailure),
) {
    match decoded {
        Ok(response) => {
            info!("Payment successful: {}", response.payment_id);
            on_success(response);
        }
        Err(e) => {
            error!("Unreadable payment response: {}", e);
            on_failure(CheckoutFailure { description: UNREADABLE_RESPONSE.to_string() });
        }
    }
}

#[derive(Default)]
pub struct RazorpayCheckout;

impl RazorpayCheckout {
    fn is_loaded() -> bool {
        window()
            .map(|w| Reflect::has(&w, &JsValue::from_str("Razorpay")).unwrap_or(false))
            .unwrap_or(false)
    }
}

impl Checkout for RazorpayCheckout {
    fn open(&self, config: CheckoutConfig, handlers: CheckoutHandlers) -> Result<(), CheckoutError> {
        if !Self::is_loaded() {
            return Err(CheckoutError::Unavailable);
        }

        let CheckoutHandlers { on_success, on_failure, on_dismiss } = handlers;
        let options = serde_wasm_bindgen::to_value(&config)?;

        let on_failure: Rc<dyn Fn(CheckoutFailure)> = Rc::from(on_failure);

        let unreadable = on_failure.clone();
        let handler = Closure::once_into_js(move |response: JsValue| {
            let decoded = serde_wasm_bindgen::from_value::<RazorpaySuccess>(response)
                .map(|success| CheckoutResponse {
                    payment_id: success.razorpay_payment_id,
                    order_id: success.razorpay_order_id,
                    signature: success.razorpay_signature,
                })
                .map_err(|e| e.to_string());
            deliver_success(decoded, on_success, unreadable.as_ref());
        });
        Reflect::set(&options, &JsValue::from_str("handler"), &handler)?;

        let modal = Object::new();
        let dismiss = Closure::once_into_js(move || on_dismiss());
        Reflect::set(&modal, &JsValue::from_str("ondismiss"), &dismiss)?;
        Reflect::set(&options, &JsValue::from_str("modal"), &modal)?;

        let widget = Razorpay::new(&options)?;

        let failed = Closure::wrap(Box::new(move |response: JsValue| {
            let failure = serde_wasm_bindgen::from_value::<RazorpayFailure>(response)
                .map(|f| f.error.description)
                .unwrap_or_default();
            error!("Payment failed: {}", failure);
            on_failure(CheckoutFailure { description: failure });
        }) as Box<dyn FnMut(JsValue)>);
        widget.on("payment.failed", failed.as_ref().unchecked_ref());
        failed.forget();

        widget.open()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    struct Outcome {
        successes: Rc<RefCell<Vec<CheckoutResponse>>>,
        failures: Rc<RefCell<Vec<CheckoutFailure>>>,
    }

    fn deliver(decoded: Result<CheckoutResponse, String>) -> Outcome {
        let successes = Rc::new(RefCell::new(Vec::new()));
        let failures = Rc::new(RefCell::new(Vec::new()));
        let on_success = {
            let successes = successes.clone();
            Box::new(move |response: CheckoutResponse| successes.borrow_mut().push(response))
        };
        let on_failure = {
            let failures = failures.clone();
            move |failure: CheckoutFailure| failures.borrow_mut().push(failure)
        };
        deliver_success(decoded, on_success, &on_failure);
        Outcome { successes, failures }
    }

    #[test]
    fn readable_response_goes_to_success() {
        let response = CheckoutResponse {
            payment_id: "pay_1".to_string(),
            order_id: "order_42".to_string(),
            signature: "sig".to_string(),
        };
        let outcome = deliver(Ok(response.clone()));
        assert_eq!(*outcome.successes.borrow(), vec![response]);
        assert!(outcome.failures.borrow().is_empty());
    }

    #[test]
    fn unreadable_response_is_reported_as_failure() {
        let outcome = deliver(Err("invalid type: unit value".to_string()));
        assert!(outcome.successes.borrow().is_empty());
        assert_eq!(
            *outcome.failures.borrow(),
            vec![CheckoutFailure { description: UNREADABLE_RESPONSE.to_string() }]
        );
    }
}
