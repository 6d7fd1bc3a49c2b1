use log::error;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlFormElement;
use yew::prelude::*;

use crate::call::CallError;
use crate::components::footer::{Footer, PolicyHeader};
use crate::config;
use crate::pages::PageProps;
use crate::toast::Toast;

pub const MESSAGE_SENT: &str = "Thank you for your message! We will get back to you soon.";

#[derive(Clone, Copy, PartialEq, Eq)]
enum CallState {
    Idle,
    Connecting,
    Active,
}

static SUBJECTS: [(&str, &str); 5] = [
    ("general", "General Inquiry"),
    ("support", "Technical Support"),
    ("billing", "Billing Question"),
    ("refund", "Refund Request"),
    ("feedback", "Feedback"),
];

static FAQ: [(&str, &str); 3] = [
    (
        "What payment methods do you accept?",
        "We accept all major credit cards, debit cards, UPI, and net banking through Razorpay.",
    ),
    (
        "How do I access my courses after purchase?",
        "After successful payment, you'll be redirected to your course dashboard immediately.",
    ),
    (
        "Can I get a refund?",
        "Yes, we offer refunds within 7 days of purchase. Please see our Cancellation & Refunds policy for details.",
    ),
];

fn call_error_message(e: &CallError) -> String {
    match e {
        CallError::NoBackend => "Browser calls are not available on this site yet. Please call us by phone instead.".to_string(),
        other => format!("Could not start the call: {}", other),
    }
}

#[function_component(ContactPage)]
pub fn contact_page(props: &PageProps) -> Html {
    let services = &props.services;
    let call_state = use_state(|| CallState::Idle);

    let onsubmit = {
        let notify = services.notify.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            notify.emit(Toast::success(MESSAGE_SENT));
            if let Some(form) = e.target_dyn_into::<HtmlFormElement>() {
                form.reset();
            }
        })
    };

    let toggle_call = {
        let call_state = call_state.clone();
        let voice = services.voice.clone();
        let notify = services.notify.clone();
        Callback::from(move |_: MouseEvent| match *call_state {
            CallState::Idle => {
                call_state.set(CallState::Connecting);
                let call_state = call_state.clone();
                let voice = voice.clone();
                let notify = notify.clone();
                spawn_local(async move {
                    match voice.start().await {
                        Ok(()) => call_state.set(CallState::Active),
                        Err(e) => {
                            error!("Error starting call: {}", e);
                            notify.emit(Toast::error(call_error_message(&e)));
                            call_state.set(CallState::Idle);
                        }
                    }
                });
            }
            CallState::Active => {
                voice.stop();
                call_state.set(CallState::Idle);
            }
            CallState::Connecting => {}
        })
    };

    let call_label = match *call_state {
        CallState::Idle => "Talk to us in the browser",
        CallState::Connecting => "Connecting...",
        CallState::Active => "End call",
    };

    html! {
        <main class="policy-page">
            <PolicyHeader router={services.router.clone()} title="Contact Us" />
            <div class="policy-content contact-page-content">
                <section class="contact-info-section">
                    <h2>{"Get in Touch"}</h2>
                    <p>{"We'd love to hear from you! Whether you have a question about our courses, pricing, or anything else, our team is ready to help."}</p>

                    <div class="contact-cards">
                        <div class="contact-card">
                            <div class="contact-icon">{"📧"}</div>
                            <h3>{"Email Us"}</h3>
                            <p>{config::SUPPORT_EMAIL}</p>
                            <p>{"We respond within 24 hours"}</p>
                        </div>
                        <div class="contact-card">
                            <div class="contact-icon">{"📞"}</div>
                            <h3>{"Call Us"}</h3>
                            <p>{config::SUPPORT_PHONE}</p>
                            <p>{"Mon-Fri, 9 AM - 6 PM IST"}</p>
                            <button
                                class={classes!("call-button", (*call_state == CallState::Active).then(|| "active"))}
                                disabled={*call_state == CallState::Connecting}
                                onclick={toggle_call}
                            >
                                {call_label}
                            </button>
                        </div>
                        <div class="contact-card">
                            <div class="contact-icon">{"📍"}</div>
                            <h3>{"Visit Us"}</h3>
                            <p>{"123 Learning Street"}</p>
                            <p>{"Mumbai, Maharashtra 400001"}</p>
                        </div>
                    </div>
                </section>

                <section class="contact-form-section">
                    <h2>{"Send Us a Message"}</h2>
                    <form class="contact-form" id="contact-form" {onsubmit}>
                        <div class="form-group">
                            <label for="name">{"Your Name"}</label>
                            <input type="text" id="name" name="name" required={true} placeholder="Enter your name" />
                        </div>
                        <div class="form-group">
                            <label for="email">{"Email Address"}</label>
                            <input type="email" id="email" name="email" required={true} placeholder="Enter your email" />
                        </div>
                        <div class="form-group">
                            <label for="phone">{"Phone Number"}</label>
                            <input type="tel" id="phone" name="phone" placeholder="Enter your phone number" />
                        </div>
                        <div class="form-group">
                            <label for="subject">{"Subject"}</label>
                            <select id="subject" name="subject" required={true}>
                                <option value="">{"Select a subject"}</option>
                                { for SUBJECTS.iter().map(|(value, label)| html! { <option value={*value}>{*label}</option> }) }
                            </select>
                        </div>
                        <div class="form-group">
                            <label for="message">{"Message"}</label>
                            <textarea id="message" name="message" rows="5" required={true} placeholder="How can we help you?" />
                        </div>
                        <button type="submit" class="submit-button">{"Send Message"}</button>
                    </form>
                </section>

                <section class="faq-section">
                    <h2>{"Frequently Asked Questions"}</h2>
                    {
                        for FAQ.iter().map(|(question, answer)| html! {
                            <div class="faq-item">
                                <h3>{*question}</h3>
                                <p>{*answer}</p>
                            </div>
                        })
                    }
                </section>
            </div>
            <Footer router={services.router.clone()} />
        </main>
    }
}
