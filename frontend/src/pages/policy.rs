use yew::prelude::*;

use crate::components::footer::{Footer, PolicyHeader};
use crate::config;
use crate::router::Router;
use crate::Route;

#[derive(Debug, PartialEq)]
pub struct Item {
    /// Bold lead-in, e.g. "Within 7 Days:".
    pub lead: Option<&'static str>,
    pub text: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct Section {
    pub heading: &'static str,
    pub body: Option<&'static str>,
    pub items: &'static [Item],
    pub ordered: bool,
    /// Closing contact block with this email address and the support phone.
    pub contact_email: Option<&'static str>,
}

#[derive(Debug, PartialEq)]
pub struct Policy {
    pub title: &'static str,
    pub sections: &'static [Section],
}

const fn item(text: &'static str) -> Item {
    Item { lead: None, text }
}

const fn lead(lead: &'static str, text: &'static str) -> Item {
    Item { lead: Some(lead), text }
}

const fn section(heading: &'static str, body: &'static str, items: &'static [Item]) -> Section {
    Section { heading, body: Some(body), items, ordered: false, contact_email: None }
}

const fn contact(heading: &'static str, body: &'static str, email: &'static str) -> Section {
    Section { heading, body: Some(body), items: &[], ordered: false, contact_email: Some(email) }
}

pub static CANCELLATION_REFUNDS: Policy = Policy {
    title: "Cancellation & Refunds Policy",
    sections: &[
        section(
            "1. Cancellation Policy",
            "At LearnPro, we understand that circumstances may change. You may cancel your subscription or course purchase according to the following terms:",
            &[
                lead("Before Course Access:", "Full refund if you haven't accessed any course content."),
                lead("Within 7 Days:", "If you're not satisfied with our courses, you can request a refund within 7 days of purchase."),
                lead("After 7 Days:", "Cancellation requests after 7 days will be reviewed on a case-by-case basis."),
            ],
        ),
        section(
            "2. Refund Policy",
            "Refunds are processed according to the following guidelines:",
            &[
                item("Refund requests must be submitted via email to support@learnpro.com"),
                item("Approved refunds will be credited within 5-7 business days"),
                item("Refunds will be processed to the original payment method"),
                item("Transaction fees may be deducted from the refund amount"),
            ],
        ),
        section(
            "3. Non-Refundable Items",
            "The following are not eligible for refunds:",
            &[
                item("Courses that have been fully completed"),
                item("Downloadable materials that have been accessed"),
                item("Certificates that have been issued"),
                item("Subscription renewals (after the renewal date)"),
            ],
        ),
        Section {
            heading: "4. How to Request a Refund",
            body: Some("To request a refund, please:"),
            items: &[
                item("Send an email to support@learnpro.com"),
                item("Include your order ID and reason for refund"),
                item("Our team will respond within 2-3 business days"),
            ],
            ordered: true,
            contact_email: None,
        },
        contact(
            "5. Contact Us",
            "For any questions regarding cancellations or refunds, please contact us at:",
            config::SUPPORT_EMAIL,
        ),
    ],
};

pub static TERMS: Policy = Policy {
    title: "Terms and Conditions",
    sections: &[
        section(
            "1. Introduction",
            "Welcome to LearnPro. By accessing our website and using our services, you agree to be bound by these Terms and Conditions. Please read them carefully before using our platform.",
            &[],
        ),
        Section {
            heading: "2. Definitions",
            body: None,
            items: &[
                lead("\"Service\"", "refers to the LearnPro platform and all courses offered."),
                lead("\"User\"", "refers to anyone who accesses or uses our services."),
                lead("\"Content\"", "refers to all materials, including videos, documents, and assessments."),
            ],
            ordered: false,
            contact_email: None,
        },
        section(
            "3. User Accounts",
            "To access our courses, you must:",
            &[
                item("Create an account with accurate information"),
                item("Maintain the security of your account credentials"),
                item("Notify us immediately of any unauthorized access"),
                item("Be at least 18 years old or have parental consent"),
            ],
        ),
        section(
            "4. Intellectual Property",
            "All content on LearnPro is protected by copyright and intellectual property laws. You may not:",
            &[
                item("Copy, reproduce, or distribute our content"),
                item("Share your account access with others"),
                item("Use our content for commercial purposes without permission"),
            ],
        ),
        section(
            "5. Payment Terms",
            "By purchasing a course or subscription:",
            &[
                item("You agree to pay the specified price"),
                item("All payments are processed securely via Razorpay"),
                item("Prices are subject to change without notice"),
                item("Applicable taxes may be added to the purchase price"),
            ],
        ),
        section(
            "6. Limitation of Liability",
            "LearnPro shall not be liable for any indirect, incidental, or consequential damages arising from the use of our services.",
            &[],
        ),
        section(
            "7. Governing Law",
            "These terms are governed by the laws of India. Any disputes shall be resolved in the courts of Maharashtra, India.",
            &[],
        ),
        contact(
            "8. Contact Information",
            "For questions about these terms, contact us at:",
            config::SUPPORT_EMAIL,
        ),
    ],
};

pub static SHIPPING: Policy = Policy {
    title: "Shipping Policy",
    sections: &[
        section(
            "1. Digital Delivery",
            "LearnPro is an online education platform. All our courses and materials are delivered digitally. There is no physical shipping involved for our core services.",
            &[],
        ),
        section(
            "2. Instant Access",
            "Upon successful payment, you will receive:",
            &[
                lead("Immediate access", "to your purchased courses"),
                item("Email confirmation with your order details"),
                item("Access to downloadable materials (if included in your plan)"),
                item("Certificate upon course completion"),
            ],
        ),
        section(
            "3. Access Duration",
            "Course access depends on your subscription plan:",
            &[
                lead("Basic Plan:", "1 Month Access"),
                lead("Pro Plan:", "6 Months Access"),
                lead("Enterprise Plan:", "Lifetime Access"),
            ],
        ),
        section(
            "4. Downloadable Materials",
            "Where applicable, downloadable materials such as PDFs, worksheets, and resources are available immediately after purchase and can be accessed through your dashboard.",
            &[],
        ),
        section(
            "5. Physical Merchandise (If Applicable)",
            "If we offer any physical merchandise in the future:",
            &[
                item("Shipping charges will be calculated at checkout"),
                item("Delivery times will vary based on location"),
                item("Tracking information will be provided via email"),
            ],
        ),
        section(
            "6. Technical Issues",
            "If you face any issues accessing your courses after purchase:",
            &[
                item("Check your email for order confirmation"),
                item("Clear your browser cache and try again"),
                item("Contact support@learnpro.com for assistance"),
            ],
        ),
        contact(
            "7. Contact Us",
            "For delivery-related queries, please contact:",
            config::SUPPORT_EMAIL,
        ),
    ],
};

pub static PRIVACY: Policy = Policy {
    title: "Privacy Policy",
    sections: &[
        section(
            "1. Introduction",
            "At LearnPro, we are committed to protecting your privacy. This policy explains how we collect, use, and safeguard your personal information.",
            &[],
        ),
        section(
            "2. Information We Collect",
            "We may collect the following information:",
            &[
                lead("Personal Information:", "Name, email address, phone number"),
                lead("Payment Information:", "Processed securely via Razorpay"),
                lead("Usage Data:", "Course progress, login times, device information"),
                lead("Cookies:", "To enhance your browsing experience"),
            ],
        ),
        section(
            "3. How We Use Your Information",
            "Your information is used to:",
            &[
                item("Provide and improve our services"),
                item("Process payments and send receipts"),
                item("Send course updates and promotional materials"),
                item("Respond to your inquiries and support requests"),
                item("Analyze usage patterns to improve user experience"),
            ],
        ),
        section(
            "4. Data Protection",
            "We implement security measures including:",
            &[
                item("SSL encryption for all data transmission"),
                item("Secure payment processing via Razorpay"),
                item("Regular security audits"),
                item("Limited access to personal data"),
            ],
        ),
        section(
            "5. Third-Party Sharing",
            "We do not sell your personal information. We may share data with:",
            &[
                item("Payment processors (Razorpay) for transactions"),
                item("Analytics services to improve our platform"),
                item("Legal authorities when required by law"),
            ],
        ),
        section(
            "6. Your Rights",
            "You have the right to:",
            &[
                item("Access your personal data"),
                item("Request correction of inaccurate data"),
                item("Request deletion of your account"),
                item("Opt-out of marketing communications"),
            ],
        ),
        section(
            "7. Cookies Policy",
            "We use cookies to enhance your experience. You can manage cookie preferences in your browser settings.",
            &[],
        ),
        contact(
            "8. Contact Us",
            "For privacy-related concerns, please contact:",
            config::PRIVACY_EMAIL,
        ),
    ],
};

pub fn policy_for(route: Route) -> Option<&'static Policy> {
    match route {
        Route::CancellationRefunds => Some(&CANCELLATION_REFUNDS),
        Route::Terms => Some(&TERMS),
        Route::Shipping => Some(&SHIPPING),
        Route::Privacy => Some(&PRIVACY),
        Route::Home | Route::Course | Route::Contact => None,
    }
}

fn render_item(item: &Item) -> Html {
    match item.lead {
        Some(lead) => html! { <li><strong>{lead}</strong>{" "}{item.text}</li> },
        None => html! { <li>{item.text}</li> },
    }
}

fn render_section(section: &Section) -> Html {
    html! {
        <section>
            <h2>{section.heading}</h2>
            if let Some(body) = section.body {
                <p>{body}</p>
            }
            if !section.items.is_empty() {
                if section.ordered {
                    <ol>{ for section.items.iter().map(render_item) }</ol>
                } else {
                    <ul>{ for section.items.iter().map(render_item) }</ul>
                }
            }
            if let Some(email) = section.contact_email {
                <p>{format!("Email: {}", email)}<br />{format!("Phone: {}", config::SUPPORT_PHONE)}</p>
            }
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct PolicyPageProps {
    pub router: Router,
    pub policy: &'static Policy,
}

#[function_component(PolicyPage)]
pub fn policy_page(props: &PolicyPageProps) -> Html {
    html! {
        <main class="policy-page">
            <PolicyHeader router={props.router.clone()} title={props.policy.title} />
            <div class="policy-content">
                { for props.policy.sections.iter().map(render_section) }
            </div>
            <Footer router={props.router.clone()} />
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_policy_route_has_content() {
        for route in Route::POLICIES {
            match route {
                Route::Contact => assert!(policy_for(route).is_none()),
                _ => {
                    let policy = policy_for(route).expect("policy text");
                    assert!(!policy.title.is_empty());
                    assert!(policy.sections.last().and_then(|s| s.contact_email).is_some());
                }
            }
        }
    }

    #[test]
    fn privacy_questions_go_to_privacy_address() {
        let last = PRIVACY.sections.last().unwrap();
        assert_eq!(last.contact_email, Some(config::PRIVACY_EMAIL));
    }
}
