use log::error;
use yew::prelude::*;

use crate::pages::PageProps;
use crate::session::load_payment;
use crate::Route;

/// Shown when the session has no payment, e.g. after opening `/course` directly.
pub const FALLBACK_PLAN_NAME: &str = "Premium";

static MODULES: [(&str, &str); 5] = [
    ("Getting Started", "Introduction and setup • 15 min"),
    ("Core Fundamentals", "Essential concepts • 45 min"),
    ("Advanced Techniques", "Deep dive into advanced topics • 1 hr"),
    ("Real-World Projects", "Hands-on practice • 2 hrs"),
    ("Final Assessment", "Test your knowledge • 30 min"),
];

static QUICK_STATS: [&str; 4] = [
    "5 comprehensive modules",
    "4+ hours of content",
    "Downloadable resources",
    "Certificate upon completion",
];

#[function_component(CoursePage)]
pub fn course_page(props: &PageProps) -> Html {
    let plan_name = {
        let store = props.services.store.clone();
        use_state(move || {
            load_payment(&*store)
                .map(|payment| payment.plan_name)
                .unwrap_or_else(|| FALLBACK_PLAN_NAME.to_string())
        })
    };

    let back_home = {
        let router = props.services.router.clone();
        Callback::from(move |_: MouseEvent| {
            if let Err(e) = router.navigate(Route::Home.path()) {
                error!("Navigation home failed: {}", e);
            }
        })
    };

    html! {
        <main class="course-page">
            <header class="course-header">
                <div class="success-icon">{"✓"}</div>
                <h1>{"Welcome to Your Course!"}</h1>
                <p>{format!("Your {} plan is now active. Start learning today!", *plan_name)}</p>
            </header>

            <section class="course-content">
                <div class="course-card">
                    <h2>{"📚 Your Learning Path"}</h2>
                    <div class="course-modules">
                        {
                            for MODULES.iter().enumerate().map(|(i, (title, detail))| html! {
                                <div class="module-item">
                                    <div class="module-number">{i + 1}</div>
                                    <div class="module-info">
                                        <h3>{*title}</h3>
                                        <p>{*detail}</p>
                                    </div>
                                </div>
                            })
                        }
                    </div>
                </div>

                <div class="course-card">
                    <h2>{"🎯 Quick Stats"}</h2>
                    <p class="course-card-note">
                        {"You now have full access to all course materials and resources included in your plan."}
                    </p>
                    <ul class="features-list">
                        { for QUICK_STATS.iter().map(|stat| html! { <li>{*stat}</li> }) }
                    </ul>
                </div>

                <button class="back-button" id="back-home" onclick={back_home}>
                    {"← Back to Plans"}
                </button>
            </section>
        </main>
    }
}
