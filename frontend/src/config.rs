
// Token endpoint for browser voice calls. An empty URL means no backend is
// deployed next to the static site, so voice calls are unavailable.
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

/// Element id the pages are rendered into.
pub const MOUNT_ID: &str = "app";

pub const BRAND_NAME: &str = "LearnPro";
pub const SUPPORT_EMAIL: &str = "support@learnpro.com";
pub const PRIVACY_EMAIL: &str = "privacy@learnpro.com";
pub const SUPPORT_PHONE: &str = "+91 9876543210";

// Razorpay live key id
pub const RAZORPAY_KEY_ID: &str = "rzp_live_RxQPaWeyT5yLdP";
pub const CHECKOUT_CURRENCY: &str = "INR";
pub const CHECKOUT_THEME_COLOR: &str = "#667eea";

pub const RETELL_AGENT_ID: &str = "agent_fa3eb10feb7403f424b167f82a";

pub const TOAST_DURATION_MS: u32 = 4_000;
