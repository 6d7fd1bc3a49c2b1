#[derive(Debug, PartialEq)]
pub struct PricingPlan {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// One-time price in rupees.
    pub price: u32,
    pub icon: &'static str,
    pub popular: bool,
    pub features: &'static [&'static str],
}

pub static PLANS: [PricingPlan; 3] = [
    PricingPlan {
        id: "basic",
        name: "Basic",
        description: "Perfect for getting started",
        price: 499,
        icon: "🚀",
        popular: false,
        features: &[
            "5 Video Courses",
            "Basic Support",
            "1 Month Access",
            "Course Materials",
            "Mobile Access",
        ],
    },
    PricingPlan {
        id: "pro",
        name: "Pro",
        description: "Best value for serious learners",
        price: 999,
        icon: "⚡",
        popular: true,
        features: &[
            "25 Video Courses",
            "Priority Support",
            "6 Months Access",
            "Course Materials",
            "Certificate of Completion",
            "1-on-1 Mentorship",
        ],
    },
    PricingPlan {
        id: "enterprise",
        name: "Enterprise",
        description: "For teams and organizations",
        price: 2499,
        icon: "👑",
        popular: false,
        features: &[
            "Unlimited Courses",
            "24/7 Priority Support",
            "Lifetime Access",
            "All Course Materials",
            "Team Analytics",
            "Custom Learning Paths",
            "Dedicated Account Manager",
        ],
    },
];

/// Groups thousands with commas: 2499 -> "2,499".
pub fn format_price(price: u32) -> String {
    let digits = price.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
