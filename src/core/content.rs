//! Marketing copy for the landing page sections

/// A titled block of copy with an icon
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub company: &'static str,
}

/// Average share of list price recovered, per product
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecoveryRate {
    pub product: &'static str,
    pub percent: u8,
}

/// In-page anchor shown in the navbar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const SITE_NAME: &str = "SoftSell";

pub const HERO_TITLE: &str = "Unlock the Value of Your Unused Software Licenses";
pub const HERO_SUBTITLE: &str = "SoftSell helps businesses recoup costs by selling unused or underutilized software licenses at competitive market rates.";

/// Products shown on the hero card
pub const HERO_PRODUCTS: [&str; 4] = [
    "Adobe Creative Cloud",
    "Microsoft Office",
    "Autodesk Suite",
    "Salesforce",
];

pub const NAV_LINKS: [NavLink; 3] = [
    NavLink {
        label: "How It Works",
        href: "#how-it-works",
    },
    NavLink {
        label: "Why Choose Us",
        href: "#why-choose-us",
    },
    NavLink {
        label: "Testimonials",
        href: "#testimonials",
    },
];

/// Call-to-action link that closes the navbar list
pub const NAV_CTA: NavLink = NavLink {
    label: "Get a Quote",
    href: "#contact",
};

pub const STEPS_INTRO: &str =
    "Our streamlined process makes it easy to turn your unused software licenses into cash.";

pub const STEPS: [Highlight; 3] = [
    Highlight {
        icon: "upload",
        title: "Upload License",
        description: "Share your software license details through our secure portal for a quick evaluation.",
    },
    Highlight {
        icon: "search",
        title: "Get Valuation",
        description: "Our market experts analyze your license and provide you with a competitive offer within 24 hours.",
    },
    Highlight {
        icon: "credit-card",
        title: "Get Paid",
        description: "Accept our offer and receive payment through your preferred method within 3-5 business days.",
    },
];

/// Transition delay between consecutive steps
pub const STEP_STAGGER_MS: u32 = 150;

pub const FEATURES_INTRO: &str = "We've helped hundreds of businesses recover costs from underutilized software. Here's why companies trust us:";

pub const FEATURES: [Highlight; 4] = [
    Highlight {
        icon: "shield-check",
        title: "Secure Transactions",
        description: "All license transfers follow legal requirements with our secure verification process.",
    },
    Highlight {
        icon: "clock",
        title: "Fast Processing",
        description: "Get valuations within 24 hours and payment within days, not weeks.",
    },
    Highlight {
        icon: "dollar-sign",
        title: "Maximum Value",
        description: "Our market expertise ensures you get the highest possible return on your licenses.",
    },
    Highlight {
        icon: "users",
        title: "Expert Support",
        description: "Our dedicated team guides you through every step of the selling process.",
    },
];

pub const RECOVERY_RATES: [RecoveryRate; 4] = [
    RecoveryRate {
        product: "Adobe Creative Cloud",
        percent: 65,
    },
    RecoveryRate {
        product: "Microsoft Office",
        percent: 70,
    },
    RecoveryRate {
        product: "Autodesk Suite",
        percent: 60,
    },
    RecoveryRate {
        product: "Salesforce",
        percent: 75,
    },
];

pub const TESTIMONIALS: [Testimonial; 2] = [
    Testimonial {
        quote: "SoftSell helped us recover nearly 70% of the value from our unused Adobe licenses after downsizing. The process was seamless and exceeded our expectations.",
        name: "Sarah Johnson",
        title: "CTO",
        company: "TechNova Solutions",
    },
    Testimonial {
        quote: "When we migrated to cloud solutions, we had dozens of unused licenses. SoftSell turned what would have been a total loss into a significant cost recovery.",
        name: "Michael Chen",
        title: "IT Director",
        company: "Horizon Financial",
    },
];

/// Transition delay between consecutive testimonial cards
pub const TESTIMONIAL_STAGGER_MS: u32 = 200;

pub const UPLOAD_INTRO: &str = "Start by uploading your software license document. We accept PDF, DOC, DOCX, and TXT files.";

pub const UPLOAD_NEXT_STEPS: [&str; 3] = [
    "Our team will review your license details",
    "We'll verify the license validity and transferability",
    "You'll receive a valuation within 24 hours",
];

pub const CONTACT_TITLE: &str = "Ready to Unlock the Value of Your Software?";
pub const CONTACT_INTRO: &str = "Fill out the form and one of our license valuation experts will get back to you within 24 hours with an estimate.";

pub const CONTACT_NEXT_STEPS: [&str; 4] = [
    "We'll review your information",
    "A license expert will contact you",
    "We'll provide a valuation estimate",
    "You decide to proceed or not",
];

pub const CONTACT_THANKS: &str =
    "Your message has been sent successfully. We'll get back to you within 24 hours.";

pub const SEO_DESCRIPTION: &str = "Sell your unused Adobe, Microsoft, Autodesk and Salesforce licenses. Get a valuation within 24 hours and payment within days.";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::contact::LicenseType;

    #[test]
    fn test_recovery_rates_are_percentages() {
        for rate in RECOVERY_RATES {
            assert!(rate.percent <= 100, "{} over 100%", rate.product);
        }
    }

    #[test]
    fn test_hero_products_are_license_types() {
        for product in HERO_PRODUCTS {
            assert!(product.parse::<LicenseType>().is_ok(), "{product}");
        }
    }

    #[test]
    fn test_nav_links_are_anchors() {
        for link in NAV_LINKS.iter().chain(std::iter::once(&NAV_CTA)) {
            assert!(link.href.starts_with('#'));
        }
    }
}
