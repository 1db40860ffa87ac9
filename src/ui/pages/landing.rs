//! Landing page component
//!
//! The whole site is this one page:
//! - SEO meta tags for search engine optimization
//! - Navbar with scroll shadow and mobile menu
//! - Hero, How It Works and Why Choose Us sections
//! - License upload card
//! - Testimonials
//! - Contact form
//! - Footer and the floating chat assistant

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::core::content::{HERO_PRODUCTS, SEO_DESCRIPTION, SITE_NAME};
use crate::ui::chat_widget::ChatWidget;
use crate::ui::sections::{
    ContactForm, Footer, Hero, HowItWorks, LicenseUpload, Navbar, Testimonials, WhyChooseUs,
};

/// Public address used in canonical and Open Graph tags
const SITE_URL: &str = "https://softsell.example/";

const PAGE_TITLE: &str = "SoftSell - Sell Your Unused Software Licenses";

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <SeoMeta />
        <LandingStyles />

        <div class="min-h-screen flex flex-col overflow-x-hidden">
            <Navbar />
            <main>
                <Hero />
                <HowItWorks />
                <WhyChooseUs />
                <LicenseUpload />
                <Testimonials />
                <ContactForm />
            </main>
            <Footer />
            <ChatWidget />
        </div>
    }
}

/// schema.org description of the business
fn structured_data() -> String {
    serde_json::json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": SITE_NAME,
        "url": SITE_URL,
        "description": SEO_DESCRIPTION,
        "makesOffer": HERO_PRODUCTS
            .iter()
            .map(|product| serde_json::json!({
                "@type": "Offer",
                "itemOffered": { "@type": "Service", "name": format!("{product} license buyback") }
            }))
            .collect::<Vec<_>>(),
    })
    .to_string()
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        // Page title
        <Title text=PAGE_TITLE />

        // Basic meta tags
        <Meta name="description" content=SEO_DESCRIPTION />
        <Meta name="keywords" content="sell software licenses, license resale, unused licenses, Adobe, Microsoft Office, Autodesk, Salesforce" />

        // Open Graph / Facebook
        <Meta property="og:type" content="website" />
        <Meta property="og:url" content=SITE_URL />
        <Meta property="og:title" content=PAGE_TITLE />
        <Meta property="og:description" content=SEO_DESCRIPTION />

        // Twitter
        <Meta property="twitter:card" content="summary" />
        <Meta property="twitter:title" content=PAGE_TITLE />
        <Meta property="twitter:description" content=SEO_DESCRIPTION />

        // Canonical URL
        <Link rel="canonical" href=SITE_URL />

        // JSON-LD Structured Data (inline script)
        <script type="application/ld+json" inner_html=structured_data()></script>
    }
}

/// CSS for reveal transitions and entrance animations
#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            html {
                scroll-behavior: smooth;
            }

            /* Scroll reveal: hidden until the section has been seen once */
            .reveal {
                opacity: 0;
                transform: translateY(2.5rem);
                transition: opacity 0.7s ease-out, transform 0.7s ease-out;
            }
            .reveal-left {
                opacity: 0;
                transform: translateX(-2.5rem);
                transition: opacity 0.7s ease-out, transform 0.7s ease-out;
            }
            .reveal.revealed,
            .reveal-left.revealed {
                opacity: 1;
                transform: none;
            }

            .recovery-bar {
                transition: width 1s ease-out;
            }

            /* Entrance animations */
            @keyframes fade-in {
                from { opacity: 0; }
                to { opacity: 1; }
            }
            @keyframes fade-in-up {
                from { opacity: 0; transform: translateY(20px); }
                to { opacity: 1; transform: translateY(0); }
            }
            @keyframes fade-in-left {
                from { opacity: 0; transform: translateX(-20px); }
                to { opacity: 1; transform: translateX(0); }
            }
            @keyframes fade-in-scale {
                from { opacity: 0; transform: scale(0.8); }
                to { opacity: 1; transform: scale(1); }
            }
            @keyframes pulse-slow {
                0%, 100% { transform: scale(1); }
                50% { transform: scale(1.1); }
            }

            .fade-in { animation: fade-in 0.6s ease-out both; }
            .fade-in-up { animation: fade-in-up 0.6s ease-out both; }
            .fade-in-left { animation: fade-in-left 0.6s ease-out both; }
            .fade-in-scale { animation: fade-in-scale 0.6s ease-out both; }
            .pulse-slow { animation: pulse-slow 4s ease-in-out infinite; }

            .delay-200 { animation-delay: 0.2s; transition-delay: 0.2s; }
            .delay-300 { animation-delay: 0.3s; transition-delay: 0.3s; }
            .delay-400 { animation-delay: 0.4s; }
            .delay-1000 { animation-delay: 1s; }

            .hover-grow { transition: transform 0.2s; }
            .hover-grow:hover { transform: scale(1.05); }
            .hover-grow:active { transform: scale(0.95); }
            .hover-lift { transition: transform 0.3s; }
            .hover-lift:hover { transform: translateY(-5px); }

            @media (prefers-reduced-motion: reduce) {
                .reveal, .reveal-left { opacity: 1; transform: none; transition: none; }
                .fade-in, .fade-in-up, .fade-in-left, .fade-in-scale, .pulse-slow { animation: none; }
            }
            "#
        </style>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_data_is_valid_json() {
        let value: serde_json::Value = serde_json::from_str(&structured_data()).unwrap();
        assert_eq!(value["@type"], "Organization");
        assert_eq!(value["name"], SITE_NAME);
        assert_eq!(
            value["makesOffer"].as_array().map(|offers| offers.len()),
            Some(HERO_PRODUCTS.len())
        );
    }
}
