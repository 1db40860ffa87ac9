//! Landing page sections, top to bottom

mod contact_form;
mod footer;
mod hero;
mod how_it_works;
mod license_upload;
mod navbar;
mod testimonials;
mod why_choose_us;

pub use contact_form::ContactForm;
pub use footer::Footer;
pub use hero::Hero;
pub use how_it_works::HowItWorks;
pub use license_upload::LicenseUpload;
pub use navbar::Navbar;
pub use testimonials::Testimonials;
pub use why_choose_us::WhyChooseUs;
