use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name (without the .svg extension)
    name: &'static str,
    /// CSS classes for sizing and spacing
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

/// Icons shipped in `public/icons`
pub mod icons {
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const CHECK_CIRCLE: &str = "check-circle";
    pub const CLOCK: &str = "clock";
    pub const CREDIT_CARD: &str = "credit-card";
    pub const DOLLAR_SIGN: &str = "dollar-sign";
    pub const FILE_TEXT: &str = "file-text";
    pub const MENU: &str = "menu";
    pub const MESSAGE_CIRCLE: &str = "message-circle";
    pub const QUOTE: &str = "quote";
    pub const SEARCH: &str = "search";
    pub const SEND: &str = "send";
    pub const SHIELD_CHECK: &str = "shield-check";
    pub const UPLOAD: &str = "upload";
    pub const USERS: &str = "users";
    pub const X: &str = "x";
}
