use leptos::prelude::*;

/// Error line rendered under a field
#[component]
fn FieldErrorText(error: Option<Signal<Option<String>>>) -> impl IntoView {
    move || {
        error
            .and_then(|e| e.get())
            .map(|err| view! { <p class="form-error">{err}</p> })
    }
}

/// Input classes, with a red border while the field has an error
fn field_class(
    base: &'static str,
    error: Option<Signal<Option<String>>>,
) -> impl Fn() -> String + Send + Sync + 'static {
    move || {
        if error.and_then(|e| e.get()).is_some() {
            format!("{base} border-red-500")
        } else {
            base.to_string()
        }
    }
}

/// Generic form field component with label and input
#[component]
pub fn FormField(
    /// `id` and `name` of the input
    name: &'static str,
    /// Field label text
    label: &'static str,
    /// Input type (text, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Whether field is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    /// Optional error message to display
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div>
            <label for=name class="form-label">{label}</label>
            <input
                type=input_type
                id=name
                name=name
                class=field_class("input", error)
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
            />
            <FieldErrorText error=error />
        </div>
    }
}

/// Text area form field component
#[component]
pub fn TextAreaField(
    /// `id` and `name` of the text area
    name: &'static str,
    /// Field label text
    label: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Number of rows
    #[prop(default = 4)]
    rows: u32,
    /// Whether field is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    /// Optional error message to display
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div>
            <label for=name class="form-label">{label}</label>
            <textarea
                id=name
                name=name
                class=field_class("input resize-none", error)
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
            />
            <FieldErrorText error=error />
        </div>
    }
}

/// Select/dropdown form field component
///
/// The first option is an empty placeholder, so "nothing chosen" is
/// reported as an empty string.
#[component]
pub fn SelectField(
    /// `id` and `name` of the select box
    name: &'static str,
    /// Field label text
    label: &'static str,
    /// Text of the empty placeholder option
    placeholder: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Change event callback
    on_change: Callback<String>,
    /// Option values, shown as-is
    options: Vec<&'static str>,
    /// Whether field is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    /// Optional error message to display
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div>
            <label for=name class="form-label">{label}</label>
            <select
                id=name
                name=name
                class=field_class("input", error)
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
                disabled=move || disabled.get()
            >
                <option value="">{placeholder}</option>
                {options
                    .into_iter()
                    .map(|option| view! { <option value=option>{option}</option> })
                    .collect_view()}
            </select>
            <FieldErrorText error=error />
        </div>
    }
}
