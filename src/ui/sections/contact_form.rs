use std::time::Duration;

use leptos::html;
use leptos::prelude::*;

use crate::core::contact::{
    CONTACT_SUBMIT_DELAY_MS, ContactField, ContactFormState, LicenseType,
};
use crate::core::content::{CONTACT_INTRO, CONTACT_NEXT_STEPS, CONTACT_THANKS, CONTACT_TITLE};
use crate::core::handoff::{ContactBackend, LoggingBackend};
use crate::core::reveal::DEFAULT_REVEAL_THRESHOLD;
use crate::ui::common::{FormField, InlineSpinner, NumberedList, SelectField, TextAreaField};
use crate::ui::icon::{Icon, icons};
use crate::ui::reveal::use_reveal;
use crate::ui::scheduler::use_scheduler;

#[component]
pub fn ContactForm() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_reveal(section_ref, DEFAULT_REVEAL_THRESHOLD);
    let form = RwSignal::new(ContactFormState::new());
    let submitted = Signal::derive(move || form.with(|f| f.is_submitted()));

    view! {
        <section id="contact" class="section bg-white" node_ref=section_ref>
            <div class="container">
                <div class="grid md:grid-cols-2 gap-12 max-w-5xl mx-auto">
                    <div class="reveal-left" class:revealed=move || visible.get()>
                        <h2 class="text-3xl md:text-4xl font-bold mb-6">{CONTACT_TITLE}</h2>
                        <p class="text-lg text-gray-600 mb-8">{CONTACT_INTRO}</p>
                        <NumberedList title="What happens next?" items=&CONTACT_NEXT_STEPS />
                    </div>

                    <div class="reveal delay-300" class:revealed=move || visible.get()>
                        <Show
                            when=move || submitted.get()
                            fallback=move || view! { <QuoteForm form=form /> }
                        >
                            <ThankYou form=form />
                        </Show>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn QuoteForm(form: RwSignal<ContactFormState>) -> impl IntoView {
    let scheduler = use_scheduler();
    let submitting = Signal::derive(move || form.with(|f| f.is_submitting()));

    let value = move |field: ContactField| {
        Signal::derive(move || form.with(|f| f.submission.value(field)))
    };
    let error = move |field: ContactField| {
        Signal::derive(move || form.with(|f| f.errors.message(field)))
    };
    let edit = move |field: ContactField| {
        Callback::new(move |input: String| form.update(|f| f.edit(field, input)))
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        match form.try_update(|f| f.submit()) {
            Some(Ok(submission)) => {
                ContactBackend::hand_off(&LoggingBackend, &submission);
                scheduler.schedule(
                    Duration::from_millis(CONTACT_SUBMIT_DELAY_MS.into()),
                    Box::new(move || {
                        form.try_update(|f| f.complete());
                    }),
                );
            }
            Some(Err(e)) => tracing::debug!(error = %e, "Contact form not submitted"),
            None => {}
        }
    };

    view! {
        <form class="card" on:submit=on_submit novalidate=true>
            <div class="space-y-4">
                <FormField
                    name=ContactField::Name.input_name()
                    label=ContactField::Name.label()
                    value=value(ContactField::Name)
                    on_input=edit(ContactField::Name)
                    error=error(ContactField::Name)
                />
                <FormField
                    name=ContactField::Email.input_name()
                    label=ContactField::Email.label()
                    input_type="email"
                    value=value(ContactField::Email)
                    on_input=edit(ContactField::Email)
                    error=error(ContactField::Email)
                />
                <FormField
                    name=ContactField::Company.input_name()
                    label=ContactField::Company.label()
                    value=value(ContactField::Company)
                    on_input=edit(ContactField::Company)
                    error=error(ContactField::Company)
                />
                <SelectField
                    name=ContactField::LicenseType.input_name()
                    label=ContactField::LicenseType.label()
                    placeholder="Select License Type"
                    value=value(ContactField::LicenseType)
                    on_change=edit(ContactField::LicenseType)
                    options=LicenseType::ALL.iter().map(|t| t.display_name()).collect()
                    error=error(ContactField::LicenseType)
                />
                <TextAreaField
                    name=ContactField::Message.input_name()
                    label=ContactField::Message.label()
                    value=value(ContactField::Message)
                    on_input=edit(ContactField::Message)
                    error=error(ContactField::Message)
                />

                <button
                    type="submit"
                    class="btn btn-primary w-full flex items-center justify-center gap-2"
                    disabled=move || submitting.get()
                >
                    <Show
                        when=move || submitting.get()
                        fallback=|| view! {
                            <Icon name=icons::SEND class="h-5 w-5" />
                            "Send Message"
                        }
                    >
                        <InlineSpinner class="mr-1" />
                        "Processing..."
                    </Show>
                </button>
            </div>
        </form>
    }
}

#[component]
fn ThankYou(form: RwSignal<ContactFormState>) -> impl IntoView {
    view! {
        <div class="card h-full flex flex-col items-center justify-center text-center fade-in">
            <Icon name=icons::CHECK_CIRCLE class="h-16 w-16 mb-6" />
            <h3 class="text-2xl font-bold mb-2">"Thank You!"</h3>
            <p class="text-lg text-gray-600 mb-6">{CONTACT_THANKS}</p>
            <button class="btn btn-outline" on:click=move |_| form.update(|f| f.start_over())>
                "Send Another Message"
            </button>
        </div>
    }
}
