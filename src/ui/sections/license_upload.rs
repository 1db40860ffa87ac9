//! License upload card
//!
//! Drag-and-drop zone plus a hidden file picker feeding [`LicenseIntake`].
//! Browser file handling only exists after hydration; the server renders the
//! empty card.

use leptos::html;
use leptos::prelude::*;
use uuid::Uuid;

use crate::core::content::{UPLOAD_INTRO, UPLOAD_NEXT_STEPS};
use crate::core::handoff::{LoggingBackend, UploadBackend};
use crate::core::upload::{ALLOWED_EXTENSIONS, HeldFile, LicenseIntake};
use crate::ui::common::{ErrorMessage, NumberedList};
use crate::ui::icon::{Icon, icons};

#[component]
pub fn LicenseUpload() -> impl IntoView {
    let intake = RwSignal::new(LicenseIntake::new());
    let (drag_active, set_drag_active) = signal(false);
    let picker_ref = NodeRef::<html::Input>::new();

    let error = Signal::derive(move || intake.with(|i| i.error().map(|e| e.to_string())));
    let held = move || intake.with(|i| i.files().to_vec());
    let can_submit = move || intake.with(|i| i.can_submit());

    #[cfg(feature = "hydrate")]
    let take_files = move |files: Vec<web_sys::File>| {
        use crate::core::upload::admit;
        use crate::ui::browser::ObjectUrlPreviews;

        let files = admit(files);
        intake.update(|i| {
            let _ = i.accept(&files, &ObjectUrlPreviews);
        });
    };

    #[cfg(feature = "hydrate")]
    on_cleanup(move || {
        intake.try_update(|i| i.release::<web_sys::File, _>(&crate::ui::browser::ObjectUrlPreviews));
    });

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        set_drag_active.set(false);

        #[cfg(feature = "hydrate")]
        take_files(crate::ui::browser::files_from_list(
            ev.data_transfer().and_then(|dt| dt.files()),
        ));
    };

    let on_pick = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            take_files(crate::ui::browser::files_from_list(input.files()));
            // Allow picking the same file again after removing it
            input.set_value("");
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let remove_file = move |id: Uuid| {
        #[cfg(feature = "hydrate")]
        intake.update(|i| {
            i.remove::<web_sys::File, _>(id, &crate::ui::browser::ObjectUrlPreviews);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    };

    let submit_for_review = move |_| {
        intake.with_untracked(|i| UploadBackend::hand_off(&LoggingBackend, i.files()));
    };

    view! {
        <section id="upload" class="section bg-gray-50">
            <div class="container max-w-4xl">
                <div class="text-center mb-12 fade-in-up">
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">"Upload Your License"</h2>
                    <p class="text-lg text-gray-600">{UPLOAD_INTRO}</p>
                </div>

                <div class="bg-white rounded-xl shadow-soft p-8">
                    // Outside the drop zone so the picker's click does not bubble back into it
                    <input
                        type="file"
                        class="hidden"
                        accept=ALLOWED_EXTENSIONS.join(",")
                        node_ref=picker_ref
                        on:change=on_pick
                    />
                    <div
                        class=move || {
                            if drag_active.get() {
                                "drop-zone border-blue-500 bg-blue-50"
                            } else {
                                "drop-zone border-gray-300 hover:border-blue-400"
                            }
                        }
                        role="button"
                        tabindex="0"
                        on:click=move |_| {
                            if let Some(input) = picker_ref.get() {
                                input.click();
                            }
                        }
                        on:dragenter=move |ev: leptos::ev::DragEvent| {
                            ev.prevent_default();
                            set_drag_active.set(true);
                        }
                        on:dragover=move |ev: leptos::ev::DragEvent| ev.prevent_default()
                        on:dragleave=move |_| set_drag_active.set(false)
                        on:drop=on_drop
                    >
                        <Icon name=icons::UPLOAD class="h-12 w-12 mx-auto mb-4" />
                        <p class="text-lg mb-2">
                            {move || {
                                if drag_active.get() {
                                    "Drop your license file here"
                                } else {
                                    "Drag & drop your license file here"
                                }
                            }}
                        </p>
                        <p class="text-sm text-gray-500">"or click to browse files"</p>
                        <p class="text-xs text-gray-400 mt-2">"Maximum file size: 5MB"</p>
                    </div>

                    <ErrorMessage error=error />

                    <div class="mt-6 space-y-3">
                        <For
                            each=held
                            key=|file| file.id
                            children=move |file: HeldFile| {
                                let id = file.id;
                                view! {
                                    <div class="flex items-center justify-between bg-gray-50 p-4 rounded-lg fade-in-left">
                                        <div class="flex items-center gap-3">
                                            <Icon name=icons::CHECK_CIRCLE class="h-5 w-5" />
                                            <div>
                                                <p class="font-medium">{file.name.clone()}</p>
                                                <p class="text-sm text-gray-500">{file.size_label()}</p>
                                            </div>
                                        </div>
                                        <button
                                            class="p-2 hover:bg-gray-200 rounded-full transition-colors"
                                            aria-label="Remove file"
                                            on:click=move |_| remove_file(id)
                                        >
                                            <Icon name=icons::X class="h-5 w-5" />
                                        </button>
                                    </div>
                                }
                            }
                        />
                    </div>

                    <Show when=can_submit>
                        <div class="mt-6 fade-in-up">
                            <button class="btn btn-primary w-full" on:click=submit_for_review>
                                "Submit License for Review"
                            </button>
                        </div>
                    </Show>
                </div>

                <NumberedList
                    title="What happens next?"
                    items=&UPLOAD_NEXT_STEPS
                    class="mt-8"
                />
            </div>
        </section>
    }
}
