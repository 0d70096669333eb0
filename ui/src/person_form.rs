use dioxus::prelude::*;
use roster::{PersonDraft, PersonField};

/// Inline form for adding or editing a person. Controlled: the screen owns
/// the draft and mode; every keystroke goes out through `on_field` already
/// tagged with the field it belongs to, and comes back masked.
#[component]
pub fn PersonForm(
    title: String,
    draft: PersonDraft,
    can_save: bool,
    save_label: String,
    on_field: EventHandler<(PersonField, String)>,
    on_save: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let handle_save = move |_| {
        // The button is disabled while invalid, but a submit can still be
        // forced; the collection would refuse it anyway.
        if !can_save {
            tracing::warn!("save triggered while the draft is invalid");
            return;
        }
        on_save.call(());
    };

    rsx! {
        div {
            class: "form-container",
            h2 { "{title}" }

            input {
                class: "form-input",
                r#type: "text",
                placeholder: "Name",
                value: "{draft.name}",
                oninput: move |evt| on_field.call((PersonField::Name, evt.value())),
            }
            input {
                class: "form-input",
                r#type: "email",
                placeholder: "E-mail",
                value: "{draft.email}",
                oninput: move |evt| on_field.call((PersonField::Email, evt.value())),
            }
            input {
                class: "form-input",
                r#type: "text",
                placeholder: "Tax id",
                value: "{draft.tax_id}",
                oninput: move |evt| on_field.call((PersonField::TaxId, evt.value())),
            }
            input {
                class: "form-input",
                r#type: "text",
                placeholder: "Phone",
                value: "{draft.phone}",
                oninput: move |evt| on_field.call((PersonField::Phone, evt.value())),
            }
            input {
                class: "form-input",
                r#type: "text",
                placeholder: "Birth date",
                value: "{draft.birth_date}",
                oninput: move |evt| on_field.call((PersonField::BirthDate, evt.value())),
            }

            div {
                class: "form-buttons",
                button {
                    class: "save-button",
                    disabled: !can_save,
                    onclick: handle_save,
                    "{save_label}"
                }
                button {
                    class: "cancel-button",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}
