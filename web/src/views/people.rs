//! The user-management screen: search, the record list, and the add/edit
//! form. All state lives in signals owned here; the core crate enforces the
//! invariants (mode exclusivity, validation gate, id assignment).

use dioxus::prelude::*;
use roster::{FormMode, FormState, PersonField, Roster};
use ui::{use_session, PersonForm, PersonList, SessionState};

use crate::Route;

#[component]
pub fn People() -> Element {
    let mut session = use_session();
    let nav = use_navigator();
    let mut roster = use_signal(Roster::seeded);
    let mut search = use_signal(String::new);
    let mut form = use_signal(FormState::default);

    // This screen requires a session.
    if !session().is_signed_in() {
        nav.replace(Route::Login {});
    }

    // Re-filtered on every keystroke of the search field.
    let filtered = roster.read().search(&search());

    let handle_save = move |_| {
        let state = form();
        let result = match state.mode() {
            FormMode::Adding => roster.write().add(&state.draft).map(|_| ()),
            FormMode::Editing(id) => roster.write().update(id, &state.draft),
            FormMode::Idle => return,
        };
        match result {
            Ok(()) => form.write().cancel(),
            // The form gates on the same validation, so this only fires if
            // the two ever disagree.
            Err(err) => tracing::warn!("save rejected: {err}"),
        }
    };

    let handle_edit = move |id: u32| {
        let person = roster.read().get(id).cloned();
        if let Some(person) = person {
            form.write().start_editing(&person);
        }
    };

    let handle_sign_out = move |_| {
        session.set(SessionState::default());
        nav.replace(Route::Login {});
    };

    let mode = form().mode();
    let (title, save_label) = match mode {
        FormMode::Adding => ("Add New Person", "Save New"),
        FormMode::Editing(_) => ("Editing Person", "Save Changes"),
        FormMode::Idle => ("", ""),
    };

    rsx! {
        div {
            class: "people-container",

            h1 { class: "people-title", "People Directory" }

            button {
                class: "back-button",
                onclick: handle_sign_out,
                "← Sign out"
            }

            input {
                class: "search-input",
                r#type: "text",
                placeholder: "Search by name",
                value: search(),
                oninput: move |evt| search.set(evt.value()),
            }

            button {
                class: "add-button",
                onclick: move |_| form.write().start_adding(),
                "Add Person"
            }

            PersonList {
                people: filtered,
                on_edit: handle_edit,
            }

            if mode != FormMode::Idle {
                PersonForm {
                    title: "{title}",
                    draft: form().draft,
                    can_save: form().can_save(),
                    save_label: "{save_label}",
                    on_field: move |(field, value): (PersonField, String)| {
                        form.write().draft.set_field(field, &value);
                    },
                    on_save: handle_save,
                    on_cancel: move |_| form.write().cancel(),
                }
            }
        }
    }
}
