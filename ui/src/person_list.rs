use dioxus::prelude::*;
use roster::Person;

/// The record list: one row per person with an edit action.
#[component]
pub fn PersonList(people: Vec<Person>, on_edit: EventHandler<u32>) -> Element {
    let rows = people.into_iter().map(|person| {
        let id = person.id;
        rsx! {
            li {
                key: "{id}",
                class: "person-row",
                div {
                    class: "person-info",
                    strong { "{person.name}" }
                    " - {person.email}"
                }
                button {
                    class: "edit-button",
                    onclick: move |_| on_edit.call(id),
                    "Edit"
                }
            }
        }
    });

    rsx! {
        ul {
            class: "people-list",
            {rows}
        }
    }
}
