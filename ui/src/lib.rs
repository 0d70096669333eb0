//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const APP_CSS: Asset = asset!("/assets/app.css");

mod session;
pub use session::{use_session, SessionProvider, SessionState};

mod person_form;
pub use person_form::PersonForm;

mod person_list;
pub use person_list::PersonList;
