//! Core domain for the Rollcall people directory: the person record, the
//! input masks applied while the user types, the save-gate validation rules,
//! the in-memory collection, and the add/edit form state machine. This crate
//! has no UI dependencies; the frontends own it through Dioxus signals.

pub mod collection;
pub mod form;
pub mod mask;
pub mod model;
pub mod seed;
pub mod validate;

pub use collection::{Error, Roster};
pub use form::{FormMode, FormState, PersonDraft};
pub use mask::{mask_field, PersonField};
pub use model::Person;
