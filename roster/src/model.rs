//! # Person record
//!
//! The single domain model of the directory. Field values for the tax id,
//! phone, and birth date are stored in their masked display form (the same
//! string the user sees in the form — see [`crate::mask`]), so a record can
//! be loaded back into the edit form without any reformatting step.
//!
//! Ids are unique within a [`crate::Roster`], assigned as `max + 1` at
//! creation time, and never reused or reassigned.

use serde::{Deserialize, Serialize};

/// A person in the directory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Unique within the collection, never reused.
    pub id: u32,
    pub name: String,
    pub email: String,
    /// Masked display form: "123.456.789-01"
    pub tax_id: String,
    /// Masked display form: "(11) 91234-5678"
    pub phone: String,
    /// Masked display form: "01/02/1990"
    pub birth_date: String,
}
