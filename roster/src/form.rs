//! # Add/edit form state
//!
//! The working copy of the record being added or edited, plus an explicit
//! mode machine. Modes are a single enum, so "at most one of adding/editing
//! is active" holds by construction rather than by convention; entering a
//! mode resets or loads the draft, and cancel always returns to idle.

use serde::{Deserialize, Serialize};

use crate::mask::{mask_field, PersonField};
use crate::model::Person;
use crate::validate::is_valid_record;

/// The field values currently held in the form, pending a save.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonDraft {
    pub name: String,
    pub email: String,
    pub tax_id: String,
    pub phone: String,
    pub birth_date: String,
}

impl PersonDraft {
    /// Load the draft from an existing record for editing.
    pub fn from_person(person: &Person) -> Self {
        Self {
            name: person.name.clone(),
            email: person.email.clone(),
            tax_id: person.tax_id.clone(),
            phone: person.phone.clone(),
            birth_date: person.birth_date.clone(),
        }
    }

    /// Store a keystroke value, masked for the field it belongs to.
    pub fn set_field(&mut self, field: PersonField, raw: &str) {
        let value = mask_field(field, raw);
        match field {
            PersonField::Name => self.name = value,
            PersonField::Email => self.email = value,
            PersonField::TaxId => self.tax_id = value,
            PersonField::Phone => self.phone = value,
            PersonField::BirthDate => self.birth_date = value,
        }
    }

    /// Whether the draft may be saved. See [`crate::validate`].
    pub fn is_valid(&self) -> bool {
        is_valid_record(
            &self.name,
            &self.email,
            &self.tax_id,
            &self.phone,
            &self.birth_date,
        )
    }
}

/// What the form is currently doing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Idle,
    Adding,
    /// Editing the record with this id.
    Editing(u32),
}

/// The form's mode and working values, owned by the people screen.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    mode: FormMode,
    pub draft: PersonDraft,
}

impl FormState {
    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Enter add mode with an empty draft, leaving any edit in progress.
    pub fn start_adding(&mut self) {
        self.mode = FormMode::Adding;
        self.draft = PersonDraft::default();
    }

    /// Enter edit mode for `person`, loading its values into the draft.
    pub fn start_editing(&mut self, person: &Person) {
        self.mode = FormMode::Editing(person.id);
        self.draft = PersonDraft::from_person(person);
    }

    /// Back to idle, dropping the draft.
    pub fn cancel(&mut self) {
        self.mode = FormMode::Idle;
        self.draft = PersonDraft::default();
    }

    /// A save is possible only while a mode is active and the draft passes
    /// validation.
    pub fn can_save(&self) -> bool {
        self.mode != FormMode::Idle && self.draft.is_valid()
    }
}
