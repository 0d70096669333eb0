//! # The in-memory people collection
//!
//! Owns the session's records and the three operations the screen needs:
//! case-insensitive search by name, add with a fresh id, and edit in place.
//! There is no delete operation. The collection lives only for the UI
//! session; nothing is persisted.

use crate::form::PersonDraft;
use crate::model::Person;
use crate::seed;

/// Why an add or update was refused.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The draft failed validation; nothing was saved.
    #[error("draft failed validation")]
    InvalidDraft,
    /// No record has this id.
    #[error("no person with id {0}")]
    UnknownId(u32),
}

/// The in-memory collection of people.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Roster {
    people: Vec<Person>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the compiled-in seed data.
    pub fn seeded() -> Self {
        Self {
            people: seed::people(),
        }
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn get(&self, id: u32) -> Option<&Person> {
        self.people.iter().find(|p| p.id == id)
    }

    /// Case-insensitive substring match against each record's name,
    /// preserving the collection's order. An empty query matches everyone.
    pub fn search(&self, query: &str) -> Vec<Person> {
        let query = query.to_lowercase();
        self.people
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&query))
            .cloned()
            .collect()
    }

    /// The id the next added record will get: `max + 1`, or 1 when empty.
    pub fn next_id(&self) -> u32 {
        self.people.iter().map(|p| p.id).max().map_or(1, |id| id + 1)
    }

    /// Append a new record built from `draft`, returning its id. Refused
    /// entirely when the draft is invalid; no partial save happens.
    pub fn add(&mut self, draft: &PersonDraft) -> Result<u32, Error> {
        if !draft.is_valid() {
            return Err(Error::InvalidDraft);
        }
        let id = self.next_id();
        self.people.push(Person {
            id,
            name: draft.name.clone(),
            email: draft.email.clone(),
            tax_id: draft.tax_id.clone(),
            phone: draft.phone.clone(),
            birth_date: draft.birth_date.clone(),
        });
        Ok(id)
    }

    /// Replace the fields of the record with `id`, keeping its id.
    pub fn update(&mut self, id: u32, draft: &PersonDraft) -> Result<(), Error> {
        if !draft.is_valid() {
            return Err(Error::InvalidDraft);
        }
        let person = self
            .people
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(Error::UnknownId(id))?;
        person.name = draft.name.clone();
        person.email = draft.email.clone();
        person.tax_id = draft.tax_id.clone();
        person.phone = draft.phone.clone();
        person.birth_date = draft.birth_date.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str) -> PersonDraft {
        PersonDraft {
            name: name.to_string(),
            email: "a@b.com".into(),
            tax_id: "123.456.789-01".into(),
            phone: "(11) 91234-5678".into(),
            birth_date: "01/02/2000".into(),
        }
    }

    fn person(id: u32, name: &str) -> Person {
        Person {
            id,
            name: name.to_string(),
            email: "a@b.com".into(),
            tax_id: "123.456.789-01".into(),
            phone: "(11) 91234-5678".into(),
            birth_date: "01/02/2000".into(),
        }
    }

    #[test]
    fn first_id_is_one() {
        let mut roster = Roster::new();
        let id = roster.add(&draft("Ana")).unwrap();
        assert_eq!(id, 1);
        assert_eq!(roster.people().len(), 1);
    }

    #[test]
    fn ids_are_max_plus_one_not_count_plus_one() {
        let mut roster = Roster {
            people: vec![person(1, "Ana"), person(5, "Beto")],
        };
        let id = roster.add(&draft("Carla")).unwrap();
        assert_eq!(id, 6);
    }

    #[test]
    fn add_refuses_invalid_draft() {
        let mut roster = Roster::new();
        let mut d = draft("Ana");
        d.email = "a-b.com".into();
        assert_eq!(roster.add(&d), Err(Error::InvalidDraft));
        assert!(roster.people().is_empty());
    }

    #[test]
    fn update_preserves_id() {
        let mut roster = Roster {
            people: vec![person(3, "Ana")],
        };
        let mut d = draft("Ana Paula");
        d.phone = "(21) 99876-5432".into();
        roster.update(3, &d).unwrap();

        let updated = roster.get(3).unwrap();
        assert_eq!(updated.id, 3);
        assert_eq!(updated.name, "Ana Paula");
        assert_eq!(updated.phone, "(21) 99876-5432");
    }

    #[test]
    fn update_unknown_id_is_an_error() {
        let mut roster = Roster::new();
        assert_eq!(roster.update(9, &draft("Ana")), Err(Error::UnknownId(9)));
    }

    #[test]
    fn update_refuses_invalid_draft_without_touching_the_record() {
        let mut roster = Roster {
            people: vec![person(1, "Ana")],
        };
        let mut d = draft("");
        d.name = "   ".into();
        assert_eq!(roster.update(1, &d), Err(Error::InvalidDraft));
        assert_eq!(roster.get(1).unwrap().name, "Ana");
    }

    #[test]
    fn search_is_case_insensitive_and_keeps_order() {
        let roster = Roster {
            people: vec![person(1, "Ana"), person(2, "Beto"), person(3, "Ana Paula")],
        };
        let hits = roster.search("ana");
        let names: Vec<&str> = hits.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Ana", "Ana Paula"]);
    }

    #[test]
    fn empty_search_matches_everyone() {
        let roster = Roster::seeded();
        assert_eq!(roster.search("").len(), roster.people().len());
    }

    #[test]
    fn seed_records_are_valid_with_unique_ids() {
        let roster = Roster::seeded();
        assert!(!roster.people().is_empty());
        let mut ids: Vec<u32> = roster.people().iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), roster.people().len());
        for p in roster.people() {
            assert!(PersonDraft::from_person(p).is_valid(), "seed {} invalid", p.name);
        }
    }
}
