//! # Input masks
//!
//! Display formatting applied on every keystroke of the add/edit form. Each
//! mask strips non-digits, truncates to the field's capacity, and then walks
//! the digits inserting fixed separators at fixed positions, so partial input
//! yields a partial mask and re-masking an already masked string is a no-op.
//!
//! | Field | Capacity | Full mask |
//! |-------|----------|-----------|
//! | tax id | 11 digits | `123.456.789-01` |
//! | phone | 11 digits | `(11) 91234-5678` |
//! | birth date | 8 digits | `01/02/1990` |
//!
//! Name and e-mail are free text and pass through untouched.

/// Identifies a field of the person form for masking purposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PersonField {
    Name,
    Email,
    TaxId,
    Phone,
    BirthDate,
}

/// Mask `raw` for the given field. Total: any input, including empty or
/// over-length strings, yields a best-effort (possibly partial) mask.
pub fn mask_field(field: PersonField, raw: &str) -> String {
    match field {
        PersonField::Name | PersonField::Email => raw.to_string(),
        PersonField::TaxId => mask_tax_id(raw),
        PersonField::Phone => mask_phone(raw),
        PersonField::BirthDate => mask_birth_date(raw),
    }
}

/// `DDD.DDD.DDD-DD`. Dots appear with the 4th and 7th digit, the dash with
/// the 10th.
pub fn mask_tax_id(raw: &str) -> String {
    let digits = strip_digits(raw, 11);
    let mut out = String::with_capacity(14);
    for (i, d) in digits.chars().enumerate() {
        match i {
            3 | 6 => out.push('.'),
            9 => out.push('-'),
            _ => {}
        }
        out.push(d);
    }
    out
}

/// `(DD) DDDDD-DDDD`. The area-code parens appear with the 3rd digit, the
/// dash with the 6th local digit.
pub fn mask_phone(raw: &str) -> String {
    let digits = strip_digits(raw, 11);
    if digits.len() <= 2 {
        return digits;
    }
    let (area, local) = digits.split_at(2);
    let mut out = String::with_capacity(15);
    out.push('(');
    out.push_str(area);
    out.push_str(") ");
    for (i, d) in local.chars().enumerate() {
        if i == 5 {
            out.push('-');
        }
        out.push(d);
    }
    out
}

/// `DD/MM/YYYY`. Slashes appear with the 3rd and 5th digit.
pub fn mask_birth_date(raw: &str) -> String {
    let digits = strip_digits(raw, 8);
    let mut out = String::with_capacity(10);
    for (i, d) in digits.chars().enumerate() {
        if i == 2 || i == 4 {
            out.push('/');
        }
        out.push(d);
    }
    out
}

/// Keep the first `max` ASCII digits of `raw`, dropping everything else.
/// Truncation happens before any separator is inserted.
pub(crate) fn strip_digits(raw: &str, max: usize) -> String {
    raw.chars().filter(char::is_ascii_digit).take(max).collect()
}
