//! # Save-gate validation
//!
//! The rules a draft must satisfy before the save action is enabled. There
//! are no per-field error kinds: each rule is a boolean, and
//! [`is_valid_record`] is the conjunction the UI binds the save button to.
//!
//! The rules are deliberately lenient: the tax id is checked for digit count
//! only (no checksum), and the birth date for shape only (`99/99/9999`
//! passes).

use crate::mask::strip_digits;

/// Non-empty after trimming whitespace.
pub fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty()
}

/// `local@domain.tld`: no whitespace anywhere, exactly one `@` with a
/// non-empty local part, and a domain containing a dot with non-empty parts
/// on both sides.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Exactly 11 digits after stripping the mask.
pub fn is_valid_tax_id(tax_id: &str) -> bool {
    strip_digits(tax_id, usize::MAX).len() == 11
}

/// At least 10 digits after stripping the mask (landline or mobile).
pub fn is_valid_phone(phone: &str) -> bool {
    strip_digits(phone, usize::MAX).len() >= 10
}

/// Literally `DD/MM/YYYY`. Shape only, no calendar check.
pub fn is_valid_birth_date(birth_date: &str) -> bool {
    let b = birth_date.as_bytes();
    b.len() == 10
        && b[2] == b'/'
        && b[5] == b'/'
        && b.iter()
            .enumerate()
            .all(|(i, c)| i == 2 || i == 5 || c.is_ascii_digit())
}

/// The conjunction of all field rules.
pub fn is_valid_record(
    name: &str,
    email: &str,
    tax_id: &str,
    phone: &str,
    birth_date: &str,
) -> bool {
    is_valid_name(name)
        && is_valid_email(email)
        && is_valid_tax_id(tax_id)
        && is_valid_phone(phone)
        && is_valid_birth_date(birth_date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_must_have_non_whitespace() {
        assert!(is_valid_name("Ana"));
        assert!(is_valid_name("  Ana  "));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("   "));
    }

    #[test]
    fn email_shape() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("ana.souza@mail.example.org"));
        assert!(!is_valid_email("a-b.com")); // no @
        assert!(!is_valid_email("@b.com")); // empty local
        assert!(!is_valid_email("a@")); // empty domain
        assert!(!is_valid_email("a@bcom")); // no dot in domain
        assert!(!is_valid_email("a@b.")); // empty tld
        assert!(!is_valid_email("a@.com")); // empty host
        assert!(!is_valid_email("a b@c.com")); // embedded whitespace
        assert!(!is_valid_email("a@@b.com")); // second @
    }

    #[test]
    fn tax_id_counts_digits_only() {
        assert!(is_valid_tax_id("123.456.789-01"));
        assert!(is_valid_tax_id("12345678901"));
        assert!(!is_valid_tax_id("123.456.789-0")); // 10 digits
        assert!(!is_valid_tax_id("123456789012")); // 12 digits
        assert!(!is_valid_tax_id(""));
    }

    #[test]
    fn phone_needs_at_least_ten_digits() {
        assert!(is_valid_phone("(11) 91234-5678")); // 11
        assert!(is_valid_phone("1234567890")); // 10
        assert!(!is_valid_phone("(11) 9123-456")); // 9
    }

    #[test]
    fn birth_date_is_shape_only() {
        assert!(is_valid_birth_date("01/02/2000"));
        assert!(is_valid_birth_date("99/99/9999")); // lenient: no calendar check
        assert!(!is_valid_birth_date("2000/02/01"));
        assert!(!is_valid_birth_date("1/2/2000"));
        assert!(!is_valid_birth_date("01-02-2000"));
        assert!(!is_valid_birth_date("01/02/200"));
    }

    #[test]
    fn record_acceptance_and_rejection() {
        assert!(is_valid_record(
            "Ana",
            "a@b.com",
            "123.456.789-01",
            "(11) 91234-5678",
            "01/02/2000",
        ));
        assert!(!is_valid_record(
            "Ana",
            "a-b.com",
            "123.456.789-01",
            "(11) 91234-5678",
            "01/02/2000",
        ));
        assert!(!is_valid_record(
            "Ana",
            "a@b.com",
            "123.456.789-0",
            "(11) 91234-5678",
            "01/02/2000",
        ));
        assert!(!is_valid_record(
            "Ana",
            "a@b.com",
            "123.456.789-01",
            "(11) 91234-5678",
            "2000/02/01",
        ));
    }
}
