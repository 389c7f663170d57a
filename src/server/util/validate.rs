//! Field validation rules shared by region, event and user parameters.
//!
//! Each helper records its failure in a `ValidationErrors` set under the wire field
//! name so that every problem in a request is reported at once.

use chrono::NaiveDate;

use crate::server::error::validation::ValidationErrors;

/// Earliest year accepted for an event; the first Stoke Mandeville Games were held in 1948.
pub const MIN_EVENT_YEAR: i32 = 1948;
pub const MAX_EVENT_YEAR: i32 = 2100;

pub const MAX_HIGHLIGHTS_LEN: usize = 200;

/// Disability categories recognised in `disabilities_included`.
pub const DISABILITY_CATEGORIES: [&str; 6] = [
    "Spinal injury",
    "Amputee",
    "Vision Impairment",
    "Cerebral Palsy",
    "Les Autres",
    "Intellectual Disability",
];

/// Returns true when `value` is exactly three uppercase ASCII letters.
pub fn is_noc_code(value: &str) -> bool {
    value.len() == 3 && value.bytes().all(|b| b.is_ascii_uppercase())
}

pub fn noc(errors: &mut ValidationErrors, field: &str, value: &str) {
    if !is_noc_code(value) {
        errors.add(field, "Must be exactly three uppercase letters.");
    }
}

/// Unwraps a patch field that may be absent but not cleared.
///
/// `Some(None)` is an explicit `null` on a required field and is recorded as an error.
pub fn not_null<T>(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<Option<T>>,
) -> Option<T> {
    match value {
        Some(None) => {
            errors.add(field, "Must not be null.");
            None
        }
        value => value.flatten(),
    }
}

pub fn not_blank(errors: &mut ValidationErrors, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.add(field, "Must not be blank.");
    }
}

pub fn year(errors: &mut ValidationErrors, field: &str, value: i32) {
    if !(MIN_EVENT_YEAR..=MAX_EVENT_YEAR).contains(&value) {
        errors.add(
            field,
            format!("Must be between {} and {}.", MIN_EVENT_YEAR, MAX_EVENT_YEAR),
        );
    }
}

pub fn non_negative(errors: &mut ValidationErrors, field: &str, value: Option<i32>) {
    if matches!(value, Some(v) if v < 0) {
        errors.add(field, "Must not be negative.");
    }
}

/// `end` may equal `start` (single day event) but not precede it.
pub fn date_order(errors: &mut ValidationErrors, start: Option<NaiveDate>, end: Option<NaiveDate>) {
    if let (Some(start), Some(end)) = (start, end) {
        if end < start {
            errors.add("end", "Must not be before start.");
        }
    }
}

pub fn max_chars(errors: &mut ValidationErrors, field: &str, value: Option<&str>, max: usize) {
    if let Some(value) = value {
        if value.chars().count() > max {
            errors.add(field, format!("Must be at most {} characters.", max));
        }
    }
}

/// Normalizes a comma separated disability list and checks every entry.
///
/// Entries are trimmed and empty entries dropped; an empty list becomes `None`.
pub fn disabilities(errors: &mut ValidationErrors, field: &str, value: Option<&str>) -> Option<String> {
    let items: Vec<&str> = value?
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect();

    for item in &items {
        if !DISABILITY_CATEGORIES.contains(item) {
            errors.add(field, format!("Unknown disability category '{}'.", item));
        }
    }

    if items.is_empty() {
        None
    } else {
        Some(items.join(","))
    }
}

/// Loose address check: one `@` with a non-empty local part and a dotted domain.
pub fn email(errors: &mut ValidationErrors, field: &str, value: &str) {
    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !value.chars().any(char::is_whitespace)
        }
        None => false,
    };

    if !valid {
        errors.add(field, "Must be a valid email address.");
    }
}
