//! Field-level form validation.
//!
//! Forms describe their rules as a list of [`Constraint`]s per field and feed
//! them through a [`Violations`] collector. Every failing constraint is
//! recorded, in field order and then rule order, so clients see all problems
//! with a submission at once. Reason strings are part of the public HTTP
//! contract and must not change.

use std::fmt;

use chrono::NaiveDate;

use super::Error;

/// A single constraint applied to one form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// The value must be present.
    NotNull,
    /// The value must be present and contain a non-whitespace character.
    NotBlank,
    /// Text length in UTF-16 code units must fall within `min..=max`.
    Size { min: usize, max: usize },
    /// Integer value must be at least the bound.
    Min(i64),
    /// Integer value must be at most the bound.
    Max(i64),
    /// Date must not be earlier than `today`.
    FutureOrPresent { today: NaiveDate },
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotNull => f.write_str("must not be null"),
            Self::NotBlank => f.write_str("must not be blank"),
            Self::Size { min, max } => write!(f, "size must be between {min} and {max}"),
            Self::Min(min) => write!(f, "must be greater than or equal to {min}"),
            Self::Max(max) => write!(f, "must be less than or equal to {max}"),
            Self::FutureOrPresent { .. } => {
                f.write_str("must be a date in the present or in the future")
            }
        }
    }
}

/// Values that can be checked against a [`Constraint`].
///
/// Absent values only fail presence constraints; range and size rules treat
/// a missing value as acceptable. Constraints that do not apply to a value
/// type are satisfied trivially.
pub trait FieldValue {
    /// Whether the value satisfies `constraint`.
    fn satisfies(&self, constraint: &Constraint) -> bool;
}

/// Whether anything above U+0020 remains once the ends are trimmed.
///
/// Only ASCII controls and space count as blank; U+3000 and other Unicode
/// whitespace are visible text.
fn has_visible_text(value: &str) -> bool {
    value.chars().any(|c| c > ' ')
}

/// Text length in UTF-16 code units.
fn text_length(value: &str) -> usize {
    value.encode_utf16().count()
}

impl FieldValue for Option<&str> {
    fn satisfies(&self, constraint: &Constraint) -> bool {
        match constraint {
            Constraint::NotNull => self.is_some(),
            Constraint::NotBlank => self.is_some_and(has_visible_text),
            Constraint::Size { min, max } => {
                self.is_none_or(|value| (*min..=*max).contains(&text_length(value)))
            }
            Constraint::Min(_) | Constraint::Max(_) | Constraint::FutureOrPresent { .. } => true,
        }
    }
}

impl FieldValue for Option<i64> {
    fn satisfies(&self, constraint: &Constraint) -> bool {
        match constraint {
            Constraint::NotNull | Constraint::NotBlank => self.is_some(),
            Constraint::Min(min) => self.is_none_or(|value| value >= *min),
            Constraint::Max(max) => self.is_none_or(|value| value <= *max),
            Constraint::Size { .. } | Constraint::FutureOrPresent { .. } => true,
        }
    }
}

impl FieldValue for Option<NaiveDate> {
    fn satisfies(&self, constraint: &Constraint) -> bool {
        match constraint {
            Constraint::NotNull | Constraint::NotBlank => self.is_some(),
            Constraint::FutureOrPresent { today } => self.is_none_or(|value| value >= *today),
            Constraint::Size { .. } | Constraint::Min(_) | Constraint::Max(_) => true,
        }
    }
}

/// A failed constraint on a named field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    field: &'static str,
    reason: String,
}

impl Violation {
    /// Build a violation for `field` with a human-readable reason.
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }

    /// Wire name of the offending field.
    #[must_use]
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Reason the field was rejected.
    #[must_use]
    pub fn reason(&self) -> &str {
        self.reason.as_str()
    }
}

/// Ordered collector of violations for a single form.
///
/// # Examples
/// ```
/// use business_backend::domain::{Constraint, Violations};
///
/// let mut violations = Violations::default();
/// violations.check("companyname", Some(""), &[
///     Constraint::NotBlank,
///     Constraint::Size { min: 1, max: 256 },
/// ]);
/// let reasons: Vec<_> = violations.iter().map(|v| v.reason().to_owned()).collect();
/// assert_eq!(reasons, ["must not be blank", "size must be between 1 and 256"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations(Vec<Violation>);

impl Violations {
    /// Record a violation for every constraint `value` fails.
    pub fn check<V: FieldValue>(
        &mut self,
        field: &'static str,
        value: V,
        constraints: &[Constraint],
    ) -> &mut Self {
        for constraint in constraints {
            if !value.satisfies(constraint) {
                self.0.push(Violation::new(field, constraint.to_string()));
            }
        }
        self
    }

    /// Whether no constraint failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over recorded violations in order.
    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }

    /// Convert into a validation [`Error`] when anything failed.
    pub fn into_result(self) -> Result<(), Error> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(Error::validation(self.0))
        }
    }
}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
