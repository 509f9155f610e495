//! Stateless input validation for project creation.
//!
//! # Responsibility
//! - Check a single field value against a set of declared constraints.
//! - Compose the three-field project-creation rule (title, description,
//!   people) into an all-or-nothing decision.
//!
//! # Invariants
//! - `validate` is total: no input shape panics or errors.
//! - All present constraints combine with logical AND.
//! - Constraints that do not apply to the value's type are vacuously
//!   satisfied (length bounds for numbers, numeric bounds for text).
//! - Creation is rejected as a unit; no partial acceptance.

use std::error::Error;
use std::fmt::{Display, Formatter};

use log::info;

pub const MIN_DESCRIPTION_LEN: usize = 5;
pub const MIN_PEOPLE: i64 = 1;
pub const MAX_PEOPLE: i64 = 5;

/// A field value under validation.
///
/// The tag decides which constraints apply, so applicability is settled by
/// the type system instead of runtime inspection.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(i64),
}

impl FieldValue<'_> {
    fn is_present(&self) -> bool {
        match self {
            Self::Text(value) => !value.trim().is_empty(),
            // Numbers always render to non-empty text.
            Self::Number(_) => true,
        }
    }
}

/// Declarative constraint set for one field.
///
/// Absent constraints are vacuously satisfied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Constraints {
    /// Reject empty or whitespace-only text.
    pub required: bool,
    /// Minimum text length, in characters.
    pub min_length: Option<usize>,
    /// Maximum text length, in characters.
    pub max_length: Option<usize>,
    /// Inclusive numeric lower bound.
    pub min: Option<i64>,
    /// Inclusive numeric upper bound.
    pub max: Option<i64>,
}

/// Checks one value against one constraint set.
///
/// Pure and side-effect free; every present, applicable constraint must
/// hold for the result to be `true`.
pub fn validate(value: &FieldValue<'_>, rules: &Constraints) -> bool {
    if rules.required && !value.is_present() {
        return false;
    }
    match value {
        FieldValue::Text(text) => {
            let len = text.chars().count();
            if rules.min_length.is_some_and(|min| len < min) {
                return false;
            }
            if rules.max_length.is_some_and(|max| len > max) {
                return false;
            }
        }
        FieldValue::Number(number) => {
            if rules.min.is_some_and(|min| *number < min) {
                return false;
            }
            if rules.max.is_some_and(|max| *number > max) {
                return false;
            }
        }
    }
    true
}

/// Creation field names, used for per-field failure reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectField {
    Title,
    Description,
    People,
}

impl Display for ProjectField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Title => write!(f, "title"),
            Self::Description => write!(f, "description"),
            Self::People => write!(f, "people"),
        }
    }
}

/// Aggregate creation failure naming every field that failed.
///
/// Rejection is all-or-nothing: the caller must not create the project if
/// any field is listed here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftValidationError {
    failed: Vec<ProjectField>,
}

impl DraftValidationError {
    /// Returns the failed fields in form order.
    pub fn failed_fields(&self) -> &[ProjectField] {
        &self.failed
    }
}

impl Display for DraftValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid project input:")?;
        for field in &self.failed {
            write!(f, " {field}")?;
        }
        Ok(())
    }
}

impl Error for DraftValidationError {}

/// Validated, well-typed project creation input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub people: u32,
}

impl ProjectDraft {
    /// Builds a draft from raw form input, running the creation rule.
    ///
    /// Rules:
    /// - title: required, non-empty after trimming.
    /// - description: required and at least 5 characters.
    /// - people: required, parsed from input text, integer in `[1, 5]`.
    ///
    /// Non-numeric people text counts as a `People` failure; all failed
    /// fields are collected before rejecting.
    pub fn from_input(
        title: &str,
        description: &str,
        people: &str,
    ) -> Result<Self, DraftValidationError> {
        let mut failed = Vec::new();

        let title_rules = Constraints {
            required: true,
            ..Constraints::default()
        };
        if !validate(&FieldValue::Text(title), &title_rules) {
            failed.push(ProjectField::Title);
        }

        let description_rules = Constraints {
            required: true,
            min_length: Some(MIN_DESCRIPTION_LEN),
            ..Constraints::default()
        };
        if !validate(&FieldValue::Text(description), &description_rules) {
            failed.push(ProjectField::Description);
        }

        let people_rules = Constraints {
            required: true,
            min: Some(MIN_PEOPLE),
            max: Some(MAX_PEOPLE),
            ..Constraints::default()
        };
        let parsed_people = people.trim().parse::<i64>().ok();
        let people_ok = parsed_people
            .is_some_and(|count| validate(&FieldValue::Number(count), &people_rules));
        if !people_ok {
            failed.push(ProjectField::People);
        }

        if !failed.is_empty() {
            let error = DraftValidationError { failed };
            info!("event=draft_rejected module=validation status=rejected detail=\"{error}\"");
            return Err(error);
        }

        Ok(Self {
            title: title.to_string(),
            description: description.to_string(),
            // Bounds checked above, so the narrowing cast is lossless.
            people: parsed_people.unwrap_or(MIN_PEOPLE) as u32,
        })
    }
}
