use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use pressroom_core::{DeepCopy, DomainError, DomainResult, ValueObject};

use crate::{SHORT_DATE_FORMAT, today};

/// A published edition: title, release date and circulation.
///
/// Invariant: `circulation >= 0`. It is checked on every assignment, so an
/// `Edition` can never hold a negative circulation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "EditionFields")]
pub struct Edition {
    title: String,
    release_date: NaiveDate,
    circulation: i32,
}

impl Edition {
    pub fn new(
        title: impl Into<String>,
        release_date: NaiveDate,
        circulation: i32,
    ) -> DomainResult<Self> {
        ensure_circulation(circulation)?;
        Ok(Self {
            title: title.into(),
            release_date,
            circulation,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn release_date(&self) -> NaiveDate {
        self.release_date
    }

    pub fn circulation(&self) -> i32 {
        self.circulation
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_release_date(&mut self, release_date: NaiveDate) {
        self.release_date = release_date;
    }

    /// Assign a new circulation.
    ///
    /// Negative values are rejected with `DomainError::InvalidArgument` and the
    /// previous circulation is kept.
    pub fn set_circulation(&mut self, circulation: i32) -> DomainResult<()> {
        ensure_circulation(circulation)?;
        self.circulation = circulation;
        Ok(())
    }
}

/// Unvalidated wire shape of an [`Edition`]; deserialization goes through
/// [`Edition::new`] so the circulation check applies there too.
#[derive(Deserialize)]
struct EditionFields {
    title: String,
    release_date: NaiveDate,
    circulation: i32,
}

impl TryFrom<EditionFields> for Edition {
    type Error = DomainError;

    fn try_from(fields: EditionFields) -> DomainResult<Self> {
        Edition::new(fields.title, fields.release_date, fields.circulation)
    }
}

fn ensure_circulation(circulation: i32) -> DomainResult<()> {
    if circulation < 0 {
        return Err(DomainError::invalid_argument(
            "circulation",
            format!("must not be negative (got {circulation})"),
        ));
    }
    Ok(())
}

impl Default for Edition {
    fn default() -> Self {
        Self {
            title: "Unknown".to_string(),
            release_date: today(),
            circulation: 0,
        }
    }
}

impl ValueObject for Edition {}

impl DeepCopy for Edition {
    fn deep_copy(&self) -> Self {
        Self {
            title: self.title.clone(),
            release_date: self.release_date,
            circulation: self.circulation,
        }
    }
}

impl core::fmt::Display for Edition {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Title: {}, release date: {}, circulation: {}",
            self.title,
            self.release_date.format(SHORT_DATE_FORMAT),
            self.circulation
        )
    }
}
