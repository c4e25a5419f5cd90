use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use pressroom_core::{DeepCopy, ValueObject};

use crate::{SHORT_DATE_FORMAT, today};

/// A named person with a birth date.
///
/// Compared by value: two persons with the same names and birth date are the
/// same person as far as editor/author matching is concerned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    first_name: String,
    last_name: String,
    birth_date: NaiveDate,
}

impl Person {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birth_date: NaiveDate,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            birth_date,
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    /// "First Last", without the birth date.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) {
        self.first_name = first_name.into();
    }

    pub fn set_last_name(&mut self, last_name: impl Into<String>) {
        self.last_name = last_name.into();
    }

    pub fn set_birth_date(&mut self, birth_date: NaiveDate) {
        self.birth_date = birth_date;
    }
}

impl Default for Person {
    fn default() -> Self {
        Self::new("Unknown", "Unknown", today())
    }
}

impl ValueObject for Person {}

impl DeepCopy for Person {
    fn deep_copy(&self) -> Self {
        Self {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            birth_date: self.birth_date,
        }
    }
}

impl core::fmt::Display for Person {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} {}, born: {}",
            self.first_name,
            self.last_name,
            self.birth_date.format(SHORT_DATE_FORMAT)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ivan() -> Person {
        Person::new("Ivan", "Ivanov", NaiveDate::from_ymd_opt(1980, 5, 15).unwrap())
    }

    #[test]
    fn display_uses_short_birth_date() {
        assert_eq!(ivan().to_string(), "Ivan Ivanov, born: 15.05.1980");
    }

    #[test]
    fn default_person_is_unknown_born_today() {
        let person = Person::default();
        assert_eq!(person.first_name(), "Unknown");
        assert_eq!(person.last_name(), "Unknown");
        assert_eq!(person.birth_date(), today());
    }

    #[test]
    fn deep_copy_is_equal_and_independent() {
        let original = ivan();
        let mut copy = original.deep_copy();
        assert_eq!(copy, original);

        copy.set_first_name("Pyotr");
        assert_eq!(original.first_name(), "Ivan");
        assert_ne!(copy, original);
    }

    #[test]
    fn each_field_takes_part_in_equality() {
        let base = ivan();

        let mut other = base.clone();
        other.set_first_name("Ivana");
        assert!(!base.value_eq(&other));

        let mut other = base.clone();
        other.set_last_name("Petrov");
        assert!(!base.value_eq(&other));

        let mut other = base.clone();
        other.set_birth_date(NaiveDate::from_ymd_opt(1980, 5, 16).unwrap());
        assert!(!base.value_eq(&other));
    }

    fn arb_date() -> impl Strategy<Value = NaiveDate> {
        (1900i32..2100, 1u32..=12, 1u32..=28)
            .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 500,
            ..ProptestConfig::default()
        })]

        /// Property: persons built from identical fields are equal and hash alike.
        #[test]
        fn identical_fields_mean_equal_hashes(
            first in "[A-Za-z]{1,20}",
            last in "[A-Za-z]{1,20}",
            born in arb_date()
        ) {
            let a = Person::new(first.clone(), last.clone(), born);
            let b = Person::new(first, last, born);
            prop_assert!(a.value_eq(&b));
            prop_assert_eq!(a.value_hash(), b.value_hash());
        }
    }
}
