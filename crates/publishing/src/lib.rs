//! Publishing domain module (persons, editions, articles, magazines).
//!
//! Pure in-memory domain logic: value equality, deep copies and filtered views
//! over a magazine's articles and editors. No IO, no storage.

pub mod article;
pub mod edition;
pub mod frequency;
pub mod magazine;
pub mod person;

pub use article::Article;
pub use edition::Edition;
pub use frequency::Frequency;
pub use magazine::{Magazine, OutsideArticles};
pub use person::Person;

/// Short date form used by every rendering in this crate (`15.05.1980`).
pub(crate) const SHORT_DATE_FORMAT: &str = "%d.%m.%Y";

pub(crate) fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}
