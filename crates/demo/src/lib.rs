//! Console walkthrough of the publishing model.
//!
//! `run` writes the whole report to any `Write` so the binary and the tests
//! share one code path.

use std::io::Write;

use chrono::NaiveDate;

use pressroom_core::{DeepCopy, DomainError, DomainResult, Rated, ValueObject};
use pressroom_publishing::{Article, Edition, Frequency, Magazine, Person};

fn date(year: i32, month: u32, day: u32) -> DomainResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        DomainError::invalid_argument("date", format!("{year}-{month:02}-{day:02} does not exist"))
    })
}

/// The fixed "Technology" magazine: two editors, each the author of one article.
pub fn sample_magazine() -> DomainResult<Magazine> {
    let ivan = Person::new("Ivan", "Ivanov", date(1980, 5, 15)?);
    let maria = Person::new("Maria", "Petrova", date(1990, 7, 20)?);

    let mut magazine = Magazine::new("Technology", Frequency::Monthly, date(2024, 1, 15)?, 5000)?;
    magazine.add_editors([ivan.clone(), maria.clone()]);
    magazine.add_articles([
        Article::new(ivan, "Artificial Intellect in Everyday Life", 4.5),
        Article::new(maria, "Quantum Computing Basics", 3.8),
    ]);

    Ok(magazine)
}

/// Write the full demonstration report to `out`.
///
/// The circulation validation failure is reported inline; only I/O and
/// sample-data construction errors are returned.
pub fn run<W: Write>(out: &mut W) -> anyhow::Result<()> {
    writeln!(out, "== Edition equality ==")?;
    let first = Edition::new("Science Today", date(2023, 10, 1)?, 1500)?;
    let second = Edition::new("Science Today", date(2023, 10, 1)?, 1500)?;
    writeln!(out, "{first}")?;
    writeln!(out, "{second}")?;
    writeln!(out, "equal: {}", first.value_eq(&second))?;
    writeln!(out, "same hash: {}", first.value_hash() == second.value_hash())?;

    writeln!(out)?;
    writeln!(out, "== Circulation validation ==")?;
    let mut edition = first.deep_copy();
    match edition.set_circulation(-100) {
        Ok(()) => writeln!(out, "circulation accepted: {}", edition.circulation())?,
        Err(err) => {
            tracing::warn!(argument = err.argument(), error = %err, "rejected circulation update");
            writeln!(out, "Error: {err}")?;
            writeln!(out, "rejected argument: {}", err.argument())?;
            writeln!(out, "circulation kept at {}", edition.circulation())?;
        }
    }

    writeln!(out)?;
    writeln!(out, "== Magazine ==")?;
    let magazine = sample_magazine()?;
    tracing::info!(
        title = magazine.title(),
        editors = magazine.editors().len(),
        articles = magazine.articles().len(),
        "sample magazine assembled"
    );
    writeln!(out, "{magazine}")?;
    writeln!(out, "Short form: {}", magazine.short_summary())?;

    writeln!(out)?;
    writeln!(out, "== Deep copy ==")?;
    let mut copy = magazine.deep_copy();
    copy.set_title("Technology (reprint)");
    if let Some(editor) = copy.editors_mut().first_mut() {
        editor.set_first_name("Ioann");
    }
    if let Some(article) = copy.articles_mut().first_mut() {
        article.set_rating(5.0);
    }
    tracing::debug!(copy_rating = copy.rating(), "deep copy modified");
    writeln!(out, "Original: {}", magazine.short_summary())?;
    writeln!(out, "Copy:     {}", copy.short_summary())?;
    writeln!(out, "{copy}")?;

    writeln!(out)?;
    writeln!(out, "== Queries ==")?;
    writeln!(out, "Articles rated above 4.0:")?;
    for article in magazine.articles_rated_above(4.0) {
        writeln!(out, "  {article}")?;
    }
    writeln!(out, "Articles with \"intellect\" in the title:")?;
    for article in magazine.articles_with_title("intellect") {
        writeln!(out, "  {article}")?;
    }
    writeln!(out, "Editors without articles:")?;
    let mut idle = magazine.editors_without_articles().peekable();
    if idle.peek().is_none() {
        writeln!(out, "  (none)")?;
    }
    for editor in idle {
        writeln!(out, "  {editor}")?;
    }
    writeln!(out, "Articles by authors outside the editorial board:")?;
    let mut outside = magazine.iter().peekable();
    if outside.peek().is_none() {
        writeln!(out, "  (none)")?;
    }
    for article in outside {
        writeln!(out, "  {article}")?;
    }

    Ok(())
}
