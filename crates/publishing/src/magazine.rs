use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use pressroom_core::{DeepCopy, DomainResult, Rated, average_rating};

use crate::article::Article;
use crate::edition::Edition;
use crate::frequency::Frequency;
use crate::person::Person;

/// A periodical: an [`Edition`] plus a frequency, editors and articles.
///
/// Editors and articles keep insertion order and are never deduplicated.
/// Magazines have no equality, like articles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Magazine {
    edition: Edition,
    frequency: Frequency,
    editors: Vec<Person>,
    articles: Vec<Article>,
}

impl Magazine {
    pub fn new(
        title: impl Into<String>,
        frequency: Frequency,
        release_date: NaiveDate,
        circulation: i32,
    ) -> DomainResult<Self> {
        Ok(Self::from_edition(
            Edition::new(title, release_date, circulation)?,
            frequency,
        ))
    }

    pub fn from_edition(edition: Edition, frequency: Frequency) -> Self {
        Self {
            edition,
            frequency,
            editors: Vec::new(),
            articles: Vec::new(),
        }
    }

    pub fn edition(&self) -> &Edition {
        &self.edition
    }

    pub fn title(&self) -> &str {
        self.edition.title()
    }

    pub fn release_date(&self) -> NaiveDate {
        self.edition.release_date()
    }

    pub fn circulation(&self) -> i32 {
        self.edition.circulation()
    }

    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    pub fn editors(&self) -> &[Person] {
        &self.editors
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn editors_mut(&mut self) -> &mut [Person] {
        &mut self.editors
    }

    pub fn articles_mut(&mut self) -> &mut [Article] {
        &mut self.articles
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.edition.set_title(title);
    }

    pub fn set_release_date(&mut self, release_date: NaiveDate) {
        self.edition.set_release_date(release_date);
    }

    /// Same validation as [`Edition::set_circulation`].
    pub fn set_circulation(&mut self, circulation: i32) -> DomainResult<()> {
        self.edition.set_circulation(circulation)
    }

    pub fn set_frequency(&mut self, frequency: Frequency) {
        self.frequency = frequency;
    }

    pub fn add_editors(&mut self, editors: impl IntoIterator<Item = Person>) {
        self.editors.extend(editors);
    }

    pub fn add_articles(&mut self, articles: impl IntoIterator<Item = Article>) {
        self.articles.extend(articles);
    }

    /// Edition line, frequency and average rating on one line.
    pub fn short_summary(&self) -> String {
        format!(
            "{}, frequency: {}, average rating: {:.2}",
            self.edition,
            self.frequency,
            self.rating()
        )
    }

    /// Articles rated strictly above `threshold`, in magazine order.
    pub fn articles_rated_above(&self, threshold: f64) -> impl Iterator<Item = &Article> + '_ {
        self.articles_where(move |article| article.rating() > threshold)
    }

    /// Articles whose title contains `keyword`, ignoring case.
    pub fn articles_with_title(&self, keyword: &str) -> impl Iterator<Item = &Article> + '_ {
        let needle = keyword.to_lowercase();
        self.articles_where(move |article| article.title().to_lowercase().contains(&needle))
    }

    /// Editors who did not write any article in this magazine.
    pub fn editors_without_articles(&self) -> impl Iterator<Item = &Person> + '_ {
        self.editors.iter().filter(move |editor| {
            !self
                .articles
                .iter()
                .any(|article| article.author() == *editor)
        })
    }

    /// Articles written by someone outside the editorial board.
    pub fn iter(&self) -> OutsideArticles<'_> {
        OutsideArticles {
            articles: self.articles.iter(),
            editors: &self.editors,
        }
    }

    fn articles_where<P>(&self, predicate: P) -> impl Iterator<Item = &Article> + '_
    where
        P: Fn(&Article) -> bool + 'static,
    {
        self.articles.iter().filter(move |article| predicate(article))
    }
}

impl DeepCopy for Magazine {
    fn deep_copy(&self) -> Self {
        Self {
            edition: self.edition.deep_copy(),
            frequency: self.frequency,
            editors: self.editors.iter().map(DeepCopy::deep_copy).collect(),
            articles: self.articles.iter().map(DeepCopy::deep_copy).collect(),
        }
    }
}

impl Rated for Magazine {
    /// Mean article rating; `0.0` for a magazine without articles.
    fn rating(&self) -> f64 {
        average_rating(&self.articles)
    }
}

impl core::fmt::Display for Magazine {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let editors = self
            .editors
            .iter()
            .map(Person::full_name)
            .collect::<Vec<_>>()
            .join(", ");

        writeln!(f, "{}, frequency: {}", self.edition, self.frequency)?;
        writeln!(f, "Editors: {editors}")?;
        write!(f, "Articles:")?;
        for article in &self.articles {
            write!(f, "\n  {article}")?;
        }
        Ok(())
    }
}

/// Iterator over a magazine's articles whose author is not one of its editors.
///
/// Created by [`Magazine::iter`] or by iterating `&Magazine`.
#[derive(Debug, Clone)]
pub struct OutsideArticles<'a> {
    articles: core::slice::Iter<'a, Article>,
    editors: &'a [Person],
}

impl<'a> Iterator for OutsideArticles<'a> {
    type Item = &'a Article;

    fn next(&mut self) -> Option<Self::Item> {
        let editors = self.editors;
        self.articles
            .by_ref()
            .find(|article| !editors.contains(article.author()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.articles.size_hint().1)
    }
}

impl<'a> IntoIterator for &'a Magazine {
    type Item = &'a Article;
    type IntoIter = OutsideArticles<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
