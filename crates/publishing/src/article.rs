use serde::{Deserialize, Serialize};

use pressroom_core::{DeepCopy, Rated};

use crate::person::Person;

/// A rated article written by a single author.
///
/// Articles deliberately have no equality: two articles with the same fields
/// are still different articles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    author: Person,
    title: String,
    rating: f64,
}

impl Article {
    pub fn new(author: Person, title: impl Into<String>, rating: f64) -> Self {
        Self {
            author,
            title: title.into(),
            rating,
        }
    }

    pub fn author(&self) -> &Person {
        &self.author
    }

    pub fn author_mut(&mut self) -> &mut Person {
        &mut self.author
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_author(&mut self, author: Person) {
        self.author = author;
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_rating(&mut self, rating: f64) {
        self.rating = rating;
    }
}

impl Default for Article {
    fn default() -> Self {
        Self::new(Person::default(), "Unknown", 0.0)
    }
}

impl DeepCopy for Article {
    fn deep_copy(&self) -> Self {
        Self {
            author: self.author.deep_copy(),
            title: self.title.clone(),
            rating: self.rating,
        }
    }
}

impl Rated for Article {
    fn rating(&self) -> f64 {
        self.rating
    }
}

impl core::fmt::Display for Article {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "\"{}\" by {}, rating: {}",
            self.title, self.author, self.rating
        )
    }
}
