use serde::{Deserialize, Serialize};
use std::fmt;

/// Which cascade rule matched a pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Identical normalized labels
    Equals,

    /// One single-word label contains the other
    Substrings,

    /// Multi-word labels sharing a word, or sharing a term signature
    Phrase,

    /// Shared narrower or broader context
    Related,
}

impl Category {
    /// Report order
    pub const ALL: [Self; 4] = [Self::Equals, Self::Substrings, Self::Phrase, Self::Related];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Equals => "equals",
            Self::Substrings => "substrings",
            Self::Phrase => "phrase",
            Self::Related => "related",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mapping triples added per category; only ever incremented
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingCounters {
    pub equals: usize,
    pub substrings: usize,
    pub phrase: usize,
    pub related: usize,
}

impl ReportingCounters {
    pub fn increment(&mut self, category: Category) {
        *self.slot(category) += 1;
    }

    pub const fn get(&self, category: Category) -> usize {
        match category {
            Category::Equals => self.equals,
            Category::Substrings => self.substrings,
            Category::Phrase => self.phrase,
            Category::Related => self.related,
        }
    }

    pub const fn total(&self) -> usize {
        self.equals + self.substrings + self.phrase + self.related
    }

    /// (category, count) in report order
    pub fn iter(&self) -> impl Iterator<Item = (Category, usize)> + '_ {
        Category::ALL.into_iter().map(|category| (category, self.get(category)))
    }

    fn slot(&mut self, category: Category) -> &mut usize {
        match category {
            Category::Equals => &mut self.equals,
            Category::Substrings => &mut self.substrings,
            Category::Phrase => &mut self.phrase,
            Category::Related => &mut self.related,
        }
    }
}
