use crate::domain::errors::{DomainError, DomainResult};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleId(pub i64);

impl ArticleId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "article id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTitle(String);

impl ArticleTitle {
    /// Titles are stored trimmed; a blank title is rejected.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleSlug(String);

impl ArticleSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        Ok(Self(value))
    }

    /// `base-N`, the candidate tried after `N` collisions.
    pub fn with_suffix(&self, counter: u64) -> Self {
        Self(format!("{}-{counter}", self.0))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Closed set of article categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    Journal,
    Mecanique,
    Electronique,
    Programmation,
    Ia,
    Tests,
    Reflexion,
    Ressources,
}

impl Category {
    pub const ALL: [Self; 8] = [
        Self::Journal,
        Self::Mecanique,
        Self::Electronique,
        Self::Programmation,
        Self::Ia,
        Self::Tests,
        Self::Reflexion,
        Self::Ressources,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            Self::Journal => "journal",
            Self::Mecanique => "mecanique",
            Self::Electronique => "electronique",
            Self::Programmation => "programmation",
            Self::Ia => "ia",
            Self::Tests => "tests",
            Self::Reflexion => "reflexion",
            Self::Ressources => "ressources",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Journal => "Journal de bord",
            Self::Mecanique => "Mécanique",
            Self::Electronique => "Électronique",
            Self::Programmation => "Programmation",
            Self::Ia => "Intelligence Artificielle",
            Self::Tests => "Tests & Résultats",
            Self::Reflexion => "Réflexions",
            Self::Ressources => "Ressources",
        }
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.key() == value)
            .ok_or_else(|| DomainError::Validation(format!("unknown category: {value}")))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Raw comma-delimited tag string, kept verbatim so that search can match
/// against it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tags(String);

impl Tags {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Tags in declaration order, trimmed. Blank entries (`"a, ,b"`, a
    /// trailing comma) are skipped rather than kept as empty tags.
    pub fn to_list(&self) -> Vec<String> {
        self.0
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_trimmed_and_must_not_be_blank() {
        assert_eq!(ArticleTitle::new("  Jour 2 ").unwrap().as_str(), "Jour 2");
        assert!(ArticleTitle::new("   ").is_err());
    }

    #[test]
    fn slug_suffix_appends_counter() {
        let slug = ArticleSlug::new("jour-1").unwrap();
        assert_eq!(slug.with_suffix(2).as_str(), "jour-1-2");
    }

    #[test]
    fn category_keys_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.key().parse::<Category>().unwrap(), category);
        }
        assert!("general".parse::<Category>().is_err());
        assert_eq!(Category::default(), Category::Journal);
    }

    #[test]
    fn tags_are_parsed_in_order_and_trimmed() {
        let tags = Tags::new("démarrage, planification ,humanoïde,");
        assert_eq!(
            tags.to_list(),
            vec!["démarrage", "planification", "humanoïde"]
        );
        assert!(Tags::default().to_list().is_empty());
    }
}
