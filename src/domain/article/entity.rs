use crate::domain::article::value_objects::{ArticleId, ArticleSlug, ArticleTitle, Category, Tags};
use chrono::{DateTime, Utc};

/// Visibility of an article on the public site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicationState {
    Draft,
    Published,
}

/// What applying the publish flag did to an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicationTransition {
    Unchanged,
    Published,
    Unpublished,
}

/// Editable fields of an article, as submitted by the authoring form.
#[derive(Debug, Clone)]
pub struct ArticleContent {
    pub title: ArticleTitle,
    pub body: String,
    pub summary: Option<String>,
    pub category: Category,
    pub day: Option<i32>,
    pub tags: Tags,
}

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub body: String,
    pub summary: Option<String>,
    pub cover_image: Option<String>,
    pub category: Category,
    pub day: Option<i32>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
    pub tags: Tags,
    pub views: i64,
}

impl Article {
    pub fn state(&self) -> PublicationState {
        if self.published {
            PublicationState::Published
        } else {
            PublicationState::Draft
        }
    }

    /// Drive the Draft/Published state machine from the form's publish flag.
    ///
    /// `published_at` is stamped only on the Draft -> Published edge. Saving an
    /// already published article keeps its original timestamp, and
    /// unpublishing leaves the previous timestamp in place.
    pub fn set_publish_flag(&mut self, publish: bool, now: DateTime<Utc>) -> PublicationTransition {
        match (self.state(), publish) {
            (PublicationState::Draft, true) => {
                self.published = true;
                self.published_at = Some(now);
                PublicationTransition::Published
            }
            (PublicationState::Published, false) => {
                self.published = false;
                PublicationTransition::Unpublished
            }
            _ => PublicationTransition::Unchanged,
        }
    }

    /// Replace the editable fields. The slug is left untouched.
    pub fn set_content(&mut self, content: ArticleContent) {
        let ArticleContent {
            title,
            body,
            summary,
            category,
            day,
            tags,
        } = content;
        self.title = title;
        self.body = body;
        self.summary = summary;
        self.category = category;
        self.day = day;
        self.tags = tags;
    }

    /// Non-blank tags only; see [`Tags::to_list`].
    pub fn tag_list(&self) -> Vec<String> {
        self.tags.to_list()
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub body: String,
    pub summary: Option<String>,
    pub cover_image: Option<String>,
    pub category: Category,
    pub day: Option<i32>,
    pub tags: Tags,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl NewArticle {
    pub fn new(
        content: ArticleContent,
        slug: ArticleSlug,
        cover_image: Option<String>,
        publish: bool,
        now: DateTime<Utc>,
    ) -> Self {
        let ArticleContent {
            title,
            body,
            summary,
            category,
            day,
            tags,
        } = content;
        Self {
            title,
            slug,
            body,
            summary,
            cover_image,
            category,
            day,
            tags,
            published: publish,
            published_at: publish.then_some(now),
            created_at: now,
        }
    }
}

/// Full-state update written back after an authoring edit.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub body: String,
    pub summary: Option<String>,
    pub cover_image: Option<String>,
    pub category: Category,
    pub day: Option<i32>,
    pub tags: Tags,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
}

impl From<&Article> for ArticleUpdate {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id,
            title: article.title.clone(),
            body: article.body.clone(),
            summary: article.summary.clone(),
            cover_image: article.cover_image.clone(),
            category: article.category,
            day: article.day,
            tags: article.tags.clone(),
            published: article.published,
            published_at: article.published_at,
        }
    }
}

/// Published articles immediately before and after a given project day.
#[derive(Debug, Clone, Default)]
pub struct ArticleNeighbours {
    pub previous: Option<Article>,
    pub next: Option<Article>,
}

/// Aggregates shown on the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PublishedStats {
    pub max_day: i32,
    pub count: u64,
}
