// src/application/commands/articles/create.rs
use super::{
    ArticleCommandService,
    fields::{optional_text, parse_category, parse_day},
};
use crate::{
    application::{
        dto::{AdminContext, ArticleDto, UploadedFile},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleContent, ArticleTitle, NewArticle, Tags},
        errors::DomainError,
    },
};

/// Attempts at inserting when a concurrent writer takes the slug we picked.
const MAX_SLUG_ATTEMPTS: usize = 5;

pub struct CreateArticleCommand {
    pub title: String,
    pub body: String,
    pub summary: String,
    pub category: Option<String>,
    pub day: Option<String>,
    pub tags: String,
    pub publish: bool,
    pub cover_image: Option<UploadedFile>,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    body: String,
    summary: String,
    category: Option<String>,
    day: Option<String>,
    tags: String,
    publish: bool,
    cover_image: Option<UploadedFile>,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn day(mut self, day: i32) -> Self {
        self.day = Some(day.to_string());
        self
    }

    pub fn tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = tags.into();
        self
    }

    pub fn publish(mut self, publish: bool) -> Self {
        self.publish = publish;
        self
    }

    pub fn cover_image(mut self, cover: UploadedFile) -> Self {
        self.cover_image = Some(cover);
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            body: self.body,
            summary: self.summary,
            category: self.category,
            day: self.day,
            tags: self.tags,
            publish: self.publish,
            cover_image: self.cover_image,
        })
    }
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        actor: &AdminContext,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let content = ArticleContent {
            title: ArticleTitle::new(command.title)?,
            body: command.body,
            summary: optional_text(command.summary),
            category: parse_category(command.category.as_deref())?,
            day: parse_day(command.day.as_deref())?,
            tags: Tags::new(command.tags),
        };
        // Reject unusable titles before anything is written to storage.
        let mut slug = self.slug_service.generate_unique_slug(&content.title).await?;
        let cover_image = self.store_cover(command.cover_image).await?;
        let now = self.clock.now();

        for attempt in 1..=MAX_SLUG_ATTEMPTS {
            let new_article = NewArticle::new(
                content.clone(),
                slug.clone(),
                cover_image.clone(),
                command.publish,
                now,
            );

            match self.write_repo.insert(new_article).await {
                Ok(created) => {
                    tracing::info!(
                        admin = %actor.username,
                        article_id = created.id.0,
                        slug = %created.slug,
                        published = created.published,
                        "article created"
                    );
                    return Ok(created.into());
                }
                Err(DomainError::Conflict(reason)) => {
                    tracing::warn!(%slug, attempt, %reason, "slug taken concurrently, retrying");
                    slug = self.slug_service.generate_unique_slug(&content.title).await?;
                }
                Err(err) => return Err(err.into()),
            }
        }

        Err(ApplicationError::conflict(
            "could not allocate a unique slug for this title",
        ))
    }
}
