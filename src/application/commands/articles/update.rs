// src/application/commands/articles/update.rs
use super::{
    ArticleCommandService,
    fields::{optional_text, parse_category, parse_day},
};
use crate::{
    application::{
        dto::{AdminContext, ArticleDto, UploadedFile},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{
        ArticleContent, ArticleId, ArticleTitle, ArticleUpdate, PublicationTransition, Tags,
    },
};

/// Full replacement of the authoring form. The slug never changes; the cover
/// image only changes when a new file is supplied.
pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub summary: String,
    pub category: Option<String>,
    pub day: Option<String>,
    pub tags: String,
    pub publish: bool,
    pub cover_image: Option<UploadedFile>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        actor: &AdminContext,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let mut article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let content = ArticleContent {
            title: ArticleTitle::new(command.title)?,
            body: command.body,
            summary: optional_text(command.summary),
            category: parse_category(command.category.as_deref())?,
            day: parse_day(command.day.as_deref())?,
            tags: Tags::new(command.tags),
        };
        article.set_content(content);

        if let Some(cover) = self.store_cover(command.cover_image).await? {
            article.cover_image = Some(cover);
        }

        let transition = article.set_publish_flag(command.publish, self.clock.now());
        if transition != PublicationTransition::Unchanged {
            tracing::info!(article_id = id.0, ?transition, "publication state changed");
        }

        let updated = self.write_repo.update(ArticleUpdate::from(&article)).await?;
        tracing::info!(admin = %actor.username, article_id = id.0, "article updated");
        Ok(updated.into())
    }
}
