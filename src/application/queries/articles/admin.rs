use super::ArticleQueryService;
use crate::application::{
    dto::{AdminArticleListDto, AdminContext, ArticleEditorDto, CategoryDto},
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::article::ArticleId;

impl ArticleQueryService {
    /// Every article, drafts included, newest first.
    pub async fn list_all(&self, _actor: &AdminContext) -> ApplicationResult<AdminArticleListDto> {
        let articles = self.read_repo.list_all().await?;
        Ok(AdminArticleListDto {
            articles: articles.into_iter().map(Into::into).collect(),
            categories: CategoryDto::all(),
        })
    }

    pub fn new_article_editor(&self, _actor: &AdminContext) -> ArticleEditorDto {
        ArticleEditorDto {
            article: None,
            categories: CategoryDto::all(),
        }
    }

    pub async fn get_for_edit(
        &self,
        _actor: &AdminContext,
        id: i64,
    ) -> ApplicationResult<ArticleEditorDto> {
        let id = ArticleId::new(id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        Ok(ArticleEditorDto {
            article: Some(article.into()),
            categories: CategoryDto::all(),
        })
    }
}
