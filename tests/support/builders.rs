// tests/support/builders.rs
use bytes::Bytes;
use robotblog::application::{
    commands::articles::{CreateArticleCommand, UpdateArticleCommand},
    dto::{ArticleDto, UploadedFile},
};

pub fn published_article(title: &str, day: i32) -> CreateArticleCommand {
    CreateArticleCommand::builder()
        .title(title)
        .body(format!("<p>{title}</p>"))
        .day(day)
        .publish(true)
        .build()
        .expect("valid article command")
}

pub fn draft_article(title: &str) -> CreateArticleCommand {
    CreateArticleCommand::builder()
        .title(title)
        .body("<p>brouillon</p>")
        .build()
        .expect("valid article command")
}

/// Form resubmission of an existing article with the publish box set to
/// `publish`; every other field is sent back unchanged.
pub fn resubmit(article: &ArticleDto, publish: bool) -> UpdateArticleCommand {
    UpdateArticleCommand {
        id: article.id,
        title: article.title.clone(),
        body: article.body.clone(),
        summary: article.summary.clone().unwrap_or_default(),
        category: Some(article.category.key.clone()),
        day: article.day.map(|d| d.to_string()),
        tags: article.tags.join(", "),
        publish,
        cover_image: None,
    }
}

pub fn upload(file_name: &str, bytes: &'static [u8]) -> UploadedFile {
    UploadedFile {
        file_name: file_name.into(),
        bytes: Bytes::from_static(bytes),
    }
}
