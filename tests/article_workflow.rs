// tests/article_workflow.rs
use std::sync::Arc;

use robotblog::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand},
    error::ApplicationError,
};
use robotblog::domain::errors::DomainError;

mod support;

use support::{
    StepClock, admin_context, draft_article, fixed_now, published_article, resubmit, spawn_app,
    spawn_app_with_clock, upload,
};

fn is_validation(err: &ApplicationError) -> bool {
    matches!(
        err,
        ApplicationError::Validation(_) | ApplicationError::Domain(DomainError::Validation(_))
    )
}

#[tokio::test]
async fn duplicate_titles_get_numbered_slugs() {
    let app = spawn_app().await;
    let admin = admin_context();
    let commands = &app.services.article_commands;

    let first = commands
        .create_article(&admin, published_article("Premier test moteur", 3))
        .await
        .unwrap();
    let second = commands
        .create_article(&admin, published_article("Premier test moteur", 4))
        .await
        .unwrap();
    let third = commands
        .create_article(&admin, draft_article("Premier  test -- moteur"))
        .await
        .unwrap();

    assert_eq!(first.slug, "premier-test-moteur");
    assert_eq!(second.slug, "premier-test-moteur-1");
    assert_eq!(third.slug, "premier-test-moteur-2");
}

#[tokio::test]
async fn accented_title_is_folded_into_the_slug() {
    let app = spawn_app().await;
    let created = app
        .services
        .article_commands
        .create_article(&admin_context(), published_article("Jour 12 – Électronique réussie", 12))
        .await
        .unwrap();

    assert_eq!(created.slug, "jour-12-electronique-reussie");
    assert_eq!(created.category.key, "journal");
    assert_eq!(created.day, Some(12));
}

#[tokio::test]
async fn publishing_on_creation_stamps_the_time() {
    let app = spawn_app().await;
    let admin = admin_context();
    let commands = &app.services.article_commands;

    let published = commands
        .create_article(&admin, published_article("Publié", 1))
        .await
        .unwrap();
    let draft = commands
        .create_article(&admin, draft_article("Brouillon"))
        .await
        .unwrap();

    assert!(published.published);
    assert_eq!(published.published_at, Some(fixed_now()));
    assert_eq!(published.published_on.as_deref(), Some("1 mar 2024"));
    assert!(!draft.published);
    assert!(draft.published_at.is_none());
    assert_eq!(draft.created_at, fixed_now());
}

#[tokio::test]
async fn publication_time_is_set_once_and_survives_unpublishing() {
    let app = spawn_app_with_clock(Arc::new(StepClock::default())).await;
    let admin = admin_context();
    let commands = &app.services.article_commands;

    let draft = commands
        .create_article(&admin, draft_article("Essai servo"))
        .await
        .unwrap();
    assert!(draft.published_at.is_none());

    let published = commands
        .update_article(&admin, resubmit(&draft, true))
        .await
        .unwrap();
    let stamped = published.published_at.expect("stamped on publish");
    assert!(stamped > draft.created_at);

    let resaved = commands
        .update_article(&admin, resubmit(&published, true))
        .await
        .unwrap();
    assert_eq!(resaved.published_at, Some(stamped));

    let unpublished = commands
        .update_article(&admin, resubmit(&resaved, false))
        .await
        .unwrap();
    assert!(!unpublished.published);
    assert_eq!(unpublished.published_at, Some(stamped));
}

#[tokio::test]
async fn editing_the_title_keeps_the_slug() {
    let app = spawn_app().await;
    let admin = admin_context();
    let commands = &app.services.article_commands;

    let created = commands
        .create_article(&admin, published_article("Titre original", 2))
        .await
        .unwrap();

    let mut edit = resubmit(&created, true);
    edit.title = "Titre corrigé".into();
    edit.tags = "servo, , impression 3d ".into();
    edit.category = Some("mecanique".into());
    let updated = commands.update_article(&admin, edit).await.unwrap();

    assert_eq!(updated.slug, "titre-original");
    assert_eq!(updated.title, "Titre corrigé");
    assert_eq!(updated.category.key, "mecanique");
    assert_eq!(updated.tags, vec!["servo", "impression 3d"]);
}

#[tokio::test]
async fn titles_without_letters_or_digits_are_rejected() {
    let app = spawn_app().await;
    let admin = admin_context();
    let commands = &app.services.article_commands;

    let err = commands
        .create_article(&admin, draft_article("!!! ???"))
        .await
        .unwrap_err();
    assert!(is_validation(&err), "unexpected error: {err:?}");

    let err = commands
        .create_article(&admin, draft_article("   "))
        .await
        .unwrap_err();
    assert!(is_validation(&err), "unexpected error: {err:?}");

    let listing = app
        .services
        .article_queries
        .list_all(&admin)
        .await
        .unwrap();
    assert!(listing.articles.is_empty());
}

#[tokio::test]
async fn invalid_form_values_are_rejected() {
    let app = spawn_app().await;
    let admin = admin_context();
    let commands = &app.services.article_commands;

    let mut bad_day = draft_article("Jour inconnu");
    bad_day.day = Some("douze".into());
    let err = commands.create_article(&admin, bad_day).await.unwrap_err();
    assert!(is_validation(&err), "unexpected error: {err:?}");

    let bad_category = CreateArticleCommand::builder()
        .title("Mauvaise catégorie")
        .category("general")
        .build()
        .unwrap();
    let err = commands.create_article(&admin, bad_category).await.unwrap_err();
    assert!(is_validation(&err), "unexpected error: {err:?}");
}

#[tokio::test]
async fn cover_image_is_stored_next_to_uploads() {
    let app = spawn_app().await;
    let admin = admin_context();
    let commands = &app.services.article_commands;

    let with_cover = CreateArticleCommand::builder()
        .title("Avec couverture")
        .cover_image(upload("Torse v1.PNG", b"\x89PNG fake"))
        .build()
        .unwrap();
    let created = commands.create_article(&admin, with_cover).await.unwrap();
    assert_eq!(
        created.cover_image.as_deref(),
        Some("20240301090000_Torse_v1.PNG")
    );
    assert_eq!(app.uploaded_files(), vec!["20240301090000_Torse_v1.PNG"]);

    let bad_cover = CreateArticleCommand::builder()
        .title("Couverture refusée")
        .cover_image(upload("script.exe", b"MZ"))
        .build()
        .unwrap();
    let created = commands.create_article(&admin, bad_cover).await.unwrap();
    assert!(created.cover_image.is_none());
    assert_eq!(app.uploaded_files().len(), 1);
}

#[tokio::test]
async fn deleting_an_unknown_article_is_not_found() {
    let app = spawn_app().await;
    let admin = admin_context();
    let commands = &app.services.article_commands;

    let created = commands
        .create_article(&admin, draft_article("À supprimer"))
        .await
        .unwrap();
    commands
        .delete_article(&admin, DeleteArticleCommand { id: created.id })
        .await
        .unwrap();

    let err = commands
        .delete_article(&admin, DeleteArticleCommand { id: created.id })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)), "unexpected error: {err:?}");
}

#[tokio::test]
async fn reading_counts_views_and_links_neighbours() {
    let app = spawn_app().await;
    let admin = admin_context();
    let commands = &app.services.article_commands;
    let queries = &app.services.article_queries;

    let day1 = commands
        .create_article(&admin, published_article("Jour 1", 1))
        .await
        .unwrap();
    let day2 = commands
        .create_article(&admin, published_article("Jour 2", 2))
        .await
        .unwrap();
    let day3 = commands
        .create_article(&admin, published_article("Jour 3", 3))
        .await
        .unwrap();
    let mut day4 = draft_article("Jour 4");
    day4.day = Some("4".into());
    commands.create_article(&admin, day4).await.unwrap();

    let view = queries.read_article(&day2.slug).await.unwrap();
    assert_eq!(view.article.views, 1);
    assert_eq!(view.previous.map(|link| link.slug), Some(day1.slug));
    assert_eq!(view.next.map(|link| link.slug), Some(day3.slug.clone()));

    let view = queries.read_article(&day2.slug).await.unwrap();
    assert_eq!(view.article.views, 2);

    // The draft for day 4 is not a neighbour.
    let last = queries.read_article(&day3.slug).await.unwrap();
    assert!(last.next.is_none());
}

#[tokio::test]
async fn neighbours_skip_over_missing_days() {
    let app = spawn_app().await;
    let admin = admin_context();
    let commands = &app.services.article_commands;
    let queries = &app.services.article_queries;

    let mut slugs = Vec::new();
    for day in [5, 1, 3] {
        let created = commands
            .create_article(&admin, published_article(&format!("Jour {day}"), day))
            .await
            .unwrap();
        slugs.push((day, created.slug));
    }
    let slug = |day: i32| {
        slugs
            .iter()
            .find(|(d, _)| *d == day)
            .map(|(_, slug)| slug.clone())
            .unwrap()
    };

    let middle = queries.read_article(&slug(3)).await.unwrap();
    assert_eq!(middle.previous.map(|link| link.slug), Some(slug(1)));
    assert_eq!(middle.next.map(|link| link.slug), Some(slug(5)));

    let first = queries.read_article(&slug(1)).await.unwrap();
    assert!(first.previous.is_none());
    assert_eq!(first.next.map(|link| link.slug), Some(slug(3)));

    let last = queries.read_article(&slug(5)).await.unwrap();
    assert_eq!(last.previous.map(|link| link.slug), Some(slug(3)));
    assert!(last.next.is_none());
}

#[tokio::test]
async fn article_without_a_day_has_no_neighbours() {
    let app = spawn_app().await;
    let admin = admin_context();
    let commands = &app.services.article_commands;

    commands
        .create_article(&admin, published_article("Jour 1", 1))
        .await
        .unwrap();
    commands
        .create_article(&admin, published_article("Jour 2", 2))
        .await
        .unwrap();
    let undated = CreateArticleCommand::builder()
        .title("Liste des composants")
        .category("ressources")
        .publish(true)
        .build()
        .unwrap();
    let undated = commands.create_article(&admin, undated).await.unwrap();
    assert!(undated.day.is_none());

    let view = app
        .services
        .article_queries
        .read_article(&undated.slug)
        .await
        .unwrap();
    assert!(view.previous.is_none());
    assert!(view.next.is_none());
}

#[tokio::test]
async fn drafts_are_hidden_from_readers() {
    let app = spawn_app().await;
    let draft = app
        .services
        .article_commands
        .create_article(&admin_context(), draft_article("Pas encore prêt"))
        .await
        .unwrap();

    let err = app
        .services
        .article_queries
        .read_article(&draft.slug)
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));

    let err = app
        .services
        .article_queries
        .read_article("")
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn editor_context_lists_every_category() {
    let app = spawn_app().await;
    let admin = admin_context();
    let created = app
        .services
        .article_commands
        .create_article(&admin, draft_article("Édition"))
        .await
        .unwrap();

    let blank = app.services.article_queries.new_article_editor(&admin);
    assert!(blank.article.is_none());
    assert_eq!(blank.categories.len(), 8);

    let editor = app
        .services
        .article_queries
        .get_for_edit(&admin, created.id)
        .await
        .unwrap();
    assert_eq!(editor.article.map(|a| a.id), Some(created.id));

    let err = app
        .services
        .article_queries
        .get_for_edit(&admin, created.id + 100)
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}
