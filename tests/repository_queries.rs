// tests/repository_queries.rs
use std::sync::Arc;

use robotblog::application::{
    commands::{
        media::UploadMediaCommand,
        resources::{CreateResourceCommand, DeleteResourceCommand},
        timeline::{CreateTimelineEntryCommand, DeleteTimelineEntryCommand},
    },
    error::ApplicationError,
    queries::articles::SearchArticlesQuery,
};
use robotblog::domain::errors::DomainError;
use robotblog::infrastructure::seed::DemoSeeder;

mod support;

use support::{
    FixedClock, StepClock, TestApp, admin_context, draft_article, published_article, resubmit,
    spawn_app, spawn_app_with_clock, upload,
};

async fn publish_days(app: &TestApp, days: std::ops::RangeInclusive<i32>) {
    let admin = admin_context();
    for day in days {
        app.services
            .article_commands
            .create_article(&admin, published_article(&format!("Jour {day}"), day))
            .await
            .unwrap();
    }
}

fn search(query: &str) -> SearchArticlesQuery {
    SearchArticlesQuery {
        query: query.into(),
    }
}

#[tokio::test]
async fn journal_is_ordered_by_day_and_paginated() {
    let app = spawn_app().await;
    publish_days(&app, 1..=10).await;
    app.services
        .article_commands
        .create_article(&admin_context(), draft_article("Brouillon"))
        .await
        .unwrap();

    let queries = &app.services.article_queries;
    let first = queries.journal(None).await.unwrap();
    assert_eq!(first.total, 10);
    assert_eq!(first.pages, 2);
    assert_eq!(first.items.len(), 9);
    assert_eq!(first.items[0].day, Some(10));
    assert_eq!(first.items[8].day, Some(2));
    assert!(!first.has_prev);
    assert!(first.has_next);

    let second = queries.journal(Some(2)).await.unwrap();
    assert_eq!(second.items.len(), 1);
    assert_eq!(second.items[0].day, Some(1));
    assert!(second.has_prev);
    assert!(!second.has_next);

    let past_the_end = queries.journal(Some(7)).await.unwrap();
    assert!(past_the_end.items.is_empty());
    assert_eq!(past_the_end.total, 10);
}

#[tokio::test]
async fn home_shows_recent_articles_and_stats() {
    let app = spawn_app().await;
    publish_days(&app, 1..=8).await;

    let home = app.services.article_queries.home().await.unwrap();
    assert_eq!(home.articles.len(), 6);
    assert_eq!(home.max_day, 8);
    assert_eq!(home.published_count, 8);
    assert_eq!(home.categories.len(), 8);

    let about = app.services.article_queries.about().await.unwrap();
    assert_eq!(about.max_day, 8);
    assert_eq!(about.published_count, 8);
}

#[tokio::test]
async fn empty_blog_reports_day_zero() {
    let app = spawn_app().await;
    let home = app.services.article_queries.home().await.unwrap();
    assert!(home.articles.is_empty());
    assert_eq!(home.max_day, 0);
    assert_eq!(home.published_count, 0);
}

#[tokio::test]
async fn category_listing_filters_and_rejects_unknown_keys() {
    let app = spawn_app().await;
    let admin = admin_context();
    let commands = &app.services.article_commands;

    let mut mechanics = published_article("Bras articulé", 5);
    mechanics.category = Some("mecanique".into());
    commands.create_article(&admin, mechanics).await.unwrap();
    commands
        .create_article(&admin, published_article("Jour 6", 6))
        .await
        .unwrap();

    let page = app
        .services
        .article_queries
        .category("mecanique", None)
        .await
        .unwrap();
    assert_eq!(page.category.label, "Mécanique");
    assert_eq!(page.articles.total, 1);
    assert_eq!(page.articles.items[0].title, "Bras articulé");

    let err = app
        .services
        .article_queries
        .category("inconnue", None)
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn search_is_case_insensitive_and_literal() {
    let app = spawn_app().await;
    let admin = admin_context();
    let commands = &app.services.article_commands;

    commands
        .create_article(&admin, published_article("Servo 100% fiable", 1))
        .await
        .unwrap();
    commands
        .create_article(&admin, published_article("Servo 1000 tours", 2))
        .await
        .unwrap();
    let mut tagged = published_article("Pièces du torse", 3);
    tagged.tags = "impression 3d, pla".into();
    commands.create_article(&admin, tagged).await.unwrap();
    let mut draft = draft_article("Servo secret");
    draft.body = "servo".into();
    commands.create_article(&admin, draft).await.unwrap();

    let queries = &app.services.article_queries;

    let both = queries.search(search("SERVO")).await.unwrap();
    assert_eq!(both.articles.len(), 2);

    let literal = queries.search(search("100%")).await.unwrap();
    let titles: Vec<_> = literal.articles.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["Servo 100% fiable"]);

    let by_tag = queries.search(search("impression")).await.unwrap();
    assert_eq!(by_tag.articles.len(), 1);

    // Matched as typed: no title, body or tag has a space before "servo".
    let spaced = queries.search(search(" servo")).await.unwrap();
    assert!(spaced.articles.is_empty());
    assert_eq!(spaced.query, " servo");
    let spaced = queries.search(search(" fiable")).await.unwrap();
    assert_eq!(spaced.articles.len(), 1);

    let blank = queries.search(search("   ")).await.unwrap();
    assert!(blank.articles.is_empty());
    assert_eq!(blank.query, "   ");
}

#[tokio::test]
async fn search_and_category_list_latest_publication_first() {
    let app = spawn_app_with_clock(Arc::new(StepClock::default())).await;
    let admin = admin_context();
    let commands = &app.services.article_commands;

    // Created first, published last.
    let left = commands
        .create_article(&admin, draft_article("Servo gauche"))
        .await
        .unwrap();
    let right = commands
        .create_article(&admin, draft_article("Servo droit"))
        .await
        .unwrap();
    let right = commands
        .update_article(&admin, resubmit(&right, true))
        .await
        .unwrap();
    let left = commands
        .update_article(&admin, resubmit(&left, true))
        .await
        .unwrap();
    assert!(left.published_at > right.published_at);
    assert!(left.id < right.id);

    let queries = &app.services.article_queries;
    let found = queries.search(search("servo")).await.unwrap();
    let titles: Vec<_> = found.articles.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["Servo gauche", "Servo droit"]);

    let journal = queries.category("journal", None).await.unwrap();
    let titles: Vec<_> = journal
        .articles
        .items
        .iter()
        .map(|a| a.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Servo gauche", "Servo droit"]);
}

#[tokio::test]
async fn timeline_defaults_and_date_ordering() {
    let app = spawn_app().await;
    let admin = admin_context();
    let commands = &app.services.timeline_commands;

    let june = commands
        .create_entry(
            &admin,
            CreateTimelineEntryCommand {
                title: Some("Électronique".into()),
                event_date: Some("2024-06-01".into()),
                status: Some("en-cours".into()),
                icon: Some("⚡".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let undated = commands
        .create_entry(
            &admin,
            CreateTimelineEntryCommand {
                title: Some("Un jour".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    commands
        .create_entry(
            &admin,
            CreateTimelineEntryCommand {
                title: Some("Lancement".into()),
                event_date: Some("2024-01-15".into()),
                status: Some("complete".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(june.status, "in-progress");
    assert_eq!(undated.status, "planned");
    assert_eq!(undated.icon, "🔧");
    assert!(undated.event_date.is_none());

    let timeline = app.services.timeline_queries.timeline(None).await.unwrap();
    let titles: Vec<_> = timeline.entries.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Un jour", "Lancement", "Électronique"]);

    let err = commands
        .create_entry(
            &admin,
            CreateTimelineEntryCommand {
                status: Some("bientot".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::Validation(_))
    ));

    commands
        .delete_entry(&admin, DeleteTimelineEntryCommand { id: june.id })
        .await
        .unwrap();
    let err = commands
        .delete_entry(&admin, DeleteTimelineEntryCommand { id: june.id })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn resources_are_grouped_by_category_then_order() {
    let app = spawn_app().await;
    let admin = admin_context();
    let commands = &app.services.resource_commands;

    let entries = [
        ("ROS2", "logiciels", "2"),
        ("Servo", "composants", "1"),
        ("Raspberry Pi", "composants", "0"),
        ("Multimètre", "", ""),
    ];
    for (title, category, order) in entries {
        commands
            .create_resource(
                &admin,
                CreateResourceCommand {
                    title: Some(title.into()),
                    url: Some("https://example.org".into()),
                    category: Some(category.into()),
                    sort_order: Some(order.into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
    }

    let grouped = app.services.resource_queries.grouped().await.unwrap();
    let categories: Vec<_> = grouped.groups.iter().map(|g| g.category.as_str()).collect();
    assert_eq!(categories, vec!["composants", "logiciels", "outils"]);
    let components: Vec<_> = grouped.groups[0]
        .resources
        .iter()
        .map(|r| r.title.as_str())
        .collect();
    assert_eq!(components, vec!["Raspberry Pi", "Servo"]);

    let listing = app
        .services
        .resource_queries
        .admin_list(&admin, None)
        .await
        .unwrap();
    assert_eq!(listing.resources.len(), 4);

    let err = commands
        .create_resource(
            &admin,
            CreateResourceCommand {
                title: Some("Mauvais ordre".into()),
                sort_order: Some("premier".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));

    let first = listing.resources[0].id;
    commands
        .delete_resource(&admin, DeleteResourceCommand { id: first })
        .await
        .unwrap();
    let err = commands
        .delete_resource(&admin, DeleteResourceCommand { id: first })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn dashboard_counts_drafts_and_media() {
    let app = spawn_app().await;
    let admin = admin_context();

    publish_days(&app, 1..=2).await;
    app.services
        .article_commands
        .create_article(&admin, draft_article("En cours"))
        .await
        .unwrap();
    app.services
        .media_commands
        .upload_media(&admin, UploadMediaCommand { file: upload("photo.webp", b"w") })
        .await
        .unwrap();

    let dashboard = app.services.dashboard.dashboard(&admin).await.unwrap();
    assert_eq!(dashboard.article_count, 3);
    assert_eq!(dashboard.published_count, 2);
    assert_eq!(dashboard.media_count, 1);
    assert_eq!(dashboard.recent_articles.len(), 3);
}

#[tokio::test]
async fn demo_data_is_seeded_only_once() {
    let app = spawn_app().await;
    let article_read = app.article_read();
    let article_write = app.article_write();
    let timeline = app.timeline();
    let resources = app.resources();
    let seeder = DemoSeeder {
        article_read: &article_read,
        article_write: &article_write,
        timeline: &timeline,
        resources: &resources,
        clock: &FixedClock,
    };

    assert!(seeder.seed_if_empty().await.unwrap());
    assert!(!seeder.seed_if_empty().await.unwrap());

    let home = app.services.article_queries.home().await.unwrap();
    assert_eq!(home.published_count, 1);
    assert_eq!(home.max_day, 1);
    assert_eq!(home.articles[0].slug, "jour-1-le-projet-commence");

    let timeline = app.services.timeline_queries.timeline(None).await.unwrap();
    assert_eq!(timeline.entries.len(), 6);
    assert_eq!(timeline.entries[0].status, "complete");

    let grouped = app.services.resource_queries.grouped().await.unwrap();
    let categories: Vec<_> = grouped.groups.iter().map(|g| g.category.as_str()).collect();
    assert_eq!(categories, vec!["composants", "inspiration", "logiciels"]);
    assert_eq!(grouped.groups[0].resources.len(), 3);
}
