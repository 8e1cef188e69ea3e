// src/infrastructure/seed.rs
use crate::application::ports::time::Clock;
use crate::domain::article::{
    ArticleContent, ArticleReadRepository, ArticleSlug, ArticleTitle, ArticleWriteRepository,
    Category, NewArticle, Tags,
};
use crate::domain::errors::DomainResult;
use crate::domain::resource::{NewResource, ResourceRepository};
use crate::domain::timeline::{NewTimelineEntry, TimelineRepository, TimelineStatus};
use chrono::NaiveDate;

const DEMO_BODY: &str = r"<h2>🚀 Le grand départ</h2>
<p>Aujourd'hui marque le début d'une aventure extraordinaire : construire un robot humanoïde de A à Z.</p>
<p>L'objectif à long terme est de créer un robot bipède capable de marcher, d'interagir avec son environnement et peut-être un jour de m'assister dans des tâches quotidiennes.</p>
<h2>📋 Le plan du projet</h2>
<p>J'ai défini les grandes étapes :</p>
<ul>
  <li><strong>Phase 1</strong> – Architecture et conception (J1 → J30)</li>
  <li><strong>Phase 2</strong> – Structure mécanique (J31 → J90)</li>
  <li><strong>Phase 3</strong> – Électronique et capteurs (J91 → J150)</li>
  <li><strong>Phase 4</strong> – Programmation et IA (J151 → J240)</li>
  <li><strong>Phase 5</strong> – Tests et intégration (J241 → J300)</li>
</ul>
<h2>🛠️ Matériel envisagé</h2>
<p>Pour commencer, j'explore les options : servomoteurs Dynamixel, Raspberry Pi 5, capteurs IMU, OpenCV pour la vision...</p>
<p>Ce blog sera mon carnet de bord jour par jour. Rejoignez-moi dans cette aventure !</p>";

// (title, description, status, icon, year, month)
const DEMO_MILESTONES: [(&str, &str, TimelineStatus, &str, i32, u32); 6] = [
    ("Lancement du projet", "Définition des objectifs et recherche documentaire", TimelineStatus::Complete, "🚀", 2024, 1),
    ("Conception mécanique", "Design de la structure, choix des actionneurs", TimelineStatus::InProgress, "🔧", 2024, 2),
    ("Prototype du torse", "Impression 3D et assemblage du torse", TimelineStatus::Planned, "🦾", 2024, 4),
    ("Électronique & capteurs", "Câblage, IMU, caméras, microcontrôleurs", TimelineStatus::Planned, "⚡", 2024, 6),
    ("Locomotion bipède", "Algorithmes d'équilibre et de marche", TimelineStatus::Planned, "🦿", 2024, 9),
    ("IA & interaction", "Vision par ordinateur, NLP, prise de décision", TimelineStatus::Planned, "🧠", 2024, 11),
];

// (title, url, description, category)
const DEMO_RESOURCES: [(&str, &str, &str, &str); 6] = [
    ("Dynamixel Servos", "https://www.robotis.com/shop/list.php?ca_id=101021", "Servomoteurs intelligents utilisés dans de nombreux robots humanoïdes", "composants"),
    ("Raspberry Pi", "https://www.raspberrypi.com/", "Ordinateur monocarte pour le cerveau du robot", "composants"),
    ("ROS2 (Robot Operating System)", "https://docs.ros.org/en/humble/", "Framework incontournable pour la robotique", "logiciels"),
    ("OpenCV", "https://opencv.org/", "Bibliothèque de vision par ordinateur", "logiciels"),
    ("Poppy Project", "https://www.poppy-project.org/", "Robot humanoïde open-source imprimable en 3D", "inspiration"),
    ("Arduino", "https://www.arduino.cc/", "Microcontrôleur pour le contrôle bas niveau", "composants"),
];

pub struct DemoSeeder<'a> {
    pub article_read: &'a dyn ArticleReadRepository,
    pub article_write: &'a dyn ArticleWriteRepository,
    pub timeline: &'a dyn TimelineRepository,
    pub resources: &'a dyn ResourceRepository,
    pub clock: &'a dyn Clock,
}

impl DemoSeeder<'_> {
    /// Populate an empty database with a first journal entry, the project
    /// milestones and a few resource links. Returns whether anything was
    /// written; a database that already holds articles is left alone.
    pub async fn seed_if_empty(&self) -> DomainResult<bool> {
        if self.article_read.count_all().await? > 0 {
            tracing::debug!("articles present, skipping demo data");
            return Ok(false);
        }

        let content = ArticleContent {
            title: ArticleTitle::new("Jour 1 – Le projet commence !")?,
            body: DEMO_BODY.to_string(),
            summary: Some(
                "Le premier jour du projet : définition des objectifs, plan de route et premiers choix techniques pour construire un robot humanoïde."
                    .to_string(),
            ),
            category: Category::Journal,
            day: Some(1),
            tags: Tags::new("démarrage, planification, humanoïde"),
        };
        let slug = ArticleSlug::new("jour-1-le-projet-commence")?;
        self.article_write
            .insert(NewArticle::new(content, slug, None, true, self.clock.now()))
            .await?;

        for (title, description, status, icon, year, month) in DEMO_MILESTONES {
            self.timeline
                .insert(NewTimelineEntry {
                    title: title.to_string(),
                    description: description.to_string(),
                    event_date: NaiveDate::from_ymd_opt(year, month, 1),
                    status,
                    icon: icon.to_string(),
                })
                .await?;
        }

        for (title, url, description, category) in DEMO_RESOURCES {
            self.resources
                .insert(NewResource {
                    title: title.to_string(),
                    url: url.to_string(),
                    description: description.to_string(),
                    category: category.to_string(),
                    sort_order: 0,
                })
                .await?;
        }

        tracing::info!(
            milestones = DEMO_MILESTONES.len(),
            resources = DEMO_RESOURCES.len(),
            "demo data seeded"
        );
        Ok(true)
    }
}
