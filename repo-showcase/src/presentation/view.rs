//! View models derived from project records.
//!
//! Each function is a pure mapping from records to a serializable structure
//! the page template renders.

use crate::normalizer::{Contributor, ProjectRecord, Screenshot};
use chrono::DateTime;
use serde::Serialize;
use std::collections::HashMap;

/// Label used for records without a primary language.
pub const OTHER_LANGUAGE: &str = "Other";

/// A project card in the grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectCard {
    pub name: String,
    pub repo_url: String,
    pub description: String,
    pub tags: Vec<String>,
    pub stars: u64,
    pub forks: u64,
    pub language: String,
    pub updated: String,
    pub featured: bool,
    pub thumbnail_url: String,
}

/// The details modal of one project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectDetails {
    pub name: String,
    pub repo_url: String,
    pub description: String,
    pub readme_excerpt: String,
    pub license: String,
    pub default_branch: String,
    pub created: String,
    pub updated: String,
    pub open_issues: u64,
    pub size_kb: u64,
    pub contributors: Vec<Contributor>,
    pub screenshots: Vec<GalleryFrame>,
}

/// One screenshot of the details gallery, linked to its lightbox neighbours.
///
/// `id`, `previous_id` and `next_id` are page anchors, so the static page can
/// step through the images with plain links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryFrame {
    pub src: String,
    pub alt: String,
    pub id: String,
    pub previous_id: String,
    pub next_id: String,
}

/// Header counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProjectStats {
    pub total_projects: usize,
    pub total_stars: u64,
    pub total_forks: u64,
    pub featured: usize,
}

/// One bar of the language chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageShare {
    pub language: String,
    pub count: usize,
    /// Share of all projects, rounded to one decimal.
    pub percent: f64,
}

/// Maps a record to its card.
#[must_use]
pub fn project_card(record: &ProjectRecord) -> ProjectCard {
    ProjectCard {
        name: record.name.clone(),
        repo_url: record.repo_url.clone(),
        description: record.description.clone(),
        tags: record.tags.clone(),
        stars: record.stars,
        forks: record.forks,
        language: record.language.clone(),
        updated: display_date(&record.updated_at),
        featured: record.featured,
        thumbnail_url: record.thumbnail_url.clone(),
    }
}

/// Maps a record to its details modal.
#[must_use]
pub fn project_details(record: &ProjectRecord) -> ProjectDetails {
    ProjectDetails {
        name: record.name.clone(),
        repo_url: record.repo_url.clone(),
        description: record.description.clone(),
        readme_excerpt: record.readme_excerpt.clone(),
        license: record.license.clone(),
        default_branch: record.default_branch.clone(),
        created: display_date(&record.created_at),
        updated: display_date(&record.updated_at),
        open_issues: record.open_issues,
        size_kb: record.size,
        contributors: record.contributors.clone(),
        screenshots: gallery(&record.name, &record.screenshots),
    }
}

/// Lays out screenshots as lightbox frames with wrap-around neighbours.
#[must_use]
pub fn gallery(project: &str, screenshots: &[Screenshot]) -> Vec<GalleryFrame> {
    let anchor = |index: usize| format!("shot-{}-{index}", anchor_slug(project));

    (0..screenshots.len())
        .filter_map(|index| Lightbox::open(screenshots, index))
        .map(|lightbox| {
            let current = lightbox.current();
            let mut back = lightbox.clone();
            back.previous();
            let mut forward = lightbox.clone();
            forward.next();

            GalleryFrame {
                src: current.src.clone(),
                alt: current.alt.clone(),
                id: anchor(lightbox.index()),
                previous_id: anchor(back.index()),
                next_id: anchor(forward.index()),
            }
        })
        .collect()
}

fn anchor_slug(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '-' })
        .collect()
}

/// Computes the header counters.
#[must_use]
pub fn project_stats(records: &[ProjectRecord]) -> ProjectStats {
    ProjectStats {
        total_projects: records.len(),
        total_stars: records.iter().map(|r| r.stars).sum(),
        total_forks: records.iter().map(|r| r.forks).sum(),
        featured: records.iter().filter(|r| r.featured).count(),
    }
}

/// Counts projects per language, most common first, ties by name.
#[must_use]
pub fn language_distribution(records: &[ProjectRecord]) -> Vec<LanguageShare> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in records {
        let language = if record.language.is_empty() {
            OTHER_LANGUAGE
        } else {
            record.language.as_str()
        };
        *counts.entry(language).or_default() += 1;
    }

    let total = records.len();
    let mut shares: Vec<LanguageShare> = counts
        .into_iter()
        .map(|(language, count)| LanguageShare {
            language: language.to_string(),
            count,
            percent: (count as f64 * 1000.0 / total as f64).round() / 10.0,
        })
        .collect();

    shares.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.language.cmp(&b.language)));
    shares
}

/// Renders an RFC 3339 timestamp as `YYYY-MM-DD`; other text passes through.
fn display_date(timestamp: &str) -> String {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|t| t.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| timestamp.to_string())
}

/// Screenshot viewer with wrap-around navigation.
#[derive(Debug, Clone)]
pub struct Lightbox<'a> {
    images: &'a [Screenshot],
    index: usize,
}

impl<'a> Lightbox<'a> {
    /// Opens the viewer at `index`; `None` when there is no such image.
    #[must_use]
    pub fn open(images: &'a [Screenshot], index: usize) -> Option<Self> {
        (index < images.len()).then_some(Self { images, index })
    }

    /// The image on display.
    #[must_use]
    pub fn current(&self) -> &'a Screenshot {
        &self.images[self.index]
    }

    /// Position of the image on display.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Advances to the next image, wrapping to the first.
    pub fn next(&mut self) -> &'a Screenshot {
        self.index = (self.index + 1) % self.images.len();
        self.current()
    }

    /// Steps back to the previous image, wrapping to the last.
    pub fn previous(&mut self) -> &'a Screenshot {
        self.index = (self.index + self.images.len() - 1) % self.images.len();
        self.current()
    }
}
