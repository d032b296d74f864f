//! Static page renderer.

use super::query::{all_tags, ProjectQuery};
use super::state::{AppState, LoadStatus};
use super::view::{
    language_distribution, project_card, project_details, project_stats, LanguageShare,
    ProjectCard, ProjectDetails, ProjectStats,
};
use super::RenderError;
use handlebars::{Context, Handlebars, Helper, HelperResult, Output, RenderContext};
use serde::Serialize;
use std::path::Path;

/// Built-in page layout.
pub const DEFAULT_PAGE_TEMPLATE: &str = include_str!("../../templates/page.hbs");

const PAGE: &str = "page";

/// Creates a configured Handlebars registry.
///
/// The registry is configured with:
/// - HTML escaping (the default)
/// - Strict mode (catches missing variables)
/// - `eq` helper for equality comparisons
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();
    hbs.set_strict_mode(true);
    hbs.register_helper("eq", Box::new(eq_helper));
    hbs
}

/// Helper function for equality comparison in templates.
///
/// Usage: `{{#if (eq variable "value")}}...{{/if}}`
fn eq_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let param1 = h.param(0).and_then(|v| v.value().as_str());
    let param2 = h.param(1).and_then(|v| v.value().as_str());

    let result = match (param1, param2) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    };

    out.write(if result { "true" } else { "" })?;
    Ok(())
}

#[derive(Serialize)]
struct PageData<'a> {
    title: &'a str,
    status: &'a LoadStatus,
    status_message: &'a str,
    status_hint: &'a str,
    generated_at: &'a str,
    stats: ProjectStats,
    languages: Vec<LanguageShare>,
    tags: Vec<String>,
    search: &'a str,
    tag: &'a str,
    sort: &'static str,
    projects: Vec<ProjectView>,
}

#[derive(Serialize)]
struct ProjectView {
    card: ProjectCard,
    details: ProjectDetails,
}

/// Renders the application state as one HTML page.
pub struct PageRenderer {
    handlebars: Handlebars<'static>,
    title: String,
}

impl PageRenderer {
    /// Creates a renderer using the built-in layout.
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in template fails to compile.
    pub fn new(title: impl Into<String>) -> Result<Self, RenderError> {
        Self::with_template(title, DEFAULT_PAGE_TEMPLATE)
    }

    /// Creates a renderer from template text.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Registration`] if the template does not compile.
    pub fn with_template(title: impl Into<String>, template: &str) -> Result<Self, RenderError> {
        let mut handlebars = create_handlebars_registry();
        handlebars.register_template_string(PAGE, template)?;
        Ok(Self {
            handlebars,
            title: title.into(),
        })
    }

    /// Creates a renderer from a template file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not compile.
    pub fn from_template_file(title: impl Into<String>, path: &Path) -> Result<Self, RenderError> {
        let template = std::fs::read_to_string(path).map_err(|e| RenderError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::with_template(title, &template)
    }

    /// Renders `state`, showing the records selected by `query`.
    ///
    /// Stats and the language chart cover the whole collection; the card
    /// grid shows only the query result.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Template`] if rendering fails.
    pub fn render(&self, state: &AppState, query: &ProjectQuery) -> Result<String, RenderError> {
        let all = state.projects();
        let status = state.status();

        let data = PageData {
            title: &self.title,
            status,
            status_message: status.message(),
            status_hint: status.hint().unwrap_or_default(),
            generated_at: state.generated_at().unwrap_or_default(),
            stats: project_stats(all),
            languages: language_distribution(all),
            tags: all_tags(all),
            search: query.search.trim(),
            tag: query.tag.as_deref().unwrap_or_default(),
            sort: query.sort.as_str(),
            projects: query
                .apply(all)
                .into_iter()
                .map(|record| ProjectView {
                    card: project_card(record),
                    details: project_details(record),
                })
                .collect(),
        };

        Ok(self.handlebars.render(PAGE, &data)?)
    }

    /// Renders `state` and writes the page to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or writing fails.
    pub fn render_to_file(
        &self,
        state: &AppState,
        query: &ProjectQuery,
        path: &Path,
    ) -> Result<(), RenderError> {
        let html = self.render(state, query)?;
        std::fs::write(path, html).map_err(|e| RenderError::Io {
            path: path.display().to_string(),
            source: e,
        })
    }
}
