// ABOUTME: Template set for the web frontend, parsed once at startup and shared read-only
// ABOUTME: Loads every *.html file in a directory and renders by base file name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Portfolio Site Contributors

//! # Templates
//!
//! Every `*.html` file in the template directory is parsed when the frontend
//! starts; a syntax error in any of them stops startup. At request time a page
//! is rendered by base file name against its serialized [`PageData`], fully
//! buffered, so a failing render never sends partial HTML.
//!
//! [`PageData`]: super::models::PageData

/// Template syntax and parser
pub mod parser;
/// Template execution
pub mod render;

use parser::Node;
use portfolio_core::{
    constants::web_assets,
    errors::{AppError, AppResult},
};
use serde::Serialize;
use std::{collections::BTreeMap, ffi::OsStr, fs, path::Path};
use tracing::debug;

/// Parsed templates keyed by base file name
#[derive(Debug, Clone, Default)]
pub struct TemplateSet {
    templates: BTreeMap<String, Vec<Node>>,
}

impl TemplateSet {
    /// Parse every `*.html` file directly inside `dir`
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read, holds no templates,
    /// or any template fails to parse
    pub fn load_dir(dir: &Path) -> AppResult<Self> {
        let entries = fs::read_dir(dir).map_err(|e| {
            AppError::config(format!("Cannot read template directory {}: {e}", dir.display()))
                .with_source(e)
        })?;

        let mut sources = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|e| {
                    AppError::config(format!("Cannot list {}: {e}", dir.display())).with_source(e)
                })?
                .path();
            if !path.is_file()
                || path.extension() != Some(OsStr::new(web_assets::TEMPLATE_EXTENSION))
            {
                continue;
            }
            let Some(name) = path.file_name().and_then(OsStr::to_str) else {
                continue;
            };
            let source = fs::read_to_string(&path).map_err(|e| {
                AppError::config(format!("Cannot read template {}: {e}", path.display()))
                    .with_source(e)
            })?;
            debug!(template = name, "Loaded template");
            sources.push((name.to_owned(), source));
        }

        if sources.is_empty() {
            return Err(AppError::config(format!(
                "No *.{} templates found in {}",
                web_assets::TEMPLATE_EXTENSION,
                dir.display()
            )));
        }

        Self::from_sources(sources)
    }

    /// Parse templates from `(name, source)` pairs
    ///
    /// # Errors
    ///
    /// Returns a `TemplateParse` error naming the first template that fails
    pub fn from_sources<I, N, S>(sources: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = (N, S)>,
        N: Into<String>,
        S: AsRef<str>,
    {
        let mut templates = BTreeMap::new();
        for (name, source) in sources {
            let name = name.into();
            let nodes = parser::parse(source.as_ref()).map_err(|e| {
                AppError::template_parse(name.clone(), e.to_string()).with_source(e)
            })?;
            templates.insert(name, nodes);
        }
        Ok(Self { templates })
    }

    /// Names of the loaded templates, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    /// Whether a template with this base name was loaded
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Names from `required` that were not loaded
    #[must_use]
    pub fn missing<'a>(&self, required: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
        required
            .into_iter()
            .filter(|name| !self.contains(name))
            .collect()
    }

    /// Render the template with this base name against `data`
    ///
    /// # Errors
    ///
    /// Returns `TemplateNotFound` for an unknown name, `SerializationError` if
    /// `data` cannot be serialized, and `TemplateRender` if execution fails
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> AppResult<String> {
        let nodes = self
            .lookup(name)
            .ok_or_else(|| AppError::template_not_found(name))?;
        let context = serde_json::to_value(data)?;
        render::render(nodes, &context)
            .map_err(|e| AppError::template_render(name, e.to_string()).with_source(e))
    }

    fn lookup(&self, name: &str) -> Option<&[Node]> {
        let base = Path::new(name).file_name().and_then(OsStr::to_str)?;
        self.templates.get(base).map(Vec::as_slice)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use portfolio_core::errors::ErrorCode;
    use serde_json::json;

    #[test]
    fn test_load_dir_keys_by_file_name_and_skips_other_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("home.html"), "<h1>{{ title }}</h1>").unwrap();
        fs::write(dir.path().join("notes.txt"), "{{ not a template").unwrap();
        fs::create_dir(dir.path().join("partials.html")).unwrap();

        let set = TemplateSet::load_dir(dir.path()).unwrap();
        assert_eq!(set.names().collect::<Vec<_>>(), vec!["home.html"]);
    }

    #[test]
    fn test_load_dir_rejects_empty_and_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            TemplateSet::load_dir(dir.path()).unwrap_err().code,
            ErrorCode::ConfigInvalid
        );
        assert_eq!(
            TemplateSet::load_dir(&dir.path().join("absent")).unwrap_err().code,
            ErrorCode::ConfigInvalid
        );
    }

    #[test]
    fn test_parse_error_names_template() {
        let err = TemplateSet::from_sources([("about.html", "{{#if profile}}")]).unwrap_err();
        assert_eq!(err.code, ErrorCode::TemplateParse);
        assert!(err.message.contains("about.html"));
    }

    #[test]
    fn test_render_by_base_name() {
        let set = TemplateSet::from_sources([("home.html", "<h1>{{ title }}</h1>")]).unwrap();
        let html = set
            .render("templates/home.html", &json!({ "title": "Hi" }))
            .unwrap();
        assert_eq!(html, "<h1>Hi</h1>");
    }

    #[test]
    fn test_unknown_template_is_not_found() {
        let set = TemplateSet::from_sources([("home.html", "x")]).unwrap();
        let err = set.render("about.html", &json!({})).unwrap_err();
        assert_eq!(err.code, ErrorCode::TemplateNotFound);
        assert_eq!(set.missing(["home.html", "about.html"]), vec!["about.html"]);
    }

    #[test]
    fn test_execution_failure_is_render_error() {
        let set = TemplateSet::from_sources([("about.html", "{{ profile.name }}")]).unwrap();
        let err = set
            .render("about.html", &json!({ "profile": null }))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::TemplateRender);
    }
}
