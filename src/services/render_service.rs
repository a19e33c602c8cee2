use std::path::PathBuf;

use axum::response::Html;
use tokio::fs;

use crate::error::{Error, Result};

/// Fills page templates with route parameters. Templates are plain HTML
/// files with `{{ key }}` placeholders, read fresh per request like the
/// dataset. The routing layer treats this as an opaque collaborator.
#[derive(Debug, Clone)]
pub struct RenderService {
    templates_dir: PathBuf,
}

impl RenderService {
    pub fn new(templates_dir: PathBuf) -> Self {
        Self { templates_dir }
    }

    pub async fn render(&self, name: &str, vars: &[(&str, String)]) -> Result<Html<String>> {
        let path = self.templates_dir.join(name);
        let mut page = fs::read_to_string(&path)
            .await
            .map_err(|e| Error::Render(format!("template {}: {}", path.display(), e)))?;
        for (key, value) in vars {
            page = page.replace(&format!("{{{{ {} }}}}", key), &escape_html(value));
        }
        Ok(Html(page))
    }
}

/// Substituted values end up inside HTML, so route parameters must not be
/// able to inject markup.
fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
