//! HTML index for directories that have no `index.html`.

use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

/// A directory entry shown in the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    pub name: String,
    pub is_dir: bool,
}

/// Map a request path onto `root`, refusing anything that would leave it.
///
/// Returns `None` for undecodable paths and for `..`, absolute or prefixed
/// components.
pub fn resolve(root: &Path, request_path: &str) -> Option<PathBuf> {
    let decoded = urlencoding::decode(request_path).ok()?;
    let relative = decoded.trim_start_matches('/');

    let mut path = root.to_path_buf();
    for component in Path::new(relative).components() {
        match component {
            Component::Normal(part) => path.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    Some(path)
}

/// Render the listing page for `request_path`.
///
/// Entries are sorted case-insensitively; directories get a trailing `/`.
pub fn render(request_path: &str, mut entries: Vec<ListingEntry>) -> String {
    entries.sort_by_key(|e| e.name.to_lowercase());

    let display_path = urlencoding::decode(request_path)
        .map(|p| p.into_owned())
        .unwrap_or_else(|_| request_path.to_string());
    let title = format!(
        "Directory listing for {}",
        html_escape::encode_text(&display_path)
    );

    let mut html = String::new();
    html.push_str("<!DOCTYPE HTML>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{title}</title>\n</head>\n<body>\n"));
    html.push_str(&format!("<h1>{title}</h1>\n<hr>\n<ul>\n"));

    for entry in &entries {
        let suffix = if entry.is_dir { "/" } else { "" };
        html.push_str(&format!(
            "<li><a href=\"{}{suffix}\">{}{suffix}</a></li>\n",
            urlencoding::encode(&entry.name),
            html_escape::encode_text(&entry.name),
        ));
    }

    html.push_str("</ul>\n<hr>\n</body>\n</html>\n");
    html
}

async fn read_entries(dir: &Path) -> std::io::Result<Vec<ListingEntry>> {
    let mut reader = tokio::fs::read_dir(dir).await?;
    let mut entries = Vec::new();

    while let Some(entry) = reader.next_entry().await? {
        let is_dir = entry.file_type().await.map(|t| t.is_dir()).unwrap_or(false);
        entries.push(ListingEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            is_dir,
        });
    }

    Ok(entries)
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "File not found").into_response()
}

/// Fallback for requests the file service could not satisfy.
pub async fn directory_listing(State(root): State<Arc<PathBuf>>, uri: Uri) -> Response {
    let request_path = uri.path();

    let Some(dir) = resolve(&root, request_path) else {
        return not_found();
    };

    if !request_path.ends_with('/') || !dir.is_dir() {
        return not_found();
    }

    match read_entries(&dir).await {
        Ok(entries) => Html(render(request_path, entries)).into_response(),
        Err(e) => {
            tracing::warn!("Failed to list directory {:?}: {}", dir, e);
            not_found()
        }
    }
}
