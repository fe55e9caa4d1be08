use std::path::{Path, PathBuf};

use anyhow::Result;
use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
};
use tokio::fs;
use tracing::{debug, warn};

/// Fallback for requests the static file service could not satisfy.
/// Directories without an index file get an HTML listing; everything
/// else is a plain 404.
pub async fn list_directory(State(root): State<PathBuf>, uri: Uri) -> Response {
    let request_path = uri.path();

    let Some(relative) = sanitize(request_path) else {
        debug!("rejecting unsafe path: {}", request_path);
        return StatusCode::NOT_FOUND.into_response();
    };

    let full_path = root.join(&relative);
    let metadata = match fs::metadata(&full_path).await {
        Ok(metadata) => metadata,
        Err(_) => return StatusCode::NOT_FOUND.into_response(),
    };

    if !metadata.is_dir() {
        return StatusCode::NOT_FOUND.into_response();
    }

    // Relative links in the listing only resolve under the slashed path.
    if !request_path.ends_with('/') {
        return Redirect::permanent(&format!("{}/", request_path)).into_response();
    }

    match render_listing(&full_path, request_path).await {
        Ok(page) => Html(page).into_response(),
        Err(err) => {
            warn!("failed to list {}: {}", full_path.display(), err);
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

/// Maps a request path onto a path relative to the served root. Returns
/// `None` for paths with parent-directory segments.
fn sanitize(request_path: &str) -> Option<PathBuf> {
    let mut relative = PathBuf::new();

    for segment in request_path.split('/') {
        match segment {
            "" | "." => continue,
            ".." => return None,
            segment => relative.push(segment),
        }
    }

    Some(relative)
}

async fn render_listing(dir: &Path, request_path: &str) -> Result<String> {
    let mut names = Vec::new();
    let mut entries = fs::read_dir(dir).await?;

    while let Some(entry) = entries.next_entry().await? {
        let mut name = entry.file_name().to_string_lossy().into_owned();
        if entry.file_type().await?.is_dir() {
            name.push('/');
        }
        names.push(name);
    }
    names.sort();

    let title = escape(&format!("Directory listing for {}", request_path));

    let mut page = String::new();
    page.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    page.push_str(&format!("<title>{}</title>\n</head>\n<body>\n", title));
    page.push_str(&format!("<h1>{}</h1>\n<hr>\n<ul>\n", title));
    for name in &names {
        page.push_str(&format!(
            "<li><a href=\"{}\">{}</a></li>\n",
            escape(name),
            escape(name)
        ));
    }
    page.push_str("</ul>\n<hr>\n</body>\n</html>\n");

    Ok(page)
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_normalizes_segments() {
        assert_eq!(sanitize("/a/b/c"), Some(PathBuf::from("a/b/c")));
        assert_eq!(sanitize("/"), Some(PathBuf::new()));
        assert_eq!(sanitize("/a//./b/"), Some(PathBuf::from("a/b")));
    }

    #[test]
    fn test_sanitize_rejects_parent_segments() {
        assert_eq!(sanitize("/../etc/passwd"), None);
        assert_eq!(sanitize("/a/../../b"), None);
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape("a<b>&\"c\""), "a&lt;b&gt;&amp;&quot;c&quot;");
    }

    #[tokio::test]
    async fn test_render_listing_sorts_and_marks_directories() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.txt"), "b").unwrap();
        std::fs::write(dir.path().join("a.txt"), "a").unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();

        let page = render_listing(dir.path(), "/").await.unwrap();

        assert!(page.contains("Directory listing for /"));
        assert!(page.contains("<a href=\"a.txt\">a.txt</a>"));
        assert!(page.contains("<a href=\"nested/\">nested/</a>"));
        let a = page.find("a.txt").unwrap();
        let b = page.find("b.txt").unwrap();
        assert!(a < b);
    }

    #[tokio::test]
    async fn test_listing_redirects_directory_without_slash() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();

        let response = list_directory(
            State(dir.path().to_path_buf()),
            Uri::from_static("/sub"),
        )
        .await;

        assert!(response.status().is_redirection());
        assert_eq!(
            response.headers().get(axum::http::header::LOCATION).unwrap(),
            "/sub/"
        );
    }

    #[tokio::test]
    async fn test_listing_missing_path_is_not_found() {
        let dir = tempfile::tempdir().unwrap();

        let response = list_directory(
            State(dir.path().to_path_buf()),
            Uri::from_static("/nope/"),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_listing_traversal_is_not_found() {
        let dir = tempfile::tempdir().unwrap();

        let response = list_directory(
            State(dir.path().to_path_buf()),
            Uri::from_static("/../outside/"),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
