//! The demo page: a single static HTML file served at /.
//!
//! The page fetches /api/partners to build the partner selector and posts
//! the form to /api/search. Compiled into the binary so the container image
//! stays a single artifact.

use axum::{Router, response::Html, routing::get};

const INDEX_HTML: &str = include_str!("../assets/index.html");

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub fn router() -> Router {
    Router::new().route("/", get(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_page_has_search_form() {
        assert!(INDEX_HTML.contains("Vector Similarity Search"));
        assert!(INDEX_HTML.contains("/api/search"));
        assert!(INDEX_HTML.contains("/api/partners"));
    }
}
