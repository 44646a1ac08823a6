//! OpenAPI documentation, served by Swagger UI at /docs.

use domain_lostfound::FoundReport;
use utoipa::OpenApi;

use crate::api::search::{PartnersResponse, SearchRequest, SearchResponse};

#[derive(OpenApi)]
#[openapi(
    paths(crate::api::search::search, crate::api::search::list_partners),
    components(schemas(SearchRequest, SearchResponse, PartnersResponse, FoundReport)),
    tags(
        (name = "search", description = "Similarity search over found-item reports")
    ),
    info(
        title = "Found Reports Search API",
        description = "Embeds free-text lost-item descriptions and searches a \
            vector index of found reports, filtered by partner."
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_document_includes_search_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/search"));
        assert!(doc.paths.paths.contains_key("/api/partners"));
    }
}
