//! Raindrops (bookmarks) API endpoints.

use crate::client::RaindropClient;
use crate::error::RaindropResult;
use crate::types::{CreateBookmarkResponse, NewBookmark, SearchQuery, SearchResponse};

/// Raindrops API for creating and searching bookmarks.
pub struct RaindropsApi<'a> {
    client: &'a RaindropClient,
}

impl<'a> RaindropsApi<'a> {
    pub(crate) fn new(client: &'a RaindropClient) -> Self {
        Self { client }
    }

    /// Create a bookmark.
    pub async fn create(&self, bookmark: &NewBookmark) -> RaindropResult<CreateBookmarkResponse> {
        self.client.http.post("/raindrop", bookmark).await
    }

    /// Search bookmarks in a collection. Collection `0` searches all of them.
    pub async fn search(
        &self,
        collection_id: i64,
        query: &SearchQuery,
    ) -> RaindropResult<SearchResponse> {
        self.client
            .http
            .get_with_query(&format!("/raindrops/{}", collection_id), query)
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::types::{CollectionRef, SortOrder};
    use crate::{NewBookmark, RaindropClient, SearchQuery};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> RaindropClient {
        RaindropClient::builder()
            .base_url(server.uri())
            .token("test-token")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_sends_only_supplied_fields() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/raindrop"))
            .and(body_json(json!({
                "link": "https://example.com",
                "tags": ["rust"],
                "collection": {"$id": 0}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "result": true,
                "item": {
                    "_id": 1,
                    "title": "example.com",
                    "link": "https://example.com",
                    "created": "2024-01-01T00:00:00.000Z",
                    "lastUpdate": "2024-01-01T00:00:00.000Z"
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let bookmark =
            NewBookmark::new("https://example.com").with_tags(vec!["rust".to_string()]);
        let response = client_for(&server).raindrops().create(&bookmark).await.unwrap();

        assert!(response.result);
        assert_eq!(response.item.link, "https://example.com");
    }

    #[tokio::test]
    async fn test_create_into_collection() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/raindrop"))
            .and(body_json(json!({
                "link": "https://example.com",
                "title": "Example",
                "collection": {"$id": 9}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "result": true,
                "item": {"link": "https://example.com"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let bookmark = NewBookmark::new("https://example.com")
            .with_title("Example")
            .in_collection(CollectionRef::new(9));
        client_for(&server).raindrops().create(&bookmark).await.unwrap();
    }

    #[tokio::test]
    async fn test_search_encodes_query() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/raindrops/3"))
            .and(query_param("search", "rust async"))
            .and(query_param("tags", "a,b"))
            .and(query_param("page", "1"))
            .and(query_param("perpage", "10"))
            .and(query_param("sort", "-created"))
            .and(query_param("word", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "result": true,
                "items": [],
                "count": 0
            })))
            .expect(1)
            .mount(&server)
            .await;

        let query = SearchQuery {
            page: Some(1),
            perpage: Some(10),
            sort: Some(SortOrder::CreatedDesc),
            word: Some(true),
            ..SearchQuery::new("rust async").with_tags(&["a", "b"])
        };
        let response = client_for(&server)
            .raindrops()
            .search(3, &query)
            .await
            .unwrap();
        assert_eq!(response.count, 0);

        let requests = server.received_requests().await.unwrap();
        let raw_query = requests[0].url.query().unwrap_or_default().to_string();
        assert!(raw_query.contains("tags=a%2Cb"), "query was {}", raw_query);
    }

    #[tokio::test]
    async fn test_search_omits_absent_parameters() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/raindrops/0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "result": true,
                "items": [],
                "count": 0
            })))
            .mount(&server)
            .await;

        client_for(&server)
            .raindrops()
            .search(0, &SearchQuery::new("rust"))
            .await
            .unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests[0].url.query(), Some("search=rust"));
    }

    #[tokio::test]
    async fn test_search_error_status() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/raindrops/0"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .raindrops()
            .search(0, &SearchQuery::new("rust"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Raindrop API error: Unauthorized");
    }
}
