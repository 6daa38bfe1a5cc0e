use axum::http::StatusCode;
use serde_json::{json, Value};

use crate::test_server;
use legislation_service::Config;

#[cfg(test)]
mod zipcode_lookup_tests {
    use super::*;

    #[tokio::test]
    async fn test_valid_zipcode_returns_maryland() {
        // Given: a five digit zipcode in the query string
        let server = test_server(Config::default());

        // When: the query route is called
        let response = server
            .get("/zipcode-lookup")
            .add_query_param("zipcode", "20901")
            .await;

        // Then: 200 with the statewide result and explicit nulls
        assert_eq!(response.status_code(), StatusCode::OK);
        let body = response.json::<Value>();
        assert_eq!(
            body,
            json!({
                "zipcode": "20901",
                "city": null,
                "state": "MD",
                "neighborhoods": null,
                "jurisdiction": null,
                "supported": true,
                "hasJurisdiction": false,
                "message": "Showing Maryland state legislation. Local jurisdiction lookup is not yet available for this zipcode."
            })
        );
    }

    #[tokio::test]
    async fn test_short_zipcode_is_rejected() {
        let server = test_server(Config::default());

        let response = server
            .get("/zipcode-lookup")
            .add_query_param("zipcode", "209")
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<Value>(),
            json!({ "error": "Invalid zipcode format", "supported": false })
        );
    }

    #[tokio::test]
    async fn test_letters_are_rejected() {
        let server = test_server(Config::default());

        let response = server
            .get("/zipcode-lookup")
            .add_query_param("zipcode", "abcde")
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<Value>(),
            json!({ "error": "Invalid zipcode format", "supported": false })
        );
    }

    #[tokio::test]
    async fn test_missing_parameter_is_rejected() {
        let server = test_server(Config::default());

        let response = server.get("/zipcode-lookup").await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["supported"], false);
    }

    #[tokio::test]
    async fn test_query_and_path_routes_are_equivalent() {
        let server = test_server(Config::default());

        for zipcode in ["20901", "21201", "00000", "99999"] {
            let by_query = server
                .get("/zipcode-lookup")
                .add_query_param("zipcode", zipcode)
                .await;
            let by_path = server.get(&format!("/zipcodes/lookup/{}", zipcode)).await;
            let by_api_path = server
                .get(&format!("/api/zipcodes/lookup/{}", zipcode))
                .await;

            assert_eq!(by_query.status_code(), StatusCode::OK);
            assert_eq!(by_path.status_code(), StatusCode::OK);
            assert_eq!(by_query.json::<Value>(), by_path.json::<Value>());
            assert_eq!(by_path.json::<Value>(), by_api_path.json::<Value>());
        }
    }

    #[tokio::test]
    async fn test_percent_encoded_path_segment_is_decoded() {
        let server = test_server(Config::default());

        let by_query = server
            .get("/zipcode-lookup")
            .add_query_param("zipcode", "20901")
            .await;
        let by_encoded_path = server.get("/zipcodes/lookup/2090%31").await;

        assert_eq!(by_encoded_path.status_code(), StatusCode::OK);
        assert_eq!(by_encoded_path.json::<Value>()["zipcode"], "20901");
        assert_eq!(by_query.json::<Value>(), by_encoded_path.json::<Value>());
    }

    #[tokio::test]
    async fn test_path_route_rejects_malformed_segment() {
        let server = test_server(Config::default());

        for segment in ["209", "209011", "abcde", "2090a"] {
            let response = server.get(&format!("/zipcodes/lookup/{}", segment)).await;
            assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "{}", segment);
            assert_eq!(
                response.json::<Value>(),
                json!({ "error": "Invalid zipcode format", "supported": false })
            );
        }
    }

    #[tokio::test]
    async fn test_every_accepted_response_is_maryland_without_jurisdiction() {
        let server = test_server(Config::default());

        for zipcode in ["20901", "10001", "90210", "02134"] {
            let body = server
                .get("/zipcode-lookup")
                .add_query_param("zipcode", zipcode)
                .await
                .json::<Value>();

            assert_eq!(body["zipcode"], zipcode);
            assert_eq!(body["state"], "MD");
            assert_eq!(body["hasJurisdiction"], false);
        }
    }

    #[tokio::test]
    async fn test_repeated_calls_are_byte_identical() {
        let server = test_server(Config::default());

        let first = server.get("/zipcodes/lookup/20901").await.text();
        let second = server.get("/zipcodes/lookup/20901").await.text();
        assert_eq!(first, second);
    }
}
