use axum::http::StatusCode;
use serde_json::{json, Value};

use crate::test_server;
use legislation_service::Config;

#[cfg(test)]
mod stats_tests {
    use super::*;

    #[tokio::test]
    async fn test_stats_returns_fixed_snapshot() {
        let server = test_server(Config::default());

        let response = server.get("/stats").await;

        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(
            response.json::<Value>(),
            json!({
                "totalBills": 1247,
                "councilMembers": 9,
                "neighborhoodsActive": 23,
                "totalVotes": 8934,
                "neighborsEngaged": 3421
            })
        );
    }

    #[tokio::test]
    async fn test_stats_is_served_under_api_prefix() {
        let server = test_server(Config::default());

        let root = server.get("/stats").await.json::<Value>();
        let api = server.get("/api/stats").await.json::<Value>();

        assert_eq!(root, api);
    }
}
