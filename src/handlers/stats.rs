use axum::Json;

use crate::models::StatsSnapshot;

pub async fn get_stats() -> Json<StatsSnapshot> {
    Json(StatsSnapshot::current())
}
