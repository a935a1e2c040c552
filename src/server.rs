use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};

use crate::fetch::HttpsClient;
use crate::model::{CountryStats, GlobalStats};
use crate::store::StatsStore;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) client: HttpsClient,
    pub(crate) store: Arc<StatsStore>,
}

pub(crate) fn router(state: AppState) -> Router {
    Router::new()
        .route("/all", get(worldwide))
        .route("/countries", get(countries))
        .route("/countries/:country", get(country))
        .with_state(state)
}

async fn worldwide(State(state): State<AppState>) -> Json<GlobalStats> {
    Json(state.store.global().await)
}

async fn countries(State(state): State<AppState>) -> Json<Vec<CountryStats>> {
    Json(state.store.countries().await)
}

/// Lookup by exact name. A miss still answers 200 with an all-default
/// record, matching what existing consumers expect.
async fn country(State(state): State<AppState>, Path(name): Path<String>) -> Json<CountryStats> {
    Json(state.store.lookup(&name).await.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::fetch;

    fn seeded_state() -> AppState {
        AppState {
            client: fetch::build_client(),
            store: Arc::new(StatsStore::default()),
        }
    }

    fn named(country: &str, total_cases: i64) -> CountryStats {
        CountryStats {
            country: country.to_string(),
            total_cases,
            ..CountryStats::default()
        }
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn all_serves_the_current_worldwide_snapshot() {
        let state = seeded_state();
        state
            .store
            .set_global(GlobalStats {
                cases: 1_234,
                deaths: 56,
                recovered: 789,
            })
            .await;

        let (status, body) = get_json(router(state), "/all").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            serde_json::json!({"cases": 1_234, "deaths": 56, "recovered": 789})
        );
    }

    #[tokio::test]
    async fn countries_serves_the_full_list() {
        let state = seeded_state();
        state
            .store
            .set_countries(vec![named("USA", 200), named("Italy", 50)])
            .await;

        let (status, body) = get_json(router(state), "/countries").await;
        assert_eq!(status, StatusCode::OK);
        let list = body.as_array().unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0]["country"], "USA");
        assert_eq!(list[1]["totalCases"], 50);
    }

    #[tokio::test]
    async fn country_lookup_returns_the_exact_match() {
        let state = seeded_state();
        state
            .store
            .set_countries(vec![named("USA", 200), named("Saudi Arabia", 30)])
            .await;

        let (status, body) = get_json(router(state.clone()), "/countries/USA").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["country"], "USA");
        assert_eq!(body["totalCases"], 200);

        // Path segments arrive percent-decoded.
        let (_, body) = get_json(router(state), "/countries/Saudi%20Arabia").await;
        assert_eq!(body["country"], "Saudi Arabia");
    }

    #[tokio::test]
    async fn unknown_country_answers_200_with_a_default_record() {
        let state = seeded_state();
        state.store.set_countries(vec![named("USA", 200)]).await;

        let (status, body) = get_json(router(state.clone()), "/countries/Atlantis").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["country"], "");
        assert_eq!(body["totalCases"], 0);

        // Case matters: a wrong-case name is a miss, not a match.
        let (_, body) = get_json(router(state), "/countries/usa").await;
        assert_eq!(body["country"], "");
    }
}
