use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json,
};
use serde_json::json;
use std::{
    path::Path,
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};

use price_estimator::{
    LinearModel, OptionCatalog, PriceEstimator, RegressionModel, Selection,
};

// ---------- Response types ----------

#[derive(serde::Serialize)]
struct Out {
    t: i64,
    price: f32,
}

// ---------- Server state ----------

#[derive(Clone)]
struct AppState {
    est: Arc<PriceEstimator>,
}

// ---------- Handlers ----------

async fn catalog(State(state): State<AppState>) -> Json<OptionCatalog> {
    Json(state.est.catalog().clone())
}

async fn estimate(
    State(state): State<AppState>,
    Json(selection): Json<Selection>,
) -> Result<Json<Out>, (StatusCode, Json<serde_json::Value>)> {
    let price = state.est.estimate(&selection).map_err(|e| {
        let status = if e.is_validation() {
            StatusCode::UNPROCESSABLE_ENTITY
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        (status, Json(json!({ "error": e.to_string() })))
    })?;

    tracing::info!(
        "estimate make={} year={} price={:.0}",
        selection.make,
        selection.year,
        price
    );

    let now_ms = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_millis() as i64;
    Ok(Json(Out { t: now_ms, price }))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let model_path =
        std::env::var("MODEL_PATH").unwrap_or_else(|_| "model/price_model.json".to_string());
    let port: u16 = std::env::var("PORT").ok().and_then(|s| s.parse().ok()).unwrap_or(8080);

    // Refuse to become ready without a model; there is no degraded mode.
    let (mdl, schema) = LinearModel::load(Path::new(&model_path))?;
    tracing::info!("loaded model; schema[{}]: {:?}", schema.len(), schema.slot_names());

    // Warmup forward on the all-zero baseline vector
    let baseline = mdl.predict(&vec![0.0; schema.len()])?;
    tracing::info!("warmup forward ok; zero-vector baseline {:.2}", baseline);

    let est = PriceEstimator::new(Arc::new(mdl), schema);
    let state = AppState { est: Arc::new(est) };

    let app = axum::Router::new()
        .route("/catalog", get(catalog))
        .route("/estimate", post(estimate))
        .with_state(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
