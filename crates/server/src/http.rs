//! HTTP Endpoints
//!
//! REST API over the chat, advisory, market, and value-chain services.
//! Domain-level failures (unknown crop, undecodable image) come back as
//! structured JSON bodies; HTTP error codes are reserved for transport and
//! upstream faults.

use axum::{
    extract::{Json, Query, State},
    http::{HeaderValue, Method, StatusCode},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use agri_advisor_advisory::AdvisoryOutcome;
use agri_advisor_core::{Entities, Language, SoilSnapshot, UserProfile};
use agri_advisor_market::{FarmerIdentity, ListingFilter, MarketError};
use agri_advisor_nlp::ChatContext;

use crate::state::AppState;
use crate::vision::decode_image;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let config = state.config.read();
    let cors_layer = build_cors_layer(&config.server.cors_origins, config.server.cors_enabled);
    let timeout = Duration::from_secs(config.server.request_timeout_secs);
    drop(config);

    Router::new()
        // Chat
        .route("/api/chat", post(chat))
        // Agronomic advisory
        .route("/api/advisory/recommendations", get(crop_recommendations))
        .route("/api/advisory/crop", get(crop_advisory))
        // Weather
        .route("/api/weather/current", get(current_weather))
        // Market data
        .route("/api/market/prices", get(market_prices))
        .route("/api/market/forecast", get(market_forecast))
        .route("/api/market/comparison", get(market_comparison))
        // Value chain
        .route("/api/value-chain/buyers", get(buyers))
        .route("/api/value-chain/suppliers", get(suppliers))
        .route("/api/value-chain/logistics", get(logistics))
        .route(
            "/api/value-chain/listings",
            get(market_listings).post(create_listing),
        )
        .route("/api/value-chain/connect", post(connect_with_buyer))
        .route(
            "/api/value-chain/group-procurement",
            get(group_procurements).post(create_group),
        )
        .route("/api/value-chain/join-group", post(join_group))
        // Health
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        // Admin
        .route("/admin/reload-config", post(reload_config))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(timeout))
        .layer(cors_layer)
        .with_state(state)
}

/// Build CORS layer from configured origins
///
/// - cors_enabled false: permissive layer (development only)
/// - no valid origins configured: localhost:3000 for safety
fn build_cors_layer(origins: &[String], enabled: bool) -> CorsLayer {
    if !enabled {
        tracing::warn!("CORS is disabled - allowing all origins (NOT FOR PRODUCTION)");
        return CorsLayer::permissive();
    }

    let parsed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| {
            let parsed = origin.parse::<HeaderValue>().ok();
            if parsed.is_none() {
                tracing::warn!("Invalid CORS origin: {}", origin);
            }
            parsed
        })
        .collect();

    if parsed_origins.is_empty() {
        tracing::info!("No valid CORS origins configured, defaulting to localhost:3000");
        let localhost = HeaderValue::from_static("http://localhost:3000");
        return CorsLayer::new()
            .allow_origin(localhost)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any);
    }

    tracing::info!("CORS configured with {} origins", parsed_origins.len());
    CorsLayer::new()
        .allow_origin(parsed_origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .allow_credentials(true)
}

fn internal_error(err: MarketError) -> (StatusCode, Json<serde_json::Value>) {
    tracing::error!(error = %err, "Upstream provider failed");
    (
        StatusCode::BAD_GATEWAY,
        Json(serde_json::json!({ "error": "Upstream provider failed" })),
    )
}

// ---------- Chat ----------

#[derive(Debug, Deserialize)]
struct ChatRequest {
    message: String,
    #[serde(default)]
    language: Option<String>,
    /// Optional base64 data URL of a crop image
    #[serde(default)]
    image: Option<String>,
    /// Caller's stored location, when known
    #[serde(default)]
    location: Option<String>,
}

#[derive(Debug, Serialize)]
struct ChatResponse {
    response: String,
    intent: Option<&'static str>,
    entities: Entities,
    language: &'static str,
}

/// Chat endpoint: classify, extract, gather context, compose
async fn chat(State(state): State<AppState>, Json(request): Json<ChatRequest>) -> Json<ChatResponse> {
    let language = Language::from_code(request.language.as_deref().unwrap_or("en"));
    let processed = state.chat.process(&request.message, language);

    let mut context = ChatContext {
        profile: UserProfile {
            location: request.location.clone(),
            language,
            ..UserProfile::default()
        },
        ..ChatContext::default()
    };

    // An attached image overrides the text path entirely. Decode or analyze
    // failures surface as the fixed client message, never as an HTTP fault.
    if let Some(image) = &request.image {
        match analyze_image(&state, image).await {
            Ok(analysis) => context.image_analysis = Some(analysis),
            Err(err) => {
                tracing::warn!(error = %err, "Chat image could not be processed");
                return Json(ChatResponse {
                    response: err.client_message(),
                    intent: processed.intent.map(|i| i.as_str()),
                    entities: processed.entities,
                    language: language.code(),
                });
            }
        }
    } else {
        fill_intent_context(&state, &processed, &mut context).await;
    }

    let response = state.chat.respond(&processed, &context);
    Json(ChatResponse {
        response,
        intent: processed.intent.map(|i| i.as_str()),
        entities: processed.entities,
        language: language.code(),
    })
}

async fn analyze_image(
    state: &AppState,
    image: &str,
) -> agri_advisor_core::Result<agri_advisor_core::ImageAnalysis> {
    let bytes = decode_image(image)?;
    state.analyzer.analyze(&bytes).await
}

/// Fetch the collaborator data the detected intent needs
async fn fill_intent_context(
    state: &AppState,
    processed: &agri_advisor_nlp::ProcessedMessage,
    context: &mut ChatContext,
) {
    use agri_advisor_core::Intent;

    let Some(intent) = processed.intent else {
        return;
    };

    match intent {
        Intent::Fertilizer => {
            context.fertilizer_recommendation =
                Some(state.advisory.fertilizer_recommendation(processed.entities.crop()));
        }
        Intent::Pest => {
            if let Some(pest) = processed.entities.pest() {
                context.pest_treatment = Some(state.advisory.pest_treatment(pest));
            }
        }
        Intent::Weather => {
            let location = context.profile.location_or_default().to_string();
            match state.weather.current(&location, processed.language).await {
                Ok(snapshot) => context.weather = Some(snapshot),
                Err(err) => {
                    // Composer falls back to its documented defaults.
                    tracing::warn!(error = %err, "Weather provider failed");
                }
            }
        }
        Intent::Market => {
            if let Some(crop) = processed.entities.crop() {
                match state.market.prices(crop, "Delhi", None).await {
                    Ok(data) => {
                        context.market = Some(agri_advisor_core::MarketSnapshot {
                            crop: data.crop,
                            mandi: data.market,
                            price: data.current_price,
                            unit: data.unit,
                        });
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "Market provider failed");
                    }
                }
            }
        }
        Intent::Soil => {
            // Soil sensors are a future integration; serve reference levels.
            context.soil = Some(SoilSnapshot {
                nitrogen: "medium".to_string(),
                phosphorus: "low".to_string(),
                potassium: "high".to_string(),
                ph: 6.8,
            });
        }
    }
}

// ---------- Advisory ----------

#[derive(Debug, Deserialize)]
struct RecommendationQuery {
    location: Option<String>,
    soil_type: Option<String>,
}

async fn crop_recommendations(
    State(state): State<AppState>,
    Query(query): Query<RecommendationQuery>,
) -> Json<serde_json::Value> {
    let report = state
        .advisory
        .recommendations(query.location.as_deref(), query.soil_type.as_deref());
    Json(serde_json::json!(report))
}

#[derive(Debug, Deserialize)]
struct AdvisoryQuery {
    #[serde(default = "default_advisory_crop")]
    crop: String,
}

fn default_advisory_crop() -> String {
    "rice".to_string()
}

async fn crop_advisory(
    State(state): State<AppState>,
    Query(query): Query<AdvisoryQuery>,
) -> (StatusCode, Json<serde_json::Value>) {
    let outcome = state.advisory.crop_advisory(&query.crop);
    let status = match &outcome {
        AdvisoryOutcome::CropNotFound { .. } => StatusCode::NOT_FOUND,
        _ => StatusCode::OK,
    };
    (status, Json(serde_json::json!(outcome)))
}

// ---------- Weather ----------

#[derive(Debug, Deserialize)]
struct WeatherQuery {
    #[serde(default = "default_location")]
    location: String,
    #[serde(default)]
    language: Option<String>,
}

fn default_location() -> String {
    "Delhi".to_string()
}

async fn current_weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    let language = Language::from_code(query.language.as_deref().unwrap_or("en"));
    match state.weather.current(&query.location, language).await {
        Ok(snapshot) => Ok(Json(serde_json::json!(snapshot))),
        Err(err) => {
            tracing::error!(error = %err, "Weather provider failed");
            Err((
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({ "error": "Weather provider failed" })),
            ))
        }
    }
}

// ---------- Market ----------

#[derive(Debug, Deserialize)]
struct MarketQuery {
    #[serde(default = "default_market_crop")]
    crop: String,
    #[serde(default = "default_market_state")]
    state: String,
    #[serde(default)]
    district: Option<String>,
    /// Forecast horizon in months
    #[serde(default = "default_forecast_months")]
    months: usize,
}

fn default_market_crop() -> String {
    "wheat".to_string()
}

fn default_market_state() -> String {
    "Delhi".to_string()
}

fn default_forecast_months() -> usize {
    12
}

async fn market_prices(
    State(state): State<AppState>,
    Query(query): Query<MarketQuery>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    state
        .market
        .prices(&query.crop, &query.state, query.district.as_deref())
        .await
        .map(|data| Json(serde_json::json!(data)))
        .map_err(internal_error)
}

async fn market_forecast(Query(query): Query<MarketQuery>) -> Json<serde_json::Value> {
    let forecast =
        agri_advisor_market::forecast::price_forecast(&query.crop, &query.state, query.months);
    Json(serde_json::json!(forecast))
}

async fn market_comparison(Query(query): Query<MarketQuery>) -> Json<serde_json::Value> {
    let comparison =
        agri_advisor_market::comparison::market_comparison(&query.crop, &query.state);
    Json(serde_json::json!(comparison))
}

// ---------- Value chain ----------

/// Demo identity standing in for an authenticated session
fn demo_farmer() -> FarmerIdentity {
    FarmerIdentity {
        id: 1,
        name: "Demo Farmer".to_string(),
    }
}

#[derive(Debug, Deserialize)]
struct DirectoryQuery {
    #[serde(default = "default_market_crop")]
    crop: String,
    #[serde(default = "default_market_state")]
    state: String,
    #[serde(default)]
    district: Option<String>,
}

async fn buyers(
    State(state): State<AppState>,
    Query(query): Query<DirectoryQuery>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    state
        .value_chain
        .buyers(&query.crop, &query.state, query.district.as_deref())
        .await
        .map(|buyers| Json(serde_json::json!({ "buyers": buyers })))
        .map_err(internal_error)
}

async fn suppliers(
    State(state): State<AppState>,
    Query(query): Query<DirectoryQuery>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    state
        .value_chain
        .input_suppliers(&query.crop, &query.state, query.district.as_deref())
        .await
        .map(|suppliers| Json(serde_json::json!({ "suppliers": suppliers })))
        .map_err(internal_error)
}

async fn logistics(
    State(state): State<AppState>,
    Query(query): Query<DirectoryQuery>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    state
        .value_chain
        .logistics_providers(&query.state, query.district.as_deref())
        .await
        .map(|providers| Json(serde_json::json!({ "providers": providers })))
        .map_err(internal_error)
}

async fn market_listings(
    State(state): State<AppState>,
    Query(filter): Query<ListingFilter>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    state
        .value_chain
        .market_listings(&filter)
        .await
        .map(|listings| Json(serde_json::json!({ "listings": listings })))
        .map_err(internal_error)
}

#[derive(Debug, Deserialize)]
struct CreateListingRequest {
    crop: String,
    quantity: f64,
    price: f64,
}

async fn create_listing(
    State(state): State<AppState>,
    Json(request): Json<CreateListingRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), (StatusCode, Json<serde_json::Value>)> {
    state
        .value_chain
        .create_market_listing(&demo_farmer(), &request.crop, request.quantity, request.price)
        .await
        .map(|listing| (StatusCode::CREATED, Json(serde_json::json!(listing))))
        .map_err(internal_error)
}

#[derive(Debug, Deserialize)]
struct ConnectRequest {
    listing_id: String,
    buyer_id: String,
}

async fn connect_with_buyer(
    State(state): State<AppState>,
    Json(request): Json<ConnectRequest>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    state
        .value_chain
        .connect_with_buyer(&request.listing_id, &request.buyer_id, &demo_farmer())
        .await
        .map(|connection| Json(serde_json::json!(connection)))
        .map_err(internal_error)
}

async fn group_procurements(
    State(state): State<AppState>,
    Query(filter): Query<ListingFilter>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    state
        .value_chain
        .group_procurements(&filter)
        .await
        .map(|groups| Json(serde_json::json!({ "groups": groups })))
        .map_err(internal_error)
}

#[derive(Debug, Deserialize)]
struct CreateGroupRequest {
    crop: String,
    quantity: f64,
}

async fn create_group(
    State(state): State<AppState>,
    Json(request): Json<CreateGroupRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), (StatusCode, Json<serde_json::Value>)> {
    state
        .value_chain
        .create_group_procurement(&demo_farmer(), &request.crop, request.quantity)
        .await
        .map(|group| (StatusCode::CREATED, Json(serde_json::json!(group))))
        .map_err(internal_error)
}

#[derive(Debug, Deserialize)]
struct JoinGroupRequest {
    group_id: String,
}

async fn join_group(
    State(state): State<AppState>,
    Json(request): Json<JoinGroupRequest>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    state
        .value_chain
        .join_group_procurement(&request.group_id, &demo_farmer())
        .await
        .map(|receipt| Json(serde_json::json!(receipt)))
        .map_err(internal_error)
}

// ---------- Health ----------

async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    let mut checks = serde_json::Map::new();
    let mut all_healthy = true;

    let crop_count = state.tables.crops.len();
    checks.insert(
        "domain_tables".to_string(),
        serde_json::json!({
            "status": if crop_count > 0 { "ok" } else { "empty" },
            "crops": crop_count,
        }),
    );
    if crop_count == 0 {
        all_healthy = false;
    }

    let threshold = state.get_config().chat.image_confidence_threshold;
    let threshold_ok = (0.0..=1.0).contains(&threshold);
    checks.insert(
        "chat".to_string(),
        serde_json::json!({
            "status": if threshold_ok { "ok" } else { "misconfigured" },
            "image_confidence_threshold": threshold,
        }),
    );
    if !threshold_ok {
        all_healthy = false;
    }

    let status_code = if all_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (
        status_code,
        Json(serde_json::json!({
            "status": if all_healthy { "healthy" } else { "degraded" },
            "version": env!("CARGO_PKG_VERSION"),
            "checks": checks,
        })),
    )
}

async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    // Providers are in-process, so readiness is a weather round-trip.
    let weather_ok = state
        .weather
        .current("Delhi", Language::English)
        .await
        .is_ok();

    let status_code = if weather_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (
        status_code,
        Json(serde_json::json!({
            "status": if weather_ok { "ready" } else { "not_ready" },
            "checks": {
                "weather_provider": if weather_ok { "ok" } else { "unreachable" },
            },
        })),
    )
}

// ---------- Admin ----------

async fn reload_config(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    match state.reload_config() {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({ "status": "reloaded" })),
        ),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": err })),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agri_advisor_config::{DomainTables, Settings};
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_router() -> Router {
        let state = AppState::new(Settings::default(), DomainTables::builtin().into_shared());
        create_router(state)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_chat_fertilizer_flow() {
        let router = test_router();
        let request = Request::builder()
            .method("POST")
            .uri("/api/chat")
            .header("content-type", "application/json")
            .body(Body::from(
                serde_json::json!({
                    "message": "What fertilizer should I use for wheat?",
                    "language": "en",
                })
                .to_string(),
            ))
            .unwrap();

        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["intent"], "fertilizer");
        assert_eq!(json["entities"]["crop"], "wheat");
        assert!(json["response"].as_str().unwrap().contains("wheat"));
    }

    #[tokio::test]
    async fn test_chat_bad_image_returns_fixed_error_text() {
        let router = test_router();
        let request = Request::builder()
            .method("POST")
            .uri("/api/chat")
            .header("content-type", "application/json")
            .body(Body::from(
                serde_json::json!({
                    "message": "what is wrong with my crop",
                    "language": "en",
                    "image": "data:image/png;base64,@@not-base64@@",
                })
                .to_string(),
            ))
            .unwrap();

        let response = router.oneshot(request).await.unwrap();
        // Malformed images are data, not transport failures.
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["response"], "Image processing failed");
    }

    #[tokio::test]
    async fn test_advisory_unknown_crop_is_404() {
        let router = test_router();
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/advisory/crop?crop=quinoa")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Crop not found");
    }

    #[tokio::test]
    async fn test_recommendations_shape() {
        let router = test_router();
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/advisory/recommendations?location=punjab&soil_type=alluvial")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["region"], "Punjab");
        assert!(json["recommended_crops"].as_array().unwrap().len() <= 5);
    }

    #[tokio::test]
    async fn test_market_prices_and_buyers() {
        let router = test_router();
        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/market/prices?crop=wheat&state=Delhi")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["crop"], "wheat");
        assert_eq!(json["trend"], "up");

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/value-chain/buyers?crop=cotton")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let json = body_json(response).await;
        let buyers = json["buyers"].as_array().unwrap();
        assert_eq!(buyers.len(), 1);
        assert_eq!(buyers[0]["name"], "Agri Exports Ltd");
    }

    #[tokio::test]
    async fn test_health() {
        let router = test_router();
        let response = router
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "healthy");
    }
}
