//! In-process mock of the Borsdata API.
//!
//! Serves the first successful response recorded for each endpoint in
//! `test-vectors/`, enforces bearer and `authKey` authentication, checks
//! required query parameters and literal path segments, and records every
//! request it accepts so tests can assert on the exact path and query.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub const DEFAULT_API_KEY: &str = "test-key";

const VECTORS: &[&str] = &[
    include_str!("../../test-vectors/instrument_meta.json"),
    include_str!("../../test-vectors/reports.json"),
    include_str!("../../test-vectors/stock_prices.json"),
    include_str!("../../test-vectors/kpis.json"),
    include_str!("../../test-vectors/holdings.json"),
];

const REPORT_TYPES: &[&str] = &["year", "r12", "quarter"];
const PRICE_TYPES: &[&str] = &["mean", "low", "high"];
const CALC_GROUPS: &[&str] = &["last", "1year", "3year", "7year", "10year", "15year"];
const CALCS: &[&str] = &[
    "high", "latest", "low", "mean", "sum", "cagr", "psh", "trend", "over", "under", "diff", "rank",
    "point", "default", "return", "stabil", "quarter", "pricehigh", "pricelow", "brank", "ShortSum",
    "ShortCountry", "ShortIndustry",
];

/// One mocked endpoint.
#[derive(Debug, Clone, Copy)]
pub struct MockRoute {
    pub name: &'static str,
    pub path: &'static str,
    pub auth_key: bool,
    pub required: &'static [&'static str],
}

const fn route(name: &'static str, path: &'static str) -> MockRoute {
    MockRoute { name, path, auth_key: false, required: &[] }
}

const fn keyed(name: &'static str, path: &'static str, required: &'static [&'static str]) -> MockRoute {
    MockRoute { name, path, auth_key: true, required }
}

pub const ROUTES: &[MockRoute] = &[
    route("markets", "/v1/markets"),
    route("sectors", "/v1/sectors"),
    route("branches", "/v1/branches"),
    route("countries", "/v1/countries"),
    keyed("translation_metadata", "/v1/translationmetadata", &[]),
    route("instruments", "/v1/instruments"),
    keyed("instruments_global", "/v1/instruments/global", &[]),
    route("reports", "/v1/instruments/{id}/reports/{reporttype}"),
    route("reports_compound", "/v1/instruments/{id}/reports"),
    route("reports_metadata", "/v1/instruments/reports/metadata"),
    keyed("reports_array", "/v1/instruments/reports", &["instList"]),
    route("stock_prices", "/v1/instruments/{id}/stockprices"),
    keyed("stock_prices_last", "/v1/instruments/stockprices/last", &[]),
    keyed("stock_prices_global_last", "/v1/instruments/stockprices/global/last", &[]),
    keyed("stock_prices_date", "/v1/instruments/stockprices/date", &["date"]),
    keyed("stock_prices_global_date", "/v1/instruments/stockprices/global/date", &["date"]),
    keyed("stock_prices_array", "/v1/instruments/stockprices", &["instList"]),
    keyed("stock_splits", "/v1/instruments/StockSplits", &[]),
    route("kpi_history", "/v1/instruments/{id}/kpis/{kpiId}/{reporttype}/{pricetype}/history"),
    route("kpi_summary", "/v1/instruments/{id}/kpis/{reporttype}/summary"),
    route("kpi_history_all", "/v1/instruments/kpis/{kpiId}/{reporttype}/{pricetype}/history"),
    route("kpi_calc", "/v1/instruments/{id}/kpis/{kpiId}/{calcGroup}/{calc}"),
    route("kpi_calc_all", "/v1/instruments/kpis/{kpiId}/{calcGroup}/{calc}"),
    route("kpi_calc_global", "/v1/instruments/global/kpis/{kpiId}/{calcGroup}/{calc}"),
    route("kpis_updated", "/v1/instruments/kpis/updated"),
    route("kpis_metadata", "/v1/instruments/kpis/metadata"),
    keyed("report_calendar", "/v1/instruments/report/calendar", &["instList"]),
    keyed("dividend_calendar", "/v1/instruments/dividend/calendar", &["instList"]),
    keyed("descriptions", "/v1/instruments/description", &["instList"]),
    keyed("insider_holdings", "/v1/holdings/insider", &["instList"]),
    keyed("short_positions", "/v1/holdings/shorts", &[]),
    keyed("buybacks", "/v1/holdings/buyback", &["instList"]),
];

/// A request the mock accepted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedRequest {
    pub endpoint: String,
    pub path: String,
    /// Raw query string as received.
    pub query: Option<String>,
}

pub type RequestLog = Arc<Mutex<Vec<RecordedRequest>>>;

/// Key, response overrides and the shared request log of a mock instance.
#[derive(Clone, Debug)]
pub struct MockConfig {
    api_key: String,
    overrides: HashMap<String, (StatusCode, Value)>,
    log: RequestLog,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_KEY)
    }
}

impl MockConfig {
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            overrides: HashMap::new(),
            log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Replace the response served for `endpoint`.
    pub fn with_response(mut self, endpoint: &str, status: StatusCode, body: Value) -> Self {
        self.overrides.insert(endpoint.to_string(), (status, body));
        self
    }

    /// Handle to the log of accepted requests.
    pub fn requests(&self) -> RequestLog {
        Arc::clone(&self.log)
    }
}

struct MockState {
    config: MockConfig,
    fixtures: HashMap<String, Value>,
}

pub fn app() -> Router {
    app_with(MockConfig::default())
}

pub fn app_with(config: MockConfig) -> Router {
    let state = Arc::new(MockState {
        config,
        fixtures: load_fixtures(),
    });

    let mut router = Router::new();
    for route in ROUTES {
        router = router.route(
            &router_path(route.path),
            get(
                move |State(state): State<Arc<MockState>>,
                      uri: Uri,
                      headers: HeaderMap,
                      Query(query): Query<HashMap<String, String>>| async move {
                    serve(&state, route, &uri, &headers, &query)
                },
            ),
        );
    }
    router
        .fallback(|| async { problem(StatusCode::NOT_FOUND, "Not Found", None) })
        .with_state(state)
}

pub async fn run_with(listener: TcpListener, config: MockConfig) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(config)).await
}

/// First successful response per endpoint across all vector files.
fn load_fixtures() -> HashMap<String, Value> {
    let mut fixtures = HashMap::new();
    for raw in VECTORS {
        let Ok(vectors) = serde_json::from_str::<Value>(raw) else {
            continue;
        };
        let Some(cases) = vectors["cases"].as_array() else {
            continue;
        };
        for case in cases {
            let (Some(endpoint), Some(200)) = (
                case["endpoint"].as_str(),
                case["simulated_response"]["status"].as_u64(),
            ) else {
                continue;
            };
            if case.get("expected_error").is_some() {
                continue;
            }
            fixtures
                .entry(endpoint.to_string())
                .or_insert_with(|| case["simulated_response"]["body"].clone());
        }
    }
    fixtures
}

fn serve(
    state: &MockState,
    route: &MockRoute,
    uri: &Uri,
    headers: &HeaderMap,
    query: &HashMap<String, String>,
) -> Response {
    let config = &state.config;

    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));
    if bearer != Some(config.api_key.as_str()) {
        return problem(StatusCode::UNAUTHORIZED, "Unauthorized", None);
    }
    if route.auth_key && query.get("authKey").map(String::as_str) != Some(config.api_key.as_str()) {
        return problem(StatusCode::UNAUTHORIZED, "Unauthorized", Some("authKey missing or invalid"));
    }
    for name in route.required {
        if query.get(*name).map_or(true, |v| v.is_empty()) {
            return problem(StatusCode::BAD_REQUEST, "Bad Request", Some(format!("{name} is required").as_str()));
        }
    }
    if let Err(detail) = check_segments(route.path, uri.path()) {
        return problem(StatusCode::BAD_REQUEST, "Bad Request", Some(detail.as_str()));
    }

    if let Ok(mut log) = config.log.lock() {
        log.push(RecordedRequest {
            endpoint: route.name.to_string(),
            path: uri.path().to_string(),
            query: uri.query().map(str::to_string),
        });
    }

    if let Some((status, body)) = config.overrides.get(route.name) {
        return (*status, Json(body.clone())).into_response();
    }
    match state.fixtures.get(route.name) {
        Some(body) => (StatusCode::OK, Json(body.clone())).into_response(),
        None => problem(StatusCode::INTERNAL_SERVER_ERROR, "No fixture", Some(route.name)),
    }
}

/// Rename placeholders after their segment index.
///
/// The router rejects differently named parameters at the same position,
/// and upstream reuses positions (`{kpiId}` vs `{reporttype}`).
fn router_path(template: &str) -> String {
    template
        .split('/')
        .enumerate()
        .map(|(i, seg)| {
            if seg.starts_with('{') {
                format!("{{p{i}}}")
            } else {
                seg.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Validate the values matched by `{placeholders}` in `template`.
fn check_segments(template: &str, path: &str) -> Result<(), String> {
    for (name, value) in template.split('/').zip(path.split('/')) {
        let Some(name) = name.strip_prefix('{').and_then(|n| n.strip_suffix('}')) else {
            continue;
        };
        let allowed = match name {
            "reporttype" => REPORT_TYPES,
            "pricetype" => PRICE_TYPES,
            "calcGroup" => CALC_GROUPS,
            "calc" => CALCS,
            _ => {
                if value.parse::<u32>().is_err() {
                    return Err(format!("{name} must be an integer, got {value}"));
                }
                continue;
            }
        };
        if !allowed.contains(&value) {
            return Err(format!("invalid {name}: {value}"));
        }
    }
    Ok(())
}

fn problem(status: StatusCode, title: &str, detail: Option<&str>) -> Response {
    let body = json!({
        "type": "about:blank",
        "title": title,
        "status": status.as_u16(),
        "detail": detail,
    });
    (status, Json(body)).into_response()
}
