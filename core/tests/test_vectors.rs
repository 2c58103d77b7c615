//! Replay the JSON test vectors in `test-vectors/` through the typed client.
//!
//! Each case names an endpoint, its inputs, the request the client must
//! produce, and a simulated response. A replaying transport stands in for
//! the network, so both request rendering and response decoding are checked
//! without a server. Decoded records are re-encoded and compared with the
//! simulated body as JSON values, so a field lost to a wrong rename shows up
//! and field ordering does not matter.

use std::cell::RefCell;
use std::fmt::Debug;

use borsdata_core::{
    ApiError, BorsdataClient, Calc, CalcGroup, ClientConfig, DateRange, HttpRequest, HttpResponse,
    PriceType, ReportType, Transport,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

const BASE_URL: &str = "http://localhost:3000";

const VECTOR_FILES: &[(&str, &str)] = &[
    ("instrument_meta", include_str!("../../test-vectors/instrument_meta.json")),
    ("reports", include_str!("../../test-vectors/reports.json")),
    ("stock_prices", include_str!("../../test-vectors/stock_prices.json")),
    ("kpis", include_str!("../../test-vectors/kpis.json")),
    ("holdings", include_str!("../../test-vectors/holdings.json")),
];

/// Answers every request with the same response and keeps what it was sent.
struct Replay {
    response: HttpResponse,
    seen: RefCell<Vec<HttpRequest>>,
}

impl Replay {
    fn new(status: u16, body: String) -> Self {
        Self {
            response: HttpResponse {
                status,
                headers: Vec::new(),
                body,
            },
            seen: RefCell::new(Vec::new()),
        }
    }
}

impl Transport for Replay {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        self.seen.borrow_mut().push(request.clone());
        Ok(self.response.clone())
    }
}

fn client(transport: &Replay) -> BorsdataClient<&Replay> {
    BorsdataClient::with_transport(ClientConfig::new("K1").with_base_url(BASE_URL), transport)
}

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

fn text<'a>(input: &'a Value, key: &str) -> &'a str {
    input[key].as_str().unwrap_or_else(|| panic!("input.{key} missing"))
}

fn number(input: &Value, key: &str) -> u32 {
    input[key].as_u64().unwrap_or_else(|| panic!("input.{key} missing")) as u32
}

fn report_type(input: &Value) -> ReportType {
    text(input, "report_type").parse().unwrap()
}

fn price_type(input: &Value) -> PriceType {
    text(input, "price_type").parse().unwrap()
}

fn calc_group(input: &Value) -> CalcGroup {
    text(input, "calc_group").parse().unwrap()
}

fn calc(input: &Value) -> Calc {
    text(input, "calc").parse().unwrap()
}

fn range(input: &Value) -> DateRange {
    let mut range = DateRange::new();
    if let Some(from) = input["from"].as_str() {
        range = range.from(from);
    }
    if let Some(to) = input["to"].as_str() {
        range = range.to(to);
    }
    range
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Drop `null` members so an absent optional field and a `None` compare equal.
fn strip_nulls(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k, strip_nulls(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(strip_nulls).collect()),
        other => other,
    }
}

/// Check every field of the simulated body is reproduced by the decoded
/// record under its upstream name, then that the record survives a
/// serialize/decode cycle.
fn compare<R>(name: &str, result: Result<R, ApiError>, body: &Value) -> Result<(), ApiError>
where
    R: Serialize + DeserializeOwned + PartialEq + Debug,
{
    let decoded = result?;
    let encoded = strip_nulls(serde_json::to_value(&decoded).unwrap());
    assert_eq!(encoded, strip_nulls(body.clone()), "{name}: decoded fields");

    let again: R = serde_json::from_value(serde_json::to_value(&decoded).unwrap()).unwrap();
    assert_eq!(again, decoded, "{name}: re-decoded record");
    Ok(())
}

fn dispatch(
    c: &BorsdataClient<&Replay>,
    name: &str,
    endpoint: &str,
    input: &Value,
    body: &Value,
) -> Result<(), ApiError> {
    match endpoint {
        "markets" => compare(name, c.markets(), body),
        "sectors" => compare(name, c.sectors(), body),
        "branches" => compare(name, c.branches(), body),
        "countries" => compare(name, c.countries(), body),
        "translation_metadata" => compare(name, c.translation_metadata(text(input, "auth_key")), body),
        "instruments" => compare(name, c.instruments(), body),
        "instruments_global" => compare(name, c.instruments_global(text(input, "auth_key")), body),

        "reports" => compare(name, c.reports(number(input, "id"), report_type(input)), body),
        "reports_compound" => compare(name, c.reports_compound(number(input, "id")), body),
        "reports_metadata" => compare(name, c.reports_metadata(), body),
        "reports_array" => {
            let rt = input["report_type"].as_str().map(|s| s.parse::<ReportType>().unwrap());
            compare(
                name,
                c.reports_array(text(input, "inst_list"), text(input, "auth_key"), rt, &range(input)),
                body,
            )
        }

        "stock_prices" => compare(name, c.stock_prices(number(input, "id"), &range(input)), body),
        "stock_prices_last" => compare(name, c.stock_prices_last(text(input, "auth_key")), body),
        "stock_prices_global_last" => compare(name, c.stock_prices_global_last(text(input, "auth_key")), body),
        "stock_prices_date" => compare(
            name,
            c.stock_prices_date(text(input, "auth_key"), text(input, "date")),
            body,
        ),
        "stock_prices_global_date" => compare(
            name,
            c.stock_prices_global_date(text(input, "auth_key"), text(input, "date")),
            body,
        ),
        "stock_prices_array" => compare(
            name,
            c.stock_prices_array(text(input, "inst_list"), text(input, "auth_key"), &range(input)),
            body,
        ),
        "stock_splits" => compare(
            name,
            c.stock_splits(text(input, "auth_key"), input["from"].as_str()),
            body,
        ),

        "kpi_history" => compare(
            name,
            c.kpi_history(number(input, "id"), number(input, "kpi_id"), report_type(input), price_type(input)),
            body,
        ),
        "kpi_summary" => compare(name, c.kpi_summary(number(input, "id"), report_type(input)), body),
        "kpi_history_all" => compare(
            name,
            c.kpi_history_all(number(input, "kpi_id"), report_type(input), price_type(input)),
            body,
        ),
        "kpi_calc" => compare(
            name,
            c.kpi_calc(number(input, "id"), number(input, "kpi_id"), calc_group(input), calc(input)),
            body,
        ),
        "kpi_calc_all" => compare(
            name,
            c.kpi_calc_all(number(input, "kpi_id"), calc_group(input), calc(input)),
            body,
        ),
        "kpi_calc_global" => compare(
            name,
            c.kpi_calc_global(number(input, "kpi_id"), calc_group(input), calc(input)),
            body,
        ),
        "kpis_updated" => compare(name, c.kpis_updated(), body),
        "kpis_metadata" => compare(name, c.kpis_metadata(), body),

        "report_calendar" => compare(
            name,
            c.report_calendar(text(input, "inst_list"), text(input, "auth_key")),
            body,
        ),
        "dividend_calendar" => compare(
            name,
            c.dividend_calendar(text(input, "inst_list"), text(input, "auth_key")),
            body,
        ),
        "descriptions" => compare(
            name,
            c.descriptions(text(input, "inst_list"), text(input, "auth_key")),
            body,
        ),
        "insider_holdings" => compare(
            name,
            c.insider_holdings(text(input, "inst_list"), text(input, "auth_key")),
            body,
        ),
        "short_positions" => compare(name, c.short_positions(text(input, "auth_key")), body),
        "buybacks" => compare(name, c.buybacks(text(input, "inst_list"), text(input, "auth_key")), body),

        other => panic!("{name}: unknown endpoint {other}"),
    }
}

fn expected_query(expected: &Value) -> Vec<(String, String)> {
    expected["query"]
        .as_array()
        .unwrap()
        .iter()
        .map(|pair| {
            let pair = pair.as_array().unwrap();
            (pair[0].as_str().unwrap().to_string(), pair[1].as_str().unwrap().to_string())
        })
        .collect()
}

fn run_file(file: &str, raw: &str) -> usize {
    let vectors: Value = serde_json::from_str(raw).unwrap();
    let cases = vectors["cases"].as_array().unwrap();

    for case in cases {
        let name = format!("{file}/{}", case["name"].as_str().unwrap());
        let endpoint = case["endpoint"].as_str().unwrap();
        let sim = &case["simulated_response"];
        let body = &sim["body"];

        let transport = Replay::new(sim["status"].as_u64().unwrap() as u16, body.to_string());
        let c = client(&transport);
        let outcome = dispatch(&c, &name, endpoint, &case["input"], body);

        // Verify the request
        let seen = transport.seen.borrow();
        assert_eq!(seen.len(), 1, "{name}: exactly one request");
        let expected_req = &case["expected_request"];
        assert_eq!(
            seen[0].url,
            format!("{BASE_URL}{}", expected_req["path"].as_str().unwrap()),
            "{name}: url"
        );
        assert_eq!(seen[0].query, expected_query(expected_req), "{name}: query");
        assert_eq!(seen[0].header("authorization"), Some("Bearer K1"), "{name}: bearer");

        // Verify the outcome
        match case["expected_error"].as_str() {
            None => {
                if let Err(err) = outcome {
                    panic!("{name}: unexpected error {err}");
                }
            }
            Some("HttpError") => {
                let err = outcome.unwrap_err();
                assert!(
                    matches!(err, ApiError::HttpError { status, .. } if u64::from(status) == sim["status"].as_u64().unwrap()),
                    "{name}: got {err:?}"
                );
            }
            Some("DeserializationError") => {
                let err = outcome.unwrap_err();
                assert!(err.is_decode(), "{name}: got {err:?}");
            }
            Some(other) => panic!("{name}: unknown expected_error {other}"),
        }
    }
    cases.len()
}

#[test]
fn all_test_vectors() {
    let mut total = 0;
    for (file, raw) in VECTOR_FILES {
        total += run_file(file, raw);
    }
    assert!(total > 0);
}

#[test]
fn every_endpoint_has_a_vector() {
    let mut covered = std::collections::HashSet::new();
    for (_, raw) in VECTOR_FILES {
        let vectors: Value = serde_json::from_str(raw).unwrap();
        for case in vectors["cases"].as_array().unwrap() {
            covered.insert(case["endpoint"].as_str().unwrap().to_string());
        }
    }
    for endpoint in borsdata_core::catalog::ENDPOINTS {
        assert!(covered.contains(endpoint.name), "no vector for {}", endpoint.name);
    }
}

// ---------------------------------------------------------------------------
// Scenarios outside the vector files
// ---------------------------------------------------------------------------

#[test]
fn unknown_calc_fails_before_any_request() {
    let transport = Replay::new(200, "{}".to_string());
    let c = client(&transport);

    let result = "bogus"
        .parse::<Calc>()
        .and_then(|calc| c.kpi_calc(1, 1, CalcGroup::Last, calc));
    let err = result.unwrap_err();
    assert!(matches!(err, ApiError::InvalidParameter { name: "calc", .. }), "got {err:?}");
    assert!(err.to_string().contains("bogus"));
    assert!(transport.seen.borrow().is_empty());
}

#[test]
fn http_error_keeps_problem_details() {
    let body = r#"{"type":"about:blank","title":"Unauthorized","status":401,"detail":"bad key"}"#;
    let transport = Replay::new(401, body.to_string());
    let err = client(&transport).markets().unwrap_err();

    assert_eq!(err.status(), Some(401));
    let problem = err.problem_details().unwrap();
    assert_eq!(problem.title.as_deref(), Some("Unauthorized"));
    assert_eq!(problem.detail.as_deref(), Some("bad key"));
}

#[test]
fn empty_required_date_is_rejected_locally() {
    let transport = Replay::new(200, "{}".to_string());
    let err = client(&transport).stock_prices_date("K1", "").unwrap_err();

    assert!(matches!(err, ApiError::InvalidRequest { endpoint: "stock_prices_date", .. }), "got {err:?}");
    assert!(transport.seen.borrow().is_empty());
}

#[test]
#[should_panic(expected = "decoded fields")]
fn field_with_unknown_name_is_reported() {
    // `country` is not a market field, so decoding drops it silently.
    let body = serde_json::json!({"markets": [{"id": 1, "name": "Large Cap", "country": 1}]});
    let transport = Replay::new(200, body.to_string());
    let c = client(&transport);
    compare("markets", c.markets(), &body).unwrap();
}
