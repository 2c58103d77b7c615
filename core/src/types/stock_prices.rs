//! Stock price records.
//!
//! Prices use single-letter keys upstream: `d` date, `o` open, `h` high,
//! `l` low, `c` close, `v` volume and, on market-wide snapshots, `i`
//! instrument id. Only the close is always present.

use serde::{Deserialize, Serialize};

/// One observation in a single-instrument price series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockPrice {
    #[serde(rename = "d")]
    pub date: Option<String>,
    #[serde(rename = "h")]
    pub high: Option<f64>,
    #[serde(rename = "l")]
    pub low: Option<f64>,
    #[serde(rename = "c")]
    pub close: f64,
    #[serde(rename = "o")]
    pub open: Option<f64>,
    #[serde(rename = "v")]
    pub volume: Option<i64>,
}

/// One instrument's price on a requested date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockPriceDate {
    #[serde(rename = "i")]
    pub instrument: i64,
    #[serde(rename = "d")]
    pub date: Option<String>,
    #[serde(rename = "h")]
    pub high: Option<f64>,
    #[serde(rename = "l")]
    pub low: Option<f64>,
    #[serde(rename = "c")]
    pub close: f64,
    #[serde(rename = "o")]
    pub open: Option<f64>,
    #[serde(rename = "v")]
    pub volume: Option<i64>,
}

/// One instrument's latest price.
///
/// Same fields as [`StockPriceDate`]; upstream declares it separately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockPriceFull {
    #[serde(rename = "i")]
    pub instrument: i64,
    #[serde(rename = "d")]
    pub date: Option<String>,
    #[serde(rename = "h")]
    pub high: Option<f64>,
    #[serde(rename = "l")]
    pub low: Option<f64>,
    #[serde(rename = "c")]
    pub close: f64,
    #[serde(rename = "o")]
    pub open: Option<f64>,
    #[serde(rename = "v")]
    pub volume: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockPricesResponse {
    pub instrument: i64,
    pub stock_prices_list: Option<Vec<StockPrice>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockPricesLastResponse {
    pub stock_prices_list: Option<Vec<StockPriceFull>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockPricesGlobalLastResponse {
    pub stock_prices_list: Option<Vec<StockPriceFull>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockPricesDateResponse {
    pub stock_prices_list: Option<Vec<StockPriceDate>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockPricesGlobalDateResponse {
    pub stock_prices_list: Option<Vec<StockPriceDate>>,
}

/// One instrument's entry in a batch price response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockPricesArrayItem {
    pub instrument: i64,
    pub error: Option<String>,
    pub stock_prices_list: Option<Vec<StockPrice>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockPricesArrayResponse {
    pub stock_prices_array_list: Option<Vec<StockPricesArrayItem>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockSplit {
    pub instrument_id: i64,
    pub split_type: Option<String>,
    /// Ratio as published, e.g. `"1:4"`.
    pub ratio: Option<String>,
    pub split_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockSplitsResponse {
    pub stock_split_list: Option<Vec<StockSplit>>,
}
