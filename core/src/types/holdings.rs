use serde::{Deserialize, Serialize};

/// One insider transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsiderRow {
    pub misc: bool,
    pub owner_name: Option<String>,
    pub owner_position: Option<String>,
    pub equity_program: bool,
    pub shares: i64,
    pub price: f64,
    pub amount: f64,
    pub currency: Option<String>,
    pub transaction_type: i64,
    pub verification_date: String,
    pub transaction_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsiderHoldings {
    pub ins_id: i64,
    pub values: Option<Vec<InsiderRow>>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsiderHoldingsResponse {
    pub list: Option<Vec<InsiderHoldings>>,
}

/// Short interest for one instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortPosition {
    pub ins_id: i64,
    pub shorts_proc: Option<f64>,
    pub shorts_holders: Option<f64>,
    pub shorts_avg_proc: Option<f64>,
    pub shorts_milj: Option<f64>,
    pub shorts_avg_milj: Option<f64>,
    pub last_transaction_date: Option<String>,
    pub dtc_sum: Option<f64>,
    pub dtc_avg: Option<f64>,
    pub trend1w: Option<f64>,
    pub trend1m: Option<f64>,
    pub trend3m: Option<f64>,
    pub trend6m: Option<f64>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortsResponse {
    pub list: Option<Vec<ShortPosition>>,
}

/// One buyback transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuybackRow {
    pub change: i64,
    pub change_proc: f64,
    pub price: f64,
    pub currency: Option<String>,
    pub shares: i64,
    pub shares_proc: f64,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Buyback {
    pub ins_id: i64,
    pub values: Option<Vec<BuybackRow>>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuybacksResponse {
    pub list: Option<Vec<Buyback>>,
}
