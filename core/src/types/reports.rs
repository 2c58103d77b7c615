use serde::{Deserialize, Serialize};

/// One fiscal-period report.
///
/// Upstream names these fields `snake_With_Capitals`, so every field is
/// renamed explicitly. Amounts are in millions of the report currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub year: i64,
    pub period: i64,
    pub revenues: Option<f64>,
    #[serde(rename = "gross_Income")]
    pub gross_income: Option<f64>,
    #[serde(rename = "operating_Income")]
    pub operating_income: f64,
    #[serde(rename = "profit_Before_Tax")]
    pub profit_before_tax: f64,
    #[serde(rename = "profit_To_Equity_Holders")]
    pub profit_to_equity_holders: Option<f64>,
    #[serde(rename = "earnings_Per_Share")]
    pub earnings_per_share: f64,
    #[serde(rename = "number_Of_Shares")]
    pub number_of_shares: f64,
    pub dividend: f64,
    #[serde(rename = "intangible_Assets")]
    pub intangible_assets: Option<f64>,
    #[serde(rename = "tangible_Assets")]
    pub tangible_assets: Option<f64>,
    #[serde(rename = "financial_Assets")]
    pub financial_assets: Option<f64>,
    #[serde(rename = "non_Current_Assets")]
    pub non_current_assets: f64,
    #[serde(rename = "cash_And_Equivalents")]
    pub cash_and_equivalents: Option<f64>,
    #[serde(rename = "current_Assets")]
    pub current_assets: f64,
    #[serde(rename = "total_Assets")]
    pub total_assets: f64,
    #[serde(rename = "total_Equity")]
    pub total_equity: f64,
    #[serde(rename = "non_Current_Liabilities")]
    pub non_current_liabilities: Option<f64>,
    #[serde(rename = "current_Liabilities")]
    pub current_liabilities: Option<f64>,
    #[serde(rename = "total_Liabilities_And_Equity")]
    pub total_liabilities_and_equity: f64,
    #[serde(rename = "net_Debt")]
    pub net_debt: Option<f64>,
    #[serde(rename = "cash_Flow_From_Operating_Activities")]
    pub cash_flow_from_operating_activities: Option<f64>,
    #[serde(rename = "cash_Flow_From_Investing_Activities")]
    pub cash_flow_from_investing_activities: Option<f64>,
    #[serde(rename = "cash_Flow_From_Financing_Activities")]
    pub cash_flow_from_financing_activities: Option<f64>,
    #[serde(rename = "cash_Flow_For_The_Year")]
    pub cash_flow_for_the_year: Option<f64>,
    #[serde(rename = "free_Cash_Flow")]
    pub free_cash_flow: Option<f64>,
    #[serde(rename = "stock_Price_Average")]
    pub stock_price_average: f64,
    #[serde(rename = "stock_Price_High")]
    pub stock_price_high: f64,
    #[serde(rename = "stock_Price_Low")]
    pub stock_price_low: f64,
    #[serde(rename = "report_Start_Date")]
    pub report_start_date: Option<String>,
    #[serde(rename = "report_End_Date")]
    pub report_end_date: Option<String>,
    #[serde(rename = "broken_Fiscal_Year")]
    pub broken_fiscal_year: Option<bool>,
    pub currency: Option<String>,
    #[serde(rename = "currency_Ratio")]
    pub currency_ratio: Option<f64>,
    #[serde(rename = "net_Sales")]
    pub net_sales: Option<f64>,
    #[serde(rename = "report_Date")]
    pub report_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportsResponse {
    pub instrument: i64,
    pub reports: Option<Vec<Report>>,
}

/// All three report granularities for one instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportsCompoundResponse {
    pub instrument: i64,
    pub reports_year: Option<Vec<Report>>,
    pub reports_quarter: Option<Vec<Report>>,
    pub reports_r12: Option<Vec<Report>>,
}

/// One instrument's entry in a batch report response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportsCombine {
    pub instrument: i64,
    pub error: Option<String>,
    pub reports_year: Option<Vec<Report>>,
    pub reports_quarter: Option<Vec<Report>>,
    pub reports_r12: Option<Vec<Report>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportsArrayResponse {
    pub report_list: Option<Vec<ReportsCombine>>,
}

/// Display metadata for one report field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    // Upstream spelling.
    #[serde(rename = "reportPropery")]
    pub report_property: Option<String>,
    pub name_sv: Option<String>,
    pub name_en: Option<String>,
    pub format: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadataResponse {
    pub report_metadatas: Option<Vec<ReportMetadata>>,
}
