use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportCalendarDate {
    pub release_date: String,
    pub report_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyCalendar {
    pub ins_id: i64,
    pub values: Option<Vec<ReportCalendarDate>>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompaniesCalendarResponse {
    pub list: Option<Vec<CompanyCalendar>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DividendDate {
    pub amount_paid: Option<f64>,
    pub currency_short_name: Option<String>,
    /// Payments per year.
    pub distribution_frequency: Option<i64>,
    pub excluding_date: Option<String>,
    pub dividend_type: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDividends {
    pub ins_id: i64,
    pub values: Option<Vec<DividendDate>>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompaniesDividendsResponse {
    pub list: Option<Vec<CompanyDividends>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDescription {
    pub ins_id: i64,
    pub language_code: Option<String>,
    pub text: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompaniesDescriptionResponse {
    pub list: Option<Vec<CompanyDescription>>,
}
