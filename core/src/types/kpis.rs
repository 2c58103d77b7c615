use serde::{Deserialize, Serialize};

/// A calculated KPI value for one instrument.
///
/// Upstream fills either the numeric or the text value depending on the
/// KPI; nothing prevents both or neither from being present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kpi {
    #[serde(rename = "i")]
    pub instrument: i64,
    #[serde(rename = "n")]
    pub numeric: Option<f64>,
    #[serde(rename = "s")]
    pub text: Option<String>,
}

/// One period of a KPI history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiHistory {
    #[serde(rename = "y")]
    pub year: i64,
    #[serde(rename = "p")]
    pub period: i64,
    #[serde(rename = "v")]
    pub value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpisHistoryResponse {
    pub kpi_id: i64,
    pub report_time: Option<String>,
    pub price_value: Option<String>,
    pub values: Option<Vec<KpiHistory>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiSummaryGroup {
    pub kpi_id: i64,
    pub values: Option<Vec<KpiHistory>>,
}

/// History of every summary KPI for one instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpisSummaryResponse {
    pub instrument: i64,
    pub report_time: Option<String>,
    pub kpis: Option<Vec<KpiSummaryGroup>>,
}

/// One instrument's entry in a market-wide KPI history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpisHistoryComp {
    pub instrument: i64,
    pub error: Option<String>,
    pub values: Option<Vec<KpiHistory>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpisHistoryArrayResponse {
    pub kpi_id: i64,
    pub report_time: Option<String>,
    pub price_value: Option<String>,
    pub kpis_list: Option<Vec<KpisHistoryComp>>,
}

/// A calculated KPI for one instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpisResponse {
    pub kpi_id: i64,
    pub group: Option<String>,
    pub calculation: Option<String>,
    pub value: Option<Kpi>,
}

/// A calculated KPI for every instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpisAllCompResponse {
    pub kpi_id: i64,
    pub group: Option<String>,
    pub calculation: Option<String>,
    pub values: Option<Vec<Kpi>>,
}

/// Time of the last KPI recalculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpisCalcUpdatedResponse {
    pub kpis_calc_updated: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiMetadata {
    pub kpi_id: i64,
    pub name_sv: Option<String>,
    pub name_en: Option<String>,
    pub format: Option<String>,
    /// True when values arrive in the text field.
    pub is_string: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiMetadataResponse {
    pub kpi_history_metadatas: Option<Vec<KpiMetadata>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kpi_numeric_and_text_values() {
        let numeric: Kpi = serde_json::from_str(r#"{"i":3,"n":12.5}"#).unwrap();
        let text: Kpi = serde_json::from_str(r#"{"i":3,"s":"A+"}"#).unwrap();
        assert_eq!(numeric.numeric, Some(12.5));
        assert!(numeric.text.is_none());
        assert!(text.numeric.is_none());
        assert_eq!(text.text.as_deref(), Some("A+"));
    }

    #[test]
    fn kpi_requires_instrument() {
        assert!(serde_json::from_str::<Kpi>(r#"{"n":1.0}"#).is_err());
    }

    #[test]
    fn history_uses_single_letter_keys() {
        let resp: KpisHistoryResponse = serde_json::from_str(
            r#"{"kpiId":2,"reportTime":"year","priceValue":"mean","values":[{"y":2022,"p":5,"v":14.2},{"y":2021,"p":5}]}"#,
        )
        .unwrap();
        let values = resp.values.unwrap();
        assert_eq!(values[0].year, 2022);
        assert_eq!(values[0].value, Some(14.2));
        assert!(values[1].value.is_none());
    }

    #[test]
    fn calc_response_without_value() {
        let resp: KpisResponse =
            serde_json::from_str(r#"{"kpiId":1,"group":"last","calculation":"high"}"#).unwrap();
        assert_eq!(resp.group.as_deref(), Some("last"));
        assert!(resp.value.is_none());
    }

    #[test]
    fn metadata_requires_is_string() {
        assert!(serde_json::from_str::<KpiMetadata>(r#"{"kpiId":1}"#).is_err());
        let meta: KpiMetadata =
            serde_json::from_str(r#"{"kpiId":1,"nameEn":"Dividend Yield","isString":false}"#).unwrap();
        assert!(!meta.is_string);
    }
}
