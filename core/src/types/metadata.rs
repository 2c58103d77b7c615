use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Market {
    pub id: i64,
    pub name: Option<String>,
    pub country_id: Option<i64>,
    pub is_index: Option<bool>,
    pub exchange_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketsResponse {
    pub markets: Option<Vec<Market>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sector {
    pub id: i64,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorsResponse {
    pub sectors: Option<Vec<Sector>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    pub id: i64,
    pub name: Option<String>,
    pub sector_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchesResponse {
    pub branches: Option<Vec<Branch>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub id: i64,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountriesResponse {
    pub countries: Option<Vec<Country>>,
}

/// Metadata of one listed security.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instrument {
    pub ins_id: i64,
    pub name: Option<String>,
    pub url_name: Option<String>,
    /// Instrument kind code (share, index, preference share, ...).
    pub instrument: i64,
    pub isin: Option<String>,
    pub ticker: Option<String>,
    pub yahoo: Option<String>,
    pub sector_id: Option<i64>,
    pub market_id: i64,
    pub branch_id: Option<i64>,
    pub country_id: Option<i64>,
    pub listing_date: Option<String>,
    pub stock_price_currency: Option<String>,
    pub report_currency: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstrumentsResponse {
    pub instruments: Option<Vec<Instrument>>,
}

/// Swedish/English names for branch, sector and country keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationMetadata {
    pub name_sv: Option<String>,
    pub name_en: Option<String>,
    pub translation_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationMetadataResponse {
    pub translation_metadatas: Option<Vec<TranslationMetadata>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn market_decodes_camel_case_fields() {
        let resp: MarketsResponse = serde_json::from_str(
            r#"{"markets":[{"id":1,"name":"Large Cap","countryId":1,"isIndex":false,"exchangeName":"Nasdaq Stockholm"}]}"#,
        )
        .unwrap();
        let market = &resp.markets.unwrap()[0];
        assert_eq!(market.id, 1);
        assert_eq!(market.country_id, Some(1));
        assert_eq!(market.is_index, Some(false));
        assert_eq!(market.exchange_name.as_deref(), Some("Nasdaq Stockholm"));
    }

    #[test]
    fn absent_list_is_none_and_empty_list_is_some() {
        let absent: SectorsResponse = serde_json::from_str("{}").unwrap();
        let empty: SectorsResponse = serde_json::from_str(r#"{"sectors":[]}"#).unwrap();
        assert!(absent.sectors.is_none());
        assert_eq!(empty.sectors, Some(Vec::new()));
    }

    #[test]
    fn branch_requires_sector_id() {
        let result: Result<Branch, _> = serde_json::from_str(r#"{"id":1,"name":"Banker"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn instrument_optional_fields_stay_absent() {
        let inst: Instrument =
            serde_json::from_str(r#"{"insId":3,"instrument":0,"marketId":1,"ticker":"ABB"}"#).unwrap();
        assert_eq!(inst.ins_id, 3);
        assert_eq!(inst.ticker.as_deref(), Some("ABB"));
        assert!(inst.name.is_none());
        assert!(inst.sector_id.is_none());
        assert!(inst.listing_date.is_none());
    }

    #[test]
    fn instrument_requires_market_id() {
        let result: Result<Instrument, _> = serde_json::from_str(r#"{"insId":3,"instrument":0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn present_but_empty_name_is_not_absent() {
        let country: Country = serde_json::from_str(r#"{"id":1,"name":""}"#).unwrap();
        assert_eq!(country.name.as_deref(), Some(""));
    }
}
