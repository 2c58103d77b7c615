//! The endpoint table and the typed methods built on it.
//!
//! Each upstream operation is one [`Endpoint`] constant; [`ENDPOINTS`]
//! lists all of them. The methods on [`BorsdataClient`] bind typed
//! arguments to a table entry and name the record the body decodes into.
//!
//! Batch methods take `inst_list` as the comma-separated string the API
//! expects (see [`crate::join_instruments`]); it is passed through as-is.

use crate::client::BorsdataClient;
use crate::endpoint::{Call, Endpoint, QueryParam};
use crate::error::ApiError;
use crate::params::{Calc, CalcGroup, DateRange, PriceType, ReportType};
use crate::transport::Transport;
use crate::types::*;

const AUTH_KEY: QueryParam = QueryParam::required("authKey");
const INST_LIST: QueryParam = QueryParam::required("instList");
const FROM: QueryParam = QueryParam::optional("from");
const TO: QueryParam = QueryParam::optional("to");

macro_rules! endpoints {
    ($($ident:ident => $name:literal, $path:literal, [$($param:expr),* $(,)?];)+) => {
        $(
            pub static $ident: Endpoint = Endpoint {
                name: $name,
                path: $path,
                query: &[$($param),*],
            };
        )+

        /// Every endpoint the client knows.
        pub static ENDPOINTS: &[&Endpoint] = &[$(&$ident),+];
    };
}

endpoints! {
    MARKETS => "markets", "/v1/markets", [];
    SECTORS => "sectors", "/v1/sectors", [];
    BRANCHES => "branches", "/v1/branches", [];
    COUNTRIES => "countries", "/v1/countries", [];
    TRANSLATION_METADATA => "translation_metadata", "/v1/translationmetadata", [AUTH_KEY];
    INSTRUMENTS => "instruments", "/v1/instruments", [];
    INSTRUMENTS_GLOBAL => "instruments_global", "/v1/instruments/global", [AUTH_KEY];

    REPORTS => "reports", "/v1/instruments/{id}/reports/{reporttype}", [];
    REPORTS_COMPOUND => "reports_compound", "/v1/instruments/{id}/reports", [];
    REPORTS_METADATA => "reports_metadata", "/v1/instruments/reports/metadata", [];
    REPORTS_ARRAY => "reports_array", "/v1/instruments/reports",
        [INST_LIST, AUTH_KEY, QueryParam::optional("reporttype"), FROM, TO];

    STOCK_PRICES => "stock_prices", "/v1/instruments/{id}/stockprices", [FROM, TO];
    STOCK_PRICES_LAST => "stock_prices_last", "/v1/instruments/stockprices/last", [AUTH_KEY];
    STOCK_PRICES_GLOBAL_LAST => "stock_prices_global_last", "/v1/instruments/stockprices/global/last", [AUTH_KEY];
    STOCK_PRICES_DATE => "stock_prices_date", "/v1/instruments/stockprices/date",
        [AUTH_KEY, QueryParam::required("date")];
    STOCK_PRICES_GLOBAL_DATE => "stock_prices_global_date", "/v1/instruments/stockprices/global/date",
        [AUTH_KEY, QueryParam::required("date")];
    STOCK_PRICES_ARRAY => "stock_prices_array", "/v1/instruments/stockprices", [INST_LIST, AUTH_KEY, FROM, TO];
    STOCK_SPLITS => "stock_splits", "/v1/instruments/StockSplits", [AUTH_KEY, FROM];

    KPI_HISTORY => "kpi_history", "/v1/instruments/{id}/kpis/{kpiId}/{reporttype}/{pricetype}/history", [];
    KPI_SUMMARY => "kpi_summary", "/v1/instruments/{id}/kpis/{reporttype}/summary", [];
    KPI_HISTORY_ALL => "kpi_history_all", "/v1/instruments/kpis/{kpiId}/{reporttype}/{pricetype}/history", [];
    KPI_CALC => "kpi_calc", "/v1/instruments/{id}/kpis/{kpiId}/{calcGroup}/{calc}", [];
    KPI_CALC_ALL => "kpi_calc_all", "/v1/instruments/kpis/{kpiId}/{calcGroup}/{calc}", [];
    KPI_CALC_GLOBAL => "kpi_calc_global", "/v1/instruments/global/kpis/{kpiId}/{calcGroup}/{calc}", [];
    KPIS_UPDATED => "kpis_updated", "/v1/instruments/kpis/updated", [];
    KPIS_METADATA => "kpis_metadata", "/v1/instruments/kpis/metadata", [];

    REPORT_CALENDAR => "report_calendar", "/v1/instruments/report/calendar", [INST_LIST, AUTH_KEY];
    DIVIDEND_CALENDAR => "dividend_calendar", "/v1/instruments/dividend/calendar", [INST_LIST, AUTH_KEY];
    DESCRIPTIONS => "descriptions", "/v1/instruments/description", [INST_LIST, AUTH_KEY];
    INSIDER_HOLDINGS => "insider_holdings", "/v1/holdings/insider", [INST_LIST, AUTH_KEY];
    SHORT_POSITIONS => "short_positions", "/v1/holdings/shorts", [AUTH_KEY];
    BUYBACKS => "buybacks", "/v1/holdings/buyback", [INST_LIST, AUTH_KEY];
}

fn kpi_calc_call(endpoint: &'static Endpoint, kpi_id: u32, group: CalcGroup, calc: Calc) -> Call {
    Call::new(endpoint)
        .segment("kpiId", kpi_id)
        .segment("calcGroup", group)
        .segment("calc", calc)
}

fn batch_call(endpoint: &'static Endpoint, inst_list: &str, auth_key: &str) -> Call {
    Call::new(endpoint)
        .query("instList", inst_list)
        .query("authKey", auth_key)
}

fn ranged(call: Call, range: &DateRange) -> Call {
    call.query_opt("from", range.from.as_deref())
        .query_opt("to", range.to.as_deref())
}

impl<T: Transport> BorsdataClient<T> {
    // --- instrument metadata ---

    pub fn markets(&self) -> Result<MarketsResponse, ApiError> {
        self.fetch(Call::new(&MARKETS))
    }

    pub fn sectors(&self) -> Result<SectorsResponse, ApiError> {
        self.fetch(Call::new(&SECTORS))
    }

    pub fn branches(&self) -> Result<BranchesResponse, ApiError> {
        self.fetch(Call::new(&BRANCHES))
    }

    pub fn countries(&self) -> Result<CountriesResponse, ApiError> {
        self.fetch(Call::new(&COUNTRIES))
    }

    /// Swedish/English names for branches, sectors and countries.
    pub fn translation_metadata(&self, auth_key: &str) -> Result<TranslationMetadataResponse, ApiError> {
        self.fetch(Call::new(&TRANSLATION_METADATA).query("authKey", auth_key))
    }

    /// Nordic instruments.
    pub fn instruments(&self) -> Result<InstrumentsResponse, ApiError> {
        self.fetch(Call::new(&INSTRUMENTS))
    }

    /// Global instruments (Pro+).
    pub fn instruments_global(&self, auth_key: &str) -> Result<InstrumentsResponse, ApiError> {
        self.fetch(Call::new(&INSTRUMENTS_GLOBAL).query("authKey", auth_key))
    }

    // --- reports ---

    pub fn reports(&self, instrument_id: u32, report_type: ReportType) -> Result<ReportsResponse, ApiError> {
        self.fetch(
            Call::new(&REPORTS)
                .segment("id", instrument_id)
                .segment("reporttype", report_type),
        )
    }

    /// Year, R12 and quarter reports in one response.
    pub fn reports_compound(&self, instrument_id: u32) -> Result<ReportsCompoundResponse, ApiError> {
        self.fetch(Call::new(&REPORTS_COMPOUND).segment("id", instrument_id))
    }

    pub fn reports_metadata(&self) -> Result<ReportMetadataResponse, ApiError> {
        self.fetch(Call::new(&REPORTS_METADATA))
    }

    /// Reports for several instruments; `report_type` narrows to one granularity.
    pub fn reports_array(
        &self,
        inst_list: &str,
        auth_key: &str,
        report_type: Option<ReportType>,
        range: &DateRange,
    ) -> Result<ReportsArrayResponse, ApiError> {
        let call = batch_call(&REPORTS_ARRAY, inst_list, auth_key)
            .query_opt("reporttype", report_type.map(ReportType::as_str));
        self.fetch(ranged(call, range))
    }

    // --- stock prices ---

    /// Daily prices for one instrument, ten years back unless `range` says otherwise.
    pub fn stock_prices(&self, instrument_id: u32, range: &DateRange) -> Result<StockPricesResponse, ApiError> {
        self.fetch(ranged(Call::new(&STOCK_PRICES).segment("id", instrument_id), range))
    }

    /// Latest price of every Nordic instrument (Pro).
    pub fn stock_prices_last(&self, auth_key: &str) -> Result<StockPricesLastResponse, ApiError> {
        self.fetch(Call::new(&STOCK_PRICES_LAST).query("authKey", auth_key))
    }

    /// Latest price of every global instrument (Pro+).
    pub fn stock_prices_global_last(&self, auth_key: &str) -> Result<StockPricesGlobalLastResponse, ApiError> {
        self.fetch(Call::new(&STOCK_PRICES_GLOBAL_LAST).query("authKey", auth_key))
    }

    /// One price per Nordic instrument on `date` (`YYYY-MM-DD`).
    pub fn stock_prices_date(&self, auth_key: &str, date: &str) -> Result<StockPricesDateResponse, ApiError> {
        self.fetch(
            Call::new(&STOCK_PRICES_DATE)
                .query("authKey", auth_key)
                .query("date", date),
        )
    }

    pub fn stock_prices_global_date(
        &self,
        auth_key: &str,
        date: &str,
    ) -> Result<StockPricesGlobalDateResponse, ApiError> {
        self.fetch(
            Call::new(&STOCK_PRICES_GLOBAL_DATE)
                .query("authKey", auth_key)
                .query("date", date),
        )
    }

    pub fn stock_prices_array(
        &self,
        inst_list: &str,
        auth_key: &str,
        range: &DateRange,
    ) -> Result<StockPricesArrayResponse, ApiError> {
        self.fetch(ranged(batch_call(&STOCK_PRICES_ARRAY, inst_list, auth_key), range))
    }

    /// Nordic stock splits, at most one year back.
    pub fn stock_splits(&self, auth_key: &str, from: Option<&str>) -> Result<StockSplitsResponse, ApiError> {
        self.fetch(
            Call::new(&STOCK_SPLITS)
                .query("authKey", auth_key)
                .query_opt("from", from),
        )
    }

    // --- KPIs ---

    pub fn kpi_history(
        &self,
        instrument_id: u32,
        kpi_id: u32,
        report_type: ReportType,
        price_type: PriceType,
    ) -> Result<KpisHistoryResponse, ApiError> {
        self.fetch(
            Call::new(&KPI_HISTORY)
                .segment("id", instrument_id)
                .segment("kpiId", kpi_id)
                .segment("reporttype", report_type)
                .segment("pricetype", price_type),
        )
    }

    pub fn kpi_summary(&self, instrument_id: u32, report_type: ReportType) -> Result<KpisSummaryResponse, ApiError> {
        self.fetch(
            Call::new(&KPI_SUMMARY)
                .segment("id", instrument_id)
                .segment("reporttype", report_type),
        )
    }

    /// History of one KPI for every instrument.
    pub fn kpi_history_all(
        &self,
        kpi_id: u32,
        report_type: ReportType,
        price_type: PriceType,
    ) -> Result<KpisHistoryArrayResponse, ApiError> {
        self.fetch(
            Call::new(&KPI_HISTORY_ALL)
                .segment("kpiId", kpi_id)
                .segment("reporttype", report_type)
                .segment("pricetype", price_type),
        )
    }

    pub fn kpi_calc(
        &self,
        instrument_id: u32,
        kpi_id: u32,
        group: CalcGroup,
        calc: Calc,
    ) -> Result<KpisResponse, ApiError> {
        self.fetch(kpi_calc_call(&KPI_CALC, kpi_id, group, calc).segment("id", instrument_id))
    }

    pub fn kpi_calc_all(&self, kpi_id: u32, group: CalcGroup, calc: Calc) -> Result<KpisAllCompResponse, ApiError> {
        self.fetch(kpi_calc_call(&KPI_CALC_ALL, kpi_id, group, calc))
    }

    pub fn kpi_calc_global(
        &self,
        kpi_id: u32,
        group: CalcGroup,
        calc: Calc,
    ) -> Result<KpisAllCompResponse, ApiError> {
        self.fetch(kpi_calc_call(&KPI_CALC_GLOBAL, kpi_id, group, calc))
    }

    pub fn kpis_updated(&self) -> Result<KpisCalcUpdatedResponse, ApiError> {
        self.fetch(Call::new(&KPIS_UPDATED))
    }

    pub fn kpis_metadata(&self) -> Result<KpiMetadataResponse, ApiError> {
        self.fetch(Call::new(&KPIS_METADATA))
    }

    // --- calendars, descriptions, holdings ---

    pub fn report_calendar(&self, inst_list: &str, auth_key: &str) -> Result<CompaniesCalendarResponse, ApiError> {
        self.fetch(batch_call(&REPORT_CALENDAR, inst_list, auth_key))
    }

    pub fn dividend_calendar(&self, inst_list: &str, auth_key: &str) -> Result<CompaniesDividendsResponse, ApiError> {
        self.fetch(batch_call(&DIVIDEND_CALENDAR, inst_list, auth_key))
    }

    pub fn descriptions(&self, inst_list: &str, auth_key: &str) -> Result<CompaniesDescriptionResponse, ApiError> {
        self.fetch(batch_call(&DESCRIPTIONS, inst_list, auth_key))
    }

    pub fn insider_holdings(&self, inst_list: &str, auth_key: &str) -> Result<InsiderHoldingsResponse, ApiError> {
        self.fetch(batch_call(&INSIDER_HOLDINGS, inst_list, auth_key))
    }

    pub fn short_positions(&self, auth_key: &str) -> Result<ShortsResponse, ApiError> {
        self.fetch(Call::new(&SHORT_POSITIONS).query("authKey", auth_key))
    }

    pub fn buybacks(&self, inst_list: &str, auth_key: &str) -> Result<BuybacksResponse, ApiError> {
        self.fetch(batch_call(&BUYBACKS, inst_list, auth_key))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn endpoint_names_and_paths_are_unique() {
        let names: HashSet<_> = ENDPOINTS.iter().map(|e| e.name).collect();
        assert_eq!(names.len(), ENDPOINTS.len());
        let routes: HashSet<_> = ENDPOINTS.iter().map(|e| e.path).collect();
        assert_eq!(routes.len(), ENDPOINTS.len());
    }

    #[test]
    fn every_path_is_versioned() {
        for endpoint in ENDPOINTS {
            assert!(endpoint.path.starts_with("/v1/"), "{}", endpoint.name);
        }
    }

    #[test]
    fn batch_endpoints_take_inst_list_and_auth_key() {
        for endpoint in [&REPORTS_ARRAY, &STOCK_PRICES_ARRAY, &REPORT_CALENDAR, &BUYBACKS] {
            assert_eq!(endpoint.query[0].name, "instList");
            assert!(endpoint.requires_auth_key());
        }
    }

    #[test]
    fn stock_prices_date_renders_expected_query() {
        let call = Call::new(&STOCK_PRICES_DATE)
            .query("authKey", "K1")
            .query("date", "2023-12-31");
        let (path, query) = call.render().unwrap();
        assert_eq!(path, "/v1/instruments/stockprices/date");
        assert_eq!(
            query,
            vec![
                ("authKey".to_string(), "K1".to_string()),
                ("date".to_string(), "2023-12-31".to_string()),
            ]
        );
    }

    #[test]
    fn kpi_calc_renders_literals_into_path() {
        let (path, _) = kpi_calc_call(&KPI_CALC, 1, CalcGroup::OneYear, Calc::ShortSum)
            .segment("id", 3)
            .render()
            .unwrap();
        assert_eq!(path, "/v1/instruments/3/kpis/1/1year/ShortSum");
    }

    #[test]
    fn reports_array_omits_unset_filters() {
        let call = ranged(
            batch_call(&REPORTS_ARRAY, "3,750", "K1").query_opt("reporttype", None::<&str>),
            &DateRange::new().to("2024-01-01"),
        );
        let (_, query) = call.render().unwrap();
        let names: Vec<_> = query.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(names, vec!["instList", "authKey", "to"]);
    }
}
