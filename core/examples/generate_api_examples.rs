//! Capture one live response per endpoint into
//! `tests/data/borsdata_api_examples.json`.
//!
//! Needs `BORSDATA_API_KEY`. Run with
//! `cargo run -p borsdata-core --example generate_api_examples`.

use std::collections::BTreeMap;
use std::error::Error;
use std::fs;

use borsdata_core::{BorsdataClient, Calc, CalcGroup, DateRange, PriceType, ReportType};
use serde::Serialize;
use serde_json::Value;

const INSTRUMENT_ID: u32 = 1;
const KPI_ID: u32 = 1;
const DATE: &str = "2023-12-31";
const OUTPUT: &str = "tests/data/borsdata_api_examples.json";

fn record<R: Serialize>(
    results: &mut BTreeMap<&'static str, Value>,
    name: &'static str,
    response: Result<R, borsdata_core::ApiError>,
) -> Result<(), Box<dyn Error>> {
    let value = response.map_err(|err| format!("{name}: {err}"))?;
    results.insert(name, serde_json::to_value(value)?);
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let api = BorsdataClient::from_env()?;
    let key = api.api_key().to_string();
    let id_list = INSTRUMENT_ID.to_string();
    let all = DateRange::new();
    let mut results = BTreeMap::new();

    // Instrument metadata
    record(&mut results, "markets", api.markets())?;
    record(&mut results, "sectors", api.sectors())?;
    record(&mut results, "branches", api.branches())?;
    record(&mut results, "countries", api.countries())?;
    record(&mut results, "translation_metadata", api.translation_metadata(&key))?;

    // Reports
    record(&mut results, "reports", api.reports(INSTRUMENT_ID, ReportType::Year))?;
    record(&mut results, "reports_compound", api.reports_compound(INSTRUMENT_ID))?;
    record(&mut results, "reports_metadata", api.reports_metadata())?;
    record(
        &mut results,
        "reports_array",
        api.reports_array(&id_list, &key, Some(ReportType::Year), &all),
    )?;

    // Stock prices
    record(&mut results, "stock_prices", api.stock_prices(INSTRUMENT_ID, &all))?;
    record(&mut results, "stock_prices_last", api.stock_prices_last(&key))?;
    record(&mut results, "stock_prices_global_last", api.stock_prices_global_last(&key))?;
    record(&mut results, "stock_prices_date", api.stock_prices_date(&key, DATE))?;
    record(&mut results, "stock_prices_global_date", api.stock_prices_global_date(&key, DATE))?;
    record(&mut results, "stock_prices_array", api.stock_prices_array(&id_list, &key, &all))?;
    record(&mut results, "stock_splits", api.stock_splits(&key, None))?;

    // KPIs
    record(
        &mut results,
        "kpi_history",
        api.kpi_history(INSTRUMENT_ID, KPI_ID, ReportType::Year, PriceType::Mean),
    )?;
    record(&mut results, "kpi_summary", api.kpi_summary(INSTRUMENT_ID, ReportType::Year))?;
    record(
        &mut results,
        "kpi_history_all",
        api.kpi_history_all(KPI_ID, ReportType::Year, PriceType::Mean),
    )?;
    record(
        &mut results,
        "kpi_calc",
        api.kpi_calc(INSTRUMENT_ID, KPI_ID, CalcGroup::Last, Calc::High),
    )?;
    record(&mut results, "kpi_calc_all", api.kpi_calc_all(KPI_ID, CalcGroup::Last, Calc::High))?;
    record(
        &mut results,
        "kpi_calc_global",
        api.kpi_calc_global(KPI_ID, CalcGroup::Last, Calc::High),
    )?;
    record(&mut results, "kpis_updated", api.kpis_updated())?;
    record(&mut results, "kpis_metadata", api.kpis_metadata())?;

    fs::create_dir_all("tests/data")?;
    fs::write(OUTPUT, serde_json::to_string_pretty(&results)?)?;
    println!("wrote {} endpoints to {OUTPUT}", results.len());
    Ok(())
}
