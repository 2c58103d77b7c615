//! Response records for every endpoint.
//!
//! # Design
//! Field mappings are declared per record with serde attributes. Required
//! fields are plain types and fail decoding when missing or mistyped;
//! optional fields are `Option<T>` and decode to `None` when the key is
//! absent or `null`. A `None` list in a wrapper means the API returned no
//! items, which is not an error.
//!
//! Field naming follows the upstream payloads exactly: camelCase for most
//! records, `snake_With_Capitals` for [`Report`], single letters for stock
//! prices and KPI values. Shapes that happen to share fields upstream are
//! kept as separate types.

mod companies;
mod holdings;
mod kpis;
mod metadata;
mod reports;
mod stock_prices;

pub use companies::*;
pub use holdings::*;
pub use kpis::*;
pub use metadata::*;
pub use reports::*;
pub use stock_prices::*;

/// A per-instrument entry of a batch response.
///
/// A batch call succeeds as a whole even when some entries failed; a
/// failed entry carries an `error` string and usually no values.
pub trait BatchItem {
    fn instrument_id(&self) -> i64;

    fn error(&self) -> Option<&str>;

    fn is_ok(&self) -> bool {
        self.error().is_none()
    }
}

macro_rules! batch_item {
    ($($ty:ty => $id:ident),+ $(,)?) => {
        $(
            impl BatchItem for $ty {
                fn instrument_id(&self) -> i64 {
                    self.$id
                }

                fn error(&self) -> Option<&str> {
                    self.error.as_deref()
                }
            }
        )+
    };
}

batch_item! {
    ReportsCombine => instrument,
    StockPricesArrayItem => instrument,
    KpisHistoryComp => instrument,
    CompanyCalendar => ins_id,
    CompanyDividends => ins_id,
    CompanyDescription => ins_id,
    InsiderHoldings => ins_id,
    ShortPosition => ins_id,
    Buyback => ins_id,
}

/// Split batch entries into successful and failed ones.
pub fn partition_items<T: BatchItem>(items: &[T]) -> (Vec<&T>, Vec<&T>) {
    items.iter().partition(|item| item.is_ok())
}
