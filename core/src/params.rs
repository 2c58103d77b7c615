//! Closed parameter sets accepted in endpoint paths.
//!
//! Each enum maps one-to-one onto the literals the API accepts. Parsing
//! is exact and case-sensitive, so a bad literal is rejected with
//! [`ApiError::InvalidParameter`] before a request exists.

use std::fmt;
use std::str::FromStr;

use crate::error::ApiError;

macro_rules! literal_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $param:literal {
            $($variant:ident => $literal:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// The literal sent on the wire.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $literal,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ApiError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($literal => Ok($name::$variant),)+
                    _ => Err(ApiError::InvalidParameter {
                        name: $param,
                        value: s.to_string(),
                        expected: $name::ALL
                            .iter()
                            .map(|v| v.as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                    }),
                }
            }
        }
    };
}

literal_enum! {
    /// Report period granularity.
    ReportType, "report type" {
        Year => "year",
        R12 => "r12",
        Quarter => "quarter",
    }
}

literal_enum! {
    /// Which stock price a KPI history is computed from.
    PriceType, "price type" {
        Mean => "mean",
        Low => "low",
        High => "high",
    }
}

literal_enum! {
    /// Aggregation window of a calculated KPI.
    CalcGroup, "calc group" {
        Last => "last",
        OneYear => "1year",
        ThreeYears => "3year",
        SevenYears => "7year",
        TenYears => "10year",
        FifteenYears => "15year",
    }
}

literal_enum! {
    /// Calculation applied to a KPI within its group.
    Calc, "calc" {
        High => "high",
        Latest => "latest",
        Low => "low",
        Mean => "mean",
        Sum => "sum",
        Cagr => "cagr",
        Psh => "psh",
        Trend => "trend",
        Over => "over",
        Under => "under",
        Diff => "diff",
        Rank => "rank",
        Point => "point",
        Default => "default",
        Return => "return",
        Stabil => "stabil",
        Quarter => "quarter",
        PriceHigh => "pricehigh",
        PriceLow => "pricelow",
        BRank => "brank",
        ShortSum => "ShortSum",
        ShortCountry => "ShortCountry",
        ShortIndustry => "ShortIndustry",
    }
}

/// Optional `from`/`to` bounds (`YYYY-MM-DD`) for date-filtered endpoints.
///
/// Unset bounds are left out of the query entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<String>,
    pub to: Option<String>,
}

impl DateRange {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from(mut self, date: impl Into<String>) -> Self {
        self.from = Some(date.into());
        self
    }

    pub fn to(mut self, date: impl Into<String>) -> Self {
        self.to = Some(date.into());
        self
    }
}

/// Join instrument ids into the comma-separated `instList` value.
pub fn join_instruments(ids: &[u32]) -> String {
    ids.iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
