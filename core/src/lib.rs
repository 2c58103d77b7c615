//! Typed, blocking client for the Borsdata REST API.
//!
//! # Overview
//! Every API operation is a method on [`BorsdataClient`] that issues one GET
//! request and decodes the JSON body into a record from [`types`].
//!
//! ```no_run
//! use borsdata_core::{BorsdataClient, ReportType};
//!
//! let client = BorsdataClient::from_env()?;
//! let reports = client.reports(3, ReportType::Year)?;
//! for report in reports.reports.unwrap_or_default() {
//!     println!("{} Q{}: EPS {}", report.year, report.period, report.earnings_per_share);
//! }
//! # Ok::<(), borsdata_core::ApiError>(())
//! ```
//!
//! # Design
//! - Endpoints are declared once in a table ([`catalog::ENDPOINTS`]); a
//!   [`Call`] binds values to an entry and validates them before any I/O.
//! - I/O sits behind the [`Transport`] trait. [`UreqTransport`] is the
//!   blocking default; the client itself only builds requests and
//!   interprets responses.
//! - Closed parameter sets are enums ([`ReportType`], [`PriceType`],
//!   [`CalcGroup`], [`Calc`]); parsing an unknown literal fails early.
//! - Optional fields decode to `None`, never to a zero value. Batch entries
//!   may carry their own `error` ([`types::BatchItem`]) without failing
//!   the call.

pub mod catalog;
pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod params;
pub mod transport;
pub mod types;

pub use client::BorsdataClient;
pub use config::{ClientConfig, API_KEY_ENV, DEFAULT_BASE_URL};
pub use endpoint::{Call, Endpoint, QueryParam};
pub use error::{ApiError, ProblemDetails};
pub use http::{HttpRequest, HttpResponse};
pub use params::{join_instruments, Calc, CalcGroup, DateRange, PriceType, ReportType};
pub use transport::{Transport, UreqTransport};
pub use types::BatchItem;
