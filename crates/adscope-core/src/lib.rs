//! Reactive data layer between `adscope-api` and UI consumers (CLI / TUI).
//!
//! This crate owns the business logic and shared state for the adscope
//! workspace:
//!
//! - **[`Controller`]** — Facade over the HTTP client and the store.
//!   The TUI calls the fire-and-forget `refresh_*` / `open_*` methods and
//!   observes results through the store; the CLI awaits the `fetch_*`
//!   methods directly.
//!
//! - **[`DataStore`]** — One [`FetchState`] cell per remote resource
//!   (campaign list, aggregate metrics, opened campaign, its insights),
//!   broadcast over `tokio::sync::watch` channels. Generation tokens
//!   guarantee a superseded fetch can never overwrite a newer one.
//!
//! - **View state** ([`view`]) — Client-side status filtering and
//!   five-per-page pagination over the campaign list, plus the headline
//!   summary numbers.
//!
//! - **Derived metrics** ([`metrics`]) — CTR, CPC, conversion rate, and
//!   the efficiency ratios, always recomputed from raw counters with
//!   zero-denominator guards.
//!
//! - **Formatting** ([`fmt`]) — Compact numbers (`2.5M`, `64.0K`),
//!   grouped currency, and timestamp rendering shared by both frontends.

pub mod config;
pub mod controller;
pub mod error;
pub mod fetch;
pub mod fmt;
pub mod metrics;
pub mod store;
pub mod view;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::ServiceConfig;
pub use controller::Controller;
pub use error::CoreError;
pub use fetch::{FetchOutcome, FetchSlot, FetchState, FetchToken};
pub use store::DataStore;
pub use view::{CampaignPager, CampaignSummary, PAGE_SIZE, StatusFilter};

// Re-export the wire model at the crate root for ergonomics.
pub use adscope_api::{
    AggregateInsights, Campaign, CampaignInsights, CampaignStatus, Error as ApiError, Platform,
};
