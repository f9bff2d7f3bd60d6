//! KinoProbe — black-box probes for the movie database API and portal
//!
//! This crate is a test suite, not a system: it issues HTTP requests and
//! WebDriver commands against externally-owned targets and asserts on what
//! comes back. The library half holds the shared fixtures; the actual
//! cases live under `tests/`:
//!
//! - `tests/api_probe.rs` — live API probe cases (`#[ignore]`, needs a
//!   token in `KINOPROBE_API_TOKEN`)
//! - `tests/portal_ui.rs` — live UI interaction cases (`#[ignore]`, needs
//!   a WebDriver server)
//! - `tests/api_contract.rs` — offline contract tests for the API client
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                      Probe Suite (Rust)                    │
//! ├────────────────────────────────────────────────────────────┤
//! │  MovieApi                     PortalSession                │
//! │    ├── movie_by_id(id)          ├── connect() / quit()     │
//! │    ├── search_by_title(q)       ├── open_portal()          │
//! │    └── random_movie()           ├── dismiss_captcha()      │
//! │          │                      └── wait_for_* helpers     │
//! │          ▼                              │                  │
//! │    ProbeResponse                        ▼                  │
//! │    {url, status, body}          SuiteSummary (✓/✗ per case)│
//! ├────────────────────────────────────────────────────────────┤
//! │  movie database API (HTTP)      movie portal (WebDriver)   │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both targets are identified by configuration (`KINOPROBE_*` env vars
//! over literal defaults); no state flows between cases, and the browser
//! session is the only shared resource.

pub mod api;
pub mod browser;
pub mod config;
pub mod error;
pub mod report;

pub use api::{MovieApi, ProbeResponse};
pub use browser::{Navigation, PortalSession};
pub use config::{ApiConfig, BrowserConfig};
pub use error::{ensure, SuiteError, SuiteResult};
pub use report::{CaseReport, SuiteSummary};

/// Initialize tracing for a test binary. Safe to call more than once.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("info".parse().expect("valid directive")),
        )
        .with_test_writer()
        .try_init();
}
