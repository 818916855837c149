//! Scrape viewer engine: talks to the scraping backend and writes exports.
mod client;
mod engine;
mod export;
mod response;
mod types;

pub use client::{
    ClientSettings, ReqwestScrapeClient, ScrapeClient, API_BASE_ENV, DEFAULT_API_BASE,
    TIMEOUT_ENV,
};
pub use engine::EngineHandle;
pub use export::{ensure_export_dir, export_result, ExportError, EXPORT_FILENAME};
pub use response::{interpret_response, BODY_EXCERPT_CHARS};
pub use types::{EngineEvent, FailureKind, RequestId, ScrapeError, ScrapePayload};
