pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{ScraperSettings, ServiceConfig};
pub use crate::core::fetcher::VesselInfoFetcher;
pub use crate::utils::error::{Result, VesselError};
