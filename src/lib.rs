pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;
pub mod view;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{GeminiModel, LazyModel};
pub use config::ProviderSettings;
pub use core::client::ComparisonClient;
pub use domain::model::{ComparisonRequest, ComparisonResult, OptionAnalysis};
pub use utils::error::{ComparisonError, ProviderError, Result};
pub use view::{ComparisonView, ViewPhase, ViewState};
