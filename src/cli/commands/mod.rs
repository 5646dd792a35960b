//! CLI command implementations

pub mod completions;
pub mod config;
pub mod filters;
pub mod info;
pub mod search;

pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use filters::FiltersArgs;
pub use info::InfoArgs;
pub use search::SearchArgs;
