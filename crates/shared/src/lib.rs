pub mod awards;
pub mod config;
pub mod error;
pub mod macros;
pub mod metacritic;
pub mod registry;
pub mod runtime;
pub mod schemas;
pub mod toolbelts;

#[cfg(test)]
mod testing;

pub use config::ScraperConfig;
pub use error::ScrapeError;
pub use schemas::{Tool, ToolSchema, ParameterSchema};
pub use registry::{use_tool, get_tools, get_tools_for, get_tool_schema};
