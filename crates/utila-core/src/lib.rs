//! UTILA core
//!
//! Domain library for the UTILA utility-tool platform: the static tool
//! catalog and category model, the dashboard navigation/filter state
//! machine, and native implementations of the tools that are pure
//! computation (text transforms, encoders, calculators, color tools,
//! generators, unit conversion).
//!
//! Everything here is synchronous and I/O-free; the HTTP surface lives in
//! the `utila-server` binary.

pub mod catalog;
pub mod navigation;
pub mod tools;

pub use catalog::{
    catalog, find_tool, Category, CategoryInfo, StaticPage, Tool, ToolKind, CATEGORIES, TOOLS,
};
pub use navigation::{filter_tools, CategoryFilter, Focus, NavigationState};
pub use tools::{ToolCommand, ToolError, ToolOutput};
