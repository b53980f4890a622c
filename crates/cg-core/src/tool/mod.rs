//! Tool system
//!
//! Tools are named callable operations exposed to the hosting dispatcher
//! (HTTP API or one-shot CLI).

pub mod definition;
pub mod manager;
pub mod traits;

pub use definition::ToolDefinition;
pub use manager::ToolManager;
pub use traits::{Tool, ToolResult};
