pub mod class;
pub mod cli;
pub mod config;
pub mod rewrite;
pub mod utils;

// Re-export main types and functions for easier access
pub use class::{ClassEntry, ClassMap, ClassMapWriter, CheckStatus, ExportScanner};
pub use config::{ComponentConfig, CountConvention, ToolConfig};
pub use rewrite::{AllowList, ForwardDeclRewriter, RewriteStats};

// Re-export utility functions
pub use utils::file_utils;
