pub mod types;
pub mod scanner;
pub mod writer;

// Re-export the main API for easier access
pub use types::{ClassEntry, ClassMap, ClassScanStats, ComponentScan};
pub use scanner::ExportScanner;
pub use writer::{ClassMapWriter, CheckStatus};
