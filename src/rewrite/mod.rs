pub mod allow_list;
pub mod rewriter;
pub mod types;

pub use allow_list::AllowList;
pub use rewriter::ForwardDeclRewriter;
pub use types::{Replacement, RewriteStats};
