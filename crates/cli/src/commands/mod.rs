//! CLI commands for the market metrics dashboard.

pub mod context;
pub mod search;
pub mod snapshot;
pub mod tokens;

pub use context::AppContext;
pub use search::{run_search, SearchArgs};
pub use snapshot::{run_snapshot, SnapshotArgs};
pub use tokens::run_tokens;
