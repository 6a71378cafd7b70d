pub mod search;
pub mod types;

pub use search::{build_search_args, parse_records, GhCli, QueryKind, RecordSource};
pub use types::{Record, Repository};
