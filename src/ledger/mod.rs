pub mod aggregator;
pub mod backend;

pub use aggregator::{aggregate, aggregate_request, parse_request, summarize_meal};
pub use backend::{
    calculate_totals, LedgerBackend, LocalLedger, RemoteLedger, DEFAULT_REMOTE_TIMEOUT,
};
