/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "debug";

/// Log target for per-call instrumentation records.
pub const LOG_TARGET: &str = "call_logger::calls";

/// Name under which the calculator's addition is logged.
pub const SUM_OPERATION: &str = "sum";
