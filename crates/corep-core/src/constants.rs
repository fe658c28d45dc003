/// Pipeline version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Template version this build targets.
pub const TEMPLATE_VERSION: &str = "C01.00";

/// Maximum retrieval top-k a caller may request.
pub const MAX_TOP_K: usize = 50;

/// Number of repair attempts after a malformed model response.
/// One retry total; a second malformed response is fatal for the run.
pub const REASONING_REPAIR_RETRIES: usize = 1;

/// Decimal places for exported monetary values (cents).
pub const EXPORT_DECIMAL_PLACES: u32 = 2;
