//! Exit codes the launcher produces itself. Any other code is a child's.

/// Dispatch completed and every launched child succeeded.
pub const OK: i32 = 0;
/// Resolution, usage or launch failure.
pub const FAILURE: i32 = 1;
