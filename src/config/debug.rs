//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet. Every flag is further gated by `cfg(debug_assertions)`
//! at the call site.

pub struct DebugFlags {
    /// Emit the intermediate values of every estimator (positions, fits, variances).
    pub print_estimator_details: bool,
    /// Emit edge-map pixel counts and density.
    pub print_edge_stats: bool,
    /// Emit wall time per timeframe when analysing a capture set.
    pub print_timeframe_timing: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_estimator_details: false,
    print_edge_stats: false,
    print_timeframe_timing: false,
};
