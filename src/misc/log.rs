/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
The procedures log each rule they apply at `trace` level and their verdict at `debug` level.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [Davis-Putnam elimination](crate::procedures::dp)
    pub const DP: &str = "dp";

    /// Logs related to [DPLL search](crate::procedures::dpll)
    pub const DPLL: &str = "dpll";

    /// Logs related to [resolution saturation](crate::procedures::resolution)
    pub const RESOLUTION: &str = "resolution";

    /// Logs related to [parsing](crate::builder)
    pub const PARSER: &str = "parser";

    /// Logs related to [benchmarks](crate::bench)
    pub const BENCH: &str = "bench";
}
