//! Tunables and normative limits: nesting budget, adaptive-index
//! thresholds, and the default trace preview width.

// ── Decoder limits ───────────────────────────────────────────
// The nesting budget bounds recursion depth on hostile input.  It is a
// decrementing counter: each `[` or `{` spends one unit, and an open
// bracket with no budget left is a syntax error.  Inputs with up to
// MAX_NESTING nested containers decode; the (MAX_NESTING + 1)-th level
// fails.

/// Maximum depth of nested arrays/objects the decoder accepts.
pub const MAX_NESTING: u32 = 200;

// ── Adaptive index thresholds ────────────────────────────────
// Containers below JIT_SIZE_LIMIT never pay for an index: the linear
// walk is cheap and the scan counter is not even maintained.  Larger
// containers accumulate observed lookup cost (one unit per field
// visited) and build the hash overlay once the total crosses
// JIT_ACCESS_LIMIT.  Mutation discards the overlay and zeroes the
// counter, so write-heavy containers pay nothing.

/// Smallest container size for which lookups count toward an index.
pub const JIT_SIZE_LIMIT: usize = 30;

/// Accumulated scan cost that triggers building the index.
pub const JIT_ACCESS_LIMIT: u64 = 1000;

// ── Trace previews ───────────────────────────────────────────

/// Default byte cap for [`crate::trace::preview`] output.
///
/// Sticky-settable at runtime via [`crate::trace::set_limit`].
pub const TRACE_PREVIEW_LIMIT: usize = 120;
