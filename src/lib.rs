// tcview - display formatting helpers for a chat client
//
// Two independent presentation helpers, each a focused single-responsibility
// module:
// - outcome: renders a remote tool call's success or failure for a transcript
// - magnitude: compacts large counts into K/M forms for profile display
//
// Both are pure synchronous functions with no shared state; callers may
// invoke them concurrently without coordination.

pub mod magnitude;
pub mod outcome;

pub use magnitude::{format_follower_count, format_magnitude};
pub use outcome::{format_tool_result, ToolCallOutcome, ToolCallResult};
