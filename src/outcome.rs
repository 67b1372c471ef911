// Tool call outcome rendering
//
// A ToolCallOutcome captures what happened when a remote tool was invoked:
// which function ran, whether it succeeded, and either the payload or an
// error description. format_tool_result turns one into display text for a
// transcript or log line.
//
// The serde field names match the camelCase wire shape the executing
// collaborator produces, so outcomes deserialize straight off a captured
// payload.

use serde::{Deserialize, Serialize};

/// Outcome of a single remote tool invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCallOutcome {
    /// Name of the invoked operation (opaque, not validated)
    pub function_name: String,
    pub result: ToolCallResult,
}

/// Success flag plus payload or error description
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCallResult {
    pub success: bool,

    /// Arbitrary structured payload, present on success
    #[serde(default)]
    pub data: Option<serde_json::Value>,

    /// Failure description; may be absent even when success is false
    #[serde(default)]
    pub error: Option<String>,
}

/// Fallback when a failed call carries no error description
const UNKNOWN_ERROR: &str = "Unknown error";

/// Substituted when a payload cannot be pretty-printed
const UNSERIALIZABLE: &str = "<unserializable result>";

/// Render a tool call outcome as display text
///
/// Successful calls render the payload as 2-space-indented JSON below a
/// header line; failed calls render a single line carrying the error text,
/// or `Unknown error` when none was captured. Never panics and never
/// returns an error — this function's whole job is producing displayable
/// text.
///
/// # Examples
/// ```
/// use tcview::{format_tool_result, ToolCallOutcome, ToolCallResult};
///
/// let outcome = ToolCallOutcome {
///     function_name: "search".to_string(),
///     result: ToolCallResult {
///         success: false,
///         data: None,
///         error: Some("timeout".to_string()),
///     },
/// };
/// assert_eq!(
///     format_tool_result(&outcome),
///     "Tool call (search) failed: timeout"
/// );
/// ```
pub fn format_tool_result(outcome: &ToolCallOutcome) -> String {
    if !outcome.result.success {
        let message = match outcome.result.error.as_deref() {
            Some(error) if !error.is_empty() => error,
            _ => UNKNOWN_ERROR,
        };
        return format!("Tool call ({}) failed: {}", outcome.function_name, message);
    }

    // A success with no payload renders as JSON null rather than failing.
    let null = serde_json::Value::Null;
    let data = outcome.result.data.as_ref().unwrap_or(&null);
    let pretty =
        serde_json::to_string_pretty(data).unwrap_or_else(|_| UNSERIALIZABLE.to_string());
    format!("Tool call ({}) result:\n{}", outcome.function_name, pretty)
}
