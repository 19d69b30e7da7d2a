//! Code-fence handling for completion payloads
//!
//! Completion services sometimes wrap structured output in a fenced code
//! block even when told not to. The payload must be unwrapped before parsing
//! regardless of the exact fence length or info string.

/// Strip an optional leading/trailing code-fence marker
///
/// Detects an opening run of three or more backticks (with or without an
/// info string such as `json`) and a matching closing run at the end of the
/// payload. A payload with no fence, or with an unbalanced one, passes
/// through unchanged apart from outer whitespace trimming.
pub fn strip_code_fence(payload: &str) -> &str {
    let trimmed = payload.trim();
    if !trimmed.starts_with("```") {
        return trimmed;
    }

    let fence_len = trimmed.bytes().take_while(|&b| b == b'`').count();
    let after_open = &trimmed[fence_len..];

    // The info string runs to the end of the opening line
    let Some(newline) = after_open.find('\n') else {
        return trimmed;
    };
    let body = after_open[newline + 1..].trim_end();

    // A matching run of backticks must close the block
    let Some(inner) = body.strip_suffix(&trimmed[..fence_len]) else {
        return trimmed;
    };
    inner.trim()
}
