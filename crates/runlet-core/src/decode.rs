//! Result decoding
//!
//! The harness smuggles the script's resolved value through the same stream
//! as ordinary logging, so the decoder has to pull the two apart again. It
//! honors only the first sentinel occurrence, takes the rest of that line as
//! the JSON payload, and excises the sentinel line from the cleaned stdout.
//! An unparsable payload is absorbed as an absent value rather than failing
//! the call.

use serde_json::Value;

use crate::harness::SENTINEL;

/// Return value and cleaned stdout recovered from a raw capture.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedOutput {
    pub return_value: Option<Value>,
    pub stdout: String,
}

/// Split `raw_stdout` into the decoded return value and the user-visible
/// stdout with the sentinel line removed.
pub fn decode(raw_stdout: &str) -> DecodedOutput {
    let Some(idx) = raw_stdout.find(SENTINEL) else {
        return DecodedOutput {
            return_value: None,
            stdout: raw_stdout.to_string(),
        };
    };

    let after_token = &raw_stdout[idx + SENTINEL.len()..];
    let (payload, rest) = match after_token.find('\n') {
        Some(nl) => (&after_token[..nl], &after_token[nl + 1..]),
        None => (after_token, ""),
    };

    let return_value = serde_json::from_str::<Value>(payload).ok();
    if return_value.is_none() {
        log::debug!("sentinel payload was not decodable: {:?}", payload);
    }

    let mut stdout = String::with_capacity(idx + rest.len());
    stdout.push_str(&raw_stdout[..idx]);
    stdout.push_str(rest);

    DecodedOutput {
        return_value,
        stdout,
    }
}
