//! Harness synthesis
//!
//! The submitted body may end in a `return`, use top-level `await`, or
//! throw. To capture its resolved value without asking the caller for
//! boilerplate, the body is wrapped in an immediately-awaited async function
//! whose result is bound to a local, and a single sentinel-prefixed line is
//! printed after the wrapper settles. If the body throws, the top-level
//! await rethrows, the runtime prints its diagnostic to stderr, and the
//! sentinel line is never reached. Output written by the body itself lands
//! on stdout before the sentinel line.

use crate::source::ParsedSource;

/// Marker separating user-emitted stdout from the encoded return value.
/// The fixed token is the documented contract between harness and decoder;
/// it is not randomized per execution.
pub const SENTINEL: &str = "__RETURN_VALUE__:";

/// Build the self-contained harness program: imports verbatim at module
/// scope, the body inside an awaited async IIFE, then the sentinel line.
pub fn synthesize(parsed: &ParsedSource) -> String {
    let mut program = String::new();

    for import in &parsed.imports {
        program.push_str(import);
        program.push('\n');
    }
    if !parsed.imports.is_empty() {
        program.push('\n');
    }

    program.push_str("const __runlet_result__ = await (async () => {\n");
    for line in &parsed.body {
        program.push_str(line);
        program.push('\n');
    }
    program.push_str("})();\n");
    program.push_str(&format!(
        "console.log({:?} + JSON.stringify(__runlet_result__));\n",
        SENTINEL
    ));

    program
}
