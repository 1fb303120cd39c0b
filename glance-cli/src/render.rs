//! Rendering a completion outcome for the terminal.

use std::io::Write;

use glance::CompletionOutcome;

/// Heading printed above a successful reply.
pub const RESPONSE_HEADING: &str = "Chatbot Response";
/// Heading printed above a failure diagnostic.
pub const ERROR_HEADING: &str = "Error";

/// Write the outcome as a response panel (to `out`) or error panel (to `err`).
///
/// Returns whether the outcome was a success.
///
/// # Errors
///
/// Returns any error from the underlying writers.
pub fn render<O, E>(outcome: &CompletionOutcome, out: &mut O, err: &mut E) -> std::io::Result<bool>
where
    O: Write,
    E: Write,
{
    match outcome {
        CompletionOutcome::Success(text) => {
            writeln!(out, "{RESPONSE_HEADING}\n")?;
            writeln!(out, "{text}")?;
            out.flush()?;
            Ok(true)
        }
        CompletionOutcome::Failure { diagnostic, .. } => {
            writeln!(err, "{ERROR_HEADING}\n")?;
            writeln!(err, "{diagnostic}")?;
            err.flush()?;
            Ok(false)
        }
    }
}
