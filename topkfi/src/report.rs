//! Plain-text report of mining results.
use std::io::Write;

use crate::candidate::Candidate;

/// Writes the results in the text format of the TopKFI tool.
///
/// If there are at most `max_output` results, the count is followed by one line per
/// result listing its distinct items in descending order and its support in
/// parentheses. Otherwise, only the count is written.
pub fn write_report<W>(
    mut wtr: W,
    results: &[Candidate],
    max_output: usize,
) -> std::io::Result<()>
where
    W: Write,
{
    if results.len() > max_output {
        writeln!(wtr, "   {}", results.len())?;
        return Ok(());
    }
    writeln!(wtr, "  {}", results.len())?;
    for cand in results {
        if cand.is_empty() {
            continue;
        }
        write!(wtr, " ")?;
        for item in cand.items().iter().rev() {
            write!(wtr, " {} ", item)?;
        }
        writeln!(wtr, " ({})", cand.support())?;
    }
    Ok(())
}
