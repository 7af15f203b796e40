//! Result output: one found domain per line, newline-terminated.

use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes `results` to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns the I/O error if the file cannot be created or written.
pub fn write_results(path: &Path, results: &[String]) -> io::Result<()> {
    let file = std::fs::File::create(path)?;
    write_lines(BufWriter::new(file), results)
}

/// Prints `results` to stdout.
///
/// # Errors
///
/// Returns the I/O error if stdout is closed.
pub fn print_results(results: &[String]) -> io::Result<()> {
    let stdout = io::stdout();
    write_lines(stdout.lock(), results)
}

fn write_lines<W: Write>(mut writer: W, results: &[String]) -> io::Result<()> {
    for result in results {
        writeln!(writer, "{result}")?;
    }
    writer.flush()
}
