//! The query loop: announce readiness, then answer one draw per line.

use std::io::{BufRead, Write};

use crate::error::{Error, Result};
use crate::parse::parse_picks_bytes;
use crate::MatchEngine;


/// Written once the population is loaded and the engine is prepared. Draw
/// latency is only stable after this line.
pub const READY: &str = "READY";

/// Prepares `engine`, writes [`READY`] and then answers every draw read from
/// `input` with one report line on `output`.
///
/// A malformed draw ends the loop with [`Error::Draw`], no report is
/// written for it. End of input is not an error.
pub fn serve(
    engine: &mut MatchEngine,
    mut input: impl BufRead,
    mut output: impl Write,
) -> Result<()> {
    engine.prepare();
    writeln!(output, "{READY}")?;
    output.flush()?;

    let config = *engine.config();
    let mut draw = Vec::with_capacity(config.picks);
    // raw bytes, a line that is not UTF-8 is a malformed draw and not an
    // I/O error
    let mut line = Vec::new();
    let mut line_no = 0;
    loop {
        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            return Ok(());
        }
        line_no += 1;
        parse_picks_bytes(&line, &config, &mut draw).map_err(|source| Error::Draw {
            line: line_no,
            source,
        })?;
        let report = engine.process(&draw)?;
        writeln!(output, "{report}")?;
        output.flush()?;
        // only clear the counts once the report is out
        engine.reset();
    }
}
