//! Interactive session: one command per input line, feedback per line out.

use crate::error::AppResult;
use crate::services::RecordService;
use std::io::{BufRead, Write};
use tracing::{info, warn};

/// Shown for a line that is not valid UTF-8. The line is skipped.
pub const MESSAGE_INVALID_INPUT: &str = "Could not read command: input is not valid UTF-8";

/// Run commands from `input` until `exit` or end of input.
///
/// When `save_on_exit` is set the record book is saved once the session
/// ends, also when reading or writing fails part way.
pub fn run_session<R: BufRead, W: Write>(
    service: &mut dyn RecordService,
    save_on_exit: bool,
    input: R,
    output: W,
) -> AppResult<()> {
    let result = run_commands(service, input, output);

    if save_on_exit {
        info!("Saving record book on exit");
        service.flush()?;
    }
    result
}

fn run_commands<R: BufRead, W: Write>(
    service: &mut dyn RecordService,
    mut input: R,
    mut output: W,
) -> AppResult<()> {
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line,
            Err(e) => {
                warn!("Skipping input line that is not valid UTF-8: {}", e);
                writeln!(output, "{}", MESSAGE_INVALID_INPUT)?;
                continue;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        match service.execute(line) {
            Ok(outcome) => {
                writeln!(output, "{}", outcome.feedback)?;
                if outcome.show_list {
                    for (i, record) in service.displayed_records().iter().enumerate() {
                        writeln!(output, "{}. {}", i + 1, record)?;
                    }
                }
                if outcome.exit {
                    break;
                }
            }
            Err(e) => writeln!(output, "{}", e)?,
        }
        output.flush()?;
    }

    Ok(())
}
