//! Application selection, by name or through a numbered prompt.

use std::io::{BufRead, Write};

use keybindings_shared::{KeybindingsError, Result, Settings};

/// Index of the first application whose name equals `name` exactly.
///
/// An empty `name` never matches, even against entries with no name.
pub fn find_by_name(settings: &Settings, name: &str) -> Result<usize> {
    if name.is_empty() {
        return Err(KeybindingsError::selection("application name must not be empty"));
    }

    settings
        .applications
        .iter()
        .position(|app| app.name == name)
        .ok_or_else(|| KeybindingsError::selection(format!("unrecognized application name: {name}")))
}

/// Print a numbered menu and read choices until one is in range.
///
/// Invalid or out-of-range answers are reported on `output` and asked
/// again. Reaching the end of `input` is an error.
pub fn prompt_for_choice<R, W>(settings: &Settings, input: &mut R, output: &mut W) -> Result<usize>
where
    R: BufRead,
    W: Write,
{
    let count = settings.applications.len();
    if count == 0 {
        return Err(KeybindingsError::selection("no applications configured"));
    }

    let stdout_err = |e: std::io::Error| KeybindingsError::io("<stdout>", e);

    write!(output, "\nChoose application:\n\n").map_err(stdout_err)?;
    for (i, app) in settings.applications.iter().enumerate() {
        writeln!(output, "({i})  {}", app.name).map_err(stdout_err)?;
    }

    let mut line = String::new();
    loop {
        write!(output, "\nChoice: ").map_err(stdout_err)?;
        output.flush().map_err(stdout_err)?;

        line.clear();
        let read = input
            .read_line(&mut line)
            .map_err(|source| KeybindingsError::Input { source })?;
        if read == 0 {
            return Err(KeybindingsError::Input {
                source: std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "end of input"),
            });
        }

        let answer = line.trim_end_matches(['\n', '\r']);
        match answer.parse::<i64>() {
            Err(e) => {
                tracing::debug!(answer, "rejected non-numeric choice");
                writeln!(output, "\nInvalid input: {e}").map_err(stdout_err)?;
            }
            Ok(choice) => match usize::try_from(choice) {
                Ok(index) if index < count => return Ok(index),
                _ => {
                    tracing::debug!(choice, "rejected out-of-range choice");
                    writeln!(output, "Choice should be between 0 and {}", count - 1)
                        .map_err(stdout_err)?;
                }
            },
        }
    }
}
