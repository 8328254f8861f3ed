use std::io::{self, BufRead, Write};

use crate::interpreter::value::core::{Value, render_line};

/// The interpreter's connection to the outside world.
///
/// Every print statement (and every `print(...)` call) reaches [`emit`] once
/// with all of its values. `input(...)` reaches [`read_line`].
///
/// [`emit`]: Host::emit
/// [`read_line`]: Host::read_line
pub trait Host {
    /// Receives the values of one print, in source order.
    fn emit(&mut self, values: &[Value]);

    /// Returns one line of input without its line terminator, after showing
    /// `prompt` if one is given.
    fn read_line(&mut self, prompt: Option<&str>) -> String;
}

/// A [`Host`] on the process's standard output and standard input.
#[derive(Debug, Default)]
pub struct StdHost;

impl Host for StdHost {
    fn emit(&mut self, values: &[Value]) {
        let mut out = io::stdout().lock();
        if let Err(err) = writeln!(out, "{}", render_line(values)) {
            tracing::warn!(%err, "failed to write program output");
        }
    }

    fn read_line(&mut self, prompt: Option<&str>) -> String {
        if let Some(prompt) = prompt {
            let mut out = io::stdout().lock();
            if let Err(err) = write!(out, "{prompt}").and_then(|()| out.flush()) {
                tracing::warn!(%err, "failed to write input prompt");
            }
        }

        let mut line = String::new();
        if let Err(err) = io::stdin().lock().read_line(&mut line) {
            tracing::warn!(%err, "failed to read from standard input");
            return String::new();
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        line
    }
}
