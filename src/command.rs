use std::io::Write;

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Query,
    SetAbsolute,
    SetPercentage,
    Abort,
}

/// What a single invocation should do with the backlight.
///
/// `amount` already carries the sign of a `+`/`-` prefix. It is a delta when
/// `relative` is set, and a percentage for [`Operation::SetPercentage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub operation: Operation,
    pub amount: i64,
    pub verbose: bool,
    pub relative: bool,
}

impl Default for Command {
    fn default() -> Self {
        Command {
            operation: Operation::Query,
            amount: 1,
            verbose: false,
            relative: false,
        }
    }
}

impl Command {
    /// Interpret the positional arguments (program name excluded).
    ///
    /// Never fails: a value that is not an integer turns into
    /// [`Operation::Abort`] after telling the user on `out`.
    pub fn interpret<S: AsRef<str>>(args: &[S], out: &mut impl Write) -> Command {
        let mut cmd = Command::default();
        let mut args = args.iter().map(<S as AsRef<str>>::as_ref);

        let mut token = match args.next() {
            Some(token) => token,
            None => return cmd,
        };
        if token == "-v" {
            cmd.verbose = true;
            token = match args.next() {
                Some(token) => token,
                None => return cmd,
            };
        }
        cmd.operation = Operation::SetAbsolute;

        let mut sign = 1;
        if let Some(rest) = token.strip_prefix('+') {
            cmd.relative = true;
            token = rest;
        } else if let Some(rest) = token.strip_prefix('-') {
            cmd.relative = true;
            sign = -1;
            token = rest;
        }
        if let Some(rest) = token.strip_suffix('%') {
            cmd.operation = Operation::SetPercentage;
            token = rest;
        }

        match token.parse::<i64>() {
            Ok(amount) => cmd.amount = amount.saturating_mul(sign),
            Err(err) => {
                debug!(token, %err, "rejecting brightness value");
                say!(out, "Unable to parse value");
                cmd.operation = Operation::Abort;
            }
        }
        cmd
    }
}
