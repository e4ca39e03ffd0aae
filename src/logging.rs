//! Logging setup using `log` + `env_logger`.
//!
//! Records go to stderr so they never mix with prompts and command output.
//! `HUSK_LOG` (an `env_logger` filter such as `debug` or `husk::process=trace`)
//! wins over `--debug`, which wins over the default of `warn`.

use crate::error::ShellError;

pub const LOG_ENV: &str = "HUSK_LOG";

pub fn init_logging(debug: bool) -> Result<(), ShellError> {
    let default_filter = if debug { "debug" } else { "warn" };

    env_logger::Builder::from_env(env_logger::Env::new().filter_or(LOG_ENV, default_filter))
        .format_timestamp(None)
        .try_init()?;

    Ok(())
}
