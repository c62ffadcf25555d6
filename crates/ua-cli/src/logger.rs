use crate::error::{CliError, Result as CliResult};

use std::path::PathBuf;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use ua_config::LoggingConfig;

/// Initialize logging with fern.
///
/// With `logging.file` set, logs go to `{config_dir}/{logging.dir}/{file}`
/// (plain format); otherwise to stderr, colored when configured and the
/// stream is a TTY. Stdout is left alone for JSON output.
pub fn initialize(logging: &LoggingConfig, config_dir: &PathBuf) -> CliResult<()> {
    let dispatch = Dispatch::new()
        .level(logging.level.into())
        .chain(output_for(logging, config_dir)?);

    dispatch.apply().map_err(|e| CliError::Logger {
        message: format!("Failed to initialize logger: {e}"),
    })?;

    Ok(())
}

fn output_for(logging: &LoggingConfig, config_dir: &PathBuf) -> CliResult<Dispatch> {
    if let Some(ref filename) = logging.file {
        let log_dir = config_dir.join(&logging.dir);
        std::fs::create_dir_all(&log_dir).map_err(|e| CliError::Logger {
            message: format!("Failed to create log directory {}: {e}", log_dir.display()),
        })?;

        let path = log_dir.join(filename);
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| CliError::Logger {
                message: format!("Failed to open log file {}: {e}", path.display()),
            })?;

        return Ok(Dispatch::new().format(plain_format).chain(file));
    }

    if logging.colored {
        let colors = ColoredLevelConfig::new()
            .trace(Color::Magenta)
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red);

        return Ok(Dispatch::new()
            .format(move |out, message, record| {
                out.finish(format_args!(
                    "[{date} - {level}] {message}",
                    date = humantime::format_rfc3339(SystemTime::now()),
                    level = colors.color(record.level()),
                ))
            })
            .chain(std::io::stderr()));
    }

    Ok(Dispatch::new().format(plain_format).chain(std::io::stderr()))
}

fn plain_format(out: fern::FormatCallback, message: &std::fmt::Arguments, record: &log::Record) {
    out.finish(format_args!(
        "[{date} - {level}] {message}",
        date = humantime::format_rfc3339(SystemTime::now()),
        level = record.level(),
    ));
}
