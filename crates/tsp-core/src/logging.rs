use std::fs::File;
use std::io::{self, Write};

use env_logger::{fmt::Formatter, Builder, Target, WriteStyle};
use log::{Level, Record};

use crate::config::{LogFormat, SolverConfig};
use crate::{Error, Result};

/// Installs the process-wide logger. Fails if one is already installed or
/// the configured log file cannot be created.
pub fn init_logger(config: &SolverConfig) -> Result<()> {
    let format = config.log_format;
    let timestamp = config.log_timestamp;

    let mut builder = Builder::new();
    builder
        .filter_level(config.log_level.to_filter())
        .write_style(WriteStyle::Never)
        .target(open_target(config)?)
        .format(move |buf, record| write_record(buf, record, format, timestamp));

    builder
        .try_init()
        .map_err(|e| Error::other(format!("logger init failed: {e}")))
}

/// Truncates `log-output` if set, otherwise logs go to stderr.
fn open_target(config: &SolverConfig) -> Result<Target> {
    let Some(path) = &config.log_output else {
        return Ok(Target::Stderr);
    };
    let file = File::create(path)
        .map_err(|e| Error::other(format!("cannot open log file {}: {e}", path.display())))?;
    Ok(Target::Pipe(Box::new(file)))
}

fn write_record(
    buf: &mut Formatter,
    record: &Record,
    format: LogFormat,
    timestamp: bool,
) -> io::Result<()> {
    if timestamp {
        write!(buf, "{} ", buf.timestamp_millis())?;
    }
    let tag = level_tag(record.level());
    match format {
        LogFormat::Compact => writeln!(buf, "{tag} {}", record.args()),
        LogFormat::Pretty => writeln!(buf, "{tag} [{}] {}", record.target(), record.args()),
    }
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}
