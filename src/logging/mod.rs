mod pretty_list;

use std::fmt::Write as FmtWrite;

use anyhow::Result;
use flexi_logger::{DeferredNow, Logger, LoggerHandle, Record};
use textwrap::{termwidth, Options};

pub use self::pretty_list::PrettyList;

/// Setup console logging for this application.
///
/// The `RUST_LOG` environment variable takes precedence over the provided
/// `default_spec`. The returned handle must be kept alive for as long as the
/// application wants to log.
pub fn setup(default_spec: &str) -> Result<LoggerHandle> {
    let handle = Logger::try_with_env_or_str(default_spec)?
        .format(multiline_format)
        .start()?;

    log::info!(
        "Adjust the log level by setting RUST_LOG. By default RUST_LOG={}",
        default_spec
    );

    Ok(handle)
}

/// An opinionated formatting function for flexi_logger which automatically
/// wraps content to the terminal width.
pub fn multiline_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    let full_line = format_record_line(
        record.level(),
        &now.format("%H:%M:%S%.6f").to_string(),
        record.file().unwrap_or("<unnamed>"),
        record.line().unwrap_or(0),
        &record.args().to_string(),
    );
    writeln!(w, "{}", wrap(&full_line, termwidth().min(74)))
}

fn format_record_line(
    level: log::Level,
    timestamp: &str,
    file: &str,
    line: u32,
    message: &str,
) -> String {
    let mut full_line = String::new();
    // writing into a String cannot fail
    let _ =
        writeln!(full_line, "{} [{}] [{}:{}]", level, timestamp, file, line);
    full_line.push_str(message);
    full_line
}

fn wrap(text: &str, width: usize) -> String {
    let wrap_options = Options::new(width)
        .initial_indent("┏ ")
        .subsequent_indent("┃ ");
    textwrap::fill(text, wrap_options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_header_is_on_its_own_line() {
        let line = format_record_line(
            log::Level::Warn,
            "12:00:00.000001",
            "src/main.rs",
            42,
            "hello",
        );
        assert_eq!(line, "WARN [12:00:00.000001] [src/main.rs:42]\nhello");
    }

    #[test]
    fn wrapped_lines_use_box_drawing_indents() {
        let wrapped = wrap("first\nsecond", 40);
        let lines: Vec<&str> = wrapped.lines().collect();
        assert_eq!(lines, vec!["┏ first", "┃ second"]);
    }
}
