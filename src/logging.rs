use std::io::Write;

use colored::Colorize;
use env_logger::Builder;
use log::{Level, LevelFilter};

/// Map `-v` occurrences to a level for czjira's own records.
fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Error,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Log to stderr. Dependencies stay at `warn` unless `CZJIRA_LOG` says
/// otherwise; records from this crate follow the `-v` count.
pub fn init_logger(verbosity: u8) {
    let mut builder = Builder::new();
    builder
        .filter_level(LevelFilter::Warn)
        .filter_module(env!("CARGO_CRATE_NAME"), level_for(verbosity))
        .parse_env("CZJIRA_LOG");

    builder.format(move |buf, record| {
        let label = match record.level() {
            Level::Error => "ERROR".red().bold(),
            Level::Warn => "WARN ".yellow().bold(),
            Level::Info => "INFO ".white().bold(),
            Level::Debug => "DEBUG".bright_black(),
            Level::Trace => "TRACE".bright_black(),
        };

        if verbosity >= 2 {
            writeln!(buf, "{} {} {}", label, record.target().dimmed(), record.args())
        } else {
            writeln!(buf, "{} {}", label, record.args())
        }
    });

    builder.init();
}
