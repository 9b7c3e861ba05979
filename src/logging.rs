use std::io::Write;

use colored::Colorize;
use env_logger::{Builder, Target};
use log::{Level, LevelFilter};

/// Map the `-v` count onto a level filter. Without `-v` only errors are shown.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Error,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the stderr logger. stdout stays reserved for generated output.
pub fn init_logger(verbosity: u8) {
    let mut builder = Builder::new();
    builder.filter_level(level_for(verbosity));
    builder.target(Target::Stderr);

    builder.format(|buf, record| {
        let level_label = match record.level() {
            Level::Error => "ERROR".red().bold(),
            Level::Warn => "WARN ".yellow().bold(),
            Level::Info => "INFO ".white().bold(),
            Level::Debug => "DEBUG".bright_black(),
            Level::Trace => "TRACE".bright_black(),
        };

        writeln!(buf, "{} {}", level_label, record.args())
    });

    // A second init (e.g. from tests) keeps the first logger.
    let _ = builder.try_init();
}
