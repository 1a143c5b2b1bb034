use std::io::Write;

use chrono::Local;
use log::{Level, LevelFilter};

fn level_to_sign(level: Level) -> &'static str {
    match level {
        Level::Error => "#",
        Level::Warn => "*",
        Level::Info => "-",
        Level::Debug => ".",
        Level::Trace => " ",
    }
}

/// Installs an `env_logger` writing `<timestamp> <sign> <message>` lines.
///
/// Does nothing if a logger is already installed.
pub fn init_logger(level: LevelFilter) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    builder.format(
        |buf, record|
            writeln!(
                buf,
                "{} {} {}",
                Local::now().format("%d %b %H:%M:%S%.3f"),
                level_to_sign(record.level()),
                record.args()
            )
    );

    let _ = builder.try_init();
}
