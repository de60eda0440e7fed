use std::{env, io::Write};

use chrono::Utc;
use env_logger::Builder;
use log::LevelFilter;

/// Logs go to standard error so the transliteration on standard output stays
/// clean.
pub fn init_logger(debug: bool) {
    let mut builder = Builder::new();

    builder.format(|formatter, record| {
        writeln!(
            formatter,
            "{} [{}] ({}): {}",
            Utc::now().format("%Y-%m-%d %H:%M:%S %z"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    if let Ok(var) = env::var("RUST_LOG") {
        builder.parse_filters(&var);
    } else if debug {
        builder.filter(None, LevelFilter::Debug);
    } else {
        // if no RUST_LOG provided, only log warnings and errors
        builder.filter(None, LevelFilter::Warn);
    }

    builder.init();
}
