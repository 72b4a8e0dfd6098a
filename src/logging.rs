use chrono::Local;
use env_logger::{Builder, Env};
use std::io::Write;

/// Errors only, unless `--debug` was given. `RUST_LOG` overrides both.
pub fn default_filter(debug: bool) -> &'static str {
    if debug {
        "debug"
    } else {
        "error"
    }
}

pub fn init(debug: bool) -> Result<(), log::SetLoggerError> {
    Builder::from_env(Env::default().default_filter_or(default_filter(debug)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()
}
