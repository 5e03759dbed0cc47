use crate::VERSION;
use chrono::Local;
use colored::*;
use env_logger::{Builder, Env};
use std::io::Write;
use std::sync::Once;

const NAME: &str = match option_env!("CHARGILY_PKG_NAME") {
    Some(name) => name,
    None => env!("CARGO_PKG_NAME"),
};

static INIT: Once = Once::new();

/// Installs a coloured `env_logger` for the process.
///
/// Level filter comes from `RUST_LOG` and defaults to `info`. With
/// `RUST_LOG=trace` the name/timestamp prefix is dropped to keep lines short.
/// Calling this more than once is a no-op, and it never replaces a logger
/// installed by the host application.
pub fn setup_logger() {
    INIT.call_once(|| {
        let verbose = matches!(std::env::var("RUST_LOG"), Ok(val) if val.eq_ignore_ascii_case("trace"));
        let prefix = format!("{}_{}", NAME, VERSION);

        let result = Builder::from_env(Env::default().default_filter_or("info"))
            .format(move |buf, record| {
                let level = match record.level() {
                    log::Level::Error => format!("{}", record.level()).red(),
                    log::Level::Warn => format!(" {}", record.level()).yellow(),
                    log::Level::Info => format!(" {}", record.level()).green(),
                    log::Level::Debug => format!("{}", record.level()).blue(),
                    log::Level::Trace => format!("{}", record.level()).purple(),
                };
                let file = record.file().unwrap_or("unknown");
                let line = record.line().unwrap_or(0);

                if verbose {
                    writeln!(buf, "{}:{} {}: {}", file, line, level, record.args())
                } else {
                    writeln!(
                        buf,
                        "{}:{} [{} {}]{}: {}",
                        file,
                        line,
                        prefix.dimmed(),
                        Local::now().format("%Y%m%d %H:%M:%S").to_string().purple(),
                        level,
                        record.args()
                    )
                }
            })
            .try_init();

        match result {
            Ok(()) => log::debug!("logger initialized"),
            Err(err) => log::debug!("logger already installed: {}", err),
        }
    });
}
