use std::io::Write;

/// Initialize the `log` backend. `RUST_LOG` takes precedence over `level`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging(level: log::LevelFilter) {
    let _ = env_logger::Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter(None, level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .try_init();
}
