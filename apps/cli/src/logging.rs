use env_logger::{Builder, Target};
use log::{debug, LevelFilter};

/// Map `-v` count and `-q` to a level. `-q` wins over `-v`.
pub fn level_filter(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialize stderr logging. `RUST_LOG` is honoured when no verbosity flag
/// was given.
pub fn init_logging(verbosity: u8, quiet: bool) {
    let mut builder = Builder::new();
    builder.target(Target::Stderr).format(|buf, record| {
        use std::io::Write;
        writeln!(
            buf,
            "[{}] [{}] {}",
            record.level(),
            record.module_path().unwrap_or("unknown"),
            record.args()
        )
    });

    if verbosity == 0 && !quiet && std::env::var_os("RUST_LOG").is_some() {
        builder.parse_default_env();
    } else {
        builder.filter_level(level_filter(verbosity, quiet));
    }

    // a second init (e.g. in tests) keeps the first logger
    if builder.try_init().is_ok() {
        debug!("bioseq {} logging initialized", env!("CARGO_PKG_VERSION"));
    }
}
