//! Minimal stderr logger behind the `log` facade.

pub struct Logger;

impl Logger {
    /// Install the logger. `verbosity` counts `-v` flags: 0 = warn, 1 = info, 2+ = debug.
    pub fn init(verbosity: u8) {
        let level = match verbosity {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };
        // A second call only fails because a logger is already installed
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(level);
        }
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        eprintln!(
            "{} {}:{} {}",
            record.level(),
            record.file().unwrap_or(""),
            record.line().unwrap_or(0),
            record.args()
        );
    }

    fn flush(&self) {}
}

static LOGGER: Logger = Logger;
