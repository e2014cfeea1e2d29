//! Console logging setup for binaries and demos. Library code only emits
//! through the `log` facade; callers decide whether and how to listen.

use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};

/// Installs a console logger at the given level. Quietly does nothing if a
/// global logger is already installed, so tests can call it repeatedly.
pub fn init_logger(level: LevelFilter) {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {l} {t} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(level));

    if let Ok(config) = config {
        let _ = log4rs::init_config(config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_harmless() {
        init_logger(LevelFilter::Debug);
        init_logger(LevelFilter::Trace);
        log::debug!("logging initialized twice");
    }
}
