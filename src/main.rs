// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;
use std::process;

use pico_args::Arguments;

fn main() {
    let opt = collect_args();

    if let Ok(()) = log::set_logger(&LOGGER) {
        log::set_max_level(log::LevelFilter::Info);
    }

    if let Err(e) = svgnorm::batch::run(&opt) {
        log::error!("{}.", e);
        process::exit(1);
    }
}

// Invalid values are ignored and the defaults are used instead.
fn collect_args() -> svgnorm::Options {
    let mut input = Arguments::from_env();
    let mut opt = svgnorm::Options::default();

    if let Ok(Some(dir)) = input.opt_value_from_str::<_, PathBuf>("--dir") {
        opt.dir = dir;
    }

    if let Ok(Some(size)) = input.opt_value_from_fn("--size", parse_size) {
        opt.size = size;
    }

    opt
}

fn parse_size(s: &str) -> Result<f64, String> {
    let n: f64 = s.trim().parse().map_err(|_| "invalid number")?;

    if n.is_finite() && n > 0.0 {
        Ok(n)
    } else {
        Err("size must be a positive number".to_string())
    }
}

/// A simple stdout/stderr logger.
///
/// Progress goes to stdout as is, warnings and errors go to stderr.
static LOGGER: SimpleLogger = SimpleLogger;
struct SimpleLogger;
impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::LevelFilter::Info
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            let args = record.args();

            match record.level() {
                log::Level::Error => eprintln!("Error: {}", args),
                log::Level::Warn => eprintln!("Warning: {}", args),
                _ => println!("{}", args),
            }
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_argument() {
        assert_eq!(parse_size("32"), Ok(32.0));
        assert_eq!(parse_size(" 12.5 "), Ok(12.5));
        assert!(parse_size("abc").is_err());
        assert!(parse_size("0").is_err());
        assert!(parse_size("-5").is_err());
        assert!(parse_size("inf").is_err());
        assert!(parse_size("NaN").is_err());
    }
}
