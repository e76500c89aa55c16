pub mod helper;

/**
 *** The file is to setup logger to either:
 *** - write to file
 *** - output to console
 *** - nowhere
 *** The default option if RUST_LOG is not specified is INFO logging
 **/
use crate::config::{LogType, LOG_DIR, RUST_LOG, RUST_LOG_TYPE};
use crate::logger::helper::{log_to_console, log_to_file, message};
use std::sync::atomic::{AtomicBool, Ordering};

static GLOBAL_INIT_LOGGING: AtomicBool = AtomicBool::new(false);

pub fn init_logger(file_name: &str) -> String {
    init_once(&GLOBAL_INIT_LOGGING, || {
        let log_type = match RUST_LOG_TYPE.parse::<LogType>() {
            Ok(log_type) => log_type,
            Err(err) => {
                eprintln!("{}, logging to console", err);
                LogType::Console
            }
        };
        let result = match log_type {
            LogType::File => log_to_file(LOG_DIR.as_str(), file_name, &RUST_LOG),
            LogType::Console => log_to_console(&RUST_LOG),
            LogType::None => Ok(()),
        };
        result.map_err(|err| format!("Cannot init {} logging: {}", log_type, err))?;
        Ok(message(&log_type, &RUST_LOG))
    })
}

/// Runs `init` unless `flag` is already set. The flag is released again when `init` fails,
/// so a later call can retry.
fn init_once(flag: &AtomicBool, init: impl FnOnce() -> Result<String, String>) -> String {
    if flag.swap(true, Ordering::SeqCst) {
        return "Logging already inited".to_string();
    }
    match init() {
        Ok(message) => message,
        Err(message) => {
            flag.store(false, Ordering::SeqCst);
            message
        }
    }
}
