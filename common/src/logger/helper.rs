use crate::config::LogType;
use env_logger::{Builder, Env, Target};
use std::fs::{self, OpenOptions};
use std::path::Path;

fn builder(level: &str) -> Builder {
    Builder::from_env(Env::default().default_filter_or(level))
}

pub fn log_to_console(level: &str) -> Result<(), anyhow::Error> {
    builder(level).try_init()?;
    Ok(())
}

/// Appends to `<log_dir>/<file_name>.log`.
pub fn log_to_file(log_dir: &str, file_name: &str, level: &str) -> Result<(), anyhow::Error> {
    fs::create_dir_all(log_dir)?;
    let path = Path::new(log_dir).join(format!("{}.log", file_name));
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    builder(level).target(Target::Pipe(Box::new(file))).try_init()?;
    Ok(())
}

pub fn message(log_type: &LogType, level: &str) -> String {
    match log_type {
        LogType::None => "Logging disabled".to_string(),
        _ => format!("Logging to {} with level {}", log_type, level),
    }
}

#[test]
fn test_message() {
    assert_eq!(message(&LogType::Console, "debug"), "Logging to console with level debug");
    assert_eq!(message(&LogType::None, "info"), "Logging disabled");
}
