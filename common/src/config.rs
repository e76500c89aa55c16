/*
 * Settings read from the environment. A `.env` file in the working directory is loaded first,
 * variables already set in the environment win.
 */
use anyhow::{anyhow, Error};
use lazy_static::lazy_static;
use std::env;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

lazy_static! {
    pub static ref RUST_LOG: String = env_or("RUST_LOG", "info"); // If not specified, assume logging level is INFO
    pub static ref RUST_LOG_TYPE: String = env_or("RUST_LOG_TYPE", "console"); // If not specified, assume we're logging to console
    pub static ref LOG_DIR: String = env_or("LOG_DIR", "logs");
}

fn env_or(key: &str, default: &str) -> String {
    dotenv::dotenv().ok();
    env::var(key).unwrap_or_else(|_| String::from(default))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogType {
    Console,
    File,
    None,
}

impl Default for LogType {
    fn default() -> Self {
        LogType::Console
    }
}

impl FromStr for LogType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "console" => Ok(LogType::Console),
            "file" => Ok(LogType::File),
            "none" => Ok(LogType::None),
            _ => Err(anyhow!("Cannot parse {} to LogType", s)),
        }
    }
}

impl Display for LogType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LogType::Console => write!(f, "console"),
            LogType::File => write!(f, "file"),
            LogType::None => write!(f, "none"),
        }
    }
}

#[test]
fn test_parse_log_type() {
    assert_eq!("console".parse::<LogType>().unwrap(), LogType::Console);
    assert_eq!("FILE".parse::<LogType>().unwrap(), LogType::File);
    assert_eq!("none".parse::<LogType>().unwrap(), LogType::None);
    assert!("syslog".parse::<LogType>().is_err());
    assert_eq!(LogType::File.to_string(), "file");
}
