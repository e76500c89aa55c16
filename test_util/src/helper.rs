use anyhow::anyhow;
use pipeline_common::logger::init_logger;
use pipeline_common::{Args, JobFunction, Kwargs, Value};

pub fn load_env() {
    dotenv::from_filename(".env_test").ok();
}

pub fn init_logging() {
    let _res = init_logger("Testing");
}

/// Sum of the integer arguments, multiplied by the `scale` keyword (default 1).
pub fn compute(args: &Args, kwargs: &Kwargs) -> Result<Value, anyhow::Error> {
    let mut sum = 0i64;
    for value in args {
        sum += value
            .as_i64()
            .ok_or_else(|| anyhow!("compute expects integers, got {}", value))?;
    }
    let scale = kwargs.get("scale").and_then(Value::as_i64).unwrap_or(1);
    Ok(Value::from(sum * scale))
}

pub fn shadow_compute(_args: &Args, _kwargs: &Kwargs) -> Result<Value, anyhow::Error> {
    Ok(Value::Null)
}

/// Joins the string arguments with the `sep` keyword (default "").
pub fn concat(args: &Args, kwargs: &Kwargs) -> Result<Value, anyhow::Error> {
    let sep = kwargs.get("sep").and_then(Value::as_str).unwrap_or("");
    let parts = args
        .iter()
        .map(|value| {
            value
                .as_str()
                .ok_or_else(|| anyhow!("concat expects strings, got {}", value))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Value::from(parts.join(sep)))
}

pub static COMPUTE: JobFunction = JobFunction::new("compute", compute);
pub static SHADOW_COMPUTE: JobFunction = JobFunction::new("compute", shadow_compute);

inventory::submit!(JobFunction::new("concat", concat));
inventory::submit!(JobFunction::new("scaled_sum", compute));
