/*
 * Callables that jobs can refer to.
 * Every callable is a named static entry wrapping a plain function pointer. The address of the
 * entry is its identity, so two entries sharing a name are still different callables.
 * Entries are usually submitted with `inventory::submit!` and looked up by name,
 * but a plain `static` works as well when no lookup is needed.
 */
use crate::arguments::{Args, Kwargs};
use crate::error::JobError;
use crate::Value;
use log::debug;
use std::collections::BTreeSet;
use std::fmt::{self, Debug, Formatter};
use std::ptr;

pub type JobHandler = fn(&Args, &Kwargs) -> Result<Value, anyhow::Error>;

pub struct JobFunction {
    name: &'static str,
    handler: JobHandler,
}

impl JobFunction {
    pub const fn new(name: &'static str, handler: JobHandler) -> Self {
        JobFunction { name, handler }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The wrapped function, for whatever runner executes jobs.
    pub fn handler(&self) -> JobHandler {
        self.handler
    }

    /// Identity comparison. Entries wrapping the same function pointer are still distinct.
    pub fn is(&self, other: &JobFunction) -> bool {
        ptr::eq(self, other)
    }
}

impl Debug for JobFunction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "JobFunction({} @ {:p})", self.name, self)
    }
}

inventory::collect!(JobFunction);

pub fn functions() -> impl Iterator<Item = &'static JobFunction> {
    inventory::iter::<JobFunction>.into_iter()
}

/// Sorted names of every submitted function.
pub fn names() -> Vec<&'static str> {
    functions()
        .map(JobFunction::name)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn find(name: &str) -> Result<&'static JobFunction, JobError> {
    let mut matches = functions().filter(|function| function.name() == name);
    match (matches.next(), matches.next()) {
        (Some(function), None) => Ok(function),
        (None, _) => {
            debug!("No function registered as {}", name);
            Err(JobError::UnregisteredFunction(name.to_string()))
        }
        (Some(_), Some(_)) => {
            debug!("Function name {} is registered more than once", name);
            Err(JobError::AmbiguousFunction(name.to_string()))
        }
    }
}
