use crate::arguments::{Args, Kwargs};
use crate::error::JobError;
use crate::registry::{self, JobFunction};
use crate::util::value_kind;
use crate::Value;
use log::{debug, trace};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ptr;

/// A function call waiting to be run: which function, and with which arguments.
///
/// The same function called with different arguments is a different job. Descriptors
/// are immutable; a changed job is a new descriptor.
#[derive(Clone)]
pub struct JobDescriptor {
    function: &'static JobFunction,
    args: Args,
    kwargs: Kwargs,
    name: String,
}

impl JobDescriptor {
    pub fn new(function: &'static JobFunction, args: Args, kwargs: Kwargs) -> Self {
        let job = JobDescriptor {
            name: function.name().to_string(),
            function,
            args,
            kwargs,
        };
        trace!("Created {}", job);
        job
    }

    /// A call without arguments.
    pub fn from_function(function: &'static JobFunction) -> Self {
        JobDescriptor::new(function, Args::empty(), Kwargs::new())
    }

    /// Builds a descriptor from loosely typed values, as found in a pipeline definition.
    ///
    /// `function` must be a string naming exactly one registered [`JobFunction`],
    /// `args` an array and `kwargs` an object. Missing arguments default to empty;
    /// an explicit `null` is rejected.
    pub fn resolve(
        function: Value,
        args: Option<Value>,
        kwargs: Option<Value>,
    ) -> Result<Self, JobError> {
        let function = match function {
            Value::String(name) => registry::find(&name)?,
            other => {
                debug!("Reject callable {}", other);
                return Err(JobError::InvalidCallableKind(format!(
                    "expected a registered function name, got {}",
                    value_kind(&other)
                )));
            }
        };
        let args = match args {
            None => Args::empty(),
            Some(Value::Array(values)) => Args::from_values(values),
            Some(other) => {
                debug!("Reject positional arguments {} for {}", other, function.name());
                return Err(JobError::InvalidPositionalArgsKind(format!(
                    "expected an array, got {}",
                    value_kind(&other)
                )));
            }
        };
        let kwargs = match kwargs {
            None => Kwargs::new(),
            Some(Value::Object(map)) => Kwargs::from(map),
            Some(other) => {
                debug!("Reject keyword arguments {} for {}", other, function.name());
                return Err(JobError::InvalidKeywordArgsKind(format!(
                    "expected an object, got {}",
                    value_kind(&other)
                )));
            }
        };
        Ok(JobDescriptor::new(function, args, kwargs))
    }

    pub fn function(&self) -> &'static JobFunction {
        self.function
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &Args {
        &self.args
    }

    pub fn kwargs(&self) -> &Kwargs {
        &self.kwargs
    }

    pub fn is_same_function(&self, other: &JobDescriptor) -> bool {
        self.function.is(other.function)
    }
}

impl PartialEq for JobDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.is_same_function(other) && self.args == other.args && self.kwargs == other.kwargs
    }
}

impl Eq for JobDescriptor {}

impl Hash for JobDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        ptr::hash(self.function, state);
        self.args.hash(state);
        self.kwargs.hash(state);
    }
}

impl Display for JobDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "JobDescriptor(function={}, args={}, kwargs={})",
            self.name, self.args, self.kwargs
        )
    }
}

impl Debug for JobDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}
