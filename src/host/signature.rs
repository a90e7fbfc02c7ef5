use crate::{
    error::CallError,
    value::{Args, Kwargs, Value},
};

/// Declared parameter list of a host operation.
#[derive(Debug, Clone, Copy)]
pub struct Signature {
    pub operation: &'static str,
    pub params: &'static [&'static str],
}

impl Signature {
    pub const fn new(operation: &'static str, params: &'static [&'static str]) -> Self {
        Self { operation, params }
    }

    /// Binds positional then named arguments onto the declared parameters.
    ///
    /// The returned values are in parameter order.
    pub fn bind<'a>(
        &self,
        args: &'a Args,
        kwargs: &'a Kwargs,
    ) -> Result<Vec<&'a Value>, CallError> {
        if args.len() > self.params.len() {
            return Err(CallError::TooManyArguments {
                operation: self.operation,
                expected: self.params.len(),
                given: args.len(),
            });
        }

        let unknown = kwargs
            .iter()
            .find(|(name, _)| !self.params.iter().any(|param| param == name));
        if let Some((name, _)) = unknown {
            return Err(CallError::UnexpectedKeyword {
                operation: self.operation,
                name: name.to_string(),
            });
        }

        self.params
            .iter()
            .enumerate()
            .map(|(position, &name)| match (args.get(position), kwargs.get(name)) {
                (Some(_), Some(_)) => Err(CallError::DuplicateArgument {
                    operation: self.operation,
                    name,
                }),
                (Some(value), None) | (None, Some(value)) => Ok(value),
                (None, None) => Err(CallError::MissingArgument {
                    operation: self.operation,
                    name,
                }),
            })
            .collect()
    }
}

