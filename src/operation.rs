//! Operation selection.
//! Maps the `-op` name onto a typed operation and validates its parameters.

use std::fmt;

use crate::errors::TidyMoveError;
use crate::fs_ops::MatchRule;

/// The operations understood by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Move files whose name ends with a literal suffix.
    MoveByExt,
    /// Move files whose name contains a literal substring.
    MoveByName,
}

impl Operation {
    pub const ALL: [Operation; 2] = [Operation::MoveByExt, Operation::MoveByName];

    /// Exact, case-sensitive lookup of an operation name.
    pub fn lookup(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.as_str() == name)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Operation::MoveByExt => "MoveByExt",
            Operation::MoveByName => "MoveByName",
        }
    }

    pub fn rule(self) -> MatchRule {
        match self {
            Operation::MoveByExt => MatchRule::HasExtension,
            Operation::MoveByName => MatchRule::NameContains,
        }
    }

    /// Human label of the pattern parameter, used in diagnostics.
    fn pattern_label(self) -> &'static str {
        match self {
            Operation::MoveByExt => "Extension",
            Operation::MoveByName => "File name",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated request: which rule, what pattern, and where to put the matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationRequest {
    operation: Operation,
    pattern: String,
    destination: String,
}

impl OperationRequest {
    /// Both the pattern and the destination must be non-empty.
    pub fn new(
        operation: Operation,
        pattern: impl Into<String>,
        destination: impl Into<String>,
    ) -> Result<Self, TidyMoveError> {
        let pattern = pattern.into();
        let destination = destination.into();
        if pattern.is_empty() || destination.is_empty() {
            return Err(TidyMoveError::MissingParameter {
                operation: operation.as_str(),
                parameter: operation.pattern_label(),
            });
        }
        Ok(Self {
            operation,
            pattern,
            destination,
        })
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Line announcing what the run is about to do.
    pub fn scope_message(&self, cwd: &std::path::Path) -> String {
        match self.operation {
            Operation::MoveByExt => format!(
                "Creating /{} and searching for files with {} extension in {} directory",
                self.destination,
                self.pattern,
                cwd.display()
            ),
            Operation::MoveByName => format!(
                "Creating /{} and searching for files with {} name or similar in {} directory",
                self.destination,
                self.pattern,
                cwd.display()
            ),
        }
    }

    /// Message printed once every move has been attempted.
    pub fn summary_message(&self, cwd: &std::path::Path) -> String {
        format!(
            "\nAll files that fulfill the pattern {} in {} were moved.\n",
            self.pattern,
            cwd.display()
        )
    }
}
