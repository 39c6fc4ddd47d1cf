use bumpalo::collections::Vec;
use bumpalo::Bump;
use std::cell::RefCell;

use crate::ast::ASTContext;
use crate::error::{Error, Result};

/// A single message that a validation rule has reported, tagged with the rule's name.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct ValidationError<'a> {
    pub rule: &'static str,
    pub message: &'a str,
}

/// The `ValidationContext` carrying a reference to the AST Context's arena and a list of errors.
///
/// New errors are added to the list as validation continues to issue error messages if validation
/// has failed on a document. Rules only ever hold shared references to the context while a
/// document is walked, which is why the list sits behind a `RefCell`.
pub struct ValidationContext<'a> {
    pub arena: &'a Bump,
    errors: RefCell<Vec<'a, ValidationError<'a>>>,
}

impl<'a> ValidationContext<'a> {
    /// Create a new `ValidationContext` given an AST Context.
    pub fn new(ctx: &'a ASTContext) -> Self {
        ValidationContext {
            arena: &ctx.arena,
            errors: RefCell::new(Vec::new_in(&ctx.arena)),
        }
    }

    /// Returns an [`ErrorReporter`] which adds errors on behalf of the rule called `rule`.
    #[inline]
    pub fn reporter(&self, rule: &'static str) -> ErrorReporter<'a, '_> {
        ErrorReporter {
            rule,
            context: self,
        }
    }

    /// Add an error to the list of errors in the `ValidationContext`.
    ///
    /// A message that the same rule has already reported is only kept once, since fragments are
    /// walked both on their own and wherever they're spread.
    pub fn add_error<S: AsRef<str>>(&self, rule: &'static str, message: S) {
        let message = message.as_ref();
        let mut errors = self.errors.borrow_mut();
        let is_duplicate = errors
            .iter()
            .any(|error| error.rule == rule && error.message == message);
        if !is_duplicate {
            errors.push(ValidationError {
                rule,
                message: self.arena.alloc_str(message),
            });
        }
    }

    /// Returns all errors reported so far, in the order they were reported in.
    pub fn errors(&self) -> std::vec::Vec<ValidationError<'a>> {
        self.errors.borrow().to_vec()
    }

    /// Returns the number of reported errors.
    #[inline]
    pub fn len(&self) -> usize {
        self.errors.borrow().len()
    }

    /// Checks whether no errors have been reported.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.errors.borrow().is_empty()
    }

    /// Serializes all reported errors to a JSON array of `{ "rule", "message" }` objects.
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self.errors.borrow().as_slice())
    }

    /// Convert the context into a result which carries an error if validation has failed on the
    /// current document.
    pub fn to_result(self) -> Result<()> {
        let errors = self.errors.into_inner();
        if errors.is_empty() {
            Ok(())
        } else {
            let mut context = String::new();
            let mut is_first = true;
            for error in errors.iter() {
                if is_first {
                    is_first = false;
                } else {
                    context.push('\n');
                }
                context.push_str("- ");
                context.push_str(error.message);
            }
            Err(Error::new_with_context("Document failed validation", context))
        }
    }
}

/// A handle that a single rule uses to report errors to the [`ValidationContext`].
///
/// Reporters are `Copy`, so a rule may move one into every observer it registers.
#[derive(Clone, Copy)]
pub struct ErrorReporter<'a, 'v> {
    rule: &'static str,
    context: &'v ValidationContext<'a>,
}

impl<'a, 'v> ErrorReporter<'a, 'v> {
    /// Report an error message for this reporter's rule.
    #[inline]
    pub fn report<S: AsRef<str>>(&self, message: S) {
        self.context.add_error(self.rule, message);
    }

    /// Returns the name of the rule this reporter reports for.
    #[inline]
    pub fn rule(&self) -> &'static str {
        self.rule
    }
}
