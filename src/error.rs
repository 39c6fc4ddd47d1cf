//! # Error and Result for this crate
//!
//! This crate defines a common [Error] structure that's used across this crate, or that certain
//! utilities convert their errors to.
//!
//! Walking a document never produces errors by itself. Unknown types, fields, directives,
//! arguments, or fragments are handed to observers as absent values instead, and only the
//! [validate](crate::validate) module turns what its rules report into an [Error].

use std::{error, fmt, result};

/// This crate's result type using the [Error] structure.
pub type Result<T> = result::Result<T, Error>;

/// This crate's error structure which internal errors are converted into.
///
/// The error is split into a general message and a context string. For validation the context
/// is populated with a list of errors that the validation rules have reported.
///
/// The Error implements both the [`fmt::Display`] and [`fmt::Debug`] traits. It also implements
/// [`error::Error`] so that it can be used with existing patterns for error handling.
#[derive(PartialEq, Eq, Clone)]
pub struct Error {
    pub(crate) message: String,
    pub(crate) context: Option<String>,
}

impl Error {
    /// Create a new Error with only a main message from an input string.
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
            context: None,
        }
    }

    /// Create a new Error with a main message and a context string from two input strings.
    pub fn new_with_context<M: Into<String>, C: Into<String>>(message: M, context: C) -> Self {
        Self {
            message: message.into(),
            context: Some(context.into()),
        }
    }

    /// Returns the message of the current error. The context is discarded.
    pub fn message(&self) -> &str {
        self.message.as_ref()
    }

    /// Returns the context of the current error, if any was attached.
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    /// Formats this error, with the option to include the context information as well,
    /// which will cause the string to be multi-line.
    pub fn print(&self, include_ctx: bool) -> String {
        let formatted = format!("GraphQL Error: {}", self.message);
        match self.context {
            Some(ref context) if include_ctx => format!("{}\n{}", formatted, context),
            _ => formatted,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.print(true))
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n{}\n", self)
    }
}

impl error::Error for Error {}
