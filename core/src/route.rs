#![deny(missing_docs)]

//! # Argument Routing
//!
//! Lays a merged positional argument list out onto the parts of an HTTP
//! request: path parameters first, then the query object, then the body.
//! Performing the request is left to the caller.

use crate::error::{AppError, AppResult};
use serde_json::Value;

/// Which request parts an operation takes, in argument order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteShape {
    /// Number of path parameters.
    pub parameters: usize,
    /// Whether a query object follows the path parameters.
    pub query: bool,
    /// Whether a request body comes last.
    pub body: bool,
}

/// Arguments assigned to the parts of a request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteArguments {
    /// Path parameter values, in path order.
    pub parameters: Vec<Value>,
    /// Query object.
    pub query: Option<Value>,
    /// Request body.
    pub body: Option<Value>,
}

impl RouteShape {
    /// Shape of an operation on `path`, counting its `{name}` segments.
    pub fn for_path(path: &str, query: bool, body: bool) -> Self {
        let parameters = path
            .split('/')
            .filter(|segment| segment.starts_with('{') && segment.ends_with('}'))
            .count();
        Self {
            parameters,
            query,
            body,
        }
    }

    /// Number of arguments the operation expects.
    pub fn arity(&self) -> usize {
        self.parameters + usize::from(self.query) + usize::from(self.body)
    }

    /// Assigns `arguments` to path parameters, query and body.
    pub fn split(&self, arguments: Vec<Value>) -> AppResult<RouteArguments> {
        if arguments.len() != self.arity() {
            return Err(AppError::General(format!(
                "Expected {} arguments for this route, received {}",
                self.arity(),
                arguments.len()
            )));
        }
        let mut rest = arguments.into_iter();
        let parameters = rest.by_ref().take(self.parameters).collect();
        let query = if self.query { rest.next() } else { None };
        let body = if self.body { rest.next() } else { None };
        Ok(RouteArguments {
            parameters,
            query,
            body,
        })
    }
}
