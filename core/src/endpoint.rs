//! Declarative endpoint descriptions and call rendering.
//!
//! An [`Endpoint`] is static data: a path template with `{placeholders}`
//! and the query parameters the endpoint declares. A [`Call`] binds values
//! to one endpoint and renders them into a path and an ordered query,
//! checking the values against the declaration. The concrete endpoint
//! table lives in [`crate::catalog`].

use crate::error::ApiError;

/// A query parameter declared by an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryParam {
    pub name: &'static str,
    pub required: bool,
}

impl QueryParam {
    pub const fn required(name: &'static str) -> Self {
        Self { name, required: true }
    }

    pub const fn optional(name: &'static str) -> Self {
        Self { name, required: false }
    }
}

/// One API operation: name, path template and declared query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub name: &'static str,
    pub path: &'static str,
    /// Declaration order is wire order.
    pub query: &'static [QueryParam],
}

impl Endpoint {
    /// Placeholder names in the path template, in order.
    pub fn placeholders(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        let mut rest = self.path;
        while let Some(open) = rest.find('{') {
            let Some(close) = rest[open..].find('}') else {
                break;
            };
            names.push(&rest[open + 1..open + close]);
            rest = &rest[open + close + 1..];
        }
        names
    }

    /// True when the endpoint takes the key as an `authKey` query parameter.
    pub fn requires_auth_key(&self) -> bool {
        self.query.iter().any(|p| p.name == "authKey" && p.required)
    }
}

/// Values bound to an [`Endpoint`], ready to be rendered.
#[derive(Debug, Clone)]
pub struct Call {
    endpoint: &'static Endpoint,
    segments: Vec<(&'static str, String)>,
    query: Vec<(&'static str, String)>,
}

impl Call {
    pub fn new(endpoint: &'static Endpoint) -> Self {
        Self {
            endpoint,
            segments: Vec::new(),
            query: Vec::new(),
        }
    }

    pub fn endpoint(&self) -> &'static Endpoint {
        self.endpoint
    }

    /// Bind a path placeholder.
    pub fn segment(mut self, name: &'static str, value: impl ToString) -> Self {
        self.segments.push((name, value.to_string()));
        self
    }

    /// Bind a query parameter.
    pub fn query(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.query.push((name, value.into()));
        self
    }

    /// Bind a query parameter only when a value is present.
    pub fn query_opt<V: Into<String>>(self, name: &'static str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.query(name, value),
            None => self,
        }
    }

    /// Render the path and the query in declaration order.
    ///
    /// Empty optional values are dropped. Fails when a placeholder is left
    /// unbound, a segment or query name is not declared, or a required
    /// query value is missing or empty.
    pub fn render(&self) -> Result<(String, Vec<(String, String)>), ApiError> {
        let path = self.render_path()?;

        for (name, _) in &self.query {
            if !self.endpoint.query.iter().any(|p| p.name == *name) {
                return Err(self.invalid(format!("undeclared query parameter `{name}`")));
            }
        }

        let mut query = Vec::new();
        for param in self.endpoint.query {
            let value = self
                .query
                .iter()
                .find(|(name, _)| *name == param.name)
                .map(|(_, v)| v.as_str())
                .filter(|v| !v.is_empty());
            match value {
                Some(v) => query.push((param.name.to_string(), v.to_string())),
                None if param.required => {
                    return Err(self.invalid(format!("missing required query parameter `{}`", param.name)));
                }
                None => {}
            }
        }

        Ok((path, query))
    }

    fn render_path(&self) -> Result<String, ApiError> {
        let placeholders = self.endpoint.placeholders();
        for (name, _) in &self.segments {
            if !placeholders.contains(name) {
                return Err(self.invalid(format!("undeclared path segment `{name}`")));
            }
        }

        let mut path = self.endpoint.path.to_string();
        for name in placeholders {
            let value = self
                .segments
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, v)| v.as_str())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| self.invalid(format!("unbound path segment `{name}`")))?;
            path = path.replace(&format!("{{{name}}}"), &urlencoding::encode(value));
        }
        Ok(path)
    }

    fn invalid(&self, message: String) -> ApiError {
        ApiError::InvalidRequest {
            endpoint: self.endpoint.name,
            message,
        }
    }
}
