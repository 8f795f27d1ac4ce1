use reqwest::Method;
use serde::Serialize;

use crate::{Error, Result};

/// One logical API call: method, path template, parameters, optional JSON
/// body and the set of status codes declared as success.
///
/// Every endpoint function builds one of these and hands it to the shared
/// executor; endpoints differ only in the descriptor contents.
#[derive(Debug)]
pub(crate) struct Operation {
    pub method: Method,
    pub path: &'static str,
    pub path_params: Vec<(&'static str, String)>,
    pub query_params: Vec<(&'static str, String)>,
    pub header_params: Vec<(&'static str, String)>,
    /// Serialized once up front; the same bytes are reused on every attempt.
    pub body: Option<Vec<u8>>,
    /// Exact-match success codes, e.g. `[200, 201]`.
    pub success: &'static [u16],
}

impl Operation {
    pub fn new(method: Method, path: &'static str) -> Self {
        Self {
            method,
            path,
            path_params: Vec::new(),
            query_params: Vec::new(),
            header_params: Vec::new(),
            body: None,
            success: &[200],
        }
    }

    pub fn path_param(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.path_params.push((name, value.into()));
        self
    }

    /// Attaches a query parameter; an absent value is omitted entirely
    /// rather than sent empty.
    pub fn query_param(mut self, name: &'static str, value: Option<String>) -> Self {
        if let Some(value) = value {
            self.query_params.push((name, value));
        }
        self
    }

    /// Attaches a header parameter; an absent value is omitted entirely.
    /// Per-operation headers win over client defaults on conflict.
    pub fn header_param(mut self, name: &'static str, value: Option<String>) -> Self {
        if let Some(value) = value {
            self.header_params.push((name, value));
        }
        self
    }

    pub fn json_body<T: Serialize>(mut self, body: &T) -> Result<Self> {
        let bytes = serde_json::to_vec(body)
            .map_err(|err| Error::MalformedOperation(format!("unserializable body: {err}")))?;
        self.body = Some(bytes);
        Ok(self)
    }

    pub fn success(mut self, codes: &'static [u16]) -> Self {
        self.success = codes;
        self
    }

    /// Expands the path template, substituting `{name}` placeholders.
    ///
    /// A placeholder with no matching path parameter is a caller error.
    pub fn expand_path(&self) -> Result<String> {
        let mut path = self.path.to_owned();
        for (name, value) in &self.path_params {
            path = path.replace(&format!("{{{name}}}"), value);
        }
        if let Some(start) = path.find('{') {
            let end = path[start..]
                .find('}')
                .map_or(path.len(), |offset| start + offset + 1);
            return Err(Error::MalformedOperation(format!(
                "unresolved path placeholder '{}' in '{}'",
                &path[start..end],
                self.path
            )));
        }
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use reqwest::Method;

    use super::Operation;
    use crate::Error;

    #[test]
    fn expand_path_substitutes_placeholders() {
        let op = Operation::new(Method::GET, "/api/v1/app/{app_id}/msg/{msg_id}")
            .path_param("app_id", "app_42")
            .path_param("msg_id", "msg_7");
        assert_eq!(
            op.expand_path().expect("must expand"),
            "/api/v1/app/app_42/msg/msg_7"
        );
    }

    #[test]
    fn expand_path_rejects_unresolved_placeholder() {
        let op = Operation::new(Method::GET, "/api/v1/app/{app_id}");
        let err = op.expand_path().expect_err("must fail");
        match err {
            Error::MalformedOperation(message) => assert!(message.contains("{app_id}")),
            _ => panic!("expected malformed operation error"),
        }
    }

    #[test]
    fn absent_query_and_header_params_are_omitted() {
        let op = Operation::new(Method::GET, "/api/v1/app")
            .query_param("limit", Some("10".to_owned()))
            .query_param("iterator", None)
            .header_param("idempotency-key", None);
        assert_eq!(op.query_params, vec![("limit", "10".to_owned())]);
        assert!(op.header_params.is_empty());
    }

    #[test]
    fn json_body_is_serialized_once() {
        let op = Operation::new(Method::POST, "/api/v1/app")
            .json_body(&serde_json::json!({"name": "x"}))
            .expect("must serialize");
        assert_eq!(op.body.as_deref(), Some(br#"{"name":"x"}"# as &[u8]));
    }
}
