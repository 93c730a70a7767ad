use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::{AUTHORIZATION, COOKIE};
use reqwest::RequestBuilder;
use serde::{Deserialize, Serialize};

/// Username/password pair sent to `POST /auth` or as basic auth
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// `Authorization` header value: `Basic base64(username:password)`
    pub fn basic_auth_header(&self) -> String {
        let raw = format!("{}:{}", self.username, self.password);
        format!("Basic {}", STANDARD.encode(raw))
    }
}

/// Successful body of `POST /auth`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTokenResponse {
    pub token: String,
}

/// Credential attached to a mutating booking request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode<'a> {
    /// `Cookie: token=<token>`
    Token(&'a str),
    /// `Authorization: Basic ...`
    Basic(&'a Credentials),
    Anonymous,
}

impl<'a> AuthMode<'a> {
    /// Token wins over basic auth; an empty token counts as no token
    pub fn resolve(token: Option<&'a str>, basic: Option<&'a Credentials>) -> Self {
        match (token.filter(|t| !t.is_empty()), basic) {
            (Some(token), _) => AuthMode::Token(token),
            (None, Some(credentials)) => AuthMode::Basic(credentials),
            (None, None) => AuthMode::Anonymous,
        }
    }

    pub fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        match self {
            AuthMode::Token(token) => builder.header(COOKIE, format!("token={}", token)),
            AuthMode::Basic(credentials) => {
                builder.header(AUTHORIZATION, credentials.basic_auth_header())
            }
            AuthMode::Anonymous => builder,
        }
    }
}
