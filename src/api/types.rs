use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::Article;

/// Shown when a rejected login carries no usable explanation.
pub const LOGIN_FAILED_FALLBACK: &str = "Login failed";

/// Body of `POST /users/login`.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Error payload the API attaches to non-success responses.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<ErrorDetail>,
}

/// `detail` is either a list of validation issues or a single sentence.
///
/// Issues stay untyped: only the first entry's `msg` is ever read, and the
/// other entries may have any shape.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ErrorDetail {
    Issues(Vec<serde_json::Value>),
    Message(String),
    Other(serde_json::Value),
}

impl ErrorBody {
    /// Parse a response body; anything that is not a JSON object counts as absent.
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }

    /// The explanation a user should see, if the payload has one.
    pub fn message(&self) -> Option<&str> {
        match self.detail.as_ref()? {
            ErrorDetail::Issues(issues) => issues
                .first()
                .and_then(|issue| issue.get("msg"))
                .and_then(serde_json::Value::as_str)
                .filter(|msg| !msg.is_empty()),
            ErrorDetail::Message(message) if !message.is_empty() => Some(message),
            ErrorDetail::Message(_) | ErrorDetail::Other(_) => None,
        }
    }
}

/// Message for a rejected login, falling back to [`LOGIN_FAILED_FALLBACK`].
pub fn rejection_message(body: Option<&ErrorBody>) -> String {
    body.and_then(ErrorBody::message)
        .unwrap_or(LOGIN_FAILED_FALLBACK)
        .to_string()
}

/// What the API says about an accepted login. Only used for logging.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct UserSummary {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Result of a login round trip that reached the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// 2xx; the body is discarded after logging
    Accepted(Option<UserSummary>),
    /// Non-2xx with the message to display
    Rejected { status: u16, message: String },
}

/// Articles listing, either wrapped in an object or as a bare array.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ArticlesPayload {
    Wrapped { articles: Vec<Article> },
    Bare(Vec<Article>),
}

impl ArticlesPayload {
    pub fn into_articles(self) -> Vec<Article> {
        match self {
            Self::Wrapped { articles } | Self::Bare(articles) => articles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message_for(body: &str) -> String {
        rejection_message(ErrorBody::parse(body).as_ref())
    }

    #[test]
    fn test_first_validation_issue_wins() {
        let body = r#"{"detail":[{"msg":"bad password","loc":["body","password"]},{"msg":"second"}]}"#;
        assert_eq!(message_for(body), "bad password");
    }

    #[test]
    fn test_later_issues_of_any_shape_are_ignored() {
        let body = r#"{"detail":[{"msg":"bad password"},{"code":7}]}"#;
        assert_eq!(message_for(body), "bad password");

        let body = r#"{"detail":[{"msg":"bad password"},"stray",null,42]}"#;
        assert_eq!(message_for(body), "bad password");
    }

    #[test]
    fn test_issue_loc_may_be_any_shape() {
        let body = r#"{"detail":[{"msg":"bad password","loc":"body"}]}"#;
        assert_eq!(message_for(body), "bad password");
    }

    #[test]
    fn test_first_issue_without_string_msg_uses_fallback() {
        assert_eq!(message_for(r#"{"detail":[{"msg":5},{"msg":"second"}]}"#), LOGIN_FAILED_FALLBACK);
        assert_eq!(message_for(r#"{"detail":["just text"]}"#), LOGIN_FAILED_FALLBACK);
    }

    #[test]
    fn test_empty_first_msg_uses_fallback() {
        assert_eq!(message_for(r#"{"detail":[{"msg":""},{"msg":"second"}]}"#), LOGIN_FAILED_FALLBACK);
    }

    #[test]
    fn test_plain_detail_string_is_used() {
        assert_eq!(message_for(r#"{"detail":"locked"}"#), "locked");
    }

    #[test]
    fn test_unparsable_body_uses_fallback() {
        assert_eq!(message_for("<html>502 Bad Gateway</html>"), LOGIN_FAILED_FALLBACK);
        assert_eq!(message_for(""), LOGIN_FAILED_FALLBACK);
    }

    #[test]
    fn test_unusable_detail_uses_fallback() {
        assert_eq!(message_for(r#"{"detail":[]}"#), LOGIN_FAILED_FALLBACK);
        assert_eq!(message_for(r#"{"detail":""}"#), LOGIN_FAILED_FALLBACK);
        assert_eq!(message_for(r#"{"detail":null}"#), LOGIN_FAILED_FALLBACK);
        assert_eq!(message_for(r#"{"detail":42}"#), LOGIN_FAILED_FALLBACK);
        assert_eq!(message_for(r#"{"detail":[{"code":7}]}"#), LOGIN_FAILED_FALLBACK);
        assert_eq!(message_for(r#"{"error":"nope"}"#), LOGIN_FAILED_FALLBACK);
        assert_eq!(message_for(r#"["not","an","object"]"#), LOGIN_FAILED_FALLBACK);
    }

    #[test]
    fn test_login_request_serializes_as_plain_object() {
        let request = LoginRequest {
            email: "ada@example.com".to_string(),
            password: "hunter2".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"email": "ada@example.com", "password": "hunter2"})
        );
    }

    #[test]
    fn test_login_request_debug_hides_password() {
        let request = LoginRequest {
            email: "ada@example.com".to_string(),
            password: "hunter2".to_string(),
        };
        let debug = format!("{request:?}");
        assert!(debug.contains("ada@example.com"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_wrapped_and_bare_article_payloads() {
        let wrapped: ArticlesPayload =
            serde_json::from_str(r#"{"articles":[{"title":"A","description":"B"}]}"#).unwrap();
        let bare: ArticlesPayload =
            serde_json::from_str(r#"[{"title":"A","description":"B"}]"#).unwrap();
        assert_eq!(wrapped.into_articles(), bare.into_articles());
    }

    #[test]
    fn test_user_summary_from_login_response() {
        let summary: UserSummary = serde_json::from_str(
            r#"{"id":"65f0","email":"ada@example.com","username":"ada","message":"User logged in successfully"}"#,
        )
        .unwrap();
        assert_eq!(summary.username.as_deref(), Some("ada"));
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::Value;

    /// Arbitrary JSON up to a few levels deep.
    fn arb_json() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(Value::from),
            "[a-z]{0,8}".prop_map(Value::String),
        ];
        leaf.prop_recursive(3, 16, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                prop::collection::hash_map("[a-z]{1,6}", inner, 0..4)
                    .prop_map(|map| Value::Object(map.into_iter().collect())),
            ]
        })
    }

    proptest! {
        #[test]
        fn test_string_detail_round_trips_to_message(detail in "[a-zA-Z0-9 .,!?-]{1,40}") {
            let body = serde_json::json!({ "detail": detail.clone() }).to_string();
            prop_assert_eq!(rejection_message(ErrorBody::parse(&body).as_ref()), detail);
        }

        #[test]
        fn test_first_issue_msg_wins_whatever_follows(
            msg in "[a-zA-Z0-9 .,!?-]{1,40}",
            loc in arb_json(),
            rest in prop::collection::vec(arb_json(), 0..5),
        ) {
            let mut detail = vec![serde_json::json!({ "msg": msg.clone(), "loc": loc })];
            detail.extend(rest);
            let body = serde_json::json!({ "detail": detail }).to_string();
            prop_assert_eq!(rejection_message(ErrorBody::parse(&body).as_ref()), msg);
        }

        #[test]
        fn test_message_is_never_empty(body in ".*") {
            prop_assert!(!rejection_message(ErrorBody::parse(&body).as_ref()).is_empty());
        }
    }
}
