/*
 * Responsibility
 * - 管理画面 / API から届く認証設定リクエスト (AuthConfigRequest)
 * - 既知のキーは型付きフィールド、それ以外 (baseUrl, realm, scope ...) は extra に残す
 * - extra の読み取りは寛容に行う (数値や bool も文字列として扱う)
 */
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthConfigRequest {
    #[serde(default)]
    pub id: Option<String>,
    pub auth_type: String,
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub client_secret: Option<String>,
    #[serde(default)]
    pub enable_register: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AuthConfigRequest {
    pub fn new(auth_type: impl Into<String>) -> Self {
        Self {
            auth_type: auth_type.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    pub fn with_client_secret(mut self, client_secret: impl Into<String>) -> Self {
        self.client_secret = Some(client_secret.into());
        self
    }

    pub fn with_enable_register(mut self, value: impl Into<Value>) -> Self {
        self.enable_register = Some(value.into());
        self
    }

    /// Set an untyped key such as `baseUrl`, `realm` or `scope`.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn get_string(&self, key: &str) -> Option<String> {
        match self.extra.get(key)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Number(n) => Some(n.to_string()),
            other => Some(other.to_string()),
        }
    }

    /// Whether self sign-up is allowed. Absent or `null` means yes.
    pub fn enable_register(&self) -> bool {
        match &self.enable_register {
            None | Some(Value::Null) => true,
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => s.eq_ignore_ascii_case("true"),
            Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
            Some(_) => true,
        }
    }
}
