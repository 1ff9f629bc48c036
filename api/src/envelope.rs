//! The request envelope understood by the stall backend.

use serde::Serialize;
use serde_json::Value;

/// The remote methods exposed by the stall backend.
///
/// `GetOrder` returns the combined totals and supersedes the two older
/// single-purpose queries, which the backend still answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::IntoStaticStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum RpcMethod {
    GetAllOrder,
    GetUndeliveredOrder,
    GetOrder,
    AddOrder,
    DeliverOrder,
}

impl RpcMethod {
    /// The wire name of the method (e.g. "ADD_ORDER").
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

/// The JSON body POSTed to the single stall endpoint.
///
/// The static auth token travels inside the body on every call; the
/// backend does not read HTTP headers. `params` is omitted entirely for
/// parameterless queries.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcEnvelope {
    pub auth_token: String,
    pub method: RpcMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl RpcEnvelope {
    pub fn new(auth_token: impl Into<String>, method: RpcMethod, params: Option<Value>) -> Self {
        Self {
            auth_token: auth_token.into(),
            method,
            params,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order_counts::OrderCounts;

    #[test]
    fn method_names_match_the_wire_protocol() {
        assert_eq!(RpcMethod::GetAllOrder.name(), "GET_ALL_ORDER");
        assert_eq!(RpcMethod::GetUndeliveredOrder.name(), "GET_UNDELIVERED_ORDER");
        assert_eq!(RpcMethod::GetOrder.name(), "GET_ORDER");
        assert_eq!(RpcMethod::AddOrder.name(), "ADD_ORDER");
        assert_eq!(RpcMethod::DeliverOrder.name(), "DELIVER_ORDER");
    }

    #[test]
    fn add_order_envelope_carries_counts_as_params() {
        let counts = OrderCounts { curry: 3, nan: 0 };
        let envelope = RpcEnvelope::new(
            "secret",
            RpcMethod::AddOrder,
            Some(serde_json::to_value(counts).unwrap()),
        );

        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "authToken": "secret",
                "method": "ADD_ORDER",
                "params": { "curry": 3, "nan": 0 },
            })
        );
    }

    #[test]
    fn queries_omit_the_params_field() {
        let envelope = RpcEnvelope::new("secret", RpcMethod::GetOrder, None);
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json["method"], "GET_ORDER");
        assert!(json.get("params").is_none());
    }
}
