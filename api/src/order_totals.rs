//! Server-owned order totals, refreshed by polling.

use serde::Deserialize;
use serde::Serialize;

/// The combined totals returned by `GET_ORDER`.
///
/// All four counters are owned by the backend. The client never mutates
/// them; it only replaces the whole value with a newer poll result, so
/// between polls the display is stale by up to one poll interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTotals {
    pub curry: u64,
    pub nan: u64,
    pub undelivered_curry: u64,
    pub undelivered_nan: u64,
}

/// Response of the older `GET_ALL_ORDER` query: lifetime totals only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllOrderTotals {
    pub curry: u64,
    pub nan: u64,
}

/// Response of the older `GET_UNDELIVERED_ORDER` query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UndeliveredTotals {
    pub undelivered_curry: u64,
    pub undelivered_nan: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combined_totals_decode_verbatim() {
        let totals: OrderTotals = serde_json::from_value(serde_json::json!({
            "curry": 5,
            "nan": 2,
            "undeliveredCurry": 1,
            "undeliveredNan": 0,
        }))
        .unwrap();

        assert_eq!(
            totals,
            OrderTotals {
                curry: 5,
                nan: 2,
                undelivered_curry: 1,
                undelivered_nan: 0,
            }
        );
    }

    #[test]
    fn superseded_query_responses_decode() {
        let all: AllOrderTotals =
            serde_json::from_value(serde_json::json!({ "curry": 7, "nan": 4 })).unwrap();
        assert_eq!(all, AllOrderTotals { curry: 7, nan: 4 });

        let undelivered: UndeliveredTotals = serde_json::from_value(serde_json::json!({
            "undeliveredCurry": 2,
            "undeliveredNan": 1,
        }))
        .unwrap();
        assert_eq!(
            undelivered,
            UndeliveredTotals {
                undelivered_curry: 2,
                undelivered_nan: 1,
            }
        );
    }
}
