//! The user-facing chat response envelope.

use serde::{Deserialize, Serialize};

/// Response for one chat turn.
///
/// Successful classifications (including zero-result ones) carry a rendered
/// result list and its length; rejections carry only the flag and message,
/// and the `results`/`count` keys are absent from the serialized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_shape_omits_results_and_count() {
        let reply = ChatReply {
            success: false,
            message: "Sorry, only movies and TV.".into(),
            results: None,
            count: None,
        };
        let json = serde_json::to_value(&reply).unwrap();
        let obj = json.as_object().unwrap();
        assert!(!obj.contains_key("results"));
        assert!(!obj.contains_key("count"));
        assert_eq!(obj["success"], false);
    }

    #[test]
    fn success_shape_keeps_empty_results() {
        let reply = ChatReply {
            success: true,
            message: "No results found.".into(),
            results: Some(vec![]),
            count: Some(0),
        };
        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(json["results"], serde_json::json!([]));
        assert_eq!(json["count"], 0);
    }
}
