//! Wire types for the Lyzr inference chat endpoint.

use serde::Serialize;
use serde_json::Value;
use taskdesk_application::AgentReply;

/// Request body for `POST /v3/inference/chat/`
#[derive(Debug, Serialize)]
pub struct ChatBody<'a> {
    pub user_id: &'a str,
    pub agent_id: &'a str,
    pub session_id: &'a str,
    pub message: &'a str,
}

/// Build an [`AgentReply`] from a status code and the body as received.
///
/// The body is kept verbatim. Its `response` field, when present, is the
/// decoded response (itself decoded again if it is a string holding JSON);
/// otherwise the whole parsed body is, or `null` for non-JSON bodies.
pub fn decode_reply(status: u16, body: String) -> AgentReply {
    let response = match serde_json::from_str::<Value>(&body) {
        Ok(Value::Object(mut map)) => match map.remove("response") {
            Some(inner) => decode_embedded(inner),
            None => Value::Object(map),
        },
        Ok(other) => other,
        Err(_) => Value::Null,
    };

    AgentReply {
        success: (200..300).contains(&status),
        response,
        raw_response: body,
        status_code: Some(status),
    }
}

fn decode_embedded(value: Value) -> Value {
    let Value::String(text) = &value else {
        return value;
    };
    let trimmed = text.trim();
    if !(trimmed.starts_with('{') || trimmed.starts_with('[')) {
        return value;
    }
    serde_json::from_str(trimmed).unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_body_field_names() {
        let body = ChatBody {
            user_id: "u",
            agent_id: "a",
            session_id: "s",
            message: "m",
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"user_id": "u", "agent_id": "a", "session_id": "s", "message": "m"})
        );
    }

    #[test]
    fn test_response_field_is_extracted() {
        let reply = decode_reply(200, r#"{"response": "3 tasks synced", "module_outputs": {}}"#.to_string());
        assert!(reply.success);
        assert_eq!(reply.response, json!("3 tasks synced"));
        assert!(reply.raw_response.contains("module_outputs"));
    }

    #[test]
    fn test_json_string_response_is_decoded() {
        let body = json!({"response": "{\"newTasks\": []}"}).to_string();
        let reply = decode_reply(200, body);
        assert_eq!(reply.response, json!({"newTasks": []}));
    }

    #[test]
    fn test_body_without_response_field() {
        let reply = decode_reply(422, r#"{"detail": "agent not found"}"#.to_string());
        assert!(!reply.success);
        assert_eq!(reply.status_code, Some(422));
        assert_eq!(reply.response["detail"], "agent not found");
    }

    #[test]
    fn test_non_json_body() {
        let reply = decode_reply(502, "Bad Gateway".to_string());
        assert!(!reply.success);
        assert!(reply.response.is_null());
        assert_eq!(reply.raw_response, "Bad Gateway");
    }
}
