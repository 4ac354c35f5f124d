use serde::Serialize;

/// The uniform envelope every endpoint answers with.
#[derive(Serialize, Debug, Clone)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        ApiResponse {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn message(message: impl Into<String>) -> Self {
        ApiResponse {
            success: true,
            message: message.into(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_shape() {
        let reply = ApiResponse::ok(vec![1, 2, 3], "Quizzes retrieved successfully");
        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Quizzes retrieved successfully");
        assert_eq!(json["data"], serde_json::json!([1, 2, 3]));
    }

    #[test]
    fn message_only_envelope_has_null_data() {
        let reply = ApiResponse::<()>::message("Quiz abc deleted");
        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(json["success"], true);
        assert!(json["data"].is_null());
    }
}
