use serde::{Deserialize, Serialize};

/// Request body for saving the account's note. Empty content is allowed;
/// saving `""` clears the document.
#[derive(Debug, Deserialize)]
pub struct SaveNoteRequest {
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct SaveNoteResponse {
    pub message: String,
}

/// The stored note content. An account that never saved reads back as `""`.
#[derive(Debug, Serialize)]
pub struct NoteResponse {
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_request_accepts_empty_content() {
        let req: SaveNoteRequest = serde_json::from_str(r#"{"content":""}"#).unwrap();
        assert_eq!(req.content, "");
    }

    #[test]
    fn note_response_serializes_content() {
        let json = serde_json::to_value(NoteResponse {
            content: "draft".into(),
        })
        .unwrap();
        assert_eq!(json["content"], "draft");
    }
}
