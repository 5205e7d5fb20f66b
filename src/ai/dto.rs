use serde::{Deserialize, Serialize};

/// Transform request bodies. `text` is checked for presence in the handler
/// so a missing field reports 400 rather than a deserialization rejection;
/// the selector defaults are applied there too.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImproveRequest {
    pub text: Option<String>,
    pub improvement_type: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    pub text: Option<String>,
    pub target_language: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplainRequest {
    pub text: Option<String>,
    pub analysis_type: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeRequest {
    pub text: Option<String>,
    pub summary_length: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImproveResponse {
    pub success: bool,
    pub original_text: String,
    pub improved_text: String,
    pub improvement_type: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    pub success: bool,
    pub original_text: String,
    pub translated_text: String,
    pub target_language: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplainResponse {
    pub success: bool,
    pub original_text: String,
    pub analysis: String,
    pub analysis_type: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeResponse {
    pub success: bool,
    pub original_text: String,
    pub summary: String,
    pub summary_length: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_use_camel_case_selectors() {
        let req: ImproveRequest =
            serde_json::from_str(r#"{"text":"hi","improvementType":"grammar"}"#).unwrap();
        assert_eq!(req.improvement_type.as_deref(), Some("grammar"));

        let req: TranslateRequest =
            serde_json::from_str(r#"{"text":"hi","targetLanguage":"French"}"#).unwrap();
        assert_eq!(req.target_language.as_deref(), Some("French"));
    }

    #[test]
    fn selectors_are_optional() {
        let req: ExplainRequest = serde_json::from_str(r#"{"text":"hi"}"#).unwrap();
        assert!(req.analysis_type.is_none());
    }

    #[test]
    fn responses_use_camel_case_fields() {
        let json = serde_json::to_value(TranslateResponse {
            success: true,
            original_text: "hello".into(),
            translated_text: "bonjour".into(),
            target_language: "French".into(),
        })
        .unwrap();
        assert_eq!(json["originalText"], "hello");
        assert_eq!(json["translatedText"], "bonjour");
        assert_eq!(json["targetLanguage"], "French");
    }
}
