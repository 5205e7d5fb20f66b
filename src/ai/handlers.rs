use axum::{extract::State, routing::post, Json, Router};
use tracing::{debug, error, instrument};

use crate::{
    ai::{
        dto::{
            ExplainRequest, ExplainResponse, ImproveRequest, ImproveResponse, SummarizeRequest,
            SummarizeResponse, TranslateRequest, TranslateResponse,
        },
        prompts,
    },
    auth::AuthAccount,
    error::ApiError,
    state::AppState,
};

pub fn transform_routes() -> Router<AppState> {
    Router::new()
        .route("/improve", post(improve))
        .route("/translate", post(translate))
        .route("/explain", post(explain))
        .route("/summarize", post(summarize))
}

#[instrument(skip(state, payload))]
pub async fn improve(
    State(state): State<AppState>,
    AuthAccount(claims): AuthAccount,
    Json(payload): Json<ImproveRequest>,
) -> Result<Json<ImproveResponse>, ApiError> {
    let text = required_text(payload.text)?;
    let improvement_type = payload.improvement_type.unwrap_or_else(|| "general".into());

    debug!(email = %claims.email, kind = %improvement_type, "improve requested");
    let improved_text = run(&state, prompts::improve(&text, &improvement_type)).await?;

    Ok(Json(ImproveResponse {
        success: true,
        original_text: text,
        improved_text,
        improvement_type,
    }))
}

#[instrument(skip(state, payload))]
pub async fn translate(
    State(state): State<AppState>,
    AuthAccount(claims): AuthAccount,
    Json(payload): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, ApiError> {
    let text = required_text(payload.text)?;
    let target_language = payload.target_language.unwrap_or_else(|| "Spanish".into());

    debug!(email = %claims.email, language = %target_language, "translate requested");
    let translated_text = run(&state, prompts::translate(&text, &target_language)).await?;

    Ok(Json(TranslateResponse {
        success: true,
        original_text: text,
        translated_text,
        target_language,
    }))
}

#[instrument(skip(state, payload))]
pub async fn explain(
    State(state): State<AppState>,
    AuthAccount(claims): AuthAccount,
    Json(payload): Json<ExplainRequest>,
) -> Result<Json<ExplainResponse>, ApiError> {
    let text = required_text(payload.text)?;
    let analysis_type = payload.analysis_type.unwrap_or_else(|| "general".into());

    debug!(email = %claims.email, kind = %analysis_type, "explain requested");
    let analysis = run(&state, prompts::explain(&text, &analysis_type)).await?;

    Ok(Json(ExplainResponse {
        success: true,
        original_text: text,
        analysis,
        analysis_type,
    }))
}

#[instrument(skip(state, payload))]
pub async fn summarize(
    State(state): State<AppState>,
    AuthAccount(claims): AuthAccount,
    Json(payload): Json<SummarizeRequest>,
) -> Result<Json<SummarizeResponse>, ApiError> {
    let text = required_text(payload.text)?;
    let summary_length = payload.summary_length.unwrap_or_else(|| "medium".into());

    debug!(email = %claims.email, length = %summary_length, "summarize requested");
    let summary = run(&state, prompts::summarize(&text, &summary_length)).await?;

    Ok(Json(SummarizeResponse {
        success: true,
        original_text: text,
        summary,
        summary_length,
    }))
}

fn required_text(text: Option<String>) -> Result<String, ApiError> {
    match text {
        Some(t) if !t.trim().is_empty() => Ok(t),
        _ => Err(ApiError::MissingText),
    }
}

/// Forward one instruction to the provider. Failures surface immediately
/// with the provider detail; no retry is attempted.
async fn run(state: &AppState, instruction: String) -> Result<String, ApiError> {
    state.ai.complete(&instruction).await.map_err(|e| {
        error!(error = %e, "text transform failed");
        ApiError::Upstream(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;

    #[test]
    fn required_text_rejects_missing_and_blank() {
        assert!(required_text(None).is_err());
        assert!(required_text(Some("".into())).is_err());
        assert!(required_text(Some("   ".into())).is_err());
        assert_eq!(required_text(Some("hi".into())).unwrap(), "hi");
    }

    #[tokio::test]
    async fn run_relays_provider_output() {
        let state = AppState::fake();
        let out = run(&state, prompts::translate("hello", "French"))
            .await
            .unwrap();
        assert!(out.contains("hello"));
        assert!(out.contains("French"));
    }
}
