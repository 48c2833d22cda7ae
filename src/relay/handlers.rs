use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;

use super::types::{ErrorResponse, HealthResponse};
use super::AppState;

/// What a forward attempt settled to when it did not succeed. A backend
/// rejection keeps its status and body text; anything else collapses to an
/// opaque internal error so backend details never leak to the browser.
enum RelayFailure {
    Backend { status: StatusCode, text: String },
    Internal(eyre::Report),
}

fn internal<E>(err: E) -> RelayFailure
where
    E: std::error::Error + Send + Sync + 'static,
{
    RelayFailure::Internal(eyre::Report::new(err))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
    })
}

/// Forward one multipart upload to the scoring backend and pass its JSON
/// response through with the backend's own success status. No retry, no
/// timeout override; one best-effort forward per request.
pub async fn predict(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<serde_json::Value>), (StatusCode, Json<ErrorResponse>)> {
    match forward(&state, multipart).await {
        Ok(response) => Ok(response),
        Err(RelayFailure::Backend { status, text }) => Err((
            status,
            Json(ErrorResponse {
                error: format!("Backend error: {}", text),
            }),
        )),
        Err(RelayFailure::Internal(report)) => {
            tracing::error!(error = %report, "Prediction relay failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Internal server error".to_string(),
                }),
            ))
        }
    }
}

async fn forward(
    state: &AppState,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<serde_json::Value>), RelayFailure> {
    // Rebuild the incoming form field-by-field without reading into it;
    // the backend owns the CSV schema.
    let mut form = reqwest::multipart::Form::new();
    while let Some(field) = multipart.next_field().await.map_err(internal)? {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await.map_err(internal)?;

        let mut part = reqwest::multipart::Part::bytes(data.to_vec());
        if let Some(file_name) = file_name {
            part = part.file_name(file_name);
        }
        if let Some(content_type) = content_type {
            part = part.mime_str(&content_type).map_err(internal)?;
        }
        form = form.part(name, part);
    }

    let response = state
        .http
        .post(&state.backend.predict_url)
        .multipart(form)
        .send()
        .await
        .map_err(internal)?;

    let status = response.status();
    if !status.is_success() {
        let text = response.text().await.map_err(internal)?;
        return Err(RelayFailure::Backend { status, text });
    }

    let body: serde_json::Value = response.json().await.map_err(internal)?;
    Ok((status, Json(body)))
}
