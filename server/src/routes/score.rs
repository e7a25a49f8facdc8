use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tradle_shared::ScoreSubmission;
use tracing::{debug, warn};

use crate::state::AppState;

/// `POST /tradle/score`: record one finished game.
pub async fn submit_score(
    State(state): State<AppState>,
    payload: Result<Json<ScoreSubmission>, JsonRejection>,
) -> Result<Response, StatusCode> {
    let Json(submission) = payload.map_err(|rejection| {
        state.observability.record_rejected();
        debug!(error = %rejection, "rejected unreadable score submission");
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            StatusCode::PAYLOAD_TOO_LARGE
        } else {
            StatusCode::BAD_REQUEST
        }
    })?;

    if let Err(e) = submission.validate() {
        state.observability.record_rejected();
        debug!(error = %e, "rejected invalid score submission");
        return Err(StatusCode::BAD_REQUEST);
    }

    state.observability.record_accepted(submission.won);

    if let Some(pool) = state.db.as_ref() {
        match persist_score(pool, &submission).await {
            Ok(()) => state.observability.record_persisted(),
            Err(e) => {
                state.observability.record_persist_failure();
                warn!(error = %e, "failed to persist score submission");
            }
        }
    }

    tracing::info!(
        won = submission.won,
        tries = submission.tries(),
        from = %submission.answer[0].code,
        to = %submission.answer[1].code,
        "score submission accepted"
    );

    Ok((
        StatusCode::ACCEPTED,
        Json(serde_json::json!({ "status": "accepted" })),
    )
        .into_response())
}

async fn persist_score(pool: &sqlx::PgPool, submission: &ScoreSubmission) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO tradle_scores \
         (client_date, answer_from, answer_to, won, tries, guesses, ip) \
         VALUES ($1, $2, $3, $4, $5, $6, $7)",
    )
    .bind(&submission.date)
    .bind(&submission.answer[0].code)
    .bind(&submission.answer[1].code)
    .bind(submission.won)
    .bind(submission.tries() as i16)
    .bind(sqlx::types::Json(&submission.guesses))
    .bind(submission.ip.as_ref().map(sqlx::types::Json))
    .execute(pool)
    .await?;
    Ok(())
}
