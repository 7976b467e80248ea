use std::sync::Arc;
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    Json,
};
use sarvian_common::{screen, validate_email, validate_name, LeadRequest, Screening};
use serde_json::{json, Value};
use tracing::{error, info};

use crate::AppState;

type ContactResult = Result<Json<Value>, (StatusCode, Json<Value>)>;

fn accepted() -> Json<Value> {
    Json(json!({"ok": true}))
}

/// Parses and validates the intake body. Phone is optional here; the ten
/// digit rule is enforced by the form before it ever posts.
fn parse_lead(body: &[u8]) -> Result<LeadRequest, String> {
    let lead: LeadRequest = serde_json::from_slice(body).map_err(|e| e.to_string())?;
    validate_name(&lead.name).map_err(|e| e.to_string())?;
    validate_email(&lead.email).map_err(|e| e.to_string())?;
    Ok(lead)
}

pub async fn submit_lead(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> ContactResult {
    let lead = parse_lead(&body).map_err(|reason| {
        info!("Rejected contact payload: {}", reason);
        (StatusCode::UNPROCESSABLE_ENTITY, Json(json!({"ok": false})))
    })?;

    let now = chrono::Utc::now().timestamp_millis() as f64;
    match screen(&lead, now) {
        Screening::Honeypot => {
            info!("Contact honeypot filled, dropping lead silently");
            return Ok(accepted());
        }
        Screening::TooFast => {
            info!("Contact form submitted too fast, dropping lead silently");
            return Ok(accepted());
        }
        Screening::Accept => {}
    }

    state.notifier.notify(lead).await.map_err(|e| {
        error!("Contact email error: {}", e);
        (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"ok": false})))
    })?;

    info!("Contact lead delivered");
    Ok(accepted())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::sanity::MockContentSource;
    use crate::build_router;
    use crate::utils::lead_mailer::{MockLeadNotifier, NotifyError};
    use axum::body::Body;
    use axum::http::{header, Request};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn now_ms() -> f64 {
        chrono::Utc::now().timestamp_millis() as f64
    }

    fn app(notifier: MockLeadNotifier) -> axum::Router {
        build_router(Arc::new(AppState {
            content: Arc::new(MockContentSource::new()),
            notifier: Arc::new(notifier),
        }))
    }

    async fn post(app: axum::Router, body: Value) -> (StatusCode, Value) {
        post_raw(app, body.to_string()).await
    }

    async fn post_raw(app: axum::Router, body: String) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::post("/api/contact")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn genuine_lead_is_sent_once() {
        let mut notifier = MockLeadNotifier::new();
        notifier
            .expect_notify()
            .withf(|lead| {
                lead.name == "Jane Doe"
                    && lead.email == "jane@example.com"
                    && lead.phone.as_deref() == Some("(954) 444-4803")
            })
            .times(1)
            .returning(|_| Ok(()));

        let (status, body) = post(
            app(notifier),
            json!({
                "name": "Jane Doe",
                "email": "jane@example.com",
                "phone": "(954) 444-4803",
                "company": "",
                "ts": now_ms() - 2000.0
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"ok": true}));
    }

    #[tokio::test]
    async fn honeypot_reports_success_without_sending() {
        let mut notifier = MockLeadNotifier::new();
        notifier.expect_notify().times(0);

        let (status, body) = post(
            app(notifier),
            json!({"name": "Bot", "email": "bot@example.com", "company": "Acme", "ts": now_ms() - 9000.0}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ok"], true);
    }

    #[tokio::test]
    async fn fast_zero_or_missing_timestamp_reports_success_without_sending() {
        for ts in [Some(now_ms()), Some(0.0), None] {
            let mut notifier = MockLeadNotifier::new();
            notifier.expect_notify().times(0);
            let mut payload = json!({"name": "Jane Doe", "email": "jane@example.com"});
            if let Some(ts) = ts {
                payload["ts"] = json!(ts);
            }
            let (status, body) = post(app(notifier), payload).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["ok"], true);
        }
    }

    #[tokio::test]
    async fn schema_failures_are_unprocessable() {
        let cases = [
            json!({"name": "A", "email": "jane@example.com", "ts": now_ms() - 5000.0}),
            json!({"name": "Jane Doe", "email": "not-an-email", "ts": now_ms() - 5000.0}),
            json!({"email": "jane@example.com"}),
            json!({"name": "Jane Doe", "email": "jane@example.com", "ts": "soon"}),
            json!({"name": "Jane Doe", "email": "jane@example.com", "ts": null}),
        ];
        for payload in cases {
            let mut notifier = MockLeadNotifier::new();
            notifier.expect_notify().times(0);
            let (status, body) = post(app(notifier), payload).await;
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
            assert_eq!(body, json!({"ok": false}));
        }
    }

    #[tokio::test]
    async fn malformed_json_is_unprocessable() {
        let mut notifier = MockLeadNotifier::new();
        notifier.expect_notify().times(0);
        let (status, _) = post_raw(app(notifier), "{name:".to_string()).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn dispatch_failure_is_a_server_error() {
        let mut notifier = MockLeadNotifier::new();
        notifier
            .expect_notify()
            .times(1)
            .returning(|_| Err(NotifyError::Rejected("upstream unavailable".to_string())));

        let (status, body) = post(
            app(notifier),
            json!({"name": "Jane Doe", "email": "jane@example.com", "ts": now_ms() - 2000.0}),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"ok": false}));
    }
}
