//! HTTP handlers for the wizard.
//!
//! Each step reads the caller's session (created on first contact, carried
//! in a cookie), applies the submitted form, and either redirects to the
//! next step or streams the generated workbook.

use std::collections::BTreeMap;

use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue},
    response::{IntoResponse, Redirect, Response},
    Form,
};
use tracing::info;
use uuid::Uuid;

use super::error::AppError;
use super::forms::{self, ConfigForm, DaysForm};
use super::state::AppState;
use super::views;
use crate::{export, scheduler};

const SESSION_COOKIE: &str = "labslot_session";
const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

fn session_from_headers(headers: &HeaderMap) -> Option<Uuid> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    for pair in cookies.split(';') {
        if let Some((name, value)) = pair.trim().split_once('=') {
            if name == SESSION_COOKIE {
                return value.trim().parse().ok();
            }
        }
    }
    None
}

/// Session id from the request cookie, or a fresh one for first contact.
fn ensure_session(headers: &HeaderMap) -> (Uuid, bool) {
    match session_from_headers(headers) {
        Some(id) => (id, false),
        None => (Uuid::new_v4(), true),
    }
}

fn with_session_cookie(mut response: Response, id: Uuid, fresh: bool) -> Response {
    if fresh {
        if let Ok(value) =
            HeaderValue::from_str(&format!("{SESSION_COOKIE}={id}; Path=/; HttpOnly"))
        {
            response.headers_mut().insert(header::SET_COOKIE, value);
        }
    }
    response
}

/// GET /
///
/// Step A: render the global defaults form with the session's current values.
pub async fn config_page(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let (sid, fresh) = ensure_session(&headers);
    let snapshot = state.sessions.snapshot(sid);
    with_session_cookie(views::config_page(&snapshot.config).into_response(), sid, fresh)
}

/// POST /
///
/// Step A: validate and store the configuration, then move on to day
/// selection.
pub async fn submit_config(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<ConfigForm>,
) -> Result<Response, AppError> {
    let (sid, fresh) = ensure_session(&headers);
    state.sessions.with(sid, move |s| {
        let config = form.into_config(&s.config)?;
        s.config = config;
        Ok::<_, AppError>(())
    })?;
    info!(session = %sid, "stored experiment configuration");
    Ok(with_session_cookie(
        Redirect::to("/select_days").into_response(),
        sid,
        fresh,
    ))
}

/// GET /select_days
pub async fn select_days_page(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let (sid, fresh) = ensure_session(&headers);
    let snapshot = state.sessions.snapshot(sid);
    with_session_cookie(views::select_days_page(&snapshot).into_response(), sid, fresh)
}

/// POST /select_days
///
/// Step B: parse the day list, seed each day's window from the defaults,
/// and move on to verification.
pub async fn submit_days(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<DaysForm>,
) -> Result<Response, AppError> {
    let (sid, fresh) = ensure_session(&headers);
    let days = form.into_days()?;
    info!(session = %sid, count = days.len(), "selected experiment days");
    state.sessions.with(sid, move |s| s.set_days(days));
    Ok(with_session_cookie(
        Redirect::to("/verify_schedule").into_response(),
        sid,
        fresh,
    ))
}

/// GET /verify_schedule
pub async fn verify_schedule_page(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let (sid, fresh) = ensure_session(&headers);
    let snapshot = state.sessions.snapshot(sid);
    if snapshot.days.is_empty() {
        return Err(AppError::BadRequest(
            "no experiment days selected yet".into(),
        ));
    }
    Ok(with_session_cookie(
        views::verify_page(&snapshot).into_response(),
        sid,
        fresh,
    ))
}

/// POST /verify_schedule
///
/// Step C: apply the per-day overrides, generate the schedule, and return
/// the workbook as a download. The session is discarded afterwards; a new
/// run starts over from step A.
pub async fn submit_verify(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(fields): Form<BTreeMap<String, String>>,
) -> Result<Response, AppError> {
    let (sid, fresh) = ensure_session(&headers);
    let rows = state.sessions.with(sid, |s| {
        if s.days.is_empty() {
            return Err(AppError::BadRequest(
                "no experiment days selected yet".into(),
            ));
        }
        forms::apply_overrides(s, &fields)?;
        Ok(scheduler::generate(&s.config, &s.days, &s.windows)?)
    })?;
    let bytes = export::write_workbook(&rows)?;
    state.sessions.remove(sid);
    info!(session = %sid, rows = rows.len(), "generated schedule workbook");

    let response = (
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"experiment_schedule.xlsx\"",
            ),
        ],
        bytes,
    )
        .into_response();
    Ok(with_session_cookie(response, sid, fresh))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_cookie_parsing() {
        let id = Uuid::new_v4();
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("other=1; {SESSION_COOKIE}={id}; x=2")).unwrap(),
        );
        assert_eq!(session_from_headers(&headers), Some(id));
    }

    #[test]
    fn test_missing_or_garbage_cookie_starts_fresh() {
        let headers = HeaderMap::new();
        let (_, fresh) = ensure_session(&headers);
        assert!(fresh);

        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("labslot_session=not-a-uuid"),
        );
        let (_, fresh) = ensure_session(&headers);
        assert!(fresh);
    }
}
