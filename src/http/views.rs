//! Minimal HTML pages for the three wizard forms.
//!
//! Presentation is deliberately bare: plain forms, no styling, no client-side
//! logic. Time fields are `<select>`s over the quarter-hour options so the
//! browser can only offer valid times, though every value is still re-parsed
//! server-side.

use std::fmt::Write;

use axum::response::Html;

use crate::models::{quarter_hours, ExperimentConfig, TimeOfDay};
use crate::session::WizardState;

fn page(title: &str, body: String) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n<html><head><title>{title}</title></head><body>\n\
         <h1>{title}</h1>\n{body}</body></html>"
    ))
}

fn time_select(name: &str, selected: TimeOfDay) -> String {
    let mut out = format!("<select name=\"{name}\">");
    for option in quarter_hours() {
        let marked = if option == selected { " selected" } else { "" };
        let _ = write!(out, "<option value=\"{option}\"{marked}>{option}</option>");
    }
    out.push_str("</select>");
    out
}

/// Step A: global defaults form.
pub fn config_page(config: &ExperimentConfig) -> Html<String> {
    let checked = if config.exclude_lunch { " checked" } else { "" };
    let body = format!(
        "<form method=\"post\" action=\"/\">\n\
         <p><label>Trial length (minutes): <input name=\"trial_length\" value=\"{trial}\"></label></p>\n\
         <p><label>Prep time (minutes): <input name=\"prep_time\" value=\"{prep}\"></label></p>\n\
         <p><label>Default start time: {start}</label></p>\n\
         <p><label>Default end time: {end}</label></p>\n\
         <p><label><input type=\"checkbox\" name=\"exclude_lunch\"{checked}> Exclude lunch break</label></p>\n\
         <p><label>Lunch start: {lunch_start}</label></p>\n\
         <p><label>Lunch end: {lunch_end}</label></p>\n\
         <p><button type=\"submit\">Next: select days</button></p>\n\
         </form>",
        trial = config.trial_length_min,
        prep = config.prep_time_min,
        start = time_select("default_start_time", config.default_start),
        end = time_select("default_end_time", config.default_end),
        lunch_start = time_select("lunch_start", config.lunch_start),
        lunch_end = time_select("lunch_end", config.lunch_end),
    );
    page("Experiment setup", body)
}

/// Step B: day selection form.
pub fn select_days_page(state: &WizardState) -> Html<String> {
    let current = state
        .days
        .iter()
        .map(|d| d.format("%Y-%m-%d").to_string())
        .collect::<Vec<_>>()
        .join(",");
    let body = format!(
        "<form method=\"post\" action=\"/select_days\">\n\
         <p><label>Experiment days (comma-separated, YYYY-MM-DD):<br>\n\
         <input name=\"experiment_days\" size=\"60\" value=\"{current}\"></label></p>\n\
         <p><button type=\"submit\">Next: verify schedule</button></p>\n\
         </form>"
    );
    page("Select experiment days", body)
}

/// Step C: per-day start/end override editor.
pub fn verify_page(state: &WizardState) -> Html<String> {
    let mut body = String::from("<form method=\"post\" action=\"/verify_schedule\">\n<table>\n");
    body.push_str("<tr><th>Date</th><th>Start</th><th>End</th></tr>\n");
    for day in &state.days {
        let day_str = day.format("%Y-%m-%d").to_string();
        let window = state.windows.get(day).copied().unwrap_or_else(|| {
            crate::models::DayWindow::from_defaults(&state.config)
        });
        let _ = write!(
            body,
            "<tr><td>{day_str}</td><td>{}</td><td>{}</td></tr>\n",
            time_select(&format!("custom_start_{day_str}"), window.start),
            time_select(&format!("custom_end_{day_str}"), window.end),
        );
    }
    body.push_str(
        "</table>\n<p><button type=\"submit\">Generate spreadsheet</button></p>\n</form>",
    );
    page("Verify schedule", body)
}
