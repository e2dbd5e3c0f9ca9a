use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use log::{error, info};

use crate::domain::dates::parse_today;
use crate::domain::{CalendarError, CalendarResult};
use crate::AppState;
use shared::{
    CalendarGridQuery, CalendarMonthRequest, JumpToMonthRequest, JumpToYearRequest,
    ReferenceDate, UpdateCalendarFocusRequest, UpdateCalendarFocusResponse, WeekLabelsResponse,
};

/// Create a router for calendar related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/month", get(get_calendar_grid).post(get_calendar_month))
        .route("/week-labels", get(get_week_labels))
        .route("/current-date", get(get_current_date))
        .route("/focus-date", get(get_focus_date).post(set_focus_date))
        .route("/focus-date/previous", post(navigate_previous_month))
        .route("/focus-date/next", post(navigate_next_month))
        .route("/focus-date/month", post(jump_to_month))
        .route("/focus-date/year", post(jump_to_year))
}

fn calendar_error_response(e: CalendarError) -> axum::response::Response {
    error!("Calendar request failed: {}", e);
    (StatusCode::BAD_REQUEST, e.to_string()).into_response()
}

fn focus_response(
    state: &AppState,
    focus_date: CalendarResult<ReferenceDate>,
    verb: &str,
) -> axum::response::Response {
    match focus_date {
        Ok(focus_date) => {
            let response = UpdateCalendarFocusResponse {
                focus_date,
                success_message: format!(
                    "{} {} {}",
                    verb,
                    state.calendar_service.month_name(focus_date.month),
                    focus_date.year
                ),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => calendar_error_response(e),
    }
}

/// Get an empty month grid
async fn get_calendar_grid(
    State(state): State<AppState>,
    Query(query): Query<CalendarGridQuery>,
) -> impl IntoResponse {
    info!("GET /api/calendar/month - query: {:?}", query);

    match state.calendar_service.build_grid_for(query.year, query.month) {
        Ok(grid) => (StatusCode::OK, Json(grid)).into_response(),
        Err(e) => calendar_error_response(e),
    }
}

/// Get a month grid with the supplied events bound to it
async fn get_calendar_month(
    State(state): State<AppState>,
    Json(request): Json<CalendarMonthRequest>,
) -> impl IntoResponse {
    info!(
        "POST /api/calendar/month - {}/{} with {} events",
        request.month,
        request.year,
        request.events.len()
    );

    let today = match request.today.as_deref().map(parse_today).transpose() {
        Ok(today) => today,
        Err(e) => return calendar_error_response(e),
    };

    let Some(reference) = ReferenceDate::normalized(request.year, request.month) else {
        return calendar_error_response(CalendarError::MonthOutOfRange {
            year: request.year,
            month: request.month,
        });
    };
    match state
        .calendar_service
        .generate_calendar_month(reference, &request.events, today)
    {
        Ok(grid) => (StatusCode::OK, Json(grid)).into_response(),
        Err(e) => calendar_error_response(e),
    }
}

/// Get the column header labels in display order
async fn get_week_labels(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/calendar/week-labels");

    let response = WeekLabelsResponse {
        labels: state.calendar_service.week_start().labels().to_vec(),
    };
    (StatusCode::OK, Json(response))
}

/// Get current date information from the backend
async fn get_current_date(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/calendar/current-date");

    let current_date = state.calendar_service.current_date(None);
    (StatusCode::OK, Json(current_date))
}

/// Get the current focus date for calendar navigation
async fn get_focus_date(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/calendar/focus-date");

    let focus_date = state.calendar_service.focus_date();
    (StatusCode::OK, Json(focus_date))
}

/// Set the focus date for calendar navigation
async fn set_focus_date(
    State(state): State<AppState>,
    Json(request): Json<UpdateCalendarFocusRequest>,
) -> impl IntoResponse {
    info!("POST /api/calendar/focus-date - request: {:?}", request);

    let focus_date = state.calendar_service.set_focus_date(request.year, request.month);
    focus_response(&state, focus_date, "Calendar focus set to")
}

/// Navigate to the previous month
async fn navigate_previous_month(State(state): State<AppState>) -> impl IntoResponse {
    info!("POST /api/calendar/focus-date/previous");

    let focus_date = state.calendar_service.navigate_previous_month();
    focus_response(&state, focus_date, "Navigated to")
}

/// Navigate to the next month
async fn navigate_next_month(State(state): State<AppState>) -> impl IntoResponse {
    info!("POST /api/calendar/focus-date/next");

    let focus_date = state.calendar_service.navigate_next_month();
    focus_response(&state, focus_date, "Navigated to")
}

/// Jump to a month within the focused year
async fn jump_to_month(
    State(state): State<AppState>,
    Json(request): Json<JumpToMonthRequest>,
) -> impl IntoResponse {
    info!("POST /api/calendar/focus-date/month - request: {:?}", request);

    let focus_date = state.calendar_service.jump_to_month(request.month);
    focus_response(&state, focus_date, "Navigated to")
}

/// Jump to a year, keeping the focused month
async fn jump_to_year(
    State(state): State<AppState>,
    Json(request): Json<JumpToYearRequest>,
) -> impl IntoResponse {
    info!("POST /api/calendar/focus-date/year - request: {:?}", request);

    let focus_date = state.calendar_service.jump_to_year(request.year);
    focus_response(&state, focus_date, "Navigated to")
}
