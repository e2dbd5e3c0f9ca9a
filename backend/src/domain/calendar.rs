//! Calendar domain logic for the school dashboard.
//!
//! This module owns every calendar computation: laying out the fixed 6×7
//! month grid, binding caller supplied events onto it, marking today, and
//! month navigation. The UI only renders the resulting `CalendarGrid`.

use chrono::{Datelike, Local, NaiveDate};
use log::{debug, info, warn};
use shared::{
    CalendarCell, CalendarEvent, CalendarGrid, CurrentDateResponse, ReferenceDate,
    GRID_CELL_COUNT,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use super::dates;
use super::errors::{CalendarError, CalendarResult};
use super::week_start::{default_month_names, WeekStartConvention};

/// Calendar service that handles all calendar-related business logic
#[derive(Clone)]
pub struct CalendarService {
    /// Month currently shown by the dashboard calendar.
    /// Kept in memory only, never persisted.
    current_focus_date: Arc<Mutex<ReferenceDate>>,
    week_start: WeekStartConvention,
    month_names: Arc<Vec<String>>,
}

impl CalendarService {
    /// Create a CalendarService with Monday-first labels and default month names
    pub fn new() -> Self {
        Self::with_labels(WeekStartConvention::default(), default_month_names())
    }

    /// Create a CalendarService with externally supplied labels
    pub fn with_labels(week_start: WeekStartConvention, month_names: Vec<String>) -> Self {
        Self {
            current_focus_date: Arc::new(Mutex::new(ReferenceDate::default())),
            week_start,
            month_names: Arc::new(month_names),
        }
    }

    pub fn week_start(&self) -> &WeekStartConvention {
        &self.week_start
    }

    /// Get the configured name for a zero-based month
    pub fn month_name(&self, month0: u32) -> &str {
        dates::month_name(month0, &self.month_names)
    }

    /// Build the 42-cell grid for a month, without events.
    ///
    /// Leading padding cells have no day number; trailing padding cells are
    /// numbered from 1 for display only and never represent real dates.
    pub fn build_grid(&self, reference: ReferenceDate) -> CalendarResult<CalendarGrid> {
        let first_of_month = dates::first_of_month(reference)?;
        let days_in_month = dates::days_in_month(reference.year, reference.month);
        let start_offset = dates::monday_first_offset(first_of_month);

        debug!(
            "Building grid for {}/{}: {} days, start offset {}",
            reference.month, reference.year, days_in_month, start_offset
        );

        let mut cells = Vec::with_capacity(GRID_CELL_COUNT);
        cells.extend((0..start_offset).map(|_| CalendarCell::padding_before()));
        cells.extend((1..=days_in_month).map(CalendarCell::month_day));

        let trailing = GRID_CELL_COUNT - cells.len();
        cells.extend((1..=trailing as u32).map(CalendarCell::padding_after));

        Ok(CalendarGrid {
            reference,
            start_offset,
            days_in_month,
            cells,
        })
    }

    /// Build a grid from a possibly out-of-range month index
    pub fn build_grid_for(&self, year: i32, month: i64) -> CalendarResult<CalendarGrid> {
        self.build_grid(normalize(year, month)?)
    }

    /// Return a copy of `grid` with events attached and today marked.
    ///
    /// Only cells of the focal month receive events. Events dated in another
    /// month, or with an unparsable date, are left out. Events sharing a date
    /// keep their input order.
    pub fn bind_events(
        &self,
        grid: &CalendarGrid,
        events: &[CalendarEvent],
        today: NaiveDate,
    ) -> CalendarGrid {
        let events_by_date = self.group_events_by_date(grid.reference, events);
        let mut bound = grid.clone();

        for cell in bound.cells.iter_mut().filter(|c| c.belongs_to_focal_month()) {
            let Some(date) = cell.day.and_then(|day| {
                NaiveDate::from_ymd_opt(grid.reference.year, grid.reference.month + 1, day)
            }) else {
                continue;
            };

            cell.is_today = date == today;
            cell.events = events_by_date.get(&date).cloned().unwrap_or_default();
        }

        bound
    }

    /// Generate a month grid with events bound and today marked.
    /// `today` defaults to the host's current local date.
    pub fn generate_calendar_month(
        &self,
        reference: ReferenceDate,
        events: &[CalendarEvent],
        today: Option<NaiveDate>,
    ) -> CalendarResult<CalendarGrid> {
        info!(
            "Generating calendar for {} {} with {} events",
            self.month_name(reference.month),
            reference.year,
            events.len()
        );

        let today = today.unwrap_or_else(|| Local::now().date_naive());
        let grid = self.build_grid(reference)?;
        Ok(self.bind_events(&grid, events, today))
    }

    /// Group events of the focal month by calendar date, preserving input order
    fn group_events_by_date(
        &self,
        reference: ReferenceDate,
        events: &[CalendarEvent],
    ) -> HashMap<NaiveDate, Vec<CalendarEvent>> {
        let mut events_by_date: HashMap<NaiveDate, Vec<CalendarEvent>> = HashMap::new();

        for event in events {
            let Some(date) = dates::parse_event_date(&event.date) else {
                warn!("Skipping event '{}' with unparsable date '{}'", event.title, event.date);
                continue;
            };

            if ReferenceDate::from_date(date) == reference {
                events_by_date.entry(date).or_default().push(event.clone());
            }
        }

        events_by_date
    }

    /// Get current date information, using `today` when supplied
    pub fn current_date(&self, today: Option<NaiveDate>) -> CurrentDateResponse {
        let today = today.unwrap_or_else(|| Local::now().date_naive());
        let reference = ReferenceDate::from_date(today);

        CurrentDateResponse {
            year: reference.year,
            month: reference.month,
            day: today.day(),
            formatted_date: dates::format_date_for_display(today, &self.month_names),
            iso_date: today.format("%Y-%m-%d").to_string(),
        }
    }

    fn focus(&self) -> MutexGuard<'_, ReferenceDate> {
        // The guarded value is a plain Copy struct, so a poisoned lock still holds valid data
        self.current_focus_date
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Get the current focus date for calendar navigation
    pub fn focus_date(&self) -> ReferenceDate {
        *self.focus()
    }

    /// Set the focus date, normalizing the month index
    pub fn set_focus_date(&self, year: i32, month: i64) -> CalendarResult<ReferenceDate> {
        let new_focus_date = normalize(year, month)?;
        dates::first_of_month(new_focus_date)?;
        *self.focus() = new_focus_date;
        Ok(new_focus_date)
    }

    /// Navigate to the previous month
    pub fn navigate_previous_month(&self) -> CalendarResult<ReferenceDate> {
        self.update_focus(|focus| {
            focus
                .previous()
                .ok_or(CalendarError::YearOutOfRange(focus.year))
        })
    }

    /// Navigate to the next month
    pub fn navigate_next_month(&self) -> CalendarResult<ReferenceDate> {
        self.update_focus(|focus| focus.next().ok_or(CalendarError::YearOutOfRange(focus.year)))
    }

    /// Jump to a month index within the focused year
    pub fn jump_to_month(&self, month: i64) -> CalendarResult<ReferenceDate> {
        self.update_focus(|focus| {
            focus.with_month(month).ok_or(CalendarError::MonthOutOfRange {
                year: focus.year,
                month,
            })
        })
    }

    /// Jump to a year, keeping the focused month
    pub fn jump_to_year(&self, year: i32) -> CalendarResult<ReferenceDate> {
        self.update_focus(|focus| Ok(focus.with_year(year)))
    }

    /// Apply a navigation step; the focus date only moves to months a grid can be built for
    fn update_focus(
        &self,
        step: impl FnOnce(ReferenceDate) -> CalendarResult<ReferenceDate>,
    ) -> CalendarResult<ReferenceDate> {
        let mut focus = self.focus();
        let next = step(*focus)?;
        dates::first_of_month(next)?;
        *focus = next;
        Ok(next)
    }
}

fn normalize(year: i32, month: i64) -> CalendarResult<ReferenceDate> {
    ReferenceDate::normalized(year, month).ok_or(CalendarError::MonthOutOfRange { year, month })
}

impl Default for CalendarService {
    fn default() -> Self {
        Self::new()
    }
}
