use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// Number of cells in every month grid (6 weeks of 7 days)
pub const GRID_CELL_COUNT: usize = 42;

/// Number of columns in a grid row
pub const DAYS_PER_WEEK: usize = 7;

/// A dated entry supplied by the caller (class, exam, holiday, ...)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarEvent {
    /// `YYYY-MM-DD` or an RFC 3339 timestamp; only the calendar date is used
    pub date: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl CalendarEvent {
    /// Create an event with only a date and a title
    pub fn new(date: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            title: title.into(),
            description: None,
            color: None,
            id: None,
        }
    }
}

/// Type of calendar cell for explicit rendering logic
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CalendarCellType {
    /// Empty padding cell before the first day of the month
    PaddingBefore,
    /// Actual day within the focal month
    MonthDay,
    /// Padding cell after the last day of the month, numbered from 1 for display only
    PaddingAfter,
}

/// Represents a single slot in the month grid
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarCell {
    /// Day number; `None` for leading padding
    pub day: Option<u32>,
    pub cell_type: CalendarCellType,
    pub is_today: bool,
    pub events: Vec<CalendarEvent>,
}

impl CalendarCell {
    pub fn padding_before() -> Self {
        Self {
            day: None,
            cell_type: CalendarCellType::PaddingBefore,
            is_today: false,
            events: Vec::new(),
        }
    }

    pub fn month_day(day: u32) -> Self {
        Self {
            day: Some(day),
            cell_type: CalendarCellType::MonthDay,
            is_today: false,
            events: Vec::new(),
        }
    }

    pub fn padding_after(display_day: u32) -> Self {
        Self {
            day: Some(display_day),
            cell_type: CalendarCellType::PaddingAfter,
            is_today: false,
            events: Vec::new(),
        }
    }

    /// True only for cells that represent a real day of the focal month
    pub fn belongs_to_focal_month(&self) -> bool {
        self.cell_type == CalendarCellType::MonthDay
    }
}

/// Year and zero-based month index identifying which month a grid shows.
///
/// Navigation never mutates a value in place; every step returns a new
/// normalized `ReferenceDate` so `month` is always within `0..=11`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ReferenceDate {
    pub year: i32,
    /// Zero-based month index (0 = January, 11 = December)
    pub month: u32,
}

impl ReferenceDate {
    /// Build a reference date from a signed month index, rolling the year
    /// over as needed: `(2025, -1)` is December 2024, `(2025, 12)` is January 2026.
    ///
    /// Returns `None` when the rolled-over year does not fit in an `i32`.
    pub fn normalized(year: i32, month: i64) -> Option<Self> {
        let total = i64::from(year).checked_mul(12)?.checked_add(month)?;
        Some(Self {
            year: i32::try_from(total.div_euclid(12)).ok()?,
            month: total.rem_euclid(12) as u32,
        })
    }

    /// Reference date for the month containing `date`
    pub fn from_date(date: chrono::NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month0(),
        }
    }

    pub fn next(self) -> Option<Self> {
        Self::normalized(self.year, i64::from(self.month) + 1)
    }

    pub fn previous(self) -> Option<Self> {
        Self::normalized(self.year, i64::from(self.month) - 1)
    }

    /// Jump to a month index within the current year (normalized)
    pub fn with_month(self, month: i64) -> Option<Self> {
        Self::normalized(self.year, month)
    }

    /// Jump to a year, keeping the month
    pub fn with_year(self, year: i32) -> Self {
        Self { year, ..self }
    }
}

impl Default for ReferenceDate {
    fn default() -> Self {
        Self::from_date(chrono::Local::now().date_naive())
    }
}

/// A fully built month grid, always exactly 42 cells in row-major order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarGrid {
    pub reference: ReferenceDate,
    /// Leading padding cells; 0 when the month starts on a Monday
    pub start_offset: u32,
    pub days_in_month: u32,
    pub cells: Vec<CalendarCell>,
}

impl CalendarGrid {
    /// Cells grouped into the six display weeks
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarCell]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    /// The cell for a given day of the focal month
    pub fn month_day(&self, day: u32) -> Option<&CalendarCell> {
        self.cells
            .iter()
            .find(|cell| cell.belongs_to_focal_month() && cell.day == Some(day))
    }
}

/// Query parameters for a plain grid without events
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarGridQuery {
    pub year: i32,
    /// Zero-based; values outside `0..=11` roll the year
    pub month: i64,
}

/// Request for a month grid with events bound to it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarMonthRequest {
    pub year: i32,
    /// Zero-based; values outside `0..=11` roll the year
    pub month: i64,
    #[serde(default)]
    pub events: Vec<CalendarEvent>,
    /// Optional `YYYY-MM-DD` override for "today"
    #[serde(default)]
    pub today: Option<String>,
}

/// Request to update the calendar focus date
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateCalendarFocusRequest {
    pub year: i32,
    pub month: i64,
}

/// Request to jump to a month index within the focused year
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JumpToMonthRequest {
    pub month: i64,
}

/// Request to jump to a year, keeping the focused month
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JumpToYearRequest {
    pub year: i32,
}

/// Response after moving the calendar focus date
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateCalendarFocusResponse {
    pub focus_date: ReferenceDate,
    pub success_message: String,
}

/// Column header labels in display order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeekLabelsResponse {
    pub labels: Vec<String>,
}

/// Current date information from the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrentDateResponse {
    pub year: i32,
    /// Zero-based month index
    pub month: u32,
    pub day: u32,
    pub formatted_date: String, // e.g., "17 Outubro 2026"
    pub iso_date: String,       // e.g., "2026-10-17"
}
