use chrono::Weekday;

use super::errors::{CalendarError, CalendarResult};

/// Column header labels rotated to the configured first day of the week.
///
/// Only affects presentation. The grid itself is always laid out Monday-first.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekStartConvention {
    first_day: Weekday,
    labels: Vec<String>,
}

impl WeekStartConvention {
    /// Rotate Monday-first base labels so they begin at `first_day`
    pub fn new(first_day: Weekday, monday_first_labels: &[String]) -> CalendarResult<Self> {
        if monday_first_labels.len() != 7 {
            return Err(CalendarError::InvalidWeekdayLabels(monday_first_labels.len()));
        }

        let mut labels = monday_first_labels.to_vec();
        labels.rotate_left(first_day.num_days_from_monday() as usize);
        Ok(Self { first_day, labels })
    }

    pub fn first_day(&self) -> Weekday {
        self.first_day
    }

    /// Labels in display order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

impl Default for WeekStartConvention {
    fn default() -> Self {
        Self {
            first_day: Weekday::Mon,
            labels: default_weekday_labels(),
        }
    }
}

/// Monday-first Portuguese weekday labels
pub fn default_weekday_labels() -> Vec<String> {
    ["Seg", "Ter", "Qua", "Qui", "Sex", "Sáb", "Dom"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Portuguese month names, January first
pub fn default_month_names() -> Vec<String> {
    [
        "Janeiro", "Fevereiro", "Março", "Abril", "Maio", "Junho",
        "Julho", "Agosto", "Setembro", "Outubro", "Novembro", "Dezembro",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_monday_first() {
        let convention = WeekStartConvention::default();
        assert_eq!(convention.first_day(), Weekday::Mon);
        assert_eq!(convention.labels()[0], "Seg");
        assert_eq!(convention.labels()[6], "Dom");
    }

    #[test]
    fn test_sunday_first_rotation() {
        let convention = WeekStartConvention::new(Weekday::Sun, &default_weekday_labels()).unwrap();
        assert_eq!(
            convention.labels(),
            &["Dom", "Seg", "Ter", "Qua", "Qui", "Sex", "Sáb"]
        );
    }

    #[test]
    fn test_wednesday_first_rotation() {
        let convention = WeekStartConvention::new(Weekday::Wed, &default_weekday_labels()).unwrap();
        assert_eq!(convention.labels()[0], "Qua");
        assert_eq!(convention.labels()[6], "Ter");
    }

    #[test]
    fn test_rejects_wrong_label_count() {
        let labels = vec!["Seg".to_string(), "Ter".to_string()];
        assert_eq!(
            WeekStartConvention::new(Weekday::Sun, &labels),
            Err(CalendarError::InvalidWeekdayLabels(2))
        );
    }

    #[test]
    fn test_monday_start_keeps_label_order() {
        let convention = WeekStartConvention::new(Weekday::Mon, &default_weekday_labels()).unwrap();
        assert_eq!(convention, WeekStartConvention::default());
    }
}
