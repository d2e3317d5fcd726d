//! Calendar domain logic for the planner.
//!
//! Lays out the twelve months of a year as Sunday-first 7-column grids and
//! marks today, the selected day, and days that carry reminders. The UI only
//! draws what this produces.

use chrono::{Datelike, NaiveDate};
use shared::{CalendarDay, CalendarDayType, CalendarMonth, DateKey, ReminderMap, YearCalendar};

/// Column headers, Sunday first
const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Calendar service that handles all calendar-related business logic
#[derive(Debug, Clone, Copy, Default)]
pub struct CalendarService;

impl CalendarService {
    pub fn new() -> Self {
        Self
    }

    /// Generate all twelve months of `year`
    pub fn generate_year(
        &self,
        year: i32,
        today: NaiveDate,
        selected: NaiveDate,
        reminders: &ReminderMap,
    ) -> YearCalendar {
        let months = (1..=12)
            .map(|month| self.generate_month(month, year, today, selected, reminders))
            .collect();
        YearCalendar { year, months }
    }

    /// Generate one month: padding cells up to the first weekday, then days 1..N
    pub fn generate_month(
        &self,
        month: u32,
        year: i32,
        today: NaiveDate,
        selected: NaiveDate,
        reminders: &ReminderMap,
    ) -> CalendarMonth {
        let days_in_month = self.days_in_month(month, year);
        let first_day = self.first_day_of_month(month, year);

        let mut days = Vec::with_capacity((first_day + days_in_month) as usize);

        for _ in 0..first_day {
            days.push(CalendarDay {
                day: 0,
                date: None,
                day_type: CalendarDayType::PaddingBefore,
                is_today: false,
                is_selected: false,
                has_reminders: false,
            });
        }

        for day in 1..=days_in_month {
            let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
                continue;
            };
            let has_reminders = reminders
                .get(&DateKey::from_date(date))
                .is_some_and(|items| !items.is_empty());

            days.push(CalendarDay {
                day,
                date: Some(date),
                day_type: CalendarDayType::MonthDay,
                is_today: date == today,
                is_selected: date == selected,
                has_reminders,
            });
        }

        CalendarMonth {
            month,
            year,
            first_day_of_week: first_day,
            days_in_month,
            days,
        }
    }

    /// Get the number of days in a given month and year
    pub fn days_in_month(&self, month: u32, year: i32) -> u32 {
        match month {
            2 => if self.is_leap_year(year) { 29 } else { 28 },
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    /// Check if a year is a leap year
    pub fn is_leap_year(&self, year: i32) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    /// Get the first day of month (0 = Sunday, 1 = Monday, etc.)
    pub fn first_day_of_month(&self, month: u32, year: i32) -> u32 {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|date| date.weekday().num_days_from_sunday())
            .unwrap_or(0)
    }

    /// Get the human-readable name for a month number
    pub fn month_name(&self, month: u32) -> &'static str {
        match month {
            1 => "January", 2 => "February", 3 => "March", 4 => "April",
            5 => "May", 6 => "June", 7 => "July", 8 => "August",
            9 => "September", 10 => "October", 11 => "November", 12 => "December",
            _ => "Invalid Month",
        }
    }

    pub fn weekday_labels(&self) -> [&'static str; 7] {
        WEEKDAY_LABELS
    }
}
