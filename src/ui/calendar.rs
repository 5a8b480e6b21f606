use chrono::{Datelike, NaiveDate};

use crate::views::month_name;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DayState {
    Past,
    Today,
    Future,
}

/// The month containing `today`, laid out Sunday-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CalendarMonth {
    pub(crate) year: i32,
    pub(crate) month: u32,
    pub(crate) days: u32,
    /// Weekday of the 1st, Sunday = 0.
    pub(crate) first_weekday: u32,
    pub(crate) today: NaiveDate,
}

impl CalendarMonth {
    pub(crate) fn containing(today: NaiveDate) -> Self {
        let (year, month) = (today.year(), today.month());
        let first = today.with_day(1).unwrap_or(today);
        Self {
            year,
            month,
            days: days_in_month(year, month),
            first_weekday: first.weekday().num_days_from_sunday(),
            today,
        }
    }

    pub(crate) fn title(&self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }

    pub(crate) fn date(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    pub(crate) fn day_state(&self, day: u32) -> DayState {
        match self.date(day) {
            Some(date) if date == self.today => DayState::Today,
            Some(date) if date < self.today => DayState::Past,
            _ => DayState::Future,
        }
    }

    /// The `YYYY-MM-DD` filter for a selectable day. Future and out-of-range
    /// days cannot be selected.
    pub(crate) fn select(&self, day: u32) -> Option<String> {
        match self.day_state(day) {
            DayState::Future => None,
            _ => self.date(day).map(|d| d.format("%Y-%m-%d").to_string()),
        }
    }

    /// Grid rows of seven cells; `None` pads before the 1st and after the last day.
    pub(crate) fn weeks(&self) -> Vec<[Option<u32>; 7]> {
        let mut weeks = Vec::new();
        let mut week = [None; 7];
        let mut col = self.first_weekday as usize;
        for day in 1..=self.days {
            week[col] = Some(day);
            col += 1;
            if col == 7 {
                weeks.push(week);
                week = [None; 7];
                col = 0;
            }
        }
        if col > 0 {
            weeks.push(week);
        }
        weeks
    }
}

pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(30)
}
