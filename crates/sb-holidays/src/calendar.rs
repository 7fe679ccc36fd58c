//! A calendar whose holidays come from a list of holiday records.

use std::collections::HashSet;

use sb_time::{Calendar, Date};

use crate::classifier::PublicHolidays;

/// A calendar holding an explicit set of public-holiday dates.
#[derive(Debug, Clone)]
pub struct RecordCalendar {
    name: String,
    holidays: HashSet<Date>,
}

impl RecordCalendar {
    /// Create a calendar with the given name and no holidays.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            holidays: HashSet::new(),
        }
    }

    /// Create a calendar from a classified holiday list.
    pub fn from_public_holidays(name: impl Into<String>, holidays: &PublicHolidays) -> Self {
        let mut cal = Self::new(name);
        for record in holidays {
            cal.add_holiday(record.date);
        }
        cal
    }

    /// Add a holiday.
    pub fn add_holiday(&mut self, date: Date) {
        self.holidays.insert(date);
    }
}

impl Calendar for RecordCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_holiday(&self, date: Date) -> bool {
        self.holidays.contains(&date)
    }
}
