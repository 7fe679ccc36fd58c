//! Joint calendar: a day off in any of several calendars.

use crate::calendar::Calendar;
use crate::date::Date;

/// A calendar whose holidays are the union of its constituents' holidays:
/// a date is a holiday as soon as someone is off.
pub struct JointCalendar {
    calendars: Vec<Box<dyn Calendar>>,
    name: String,
}

impl std::fmt::Debug for JointCalendar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JointCalendar").field("name", &self.name).finish()
    }
}

impl JointCalendar {
    /// Create a joint calendar.  An empty list yields a calendar without
    /// holidays.
    pub fn new(calendars: Vec<Box<dyn Calendar>>) -> Self {
        let name = calendars.iter().map(|c| c.name()).collect::<Vec<_>>().join(", ");
        Self { calendars, name }
    }
}

impl Calendar for JointCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_holiday(&self, date: Date) -> bool {
        self.calendars.iter().any(|c| c.is_holiday(date))
    }
}
