//! Vacation Block Aggregator.
//!
//! Groups a classified holiday list into continuous absence windows.  Two
//! consecutive holidays whose dates are at most `max_gap` days apart belong
//! to the same block, so a Friday holiday and the following Monday holiday
//! form one block across the weekend.

use sb_holidays::PublicHolidays;
use sb_time::Date;
use serde::{Deserialize, Serialize};

/// Default bridging gap, in days.
pub const DEFAULT_BLOCK_GAP_DAYS: i32 = 3;

/// A maximal run of holidays treated as one absence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VacationBlock {
    /// First holiday of the block.
    pub start: Date,
    /// Last holiday of the block (inclusive).
    pub end: Date,
    /// Inclusive day span, `end - start + 1`.
    pub count: i32,
    /// Distinct holiday names in block order, `", "`-joined.
    pub display_names: String,
    /// Date of each constituent record, in block order.
    pub dates: Vec<Date>,
}

impl VacationBlock {
    fn open(date: Date, name: &str) -> Self {
        let mut block = Self {
            start: date,
            end: date,
            count: 1,
            display_names: String::new(),
            dates: Vec::new(),
        };
        block.absorb(date, name);
        block
    }

    fn absorb(&mut self, date: Date, name: &str) {
        self.end = date;
        self.count = (self.end - self.start) + 1;
        self.dates.push(date);
        if !name.is_empty() && !self.display_names.split(", ").any(|n| n == name) {
            if !self.display_names.is_empty() {
                self.display_names.push_str(", ");
            }
            self.display_names.push_str(name);
        }
    }

    /// Whether `date` lies within `[start, end]`.
    pub fn covers(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Group `holidays` into vacation blocks with the default 3-day gap.
pub fn vacation_blocks(holidays: &PublicHolidays) -> Vec<VacationBlock> {
    vacation_blocks_within(holidays, DEFAULT_BLOCK_GAP_DAYS)
}

/// Group `holidays` into vacation blocks, bridging gaps of up to `max_gap`
/// days.
///
/// The list is stably sorted by date first, so same-date records share a
/// block and keep their relative order.  Blocks come out ascending and
/// non-overlapping; every record lands in exactly one of them.
pub fn vacation_blocks_within(holidays: &PublicHolidays, max_gap: i32) -> Vec<VacationBlock> {
    let mut sorted: Vec<_> = holidays.iter().collect();
    sorted.sort_by_key(|r| r.date);

    let mut blocks: Vec<VacationBlock> = Vec::new();
    let mut current: Option<VacationBlock> = None;
    for record in sorted {
        match current.as_mut() {
            Some(block) if record.date - block.end <= max_gap => {
                block.absorb(record.date, &record.local_name);
            }
            _ => {
                blocks.extend(current.take());
                current = Some(VacationBlock::open(record.date, &record.local_name));
            }
        }
    }
    blocks.extend(current);
    blocks
}
