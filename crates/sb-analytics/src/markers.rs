//! Per-date conflict markers.
//!
//! A calendar view colours every date on which at least one country is off.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use sb_holidays::PublicHolidays;
use sb_time::Date;
use serde::{Deserialize, Serialize};

/// Which side of the pair is off on a marked date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictKind {
    /// Korea only.
    Kr,
    /// Japan only.
    Jp,
    /// Both countries.
    Both,
}

/// Mark every date carrying a public holiday in `kr` or `jp`.
pub fn conflict_markers(kr: &PublicHolidays, jp: &PublicHolidays) -> BTreeMap<Date, ConflictKind> {
    let mut markers = BTreeMap::new();
    for record in kr {
        markers.insert(record.date, ConflictKind::Kr);
    }
    for record in jp {
        match markers.entry(record.date) {
            Entry::Occupied(mut e) => {
                if *e.get() == ConflictKind::Kr {
                    e.insert(ConflictKind::Both);
                }
            }
            Entry::Vacant(e) => {
                e.insert(ConflictKind::Jp);
            }
        }
    }
    markers
}
