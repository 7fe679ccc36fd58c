//! Public-holiday classification.
//!
//! Holiday feeds mix real non-working holidays with named commemorative
//! days on which business goes on as usual, and they carry no flag telling
//! the two apart.  Two mechanisms answer the question:
//!
//! * [`is_actual_public_holiday`]: the legacy name heuristic, kept exactly
//!   as the product has always applied it (fixed exclusion list plus a
//!   substring rule on the display name);
//! * an explicit [`HolidayKind`] tag, attached at ingestion by a
//!   [`ClassificationTable`] keyed on the feed's stable English name.
//!
//! [`HolidayRecord::is_public_holiday`] honours the tag and falls back to
//! the heuristic for untagged records.  [`PublicHolidays`] is the only way
//! into the analytics, so classification happens exactly once, upstream.

use std::collections::BTreeMap;

use sb_time::Date;
use serde::{Deserialize, Serialize};

use crate::record::{HolidayKind, HolidayRecord};

/// Display names of observance days that never count as days off.
pub const EXCLUDED_OBSERVANCES: [&str; 5] = ["노동절", "어버이날", "스승의날", "제헌절", "국군의날"];

/// Legacy heuristic: is `record` an actual non-working public holiday?
///
/// 1. Names on the [`EXCLUDED_OBSERVANCES`] list are never holidays.
/// 2. Otherwise the record is a holiday if its name does not contain
///    `"Day"`, or if it contains `"Replacement"` or `"Memorial"`.
///
/// An empty name matches no substring and therefore counts as a holiday.
pub fn is_actual_public_holiday(record: &HolidayRecord) -> bool {
    let name = record.local_name.as_str();
    if EXCLUDED_OBSERVANCES.contains(&name) {
        return false;
    }
    !name.contains("Day") || name.contains("Replacement") || name.contains("Memorial")
}

impl HolidayRecord {
    /// Classification used by the analytics: the explicit [`HolidayKind`]
    /// tag when present, the legacy heuristic otherwise.
    pub fn classify(&self) -> HolidayKind {
        match self.kind {
            Some(kind) => kind,
            None if is_actual_public_holiday(self) => HolidayKind::PublicHoliday,
            None => HolidayKind::Observance,
        }
    }

    /// Return `true` if this record is a real public holiday.
    pub fn is_public_holiday(&self) -> bool {
        self.classify() == HolidayKind::PublicHoliday
    }
}

/// Locale-specific classification keyed on `(country code, stable name)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassificationTable {
    entries: BTreeMap<String, BTreeMap<String, HolidayKind>>,
}

impl ClassificationTable {
    /// An empty table: every record falls back to the legacy heuristic.
    pub fn new() -> Self {
        Self::default()
    }

    /// The table shipped with the library.
    ///
    /// Covers the Korean commemorative days the feed reports alongside the
    /// real holidays, by their English feed names.
    pub fn builtin() -> Self {
        let mut table = Self::new();
        for name in [
            "Labour Day",
            "Labor Day",
            "Workers' Day",
            "Parents' Day",
            "Teachers' Day",
            "Constitution Day",
            "Armed Forces Day",
        ] {
            table.insert("KR", name, HolidayKind::Observance);
        }
        table
    }

    /// Add or replace an entry.
    pub fn insert(&mut self, country_code: &str, name: impl Into<String>, kind: HolidayKind) {
        self.entries
            .entry(country_code.to_ascii_uppercase())
            .or_default()
            .insert(name.into(), kind);
    }

    /// Look up the classification of `record`, if the table knows it.
    pub fn lookup(&self, record: &HolidayRecord) -> Option<HolidayKind> {
        self.entries
            .get(&record.country_code.to_ascii_uppercase())?
            .get(record.stable_key())
            .copied()
    }

    /// Number of entries across all countries.
    pub fn len(&self) -> usize {
        self.entries.values().map(BTreeMap::len).sum()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Ingestion stage: tag untagged records the table knows, then order the
/// list by date (stable, so same-date records keep their feed order).
pub fn ingest(mut records: Vec<HolidayRecord>, table: &ClassificationTable) -> Vec<HolidayRecord> {
    let mut tagged = 0usize;
    for record in records.iter_mut().filter(|r| r.kind.is_none()) {
        if let Some(kind) = table.lookup(record) {
            record.kind = Some(kind);
            tagged += 1;
        }
    }
    records.sort_by_key(|r| r.date);
    tracing::debug!(records = records.len(), tagged, "ingested holiday records");
    records
}

/// A holiday list that has passed through the classifier: every record in
/// it is a real public holiday.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PublicHolidays {
    records: Vec<HolidayRecord>,
}

impl PublicHolidays {
    /// Keep only the records classified as public holidays.
    pub fn from_records(records: impl IntoIterator<Item = HolidayRecord>) -> Self {
        Self {
            records: records
                .into_iter()
                .filter(HolidayRecord::is_public_holiday)
                .collect(),
        }
    }

    /// Filter a borrowed list.
    pub fn classify(records: &[HolidayRecord]) -> Self {
        Self::from_records(records.iter().cloned())
    }

    /// Wrap a list the caller has already curated, without re-classifying.
    pub fn assume_classified(records: Vec<HolidayRecord>) -> Self {
        Self { records }
    }

    /// The records, in their original order.
    pub fn records(&self) -> &[HolidayRecord] {
        &self.records
    }

    /// Consume into the underlying records.
    pub fn into_records(self) -> Vec<HolidayRecord> {
        self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the records.
    pub fn iter(&self) -> std::slice::Iter<'_, HolidayRecord> {
        self.records.iter()
    }

    /// Records falling on `date`.
    pub fn on(&self, date: Date) -> impl Iterator<Item = &HolidayRecord> {
        self.records.iter().filter(move |r| r.date == date)
    }

    /// Whether any record falls on `date`.
    pub fn contains(&self, date: Date) -> bool {
        self.records.iter().any(|r| r.date == date)
    }
}

impl<'a> IntoIterator for &'a PublicHolidays {
    type Item = &'a HolidayRecord;
    type IntoIter = std::slice::Iter<'a, HolidayRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
