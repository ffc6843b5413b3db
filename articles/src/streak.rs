//! Reading streak statistics derived from a [`ReadingActivity`].
//!
//! A streak is a run of consecutive UTC calendar days with at least one
//! recorded read. The current streak must include today: if nothing has been
//! read yet today, it is zero.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::reading::{ReadingActivity, date_key, parse_date_key};

#[cfg(test)]
#[path = "streak_test.rs"]
mod streak_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReadingStats {
    pub current_streak: usize,
    pub best_streak: usize,
    pub total_completed: usize,
}

/// Compute stats as of `today`.
#[must_use]
pub fn reading_stats(activity: &ReadingActivity, today: NaiveDate) -> ReadingStats {
    let days = activity.recorded_days();
    let read_days: BTreeMap<String, bool> = days.iter().filter(|(_, read)| **read).map(|(d, r)| (d.clone(), *r)).collect();
    ReadingStats {
        current_streak: current_streak(&read_days, today),
        best_streak: best_streak(&days),
        total_completed: activity.total_completed(),
    }
}

/// Longest run of consecutive days among the recorded dates.
///
/// Keys are visited in lexicographic order, which is chronological for ISO
/// dates. A key that is not a valid date breaks the run it appears in.
#[must_use]
pub fn best_streak<V>(read_by_date: &BTreeMap<String, V>) -> usize {
    if read_by_date.is_empty() {
        return 0;
    }

    let mut best = 1;
    let mut run = 1;
    let mut previous: Option<NaiveDate> = None;
    for (index, key) in read_by_date.keys().enumerate() {
        let current = parse_date_key(key);
        if index > 0 {
            let consecutive = matches!(
                (previous, current),
                (Some(prev), Some(cur)) if (cur - prev).num_days() == 1
            );
            run = if consecutive { run + 1 } else { 1 };
            best = best.max(run);
        }
        previous = current;
    }
    best
}

/// Consecutive recorded days ending at `today`, walking backward.
#[must_use]
pub fn current_streak<V>(read_by_date: &BTreeMap<String, V>, today: NaiveDate) -> usize {
    let mut streak = 0;
    let mut cursor = Some(today);
    while let Some(day) = cursor {
        if !read_by_date.contains_key(&date_key(day)) {
            break;
        }
        streak += 1;
        cursor = day.pred_opt();
    }
    streak
}
