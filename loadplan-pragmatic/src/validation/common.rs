use crate::parse_time_safe;
use loadplan_core::models::common::TimeWindow;
use std::collections::HashSet;

/// Returns a sorted list of duplicates.
pub fn get_duplicates<'a>(items: impl Iterator<Item = &'a String>) -> Option<Vec<String>> {
    let mut ids = HashSet::<_>::default();
    let duplicates =
        items.filter_map(move |id| if ids.insert(id) { None } else { Some(id.clone()) }).collect::<HashSet<_>>();

    if duplicates.is_empty() {
        None
    } else {
        let mut duplicates = duplicates.into_iter().collect::<Vec<_>>();
        duplicates.sort();
        Some(duplicates)
    }
}

/// Gets a time window from optional RFC3339 bounds, a missing bound is unlimited. Returns `None`
/// if any bound cannot be parsed.
pub fn get_time_window(earliest: Option<&str>, latest: Option<&str>) -> Option<TimeWindow> {
    let unlimited = TimeWindow::max();
    let start = earliest.map(parse_time_safe).transpose().ok()?;
    let end = latest.map(parse_time_safe).transpose().ok()?;

    Some(TimeWindow::new(start.unwrap_or(unlimited.start), end.unwrap_or(unlimited.end)))
}
