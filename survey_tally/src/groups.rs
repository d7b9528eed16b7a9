use log::{debug, info};
use std::collections::BTreeSet;

use crate::config::*;
use crate::normalize::clean_text;

/// The separator between the level and the site in a group name.
pub const GROUP_SEPARATOR: &str = " – ";

pub fn group_key(level: &str, site: &str) -> String {
    let key = format!("{}{}{}", clean_text(level), GROUP_SEPARATOR, clean_text(site));
    clean_text(&key)
}

/// Computes the group of every row.
///
/// When the level or the site column is missing from the table, every row
/// belongs to the fallback group. A row with an empty level or site does not
/// belong to any group.
pub fn assign_groups(table: &RawTable, rules: &SurveyRules) -> Vec<Option<String>> {
    let level_idx = table.column_index(&rules.level_column);
    let site_idx = table.column_index(&rules.site_column);
    match (level_idx, site_idx) {
        (Some(l), Some(s)) => table
            .rows
            .iter()
            .map(|row| match (row.get(l).cloned().flatten(), row.get(s).cloned().flatten()) {
                (Some(level), Some(site)) => Some(group_key(&level, &site)),
                _ => None,
            })
            .collect(),
        _ => {
            info!(
                "assign_groups: columns {:?} / {:?} not found, using the single group {:?}",
                rules.level_column, rules.site_column, rules.fallback_group
            );
            let fallback = clean_text(&rules.fallback_group);
            table.rows.iter().map(|_| Some(fallback.clone())).collect()
        }
    }
}

/// The distinct groups, sorted. The position in this list is the id of the group.
pub fn group_directory(keys: &[Option<String>]) -> Vec<String> {
    let distinct: BTreeSet<&String> = keys.iter().flatten().collect();
    debug!("group_directory: {} groups", distinct.len());
    distinct.into_iter().cloned().collect()
}
