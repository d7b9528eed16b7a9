use log::{debug, info};
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::config::*;
use crate::tally::{percentage, round_pct};

// Positions in LIKERT5_ORDER.
const MUY_SATISFECHO: usize = 0;
const SATISFECHO: usize = 1;
const INSATISFECHO: usize = 3;
const MUY_INSATISFECHO: usize = 4;

/// Computes the Likert statistics of one group from the rows of that group.
///
/// All the answers to all the Likert questions are pooled together.
pub fn group_stats<R: AsRef<[Cell]>>(
    group: &str,
    rows: &[R],
    likert: &[Question],
) -> GroupComparison {
    let mut counts = [0_u64; 5];
    let mut likert_answers: u64 = 0;
    for row in rows.iter() {
        for q in likert.iter() {
            if let Some(Some(v)) = row.as_ref().get(q.column) {
                likert_answers += 1;
                if let Some(pos) = LIKERT5_ORDER.iter().position(|l| l == v) {
                    counts[pos] += 1;
                }
            }
        }
    }
    let mut pct_by_label = [0.0_f64; 5];
    for (pct, count) in pct_by_label.iter_mut().zip(counts) {
        *pct = percentage(count, likert_answers);
    }
    GroupComparison {
        group: group.to_string(),
        respondents: rows.len() as u64,
        likert_answers,
        pct_by_label,
        negative_pct: round_pct(pct_by_label[INSATISFECHO] + pct_by_label[MUY_INSATISFECHO]),
        positive_pct: round_pct(pct_by_label[MUY_SATISFECHO] + pct_by_label[SATISFECHO]),
    }
}

/// The ranking order: most negative first, then most respondents, then by name.
fn ranking_order(a: &GroupComparison, b: &GroupComparison) -> Ordering {
    b.negative_pct
        .total_cmp(&a.negative_pct)
        .then_with(|| b.respondents.cmp(&a.respondents))
        .then_with(|| a.group.cmp(&b.group))
}

/// Sorts the groups in ranking order and flags the first `focus_count` groups
/// that have at least one Likert answer.
pub fn rank(mut stats: Vec<GroupComparison>, focus_count: usize) -> (Vec<GroupComparison>, Vec<bool>) {
    stats.sort_by(ranking_order);
    let mut flagged = 0;
    let flags: Vec<bool> = stats
        .iter()
        .map(|s| {
            let flag = s.likert_answers > 0 && flagged < focus_count;
            if flag {
                flagged += 1;
            }
            flag
        })
        .collect();
    (stats, flags)
}

/// Compares the Likert answers of all the groups.
///
/// Arguments:
/// * `rows` all the rows of the table
/// * `row_groups` the group of each row
/// * `likert` the Likert questions
/// * `groups` the group directory
/// * `focus_count` how many groups to flag as "foco rojo"
pub fn compare_groups<R: AsRef<[Cell]>>(
    rows: &[R],
    row_groups: &[Option<String>],
    likert: &[Question],
    groups: &[String],
    focus_count: usize,
) -> LikertComparison {
    let mut rows_by_group: HashMap<&str, Vec<&[Cell]>> = HashMap::new();
    for (row, group) in rows.iter().zip(row_groups.iter()) {
        if let Some(g) = group {
            rows_by_group.entry(g.as_str()).or_default().push(row.as_ref());
        }
    }

    let stats: Vec<GroupComparison> = groups
        .iter()
        .map(|g| {
            let group_rows: &[&[Cell]] = rows_by_group
                .get(g.as_str())
                .map(|v| v.as_slice())
                .unwrap_or(&[]);
            let s = group_stats(g, group_rows, likert);
            debug!("compare_groups: {:?}", s);
            s
        })
        .collect();

    let (ranked, foco_red) = rank(stats, focus_count);
    info!(
        "compare_groups: {} groups ranked, {} flagged",
        ranked.len(),
        foco_red.iter().filter(|f| **f).count()
    );

    LikertComparison {
        planteles: ranked.iter().map(|s| s.group.clone()).collect(),
        respondents: ranked.iter().map(|s| s.respondents).collect(),
        likert_answers: ranked.iter().map(|s| s.likert_answers).collect(),
        pct_by_label: LIKERT5_ORDER
            .iter()
            .enumerate()
            .map(|(idx, label)| {
                (
                    label.to_string(),
                    ranked.iter().map(|s| s.pct_by_label[idx]).collect(),
                )
            })
            .collect(),
        negative_pct: ranked.iter().map(|s| s.negative_pct).collect(),
        positive_pct: ranked.iter().map(|s| s.positive_pct).collect(),
        foco_red,
    }
}
