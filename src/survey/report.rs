// Rendering of the results as JSON documents.

use serde_json::json;
use serde_json::Map as JSMap;

use crate::survey::*;

/// The key of the whole-table entry in the bundle.
pub const ALL_KEY: &str = "__ALL__";
const ALL_NAME: &str = "Todos los Planteles";

pub fn directory_to_json(entries: &[GroupEntry]) -> JSValue {
    let l: Vec<JSValue> = entries
        .iter()
        .map(|e| json!({"id": e.id, "name": e.name}))
        .collect();
    json!(l)
}

pub fn summaries_to_json(summaries: &[QuestionSummary]) -> JSValue {
    let l: Vec<JSValue> = summaries
        .iter()
        .map(|s| {
            let data: Vec<JSValue> = s
                .data
                .iter()
                .map(|d| json!({"label": d.label, "count": d.count, "pct": d.pct}))
                .collect();
            json!({
                "question": s.question,
                "kind": s.kind.as_str(),
                "total": s.total,
                "data": data
            })
        })
        .collect();
    json!(l)
}

pub fn comparison_to_json(c: &LikertComparison) -> JSValue {
    let mut pct_by_label = JSMap::new();
    for (label, pcts) in c.pct_by_label.iter() {
        pct_by_label.insert(label.clone(), json!(pcts));
    }
    json!({
        "order": c.order(),
        "planteles": c.planteles,
        "respondents": c.respondents,
        "likert_answers": c.likert_answers,
        "pct_by_label": pct_by_label,
        "negative_pct": c.negative_pct,
        "positive_pct": c.positive_pct,
        "foco_red": c.foco_red
    })
}

/// Everything a static dashboard needs: the results of the whole table, the
/// results of each group and the comparison of the groups.
pub fn bundle_to_json(snapshot: &Snapshot) -> JSValue {
    let mut planteles = JSMap::new();
    planteles.insert(
        ALL_KEY.to_string(),
        json!({
            "name": ALL_NAME,
            "total": snapshot.rows().len(),
            "questions": summaries_to_json(&snapshot.summarize_all())
        }),
    );
    let mut plantel_list: Vec<String> = vec![ALL_KEY.to_string()];
    for name in snapshot.group_names() {
        let total = snapshot
            .row_groups()
            .iter()
            .filter(|g| g.as_deref() == Some(name.as_str()))
            .count();
        planteles.insert(
            name.clone(),
            json!({
                "name": name,
                "total": total,
                "questions": summaries_to_json(&snapshot.summarize_group(name))
            }),
        );
        plantel_list.push(name.clone());
    }
    debug!("bundle_to_json: {} entries", plantel_list.len());
    json!({
        "planteles": planteles,
        "plantel_list": plantel_list,
        "likert_compare": comparison_to_json(&snapshot.compare_groups())
    })
}
