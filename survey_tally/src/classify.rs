use log::debug;
use std::collections::HashSet;

use crate::config::*;
use crate::normalize::answer_key;

const YESNO_KEYS: [&str; 3] = ["sí", "si", "no"];

/// The outcome of inspecting all the columns of a table.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Classification {
    /// The kind of every column, in table order.
    pub columns: Vec<(String, ColumnKind)>,
    /// The Likert questions, in table order.
    pub likert: Vec<Question>,
    /// The Yes/No questions, in table order.
    pub yesno: Vec<Question>,
}

impl Classification {
    /// The canonical question order: all the Likert questions first, then the
    /// Yes/No questions, each in table order.
    pub fn questions(&self) -> Vec<Question> {
        self.likert
            .iter()
            .chain(self.yesno.iter())
            .cloned()
            .collect()
    }
}

/// Tags every column of the table as a Likert question, a Yes/No question or excluded.
pub fn classify_columns(table: &RawTable, rules: &SurveyRules) -> Classification {
    let keywords: Vec<String> = rules
        .excluded_keywords
        .iter()
        .map(|kw| kw.to_lowercase())
        .collect();

    let mut columns: Vec<(String, ColumnKind)> = Vec::new();
    let mut likert: Vec<Question> = Vec::new();
    let mut yesno: Vec<Question> = Vec::new();
    for (idx, name) in table.columns.iter().enumerate() {
        let kind = if is_unnamed(name) {
            ColumnKind::Excluded(ExclusionReason::Unnamed)
        } else if is_blocklisted(name, &keywords) {
            ColumnKind::Excluded(ExclusionReason::Blocklisted)
        } else {
            let values = table.rows.iter().filter_map(|row| row.get(idx));
            classify_values(values, rules.max_distinct_values)
        };
        debug!("classify_columns: column {:?}: {:?}", name, kind);

        if let Some(scale) = kind.scale() {
            let q = Question {
                name: name.clone(),
                column: idx,
                kind: scale,
            };
            match scale {
                ScaleKind::Likert5 => likert.push(q),
                ScaleKind::YesNo => yesno.push(q),
            }
        }
        columns.push((name.clone(), kind));
    }
    Classification {
        columns,
        likert,
        yesno,
    }
}

/// Decides the kind of a column from its values.
///
/// A column without any value is vacuously contained in every vocabulary. Since
/// the Likert scale is checked first, such a column is a Likert question.
pub fn classify_values<'a>(
    values: impl Iterator<Item = &'a Cell>,
    max_distinct_values: usize,
) -> ColumnKind {
    let distinct: HashSet<&str> = values.filter_map(|v| v.as_deref()).collect();
    if distinct.len() > max_distinct_values {
        return ColumnKind::Excluded(ExclusionReason::TooManyValues);
    }
    let keys: HashSet<String> = distinct.iter().map(|s| answer_key(s)).collect();
    let likert_keys: Vec<String> = LIKERT5_ORDER.iter().map(|l| l.to_lowercase()).collect();
    if is_subset(&keys, &likert_keys) {
        ColumnKind::Likert5
    } else if is_subset(&keys, &YESNO_KEYS) {
        ColumnKind::YesNo
    } else {
        ColumnKind::Excluded(ExclusionReason::UnknownVocabulary)
    }
}

fn is_subset<S: AsRef<str>>(observed: &HashSet<String>, vocabulary: &[S]) -> bool {
    observed
        .iter()
        .all(|v| vocabulary.iter().any(|w| w.as_ref() == v))
}

/// The prefix given by the readers to the columns without a header.
pub const UNNAMED_PREFIX: &str = "Unnamed: ";

fn is_unnamed(name: &str) -> bool {
    let n = name.trim();
    n.is_empty() || n == "None" || n.starts_with(UNNAMED_PREFIX)
}

fn is_blocklisted(name: &str, keywords: &[String]) -> bool {
    let lower = name.to_lowercase();
    keywords.iter().any(|kw| lower.contains(kw.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(vals: &[Option<&str>]) -> Vec<Cell> {
        vals.iter().map(|v| v.map(|s| s.to_string())).collect()
    }

    #[test]
    fn likert_with_mixed_casing() {
        let vals = cells(&[Some("Satisfecho"), Some("satisfecho"), Some("SATISFECHO ")]);
        assert_eq!(classify_values(vals.iter(), 10), ColumnKind::Likert5);
    }

    #[test]
    fn yes_no_with_unknown_answer() {
        let vals = cells(&[Some("Sí"), Some("No"), Some("Tal vez")]);
        assert_eq!(
            classify_values(vals.iter(), 10),
            ColumnKind::Excluded(ExclusionReason::UnknownVocabulary)
        );
        let vals = cells(&[Some("Si"), None, Some("no")]);
        assert_eq!(classify_values(vals.iter(), 10), ColumnKind::YesNo);
    }

    #[test]
    fn all_null_column_is_likert() {
        let vals = cells(&[None, None]);
        assert_eq!(classify_values(vals.iter(), 10), ColumnKind::Likert5);
        assert_eq!(classify_values(Vec::<Cell>::new().iter(), 10), ColumnKind::Likert5);
    }

    #[test]
    fn too_many_distinct_values() {
        let owned: Vec<Cell> = (0..11).map(|i| Some(format!("answer {}", i))).collect();
        assert_eq!(
            classify_values(owned.iter(), 10),
            ColumnKind::Excluded(ExclusionReason::TooManyValues)
        );
        // Exactly at the limit is still inspected.
        assert_eq!(
            classify_values(owned[..10].iter(), 10),
            ColumnKind::Excluded(ExclusionReason::UnknownVocabulary)
        );
    }

    #[test]
    fn question_order_and_exclusions() {
        let table = RawTable {
            columns: vec![
                "Marca temporal".to_string(),
                "¿Recomendarías la escuela?".to_string(),
                "Atención en ventanilla".to_string(),
                "".to_string(),
                "Limpieza".to_string(),
                "Unnamed: 6".to_string(),
                "Comentarios adicionales".to_string(),
            ],
            rows: vec![
                cells(&[Some("2024-01-01"), Some("Sí"), Some("Neutral"), Some("x"), Some("Satisfecho"), Some("Neutral"), Some("Muy satisfecho")]),
                cells(&[Some("2024-01-02"), Some("no"), Some("satisfecho"), None, None, None, None]),
            ],
        };
        let c = classify_columns(&table, &SurveyRules::default());
        let kinds: Vec<ColumnKind> = c.columns.iter().map(|p| p.1).collect();
        assert_eq!(
            kinds,
            vec![
                ColumnKind::Excluded(ExclusionReason::Blocklisted),
                ColumnKind::YesNo,
                ColumnKind::Likert5,
                ColumnKind::Excluded(ExclusionReason::Unnamed),
                ColumnKind::Likert5,
                ColumnKind::Excluded(ExclusionReason::Unnamed),
                ColumnKind::Excluded(ExclusionReason::Blocklisted),
            ]
        );
        let names: Vec<String> = c.questions().iter().map(|q| q.name.clone()).collect();
        assert_eq!(
            names,
            vec!["Atención en ventanilla", "Limpieza", "¿Recomendarías la escuela?"]
        );
        assert_eq!(c.questions()[2].column, 1);
    }
}
