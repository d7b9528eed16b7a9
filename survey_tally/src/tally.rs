use log::debug;

use crate::config::*;

/// Rounds a percentage to one decimal.
///
/// Ties are resolved to the even neighbour, on the exact binary value of the number.
pub fn round_pct(x: f64) -> f64 {
    format!("{:.1}", x).parse::<f64>().unwrap_or(x)
}

/// `count / total` as a rounded percentage, zero when there is nothing to divide.
pub fn percentage(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        round_pct(count as f64 / total as f64 * 100.0)
    }
}

/// Computes the distribution of the answers of each question over the given rows.
///
/// Every row counts toward the total of every question, including the rows
/// that left the question blank or gave an answer outside the vocabulary.
/// Such rows do not count toward any label.
pub fn summarize<R: AsRef<[Cell]>>(rows: &[R], questions: &[Question]) -> Vec<QuestionSummary> {
    let total = rows.len() as u64;
    let mut res: Vec<QuestionSummary> = Vec::new();
    for q in questions.iter() {
        let labels = q.kind.labels();
        let mut counts: Vec<u64> = vec![0; labels.len()];
        for row in rows.iter() {
            if let Some(Some(v)) = row.as_ref().get(q.column) {
                if let Some(pos) = labels.iter().position(|l| l == v) {
                    counts[pos] += 1;
                }
            }
        }
        debug!("summarize: {:?}: {:?} / {}", q.name, counts, total);
        let data: Vec<LabelCount> = labels
            .iter()
            .zip(counts)
            .map(|(label, count)| LabelCount {
                label: label.to_string(),
                count,
                pct: percentage(count, total),
            })
            .collect();
        res.push(QuestionSummary {
            question: q.name.clone(),
            kind: q.kind,
            total,
            data,
        });
    }
    res
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(vals: &[Option<&str>]) -> Vec<Cell> {
        vals.iter().map(|v| v.map(|s| s.to_string())).collect()
    }

    fn questions() -> Vec<Question> {
        vec![
            Question {
                name: "Atención".to_string(),
                column: 0,
                kind: ScaleKind::Likert5,
            },
            Question {
                name: "¿Recomendarías?".to_string(),
                column: 1,
                kind: ScaleKind::YesNo,
            },
        ]
    }

    #[test]
    fn rounding() {
        assert_eq!(round_pct(100.0 / 3.0), 33.3);
        assert_eq!(round_pct(200.0 / 3.0), 66.7);
        assert_eq!(round_pct(33.3 + 33.3), 66.6);
        assert_eq!(round_pct(12.5), 12.5);
        assert_eq!(percentage(1, 0), 0.0);
    }

    #[test]
    fn counts_fixed_label_order() {
        let rows = vec![
            row(&[Some("Satisfecho"), Some("Sí")]),
            row(&[Some("Satisfecho"), Some("No")]),
            row(&[Some("Muy insatisfecho"), None]),
            row(&[None, Some("Quizá")]),
        ];
        let res = summarize(&rows, &questions());
        assert_eq!(res.len(), 2);

        let likert = &res[0];
        assert_eq!(likert.kind, ScaleKind::Likert5);
        assert_eq!(likert.total, 4);
        let labels: Vec<&str> = likert.data.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(labels, LIKERT5_ORDER.to_vec());
        let counts: Vec<u64> = likert.data.iter().map(|d| d.count).collect();
        assert_eq!(counts, vec![0, 2, 0, 0, 1]);
        assert_eq!(likert.data[1].pct, 50.0);
        assert_eq!(likert.data[4].pct, 25.0);

        let yesno = &res[1];
        let counts: Vec<u64> = yesno.data.iter().map(|d| d.count).collect();
        assert_eq!(counts, vec![1, 1]);
        assert!(counts.iter().sum::<u64>() < yesno.total);
    }

    #[test]
    fn empty_subset() {
        let rows: Vec<Vec<Cell>> = vec![];
        let res = summarize(&rows, &questions());
        assert_eq!(res.len(), 2);
        for q in res.iter() {
            assert_eq!(q.total, 0);
            assert!(q.data.iter().all(|d| d.count == 0 && d.pct == 0.0));
        }
    }

    #[test]
    fn no_questions() {
        let rows = vec![row(&[Some("Satisfecho")])];
        assert!(summarize(&rows, &[]).is_empty());
    }
}
