/*!
Tabulation of satisfaction surveys.

This crate takes the answers of a survey (one row per respondent, one column
per question), finds out which columns are 5-point satisfaction questions or
Yes/No questions, and computes the distribution of the answers for each group
of respondents ("plantel"). It also compares the groups between them and
flags the ones with the highest share of negative answers ("foco rojo").

```
use survey_tally::builder::TableBuilder;
use survey_tally::{Snapshot, SurveyRules};

let columns = ["Nivel Educativo", "Campus", "Atención"].map(|s| s.to_string());
let mut builder = TableBuilder::new(&columns)?;
for (campus, answer) in [("Norte", "satisfecho"), ("Sur", "Insatisfecho")] {
    builder.add_row(&[
        Some("Primaria".to_string()),
        Some(campus.to_string()),
        Some(answer.to_string()),
    ])?;
}
let snapshot = Snapshot::build(builder.build(), &SurveyRules::default());
assert_eq!(snapshot.group_names(), &["Primaria – Norte", "Primaria – Sur"]);

let comparison = snapshot.compare_groups();
assert_eq!(comparison.planteles[0], "Primaria – Sur");
assert_eq!(comparison.foco_red, vec![true, true]);
# Ok::<(), survey_tally::TableErrors>(())
```

All the computations are pure functions of an immutable [`Snapshot`]. The
[`SnapshotStore`] swaps a whole snapshot when the data is reloaded.
*/

mod config;

pub mod builder;
pub mod classify;
pub mod compare;
pub mod groups;
pub mod manual;
pub mod normalize;
pub mod store;
pub mod tally;

use log::info;

pub use crate::classify::Classification;
pub use crate::config::*;
pub use crate::store::SnapshotStore;

/// A survey table with its questions and groups resolved.
///
/// The answers of the question columns are replaced by their canonical label.
/// A snapshot never changes once built.
#[derive(PartialEq, Debug, Clone)]
pub struct Snapshot {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
    classification: Classification,
    questions: Vec<Question>,
    row_groups: Vec<Option<String>>,
    groups: Vec<String>,
    focus_count: usize,
}

impl Snapshot {
    pub fn build(table: RawTable, rules: &SurveyRules) -> Snapshot {
        let classification = classify::classify_columns(&table, rules);
        let questions = classification.questions();
        let row_groups = groups::assign_groups(&table, rules);
        let group_names = groups::group_directory(&row_groups);

        let RawTable { columns, mut rows } = table;
        for q in questions.iter() {
            for row in rows.iter_mut() {
                if let Some(cell) = row.get_mut(q.column) {
                    *cell = normalize::canonicalize(cell, q.kind);
                }
            }
        }

        let snapshot = Snapshot {
            columns,
            rows,
            classification,
            questions,
            row_groups,
            groups: group_names,
            focus_count: rules.focus_count,
        };
        info!("Snapshot::build: {:?}", snapshot.stats());
        snapshot
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// The canonical rows.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn classification(&self) -> &Classification {
        &self.classification
    }

    /// The questions, in canonical order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// The group of each row.
    pub fn row_groups(&self) -> &[Option<String>] {
        &self.row_groups
    }

    /// The sorted group names. The position of a name is its id.
    pub fn group_names(&self) -> &[String] {
        &self.groups
    }

    pub fn group_directory(&self) -> Vec<GroupEntry> {
        self.groups
            .iter()
            .enumerate()
            .map(|(id, name)| GroupEntry {
                id,
                name: name.clone(),
            })
            .collect()
    }

    pub fn group_name(&self, id: usize) -> Option<&str> {
        self.groups.get(id).map(|s| s.as_str())
    }

    pub fn stats(&self) -> SnapshotStats {
        SnapshotStats {
            rows: self.rows.len(),
            groups: self.groups.len(),
            likert_questions: self.classification.likert.len(),
            yesno_questions: self.classification.yesno.len(),
        }
    }

    /// The distribution of the answers over all the rows.
    pub fn summarize_all(&self) -> Vec<QuestionSummary> {
        tally::summarize(&self.rows, &self.questions)
    }

    /// The distribution of the answers for the rows of one group.
    ///
    /// The name is cleaned before the lookup. An unknown group has no rows.
    pub fn summarize_group(&self, name: &str) -> Vec<QuestionSummary> {
        let name = normalize::clean_text(name);
        let rows: Vec<&Vec<Cell>> = self
            .rows
            .iter()
            .zip(self.row_groups.iter())
            .filter(|(_, g)| g.as_deref() == Some(name.as_str()))
            .map(|(row, _)| row)
            .collect();
        tally::summarize(&rows, &self.questions)
    }

    /// The distribution of the answers for the group with the given id, if it exists.
    pub fn summarize_group_id(&self, id: usize) -> Option<Vec<QuestionSummary>> {
        let name = self.group_name(id)?;
        Some(self.summarize_group(name))
    }

    /// Ranks all the groups by their share of negative Likert answers.
    pub fn compare_groups(&self) -> LikertComparison {
        compare::compare_groups(
            &self.rows,
            &self.row_groups,
            &self.classification.likert,
            &self.groups,
            self.focus_count,
        )
    }
}
