// ********* Input data structures ***********

use std::error::Error;
use std::fmt::Display;

/// The content of one cell of a survey table.
///
/// Numbers, dates and other typed values are rendered to text by the readers
/// before they reach this crate: all the vocabulary matching is textual.
pub type Cell = Option<String>;

/// A survey table, as handed over by the readers.
///
/// Every row has exactly one cell per column. Use the [`crate::builder::TableBuilder`]
/// to assemble a table from loosely-shaped records.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct RawTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl RawTable {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}

// ********* Vocabularies ***********

/// The labels of the 5-point satisfaction scale, from the most positive to the most negative.
pub const LIKERT5_ORDER: [&str; 5] = [
    "Muy satisfecho",
    "Satisfecho",
    "Neutral",
    "Insatisfecho",
    "Muy insatisfecho",
];

pub const YESNO_ORDER: [&str; 2] = ["Sí", "No"];

/// The bounded answer scales that are recognized as questions.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum ScaleKind {
    Likert5,
    YesNo,
}

impl ScaleKind {
    /// The fixed order in which the labels of this scale are reported.
    pub fn labels(&self) -> &'static [&'static str] {
        match self {
            ScaleKind::Likert5 => &LIKERT5_ORDER,
            ScaleKind::YesNo => &YESNO_ORDER,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScaleKind::Likert5 => "likert5",
            ScaleKind::YesNo => "yesno",
        }
    }
}

/// Why a column is not treated as a question.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum ExclusionReason {
    /// The header cell was empty.
    Unnamed,
    /// The name contains one of the blocklisted keywords (timestamps, names, comments...)
    Blocklisted,
    /// Too many distinct answers: an open-ended question.
    TooManyValues,
    /// The answers do not fit in any of the known scales.
    UnknownVocabulary,
}

#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum ColumnKind {
    Likert5,
    YesNo,
    Excluded(ExclusionReason),
}

impl ColumnKind {
    pub fn scale(&self) -> Option<ScaleKind> {
        match self {
            ColumnKind::Likert5 => Some(ScaleKind::Likert5),
            ColumnKind::YesNo => Some(ScaleKind::YesNo),
            ColumnKind::Excluded(_) => None,
        }
    }
}

/// A column that has been recognized as a bounded-choice question.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub struct Question {
    pub name: String,
    /// Position of the column in the table.
    pub column: usize,
    pub kind: ScaleKind,
}

// ******** Output data structures *********

#[derive(PartialEq, Debug, Clone)]
pub struct LabelCount {
    pub label: String,
    pub count: u64,
    pub pct: f64,
}

/// The distribution of the answers to one question, for a subset of the rows.
#[derive(PartialEq, Debug, Clone)]
pub struct QuestionSummary {
    pub question: String,
    pub kind: ScaleKind,
    /// The number of rows in the subset, answered or not.
    pub total: u64,
    /// One entry per label, in the fixed order of the scale.
    pub data: Vec<LabelCount>,
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct GroupEntry {
    pub id: usize,
    pub name: String,
}

/// Likert statistics for a single group, before ranking.
#[derive(PartialEq, Debug, Clone)]
pub struct GroupComparison {
    pub group: String,
    pub respondents: u64,
    pub likert_answers: u64,
    /// Percentages, aligned with LIKERT5_ORDER.
    pub pct_by_label: [f64; 5],
    pub negative_pct: f64,
    pub positive_pct: f64,
}

/// The cross-group comparison. All the vectors are aligned with the ranked
/// order of the groups.
#[derive(PartialEq, Debug, Clone, Default)]
pub struct LikertComparison {
    pub planteles: Vec<String>,
    pub respondents: Vec<u64>,
    pub likert_answers: Vec<u64>,
    /// For each label of LIKERT5_ORDER, the percentages of every group.
    pub pct_by_label: Vec<(String, Vec<f64>)>,
    pub negative_pct: Vec<f64>,
    pub positive_pct: Vec<f64>,
    pub foco_red: Vec<bool>,
}

impl LikertComparison {
    pub fn order(&self) -> &'static [&'static str] {
        &LIKERT5_ORDER
    }
}

/// Summary figures of a loaded snapshot.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct SnapshotStats {
    pub rows: usize,
    pub groups: usize,
    pub likert_questions: usize,
    pub yesno_questions: usize,
}

/// Errors that prevent a table from being assembled.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum TableErrors {
    DuplicateColumn(String),
    RowTooLong {
        row: usize,
        len: usize,
        columns: usize,
    },
}

impl Error for TableErrors {}

impl Display for TableErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableErrors::DuplicateColumn(name) => write!(f, "duplicate column {:?}", name),
            TableErrors::RowTooLong { row, len, columns } => write!(
                f,
                "row {} has {} cells but the table only has {} columns",
                row, len, columns
            ),
        }
    }
}

// ********* Configuration **********

/// The settings that govern how a table is read.
///
/// The defaults correspond to the standard satisfaction survey.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct SurveyRules {
    /// Column names containing any of these keywords (case-insensitive) are never questions.
    pub excluded_keywords: Vec<String>,
    /// Above this number of distinct answers, a column is considered open-ended.
    pub max_distinct_values: usize,
    /// The column holding the education level of the respondent.
    pub level_column: String,
    /// The column holding the site (campus) of the respondent.
    pub site_column: String,
    /// The group assigned to every row when the level or the site column is missing.
    pub fallback_group: String,
    /// How many groups are flagged as "foco rojo".
    pub focus_count: usize,
}

impl Default for SurveyRules {
    fn default() -> Self {
        SurveyRules {
            excluded_keywords: [
                "marca temporal",
                "nombre del alumno",
                "campus",
                "nivel educativo",
                "grado",
                "¿por qué",
                "comentarios",
                "sugerencias",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            max_distinct_values: 10,
            level_column: "Nivel Educativo".to_string(),
            site_column: "Campus".to_string(),
            fallback_group: "Plantel".to_string(),
            focus_count: 3,
        }
    }
}
