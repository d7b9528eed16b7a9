use crate::survey::*;

use serde::{Deserialize, Serialize};
use serde_json::Value as JSValue;

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize, Default)]
pub struct SurveySource {
    pub provider: Option<String>,
    #[serde(rename = "filePath")]
    pub file_path: Option<String>,
    #[serde(rename = "excelWorksheetName")]
    pub excel_worksheet_name: Option<String>,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize, Default)]
pub struct SurveyConfig {
    pub source: Option<SurveySource>,
    #[serde(rename = "levelColumn")]
    pub level_column: Option<String>,
    #[serde(rename = "siteColumn")]
    pub site_column: Option<String>,
    #[serde(rename = "excludedKeywords")]
    pub excluded_keywords: Option<Vec<String>>,
    #[serde(rename = "maxDistinctValues")]
    _max_distinct_values: Option<JSValue>,
    #[serde(rename = "focusCount")]
    _focus_count: Option<JSValue>,
    #[serde(rename = "fallbackGroup")]
    pub fallback_group: Option<String>,
    #[serde(rename = "outputPath")]
    pub output_path: Option<String>,
}

impl SurveyConfig {
    /// The rules of the survey: the defaults, overridden by the fields of the file.
    pub fn rules(&self) -> SurveyResult<SurveyRules> {
        let mut rules = SurveyRules::default();
        if let Some(x) = &self.level_column {
            rules.level_column = x.clone();
        }
        if let Some(x) = &self.site_column {
            rules.site_column = x.clone();
        }
        if let Some(x) = &self.excluded_keywords {
            rules.excluded_keywords = x.clone();
        }
        if let Some(x) = &self.fallback_group {
            rules.fallback_group = x.clone();
        }
        if let Some(x) = read_js_int(&self._max_distinct_values, "maxDistinctValues")? {
            if x == 0 {
                whatever!("maxDistinctValues must be at least 1");
            }
            rules.max_distinct_values = x;
        }
        if let Some(x) = read_js_int(&self._focus_count, "focusCount")? {
            rules.focus_count = x;
        }
        Ok(rules)
    }
}

pub fn read_config(path: &str) -> SurveyResult<SurveyConfig> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu {})
}

pub fn read_reference(path: &str) -> SurveyResult<JSValue> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    debug!("read_reference: {} bytes", contents.len());
    serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu {})
}

// Numbers may be written as JSON numbers or as strings.
fn read_js_int(x: &Option<JSValue>, field: &str) -> SurveyResult<Option<usize>> {
    match x {
        None | Some(JSValue::Null) => Ok(None),
        Some(JSValue::Number(n)) => n
            .as_u64()
            .map(|x| Some(x as usize))
            .context(ParsingJsonNumberSnafu { field }),
        Some(JSValue::String(s)) => s
            .trim()
            .parse::<usize>()
            .ok()
            .map(Some)
            .context(ParsingJsonNumberSnafu { field }),
        _ => ParsingJsonNumberSnafu { field }.fail(),
    }
}
