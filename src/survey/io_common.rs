use std::path::Path;

use survey_tally::classify::UNNAMED_PREFIX;
use survey_tally::Cell;

pub fn simplify_file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or(path)
        .to_string()
}

/// The column names of a header row.
///
/// Blank headers are named after their position and repeated names get a
/// numbered suffix, so that every column keeps a distinct name.
pub fn header_names<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    let mut res: Vec<String> = Vec::with_capacity(raw.len());
    for (idx, name) in raw.iter().enumerate() {
        let name = name.as_ref().trim();
        let base = if name.is_empty() {
            format!("{}{}", UNNAMED_PREFIX, idx)
        } else {
            name.to_string()
        };
        let mut candidate = base.clone();
        let mut k = 1;
        while res.contains(&candidate) {
            candidate = format!("{}.{}", base, k);
            k += 1;
        }
        res.push(candidate);
    }
    res
}

/// A cell read as text. Blank text is an unanswered cell.
pub fn text_cell(s: &str) -> Cell {
    if s.trim().is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

/// A cell read as a number. Integral values are written without decimals.
pub fn number_cell(f: f64) -> Cell {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
        Some(format!("{}", f as i64))
    } else {
        Some(f.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells() {
        assert_eq!(text_cell("  "), None);
        assert_eq!(text_cell(" Sí "), Some(" Sí ".to_string()));
        assert_eq!(number_cell(3.0), Some("3".to_string()));
        assert_eq!(number_cell(2.5), Some("2.5".to_string()));
        assert_eq!(simplify_file_name("/data/encuesta.xlsx"), "encuesta.xlsx");
    }

    #[test]
    fn headers_are_made_distinct() {
        assert_eq!(
            header_names(&["Campus", " ", "Atención", "", "Atención", "Atención"]),
            vec![
                "Campus",
                "Unnamed: 1",
                "Atención",
                "Unnamed: 3",
                "Atención.1",
                "Atención.2"
            ]
        );
        // A suffixed name already taken is skipped.
        assert_eq!(header_names(&["A", "A.1", "A"]), vec!["A", "A.1", "A.2"]);
    }
}
