use crate::config::*;

const NBSP: char = '\u{00A0}';
const EN_DASH: char = '\u{2013}';
const EM_DASH: char = '\u{2014}';

/// Cleans free text coming from a spreadsheet cell.
///
/// Non-breaking spaces become plain spaces, em dashes become en dashes and
/// all the runs of whitespace are collapsed into a single space. The result
/// is trimmed.
pub fn clean_text(s: &str) -> String {
    let replaced: String = s
        .chars()
        .map(|c| match c {
            NBSP => ' ',
            EM_DASH => EN_DASH,
            c => c,
        })
        .collect();
    replaced.split_whitespace().collect::<Vec<&str>>().join(" ")
}

/// The lookup key of an answer: trimmed and lower-cased.
pub(crate) fn answer_key(s: &str) -> String {
    s.trim().to_lowercase()
}

/// The canonical label for a lookup key, if the key belongs to the scale.
pub(crate) fn canonical_label(key: &str, kind: ScaleKind) -> Option<&'static str> {
    match kind {
        ScaleKind::Likert5 => LIKERT5_ORDER
            .iter()
            .find(|label| label.to_lowercase() == key)
            .copied(),
        ScaleKind::YesNo => match key {
            "sí" | "si" => Some(YESNO_ORDER[0]),
            "no" => Some(YESNO_ORDER[1]),
            _ => None,
        },
    }
}

/// Maps a raw answer to the canonical label of the scale.
///
/// Answers that are not part of the vocabulary are returned unchanged: they
/// will not be counted under any label.
pub fn canonicalize(value: &Cell, kind: ScaleKind) -> Cell {
    let s = value.as_ref()?;
    match canonical_label(&answer_key(s), kind) {
        Some(label) => Some(label.to_string()),
        None => Some(s.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_text_spaces_and_dashes() {
        assert_eq!(
            clean_text("  Primaria\u{00A0}\u{2014}  Norte \t"),
            "Primaria \u{2013} Norte"
        );
        assert_eq!(clean_text("Secundaria – Sur"), "Secundaria – Sur");
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text(" \u{00A0} "), "");
    }

    #[test]
    fn canonicalize_likert() {
        let c = |s: &str| canonicalize(&Some(s.to_string()), ScaleKind::Likert5);
        assert_eq!(c("  MUY satisfecho "), Some("Muy satisfecho".to_string()));
        assert_eq!(c("insatisfecho"), Some("Insatisfecho".to_string()));
        assert_eq!(c("Bueno"), Some("Bueno".to_string()));
        assert_eq!(canonicalize(&None, ScaleKind::Likert5), None);
    }

    #[test]
    fn canonicalize_yes_no() {
        let c = |s: &str| canonicalize(&Some(s.to_string()), ScaleKind::YesNo);
        assert_eq!(c("si"), Some("Sí".to_string()));
        assert_eq!(c(" SÍ"), Some("Sí".to_string()));
        assert_eq!(c("No "), Some("No".to_string()));
        // Not coerced.
        assert_eq!(c("Tal vez"), Some("Tal vez".to_string()));
    }
}
