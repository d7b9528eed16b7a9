// Reads the JSON export of a spreadsheet endpoint.

use survey_tally::builder::TableBuilder;

use crate::survey::{
    io_common::{header_names, text_cell},
    *,
};

pub fn read_json_table(path: &str) -> SurveyResult<RawTable> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let payload: JSValue = serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu {})?;
    parse_payload(&payload)
}

/// Accepts the shapes produced by the endpoint:
/// * a list of records
/// * `{"records": [...]}` or `{"data": [...]}`
/// * `{"columns": [...], "rows": [[...], ...]}`
///
/// A payload with `"ok": false` carries an error message instead of data.
pub fn parse_payload(payload: &JSValue) -> SurveyResult<RawTable> {
    match payload {
        JSValue::Array(records) => read_records(records),
        JSValue::Object(obj) => {
            if obj.get("ok") == Some(&JSValue::Bool(false)) {
                let message = obj
                    .get("error")
                    .and_then(|e| e.as_str())
                    .filter(|e| !e.is_empty())
                    .unwrap_or("Endpoint returned ok:false");
                return EndpointRejectedSnafu { message }.fail();
            }
            if let Some(JSValue::Array(records)) = obj.get("records") {
                read_records(records)
            } else if let Some(JSValue::Array(records)) = obj.get("data") {
                read_records(records)
            } else if let (Some(JSValue::Array(columns)), Some(JSValue::Array(rows))) =
                (obj.get("columns"), obj.get("rows"))
            {
                read_columns_rows(columns, rows)
            } else {
                UnrecognizedPayloadSnafu {
                    description: "expected {records:[...]} or a list of objects",
                }
                .fail()
            }
        }
        _ => UnrecognizedPayloadSnafu {
            description: "the payload is neither an object nor a list",
        }
        .fail(),
    }
}

fn read_records(records: &[JSValue]) -> SurveyResult<RawTable> {
    let mut builder = TableBuilder::new(&[]).context(BuildingTableSnafu {})?;
    // A list that does not start with an object holds no records.
    if !matches!(records.first(), Some(JSValue::Object(_))) {
        return Ok(builder.build());
    }
    for (idx, record) in records.iter().enumerate() {
        match record {
            JSValue::Object(obj) => {
                let cells: Vec<(String, Cell)> = obj
                    .iter()
                    .map(|(k, v)| (k.clone(), json_cell(v)))
                    .collect();
                builder.add_record(&cells);
            }
            _ => warn!("read_records: skipping record {}: {:?}", idx, record),
        }
    }
    Ok(builder.build())
}

fn read_columns_rows(columns: &[JSValue], rows: &[JSValue]) -> SurveyResult<RawTable> {
    let raw_header: Vec<String> = columns
        .iter()
        .map(|c| json_cell(c).unwrap_or_default())
        .collect();
    let header = header_names(&raw_header);
    let mut builder = TableBuilder::new(&header).context(BuildingTableSnafu {})?;
    for (idx, row) in rows.iter().enumerate() {
        match row {
            JSValue::Array(values) => {
                let cells: Vec<Cell> = values.iter().map(json_cell).collect();
                builder.add_row(&cells).context(BuildingTableSnafu {})?;
            }
            _ => warn!("read_columns_rows: skipping row {}: {:?}", idx, row),
        }
    }
    Ok(builder.build())
}

fn json_cell(v: &JSValue) -> Cell {
    match v {
        JSValue::Null => None,
        JSValue::String(s) => text_cell(s),
        JSValue::Number(n) => match n.as_f64() {
            Some(f) if !n.is_i64() && !n.is_u64() => io_common::number_cell(f),
            _ => Some(n.to_string()),
        },
        JSValue::Bool(b) => Some(b.to_string()),
        x => Some(x.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn list_of_records() {
        let t = parse_payload(&json!([
            {"Campus": "Norte", "Atención": "Satisfecho", "Edad": 12},
            {"Atención": " ", "Campus": "Sur", "Grupo": 2.5},
            "garbage"
        ]))
        .unwrap();
        assert_eq!(t.columns, vec!["Campus", "Atención", "Edad", "Grupo"]);
        assert_eq!(
            t.rows,
            vec![
                vec![
                    Some("Norte".to_string()),
                    Some("Satisfecho".to_string()),
                    Some("12".to_string()),
                    None
                ],
                vec![Some("Sur".to_string()), None, None, Some("2.5".to_string())],
            ]
        );
    }

    #[test]
    fn wrapped_records() {
        let records = json!([{"A": "x"}]);
        let a = parse_payload(&json!({ "ok": true, "records": records })).unwrap();
        let b = parse_payload(&json!({ "data": records })).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.rows, vec![vec![Some("x".to_string())]]);

        let empty = parse_payload(&json!([1, 2])).unwrap();
        assert!(empty.columns.is_empty() && empty.rows.is_empty());
    }

    #[test]
    fn columns_and_rows() {
        let t = parse_payload(&json!({
            "columns": ["Campus", "Atención"],
            "rows": [["Norte", "Neutral"], ["Sur", null], ["Centro"]]
        }))
        .unwrap();
        assert_eq!(t.columns, vec!["Campus", "Atención"]);
        assert_eq!(t.rows[1], vec![Some("Sur".to_string()), None]);
        assert_eq!(t.rows[2], vec![Some("Centro".to_string()), None]);

        let t = parse_payload(&json!({
            "columns": ["Atención", null, "Atención"],
            "rows": [["Neutral", "x", "Satisfecho"]]
        }))
        .unwrap();
        assert_eq!(t.columns, vec!["Atención", "Unnamed: 1", "Atención.1"]);
    }

    #[test]
    fn rejected_and_unknown_payloads() {
        match parse_payload(&json!({"ok": false, "error": "bad key"})) {
            Err(SurveyError::EndpointRejected { message }) => assert_eq!(message, "bad key"),
            x => panic!("unexpected {:?}", x),
        }
        assert!(matches!(
            parse_payload(&json!({"ok": false})),
            Err(SurveyError::EndpointRejected { .. })
        ));
        assert!(matches!(
            parse_payload(&json!({"values": []})),
            Err(SurveyError::UnrecognizedPayload { .. })
        ));
        assert!(matches!(
            parse_payload(&json!("hello")),
            Err(SurveyError::UnrecognizedPayload { .. })
        ));
    }
}
