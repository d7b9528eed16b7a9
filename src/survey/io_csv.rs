// Primitives for reading CSV files.

use std::io::Read;

use survey_tally::builder::TableBuilder;

use crate::survey::{
    io_common::{header_names, text_cell},
    *,
};

pub fn read_csv_table(path: &str) -> SurveyResult<RawTable> {
    let rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .context(CsvOpenSnafu { path })?;
    read_records(rdr)
}

pub fn read_csv_from<R: Read>(input: R) -> SurveyResult<RawTable> {
    let rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);
    read_records(rdr)
}

// The first record is the header.
fn read_records<R: Read>(rdr: csv::Reader<R>) -> SurveyResult<RawTable> {
    let mut records = rdr.into_records();
    let header: Vec<String> = match records.next() {
        Some(line_r) => {
            let line = line_r.context(CsvLineParseSnafu { lineno: 1_usize })?;
            header_names(&line.iter().collect::<Vec<&str>>())
        }
        None => Vec::new(),
    };
    debug!("read_csv_table: header: {:?}", header);

    let mut builder = TableBuilder::new(&header).context(BuildingTableSnafu {})?;
    for (idx, line_r) in records.enumerate() {
        let lineno = idx + 2;
        let line = line_r.context(CsvLineParseSnafu { lineno })?;
        let cells: Vec<Cell> = line.iter().map(text_cell).collect();
        debug!("read_csv_table: lineno: {:?} row: {:?}", lineno, &cells);
        builder.add_row(&cells).context(BuildingTableSnafu {})?;
    }
    Ok(builder.build())
}
