use calamine::{open_workbook, DataType, Reader, Xlsx};

use survey_tally::builder::TableBuilder;

use crate::survey::{
    io_common::{header_names, number_cell, text_cell},
    *,
};

/// Reads the answers from an Excel workbook. The first row holds the questions.
pub fn read_excel_table(path: &str, worksheet_name: Option<&str>) -> SurveyResult<RawTable> {
    let wrange = get_range(path, worksheet_name)?;

    let mut iter = wrange.rows();
    let header_row = iter.next().context(EmptyExcelSnafu { path })?;
    let raw_header: Vec<String> = header_row
        .iter()
        .map(|dt| read_cell(dt).unwrap_or_default())
        .collect();
    let header = header_names(&raw_header);
    debug!("read_excel_table: header: {:?}", header);

    let mut builder = TableBuilder::new(&header).context(BuildingTableSnafu {})?;
    for (idx, row) in iter.enumerate() {
        let cells: Vec<Cell> = row.iter().map(read_cell).collect();
        debug!("read_excel_table: idx: {:?} row: {:?}", idx, &cells);
        builder.add_row(&cells).context(BuildingTableSnafu {})?;
    }
    Ok(builder.build())
}

fn read_cell(cell: &DataType) -> Cell {
    match cell {
        DataType::String(s) => text_cell(s),
        DataType::Float(f) => number_cell(*f),
        DataType::Int(i) => Some(i.to_string()),
        DataType::Bool(b) => Some(b.to_string()),
        // Serial date, kept as a number: dates are never questions.
        DataType::DateTime(f) => number_cell(*f),
        DataType::Empty => None,
        _ => {
            warn!("read_cell: ignoring cell {:?}", cell);
            None
        }
    }
}

fn get_range(path: &str, worksheet_name_o: Option<&str>) -> SurveyResult<calamine::Range<DataType>> {
    debug!(
        "read_excel_table: path: {:?} worksheet: {:?}",
        &path, &worksheet_name_o
    );
    let mut workbook: Xlsx<_> = open_workbook(path).context(OpeningExcelSnafu { path })?;

    // A worksheet name was provided, use it.
    if let Some(worksheet_name) = worksheet_name_o {
        let wrange = workbook
            .worksheet_range(worksheet_name)
            .context(MissingWorksheetSnafu {
                path,
                name: worksheet_name,
            })?
            .context(OpeningExcelSnafu { path })?;
        Ok(wrange)
    } else {
        let all_worksheets = workbook.worksheets();
        match all_worksheets.as_slice() {
            [] => EmptyExcelSnafu { path }.fail(),
            [(worksheet_name, wrange)] => {
                debug!(
                    "read_excel_table: path: {:?} worksheet: {:?}",
                    &path, &worksheet_name
                );
                Ok(wrange.clone())
            }
            _ => TooManyWorksheetsSnafu { path }.fail(),
        }
    }
}
