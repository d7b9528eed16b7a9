pub use crate::config::*;

/// A builder for assembling a survey table.
///
/// Records may be added either as full rows aligned with the header, or as
/// (column, value) pairs. Missing cells are empty.
///
/// ```
/// use survey_tally::builder::TableBuilder;
/// # use survey_tally::TableErrors;
///
/// let mut builder = TableBuilder::new(&["Campus".to_string(), "Atención".to_string()])?;
/// builder.add_row(&[Some("Norte".to_string()), Some("Satisfecho".to_string())])?;
/// builder.add_record(&[("Atención".to_string(), Some("Neutral".to_string()))]);
/// let table = builder.build();
/// assert_eq!(table.rows.len(), 2);
///
/// # Ok::<(), TableErrors>(())
/// ```
pub struct TableBuilder {
    pub(crate) _columns: Vec<String>,
    pub(crate) _rows: Vec<Vec<Cell>>,
}

impl TableBuilder {
    pub fn new(columns: &[String]) -> Result<TableBuilder, TableErrors> {
        let mut builder = TableBuilder {
            _columns: Vec::new(),
            _rows: Vec::new(),
        };
        for c in columns.iter() {
            if builder._columns.contains(c) {
                return Err(TableErrors::DuplicateColumn(c.clone()));
            }
            builder._columns.push(c.clone());
        }
        Ok(builder)
    }

    /// Adds a row, given in the order of the columns.
    ///
    /// Shorter rows are padded with empty cells.
    pub fn add_row(&mut self, cells: &[Cell]) -> Result<(), TableErrors> {
        if cells.len() > self._columns.len() {
            return Err(TableErrors::RowTooLong {
                row: self._rows.len(),
                len: cells.len(),
                columns: self._columns.len(),
            });
        }
        let mut row = cells.to_vec();
        row.resize(self._columns.len(), None);
        self._rows.push(row);
        Ok(())
    }

    /// Adds a row given as a mapping from column names to values.
    ///
    /// Columns that have not been seen yet are appended to the header, and
    /// the previous rows get an empty cell for them.
    pub fn add_record(&mut self, record: &[(String, Cell)]) {
        let mut row: Vec<Cell> = vec![None; self._columns.len()];
        for (name, value) in record.iter() {
            let idx = match self._columns.iter().position(|c| c == name) {
                Some(idx) => idx,
                None => {
                    self._columns.push(name.clone());
                    for r in self._rows.iter_mut() {
                        r.push(None);
                    }
                    row.push(None);
                    self._columns.len() - 1
                }
            };
            row[idx] = value.clone();
        }
        self._rows.push(row);
    }

    pub fn build(self) -> RawTable {
        RawTable {
            columns: self._columns,
            rows: self._rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(x: &str) -> String {
        x.to_string()
    }

    #[test]
    fn duplicate_columns_are_rejected() {
        let res = TableBuilder::new(&[s("A"), s("B"), s("A")]);
        assert_eq!(res.err(), Some(TableErrors::DuplicateColumn(s("A"))));
    }

    #[test]
    fn rows_are_padded_or_rejected() {
        let mut b = TableBuilder::new(&[s("A"), s("B")]).unwrap();
        b.add_row(&[Some(s("x"))]).unwrap();
        let err = b.add_row(&[None, None, None]).unwrap_err();
        assert_eq!(
            err,
            TableErrors::RowTooLong {
                row: 1,
                len: 3,
                columns: 2
            }
        );
        let t = b.build();
        assert_eq!(t.rows, vec![vec![Some(s("x")), None]]);
    }

    #[test]
    fn records_extend_the_header() {
        let mut b = TableBuilder::new(&[]).unwrap();
        b.add_record(&[(s("A"), Some(s("1")))]);
        b.add_record(&[(s("B"), Some(s("2"))), (s("A"), None)]);
        let t = b.build();
        assert_eq!(t.columns, vec![s("A"), s("B")]);
        assert_eq!(
            t.rows,
            vec![vec![Some(s("1")), None], vec![None, Some(s("2"))]]
        );
    }
}
