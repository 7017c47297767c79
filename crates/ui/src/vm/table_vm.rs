use analyzer_core::format::format_cell;
use analyzer_core::model::TableRow;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableVm {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableVm {
    #[must_use]
    pub fn title(&self) -> String {
        format!("Detailed Data ({} rows)", self.rows.len())
    }
}

/// Lay out result rows under the first row's columns.
///
/// Returns `None` when there is nothing to show.
#[must_use]
pub fn build_table(rows: &[TableRow]) -> Option<TableVm> {
    let first = rows.first()?;
    let columns: Vec<String> = first.keys().cloned().collect();
    let rows = rows
        .iter()
        .map(|row| {
            columns
                .iter()
                .map(|column| row.get(column).map(format_cell).unwrap_or_default())
                .collect()
        })
        .collect();
    Some(TableVm { columns, rows })
}
