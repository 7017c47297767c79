mod chart_vm;
mod table_vm;
mod upload_vm;

pub use chart_vm::{CHART_HEIGHT, CHART_WIDTH, ChartVm, build_chart, render_line_chart};
pub use table_vm::{TableVm, build_table};
pub use upload_vm::FileSummaryVm;
