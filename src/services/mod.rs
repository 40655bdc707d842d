pub mod report_renderer;
pub mod report_writer;

pub use report_renderer::render_outcome;
pub use report_writer::ReportWriter;
