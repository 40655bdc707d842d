pub mod analysis_controller;

pub use analysis_controller::AnalysisRequestController;
