pub mod loaders;
pub mod outcome;
pub mod question;
pub mod question_set;
pub mod sample;

pub use loaders::{load_question_set, load_toml_to_question_set};
pub use outcome::AnalysisOutcome;
pub use question::{format_options, parse_options, QuestionField, QuestionRecord};
pub use question_set::QuestionSet;
pub use sample::sample_questions;
