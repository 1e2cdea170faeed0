pub mod model;
pub mod provider;
pub mod sample;
pub mod tabulation;

pub use model::{CandidateTally, ModelError, SurveyResult};
pub use provider::{Diagnostic, DiagnosticSink, FetchError, SurveyResultProvider};
