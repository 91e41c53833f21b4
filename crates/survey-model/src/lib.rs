pub mod analysis;
pub mod error;
pub mod matrix;
pub mod question;
pub mod response;
pub mod settings;
pub mod validation;

pub use analysis::{AnalysisResult, DepartmentAnalysis, ExtractionType, Priority, Quadrant};
pub use error::{Result, SurveyError};
pub use matrix::{DepartmentQuestion, DepartmentScoreData};
pub use question::{CategoryId, Question};
pub use response::SurveyResponse;
pub use settings::AnalysisSettings;
pub use validation::{IssueSeverity, RowIssue, ValidationReport};
