pub mod canonical;
pub mod detect;
pub mod error;
pub mod frequency;
pub mod matrix;
pub mod normalize;
pub mod patterns;
pub mod raw_table;
pub mod workbook;

pub use canonical::{CanonicalRow, CanonicalTable, QuestionColumn, leading_number, question_key};
pub use detect::{FrequencyLayout, PlainLayout, TableShape, detect_shape};
pub use error::{IngestError, MatrixError, Result};
pub use frequency::reconstruct_frequency;
pub use matrix::extract_department_matrix;
pub use normalize::{normalize, normalize_plain};
pub use raw_table::{RawTable, parse_count, parse_f64, read_csv_table};
pub use workbook::{read_table, read_workbook_table};
