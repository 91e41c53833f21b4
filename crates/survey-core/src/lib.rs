pub mod analyze;
pub mod classify;
pub mod department;
pub mod distribution;
pub mod quadrant;
pub mod session;
pub mod stats;
pub mod text_utils;

pub use analyze::{analyze, importance, overall_scores};
pub use classify::{Category, CategoryRegistry};
pub use department::{
    department_analyze, department_matrix_analyze, departments, matrix_overall_mean,
};
pub use distribution::{ScaleBucket, distribution};
pub use quadrant::{IMPORTANCE_THRESHOLD, classify_quadrant, derive_priority, extraction_type};
pub use session::{Comment, CommentStore, CommentTarget, Session};
pub use stats::{high_ratio, low_ratio, mean, median, pearson, round2, std_dev};
pub use text_utils::natural_cmp;
