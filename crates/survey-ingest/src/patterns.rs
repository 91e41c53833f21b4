//! Header-name pattern tables.
//!
//! Shape detection is pattern matching over arbitrary headers, so every
//! keyword list lives here in one place. Matching is substring-based over
//! the lowercased header, which mirrors how real survey exports name their
//! columns (mixed Japanese and English, inconsistent casing).

/// Identifier-like headers: respondent/employee id columns.
const IDENTIFIER_KEYWORDS: &[&str] = &["id", "番号", "社員", "回答者", "respondent", "employee"];

/// Department-like headers.
const DEPARTMENT_KEYWORDS: &[&str] = &[
    "部署",
    "部門",
    "所属",
    "組織",
    "department",
    "dept",
    "division",
];

/// Question-number headers (row-number markers in matrix and frequency
/// layouts).
const NUMBER_HEADER_EXACT: &[&str] = &["no", "no.", "#", "q", "qno", "q#"];
const NUMBER_HEADER_CONTAINS: &[&str] = &["番号", "number"];

/// Weighted-average / score headers.
const AVERAGE_KEYWORDS: &[&str] = &["点", "平均", "average", "avg", "mean"];

/// Likert answer labels that sometimes leak into headers.
const LIKERT_KEYWORDS: &[&str] = &[
    "そう思う",
    "思わない",
    "どちらとも",
    "あてはまる",
    "strongly agree",
    "agree",
    "disagree",
    "neither",
];

/// Grand-total / overall-department headers.
const OVERALL_KEYWORDS: &[&str] = &[
    "全体",
    "全社",
    "総合",
    "合計",
    "overall",
    "total",
    "grand total",
];

fn normalized(header: &str) -> String {
    header.trim().to_lowercase()
}

fn contains_any(header: &str, keywords: &[&str]) -> bool {
    let needle = normalized(header);
    keywords.iter().any(|keyword| needle.contains(keyword))
}

pub fn is_identifier_header(header: &str) -> bool {
    contains_any(header, IDENTIFIER_KEYWORDS)
}

pub fn is_department_header(header: &str) -> bool {
    contains_any(header, DEPARTMENT_KEYWORDS)
}

pub fn is_number_header(header: &str) -> bool {
    let needle = normalized(header);
    NUMBER_HEADER_EXACT.contains(&needle.as_str())
        || NUMBER_HEADER_CONTAINS
            .iter()
            .any(|keyword| needle.contains(keyword))
}

pub fn is_average_header(header: &str) -> bool {
    contains_any(header, AVERAGE_KEYWORDS)
}

pub fn is_likert_header(header: &str) -> bool {
    contains_any(header, LIKERT_KEYWORDS)
}

pub fn is_overall_header(header: &str) -> bool {
    contains_any(header, OVERALL_KEYWORDS)
}

/// Denylist for the department-matrix path: headers that are known not to be
/// department columns. Overall/total headers are NOT denied; they become the
/// designated overall department instead.
pub fn is_non_department_header(header: &str) -> bool {
    is_number_header(header) || is_likert_header(header) || is_average_header(header)
}
