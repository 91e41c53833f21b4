//! Canonical table: the single normalized form every input shape reduces to.

use serde::{Deserialize, Serialize};

/// One question column of the canonical table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionColumn {
    /// Stable key; embeds the question number and label for reconstructed
    /// tables, or the original header for plain tables.
    pub key: String,
    pub number: Option<u32>,
    pub label: String,
}

/// One canonical respondent row. `cells` aligns with the question list;
/// `None` marks a missing answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanonicalRow {
    pub respondent_id: String,
    pub department: String,
    pub cells: Vec<Option<String>>,
}

/// Normalized per-respondent table produced by shape detection. Immutable
/// once produced; downstream stages only read it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanonicalTable {
    pub respondent_column: String,
    pub department_column: Option<String>,
    pub questions: Vec<QuestionColumn>,
    pub rows: Vec<CanonicalRow>,
}

/// Question key embedding number and label, shared by the frequency
/// reconstruction and the matrix path.
pub fn question_key(number: Option<u32>, label: &str) -> String {
    match number {
        Some(number) => format!("Q{number}. {label}"),
        None => label.to_string(),
    }
}

/// Leading question number in a header like `Q3. 仕事内容` or `12. workload`.
pub fn leading_number(header: &str) -> Option<u32> {
    let trimmed = header.trim();
    let rest = trimmed
        .strip_prefix('Q')
        .or_else(|| trimmed.strip_prefix('q'))
        .unwrap_or(trimmed);
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    let after = &rest[digits.len()..];
    if after.starts_with('.') || after.starts_with(':') || after.starts_with(' ') || after.is_empty()
    {
        digits.parse().ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_embeds_number_and_label() {
        assert_eq!(question_key(Some(3), "仕事にやりがいを感じる"), "Q3. 仕事にやりがいを感じる");
        assert_eq!(question_key(None, "workload"), "workload");
    }

    #[test]
    fn leading_numbers() {
        assert_eq!(leading_number("Q3. 仕事内容"), Some(3));
        assert_eq!(leading_number("12. workload"), Some(12));
        assert_eq!(leading_number("Q7"), Some(7));
        assert_eq!(leading_number("部署"), None);
        assert_eq!(leading_number("3rd floor"), None);
    }
}
