use serde::{Deserialize, Serialize};

/// Option labels in display order. An option's label is its position in this table.
pub const OPTION_LABELS: [&str; 26] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R",
    "S", "T", "U", "V", "W", "X", "Y", "Z",
];

/// Label for the option at `index`, if the table has one.
pub fn option_label(index: usize) -> Option<&'static str> {
    OPTION_LABELS.get(index).copied()
}

/// Position of the option identified by `label`.
pub fn label_index(label: &str) -> Option<usize> {
    OPTION_LABELS.iter().position(|candidate| *candidate == label)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "question")]
    pub prompt: String,
    #[serde(default)]
    pub options: Vec<String>,
}

impl Question {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            options: Vec::new(),
        }
    }

    pub fn has_options(&self) -> bool {
        !self.options.is_empty()
    }

    /// Option text for a label, `None` when the label is unknown or out of range.
    pub fn option_text(&self, label: &str) -> Option<&str> {
        label_index(label)
            .and_then(|index| self.options.get(index))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_table() {
        assert_eq!(option_label(0), Some("A"));
        assert_eq!(option_label(3), Some("D"));
        assert_eq!(option_label(26), None);
        assert_eq!(label_index("B"), Some(1));
        assert_eq!(label_index("b"), None);
        assert_eq!(label_index("AB"), None);
    }

    #[test]
    fn test_option_text_beyond_four_options() {
        let question = Question {
            prompt: "Pick".to_string(),
            options: (1..=6).map(|n| format!("opt {}", n)).collect(),
        };
        assert_eq!(question.option_text("F"), Some("opt 6"));
        assert_eq!(question.option_text("G"), None);
    }
}
