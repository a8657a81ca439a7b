use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Quiz sets keyed by name, in the order they appear in the source file.
pub type QuizSets = IndexMap<String, Questions>;

pub type Questions = Vec<Question>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "question")]
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    #[serde(rename = "short_story", default)]
    pub story_text: String,
    #[serde(rename = "inventor_image_url", default)]
    pub image_ref: String,
    #[serde(rename = "fun_fact_comment", default)]
    pub fun_fact: String,
}

impl Question {
    pub fn is_correct(&self, option: &str) -> bool {
        self.correct_answer == option
    }

    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }

    /// Checks that the options are unique and contain the correct answer.
    pub fn validate(&self) -> Result<(), String> {
        if self.options.is_empty() {
            return Err("question has no options".to_string());
        }
        for (i, option) in self.options.iter().enumerate() {
            if self.options[..i].contains(option) {
                return Err(format!("duplicate option '{option}'"));
            }
        }
        if !self.has_option(&self.correct_answer) {
            return Err(format!(
                "correct answer '{}' is not one of the options",
                self.correct_answer
            ));
        }
        Ok(())
    }
}

/// Response body of `GET /quiz`.
#[derive(Debug, Serialize, Deserialize)]
pub struct QuizResponse {
    pub questions: Questions,
}
