#![allow(dead_code)]

use std::{
    path::PathBuf,
    sync::atomic::{AtomicU32, Ordering},
};

use quickquiz::models::Question;
use serde_json::{json, Value};

fn temp_path(ext: &str) -> PathBuf {
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let path = std::env::temp_dir().join(format!(
        "quickquiz_test_{}_{}.{ext}",
        std::process::id(),
        id
    ));
    // Clean up leftover file from previous runs
    let _ = std::fs::remove_file(&path);
    path
}

pub fn question_json(prompt: &str, correct: &str, wrong: &str) -> Value {
    json!({
        "question": prompt,
        "options": [correct, wrong],
        "correct_answer": correct,
        "short_story": format!("story of {prompt}"),
        "inventor_image_url": format!("/images/{prompt}.jpg"),
        "fun_fact_comment": format!("fun fact about {prompt}"),
    })
}

/// Quiz file where set `name` holds questions `"{name}1"..` with correct answer `"yes"`.
pub fn quiz_file_with_sets(names: &[&str], per_set: usize) -> PathBuf {
    let mut sets = serde_json::Map::new();
    for name in names {
        let questions: Vec<Value> = (1..=per_set)
            .map(|i| question_json(&format!("{name}{i}"), "yes", "no"))
            .collect();
        sets.insert(name.to_string(), Value::Array(questions));
    }
    write_quiz_file(&Value::Object(sets).to_string())
}

pub fn write_quiz_file(contents: &str) -> PathBuf {
    let path = temp_path("json");
    std::fs::write(&path, contents).expect("failed to write quiz file");
    path
}

pub fn missing_quiz_file() -> PathBuf {
    temp_path("json")
}

pub fn create_test_db_url() -> String {
    format!("sqlite://{}?mode=rwc", temp_path("db").display())
}

pub fn unreachable_db_url() -> String {
    "sqlite:///quickquiz-no-such-dir/results.db?mode=rwc".to_string()
}

pub fn prompts(questions: &[Question]) -> Vec<&str> {
    questions.iter().map(|q| q.prompt.as_str()).collect()
}
