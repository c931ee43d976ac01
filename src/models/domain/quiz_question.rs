use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};

/// Number of options a multiple-choice question must carry.
pub const MCQ_OPTION_COUNT: usize = 4;

static BARE_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\(?\s*(?:option\s+)?([a-d])\s*[).:]?$")
        .expect("BARE_LABEL is a valid regex pattern")
});

static LABELLED_TEXT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\(?([a-d])[).:]\s*(.+)$").expect("LABELLED_TEXT is a valid regex pattern")
});

/// A generated quiz item. The wire tag is the `type` field the model is
/// asked to emit.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type")]
pub enum QuizQuestion {
    #[serde(rename = "mcq")]
    MultipleChoice {
        question: String,
        options: Vec<String>,
        correct: String,
        explanation: String,
    },
    #[serde(rename = "true_false")]
    TrueFalse {
        question: String,
        #[serde(deserialize_with = "lenient_bool")]
        correct: bool,
        explanation: String,
    },
    #[serde(rename = "short_answer")]
    ShortAnswer {
        question: String,
        answer: String,
        explanation: String,
    },
}

impl QuizQuestion {
    pub fn question(&self) -> &str {
        match self {
            QuizQuestion::MultipleChoice { question, .. }
            | QuizQuestion::TrueFalse { question, .. }
            | QuizQuestion::ShortAnswer { question, .. } => question,
        }
    }

    pub fn explanation(&self) -> &str {
        match self {
            QuizQuestion::MultipleChoice { explanation, .. }
            | QuizQuestion::TrueFalse { explanation, .. }
            | QuizQuestion::ShortAnswer { explanation, .. } => explanation,
        }
    }

    /// Text rendered on the "Answer:" line.
    pub fn answer_text(&self) -> String {
        match self {
            QuizQuestion::MultipleChoice { correct, .. } => correct.clone(),
            QuizQuestion::TrueFalse { correct, .. } => {
                if *correct { "True" } else { "False" }.to_string()
            }
            QuizQuestion::ShortAnswer { answer, .. } => answer.clone(),
        }
    }

    /// Checks the variant's required fields and rewrites a multiple-choice
    /// `correct` given as a label ("B", "(c)", "Option D") into the option
    /// text it designates. The option text is the canonical form.
    pub fn normalize(&mut self) -> Result<(), String> {
        if self.question().trim().is_empty() {
            return Err("field `question` is empty".to_string());
        }
        if self.explanation().trim().is_empty() {
            return Err("field `explanation` is empty".to_string());
        }

        match self {
            QuizQuestion::MultipleChoice {
                options, correct, ..
            } => {
                if options.len() != MCQ_OPTION_COUNT {
                    return Err(format!(
                        "expected {} options, found {}",
                        MCQ_OPTION_COUNT,
                        options.len()
                    ));
                }
                let resolved = resolve_correct_option(options, correct).ok_or_else(|| {
                    format!("correct answer '{}' does not match any option", correct)
                })?;
                *correct = resolved;
                Ok(())
            }
            QuizQuestion::ShortAnswer { answer, .. } if answer.trim().is_empty() => {
                Err("field `answer` is empty".to_string())
            }
            _ => Ok(()),
        }
    }
}

/// Maps `correct` onto one of `options`, by value first and then by label.
fn resolve_correct_option(options: &[String], correct: &str) -> Option<String> {
    let wanted = correct.trim();

    if let Some(option) = options
        .iter()
        .find(|option| option.trim().eq_ignore_ascii_case(wanted))
    {
        return Some(option.clone());
    }

    if let Some(caps) = BARE_LABEL.captures(wanted) {
        return option_for_label(options, &caps[1]).cloned();
    }

    let caps = LABELLED_TEXT.captures(wanted)?;
    let option = option_for_label(options, &caps[1])?;
    option
        .trim()
        .eq_ignore_ascii_case(caps[2].trim())
        .then(|| option.clone())
}

fn option_for_label<'a>(options: &'a [String], label: &str) -> Option<&'a String> {
    let index = label.to_ascii_uppercase().bytes().next()?.checked_sub(b'A')? as usize;
    options.get(index)
}

/// Letter prefix used when listing options ("A", "B", ...).
pub fn option_label(index: usize) -> char {
    (b'A' + (index % 26) as u8) as char
}

/// Accepts `true`/`false` as JSON booleans or as the strings models
/// sometimes emit instead.
fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        Text(String),
    }

    match BoolOrString::deserialize(deserializer)? {
        BoolOrString::Bool(value) => Ok(value),
        BoolOrString::Text(text) => match text.trim().to_ascii_lowercase().as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(serde::de::Error::custom(format!(
                "expected a boolean for `correct`, found '{}'",
                other
            ))),
        },
    }
}
