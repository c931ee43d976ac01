use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate)]
pub struct Flashcard {
    #[validate(length(min = 1, message = "front is empty"))]
    pub front: String, // question or keyword
    #[validate(length(min = 1, message = "back is empty"))]
    pub back: String, // answer or definition
}

impl Flashcard {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
        }
    }
}
