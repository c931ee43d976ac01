pub const EXPLAIN_INSTRUCTION: &str = "in simple, easy-to-understand terms. Use analogies and examples where helpful. Keep it concise but comprehensive.";

pub const SUMMARIZE_FOCUS: &str = "Focus on the key points and main ideas:";

pub const JSON_FORMAT_HEADER: &str = "Return in this exact JSON format:";

pub const MIXED_QUIZ_FORMAT: &str =
    "Format: Mix of multiple choice questions (with 4 options each) and true/false questions.";

pub const MCQ_QUIZ_FORMAT: &str = "Each question should have 4 options (A, B, C, D).";

pub const FLASHCARD_FORMAT: &str =
    "Format: Each flashcard should have a clear front (question/keyword) and back (answer/definition).";

pub const MCQ_EXAMPLE: &str = r#"        {
            "type": "mcq",
            "question": "Question text?",
            "options": ["A", "B", "C", "D"],
            "correct": "A",
            "explanation": "Brief explanation"
        }"#;

pub const TRUE_FALSE_EXAMPLE: &str = r#"        {
            "type": "true_false",
            "question": "Statement to evaluate",
            "correct": true,
            "explanation": "Brief explanation"
        }"#;

pub const SHORT_ANSWER_EXAMPLE: &str = r#"        {
            "type": "short_answer",
            "question": "Question text?",
            "answer": "Expected answer",
            "explanation": "Brief explanation"
        }"#;

pub const FLASHCARD_EXAMPLE: &str = r#"        {
            "front": "Question or keyword",
            "back": "Answer or definition"
        }"#;
