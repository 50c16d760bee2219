/// One question/answer pair.
///
/// Records carry no identity of their own; they are addressed by their
/// 0-based position in the parsed deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    question: String,
    answer: String,
}

impl Record {
    #[must_use]
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }
}
