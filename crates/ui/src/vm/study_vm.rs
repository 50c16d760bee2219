use qbank_core::Rating;
use services::StudySession;

/// Shown in place of the question when the filter hides every record.
pub const EMPTY_FILTER_MESSAGE: &str =
    "No questions match the current filters. Check the filter settings.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StudyIntent {
    Next,
    Prev,
    Random,
    /// Raw record number as typed by the user.
    Jump(String),
    Rate(Rating),
    ToggleFilter { rating: Rating, enabled: bool },
    ToggleAnswer,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StudyPhase {
    Prompt,
    Answer,
}

impl StudyPhase {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Prompt => Self::Answer,
            Self::Answer => Self::Prompt,
        }
    }
}

/// One rating row: filter checkbox state plus its deck-wide count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountVm {
    pub rating: Rating,
    pub count: usize,
    pub label: String,
    pub filter_enabled: bool,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudyVm {
    pub question: String,
    /// `Some` only while the answer is revealed.
    pub answer: Option<String>,
    pub toggle_label: &'static str,
    pub record_number: Option<usize>,
    pub total: usize,
    pub ratings: Vec<CountVm>,
    pub is_empty: bool,
}

#[must_use]
pub fn map_study_vm(session: &StudySession, phase: StudyPhase) -> StudyVm {
    let counts = session.counts();
    let active = session.current_rating();
    let ratings = counts
        .iter()
        .map(|(rating, count)| CountVm {
            rating,
            count,
            label: format!("({count})"),
            filter_enabled: session.filter().contains(rating),
            active: active == Some(rating),
        })
        .collect();

    let Some(record) = session.current_record() else {
        return StudyVm {
            question: EMPTY_FILTER_MESSAGE.to_string(),
            answer: None,
            toggle_label: toggle_label(StudyPhase::Prompt),
            record_number: None,
            total: counts.total(),
            ratings,
            is_empty: true,
        };
    };

    let answer = match phase {
        StudyPhase::Answer => Some(record.answer().to_string()),
        StudyPhase::Prompt => None,
    };

    StudyVm {
        question: record.question().to_string(),
        answer,
        toggle_label: toggle_label(phase),
        record_number: session.current_record_number(),
        total: counts.total(),
        ratings,
        is_empty: false,
    }
}

fn toggle_label(phase: StudyPhase) -> &'static str {
    match phase {
        StudyPhase::Prompt => "Show answer",
        StudyPhase::Answer => "Hide answer",
    }
}

impl StudyVm {
    #[must_use]
    pub fn count(&self, rating: Rating) -> Option<&CountVm> {
        self.ratings.iter().find(|row| row.rating == rating)
    }

    #[must_use]
    pub fn active_rating(&self) -> Option<Rating> {
        self.ratings.iter().find(|row| row.active).map(|row| row.rating)
    }
}
