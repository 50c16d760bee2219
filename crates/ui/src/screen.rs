use services::{LoadError, StudyError, StudySession};

use crate::view::StudyView;
use crate::vm::{StudyIntent, StudyPhase, map_study_vm};

/// Drives a `StudyView` from a `StudySession`.
///
/// Owns the only piece of state the session does not: whether the answer is
/// revealed. Any navigation or filter change hides it again, as does a rating
/// that moves the cursor off the rated record.
pub struct StudyScreen<V: StudyView> {
    session: StudySession,
    phase: StudyPhase,
    view: V,
}

impl<V: StudyView> StudyScreen<V> {
    /// Wrap a loaded session and draw the first frame.
    pub fn new(session: StudySession, view: V) -> Self {
        let mut screen = Self {
            session,
            phase: StudyPhase::Prompt,
            view,
        };
        screen.render();
        screen
    }

    #[must_use]
    pub fn session(&self) -> &StudySession {
        &self.session
    }

    #[must_use]
    pub fn phase(&self) -> StudyPhase {
        self.phase
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_parts(self) -> (StudySession, V) {
        (self.session, self.view)
    }

    /// Apply one user intent and redraw.
    ///
    /// Rejected jump input is reported through `StudyView::alert` and leaves
    /// the screen as it was.
    ///
    /// # Errors
    ///
    /// Returns `StudyError` if rating hits an index outside the progress map.
    pub async fn dispatch(&mut self, intent: StudyIntent) -> Result<(), StudyError> {
        match intent {
            StudyIntent::Next => {
                self.session.next();
                self.phase = StudyPhase::Prompt;
            }
            StudyIntent::Prev => {
                self.session.prev();
                self.phase = StudyPhase::Prompt;
            }
            StudyIntent::Random => {
                self.session.random();
                self.phase = StudyPhase::Prompt;
            }
            StudyIntent::Jump(raw) => {
                if let Err(err) = self.session.jump_to_record(&raw) {
                    tracing::debug!(input = %raw, error = %err, "rejected jump");
                    self.view.alert(&err.to_string());
                    return Ok(());
                }
                self.phase = StudyPhase::Prompt;
            }
            StudyIntent::Rate(rating) => {
                let before = self.session.current_record_number();
                self.session.rate(rating).await?;
                if self.session.current_record_number() != before {
                    self.phase = StudyPhase::Prompt;
                }
            }
            StudyIntent::ToggleFilter { rating, enabled } => {
                self.session.set_filter(rating, enabled);
                self.phase = StudyPhase::Prompt;
            }
            StudyIntent::ToggleAnswer => {
                if self.session.current_record().is_some() {
                    self.phase = self.phase.toggled();
                }
            }
        }

        self.render();
        Ok(())
    }

    fn render(&mut self) {
        let vm = map_study_vm(&self.session, self.phase);
        self.view.render(&vm);
    }
}

/// Show a failed load in place of the question.
pub fn report_load_error<V: StudyView>(view: &mut V, err: &LoadError) {
    view.show_error(&err.to_string());
}
