use std::sync::Arc;

use qbank_core::FilterSet;
use services::{PlainText, ProgressService, StaticSource, StudySession};
use storage::repository::InMemoryRepository;

use crate::view::StudyView;
use crate::vm::StudyVm;

/// Records everything the screen asks it to draw.
#[derive(Debug, Default)]
pub struct RecordingView {
    pub renders: Vec<StudyVm>,
    pub alerts: Vec<String>,
    pub errors: Vec<String>,
}

impl RecordingView {
    pub fn last(&self) -> &StudyVm {
        self.renders.last().expect("at least one render")
    }
}

impl StudyView for RecordingView {
    fn render(&mut self, vm: &StudyVm) {
        self.renders.push(vm.clone());
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn show_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}

pub async fn load_session(text: &str) -> (StudySession, InMemoryRepository) {
    let repo = InMemoryRepository::new();
    let store = ProgressService::new(Arc::new(repo.clone()), "test");
    let session = StudySession::load(&StaticSource::new(text), &PlainText, store, FilterSet::all())
        .await
        .expect("load session");
    (session, repo)
}
