mod study_vm;

pub use study_vm::{CountVm, EMPTY_FILTER_MESSAGE, StudyIntent, StudyPhase, StudyVm, map_study_vm};
