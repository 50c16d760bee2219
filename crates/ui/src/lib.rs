pub mod screen;
pub mod view;
pub mod vm;

#[cfg(test)]
mod test_harness;

pub use screen::{StudyScreen, report_load_error};
pub use view::StudyView;
pub use vm::{CountVm, StudyIntent, StudyPhase, StudyVm, map_study_vm};
