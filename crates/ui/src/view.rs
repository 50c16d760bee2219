use crate::vm::StudyVm;

/// Rendering side of the study screen.
///
/// Implementations only draw what they are given; every decision about what to
/// show is made before a `StudyVm` reaches them.
pub trait StudyView {
    /// Draw the current state.
    fn render(&mut self, vm: &StudyVm);

    /// Modal notice for rejected navigation input.
    fn alert(&mut self, message: &str);

    /// Inline error shown in place of the question. Used when no deck could be loaded.
    fn show_error(&mut self, message: &str);
}
