use std::io::Write;

use qbank_core::RatingCounts;
use ui::{StudyView, StudyVm};

/// Line-oriented view that writes each frame to `out`.
pub struct TerminalView<W: Write> {
    out: W,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Plain text, no frame. Used for help and stats.
    pub fn print(&mut self, text: &str) {
        self.emit(|out| writeln!(out, "{text}"));
    }

    pub fn print_stats(&mut self, counts: &RatingCounts) {
        self.emit(|out| {
            for (rating, count) in counts.iter() {
                writeln!(out, "{:<10} {count}", rating.as_str())?;
            }
            writeln!(out, "{:<10} {}", "total", counts.total())
        });
    }

    // Output failures are not actionable here; the next frame tries again.
    fn emit(&mut self, write: impl FnOnce(&mut W) -> std::io::Result<()>) {
        if let Err(err) = write(&mut self.out).and_then(|()| self.out.flush()) {
            tracing::debug!(error = %err, "failed to write to terminal");
        }
    }
}

impl<W: Write> StudyView for TerminalView<W> {
    fn render(&mut self, vm: &StudyVm) {
        self.emit(|out| {
            writeln!(out)?;
            match vm.record_number {
                Some(number) => writeln!(out, "-- question {number} of {} --", vm.total)?,
                None => writeln!(out, "-- 0 of {} --", vm.total)?,
            }
            writeln!(out, "{}", vm.question)?;
            if let Some(answer) = &vm.answer {
                writeln!(out, "-- answer --")?;
                writeln!(out, "{answer}")?;
            }
            if let Some(rating) = vm.active_rating() {
                writeln!(out, "rating: {rating}")?;
            }

            let filters: Vec<String> = vm
                .ratings
                .iter()
                .map(|row| {
                    let mark = if row.filter_enabled { 'x' } else { ' ' };
                    format!("[{mark}] {} {}", row.rating, row.label)
                })
                .collect();
            writeln!(out, "{}", filters.join("  "))
        });
    }

    fn alert(&mut self, message: &str) {
        self.emit(|out| writeln!(out, "! {message}"));
    }

    fn show_error(&mut self, message: &str) {
        self.emit(|out| writeln!(out, "error: {message}"));
    }
}
