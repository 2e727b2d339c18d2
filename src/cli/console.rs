use super::output;
use crate::report::{Notice, NoticeLevel, Reporter};

/// Prints notices through the styled CLI output helpers.
///
/// Sections after the first are preceded by a blank line.
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    sections: usize,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Reporter for ConsoleReporter {
    fn report(&mut self, notice: Notice) {
        match notice.level {
            NoticeLevel::Section => {
                if self.sections > 0 {
                    output::blank_line();
                }
                self.sections += 1;
                output::section(notice.text);
            }
            NoticeLevel::Info => output::info(notice.text),
            NoticeLevel::Accepted => output::success(notice.text),
            NoticeLevel::Rejected => output::warning(notice.text),
        }
    }
}
