use std::fmt::{Display, Formatter};

/// Verbosity levels for the optional tokenizer/parser trace. Every level
/// below `Verbose` is a strict subset of the one above it. Tracing is a
/// development aid only: no code path depends on it for correctness, and
/// under a release build the checks compile away entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Trace {
    #[default]
    None,
    Default,
    Dispatch,
    Verbose,
}

impl Trace {
    fn order(&self) -> u8 {
        match self {
            Trace::None => 0,
            Trace::Default => 1,
            Trace::Dispatch => 2,
            Trace::Verbose => 3,
        }
    }

    #[cfg(debug_assertions)]
    pub(crate) fn log_at(&self, level: Trace, line: usize, message: std::fmt::Arguments) {
        if self.order() >= level.order() {
            println!("[{}; line {}] {}", self, line, message);
        }
    }

    #[cfg(not(debug_assertions))]
    pub(crate) fn log_at(&self, _level: Trace, _line: usize, _message: std::fmt::Arguments) {}
}

impl Display for Trace {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
