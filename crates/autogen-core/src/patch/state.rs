//! Scanner states and the transition table

use super::marker::LineKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// Outside any region
    Scanning,
    /// Reading template lines of the region opened at `start_line`
    Collecting { start_line: usize },
    /// Skipping previously generated output up to the end marker
    Dropping { start_line: usize },
}

impl ScanState {
    /// Start line of the open region, if any
    pub fn open_region(self) -> Option<usize> {
        match self {
            ScanState::Scanning => None,
            ScanState::Collecting { start_line } | ScanState::Dropping { start_line } => {
                Some(start_line)
            }
        }
    }
}

/// What the scanner does with the current line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action<'a> {
    /// Copy the line
    Keep,
    /// Copy an end marker that closes nothing
    KeepStray,
    /// Copy the start marker and begin a region
    Open,
    /// Copy the line and add its fragment to the region
    Collect(&'a str),
    /// Emit the rendered region, then copy the end marker
    RenderAndClose,
    /// Emit the rendered region in place of this stale line
    RenderAndDrop,
    /// Skip stale generated output
    Discard,
    /// Copy the end marker after stale output
    Close,
    /// Start marker inside the region opened at `start_line`
    Nested { start_line: usize },
}

/// One step of the scanner
pub fn transition(state: ScanState, kind: LineKind<'_>, line: usize) -> (ScanState, Action<'_>) {
    use Action::*;
    use LineKind::{End, Plain, Start, Template};
    use ScanState::*;

    match (state, kind) {
        (Scanning, Start) => (Collecting { start_line: line }, Open),
        (Scanning, End) => (Scanning, KeepStray),
        (Scanning, Template(_) | Plain) => (Scanning, Keep),

        (Collecting { start_line }, Start) => (state, Nested { start_line }),
        (Collecting { start_line }, Template(fragment)) => (Collecting { start_line }, Collect(fragment)),
        (Collecting { .. }, End) => (Scanning, RenderAndClose),
        (Collecting { start_line }, Plain) => (Dropping { start_line }, RenderAndDrop),

        (Dropping { start_line }, Start) => (state, Nested { start_line }),
        (Dropping { .. }, Template(_) | Plain) => (state, Discard),
        (Dropping { .. }, End) => (Scanning, Close),
    }
}
