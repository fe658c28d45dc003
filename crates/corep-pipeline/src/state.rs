//! The run state machine. Transitions are sequential and one-directional;
//! the single reasoning parse-retry is internal to `Reasoning` and never
//! re-enters the state machine.

use std::fmt;

/// States one analysis run moves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Received,
    Retrieving,
    Reasoning,
    Validating,
    Mapping,
    Complete,
    /// Terminal — reachable from any non-terminal state.
    Failed,
}

impl PipelineState {
    /// The next state in the forward path. None for terminal states.
    pub fn next(self) -> Option<PipelineState> {
        match self {
            PipelineState::Received => Some(PipelineState::Retrieving),
            PipelineState::Retrieving => Some(PipelineState::Reasoning),
            PipelineState::Reasoning => Some(PipelineState::Validating),
            PipelineState::Validating => Some(PipelineState::Mapping),
            PipelineState::Mapping => Some(PipelineState::Complete),
            PipelineState::Complete | PipelineState::Failed => None,
        }
    }

    /// Whether `to` is a legal transition from this state.
    pub fn can_advance_to(self, to: PipelineState) -> bool {
        if to == PipelineState::Failed {
            return !self.is_terminal();
        }
        self.next() == Some(to)
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, PipelineState::Complete | PipelineState::Failed)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PipelineState::Received => "received",
            PipelineState::Retrieving => "retrieving",
            PipelineState::Reasoning => "reasoning",
            PipelineState::Validating => "validating",
            PipelineState::Mapping => "mapping",
            PipelineState::Complete => "complete",
            PipelineState::Failed => "failed",
        }
    }
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
