pub mod resolve;

// Re-export use cases
pub use resolve::{
    AdmissionWindow, AnswerProcessor, InputFeed, Orchestrator, OrchestratorConfig, ProcessOutcome,
    RunState,
};
