pub mod admission_window;
pub mod answer_processor;
pub mod input_feed;
pub mod orchestrator;

pub use admission_window::AdmissionWindow;
pub use answer_processor::{AnswerProcessor, ProcessOutcome};
pub use input_feed::InputFeed;
pub use orchestrator::{Orchestrator, OrchestratorConfig, RunState};
