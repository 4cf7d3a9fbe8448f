pub mod input_source;
pub mod line_sink;

pub use input_source::open_input;
pub use line_sink::{LineSink, StdoutSink};
