pub mod config;
pub mod event;
pub mod runtime;
pub mod animation;
pub mod choice;
pub mod sequence;
pub mod renderer;

pub use runtime::Ctx;
pub use sequence::Sequencer;
pub use renderer::terminal::TerminalRenderer;
pub use event::{InputEvent, OutputEvent};
