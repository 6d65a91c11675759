mod stroke;
mod typewriter;

pub use stroke::{Stroke, StrokeSet};
pub use typewriter::{LineBreak, Tick, TypePhase, Typewriter};
