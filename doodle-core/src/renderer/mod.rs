pub mod terminal;
pub mod driver;

use crate::event::{InputEvent, OutputEvent};

/// The surface the animation is played on.
pub trait Renderer {
    fn render(&mut self, out: &OutputEvent) -> Option<InputEvent>;
}
