use crate::animation::Stroke;
use crate::choice::ChoiceItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node {
    Vector,
    Image,
}

#[derive(Debug, Clone, PartialEq)]
pub enum OutputEvent {
    MountVector {
        container: String,
        strokes: Vec<Stroke>,
        width: f32,
        height: f32,
    },
    MountImage { container: String, src: String },
    DrawStrokes { count: usize },
    SetOpacity { node: Node, value: f32 },
    RemoveNode { container: String, node: Node },
    DimBackground { container: String, opacity: f32 },

    NewParagraph { container: String },
    AppendChar { ch: char },
    ShowChoices { container: String, items: Vec<ChoiceItem> },
    Navigate { url: String },

    End,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    ChoiceMade { index: usize },
    Exit,
}

/// An output event stamped with the virtual time it was produced at.
#[derive(Debug, Clone, PartialEq)]
pub struct Emitted {
    pub at_ms: u64,
    pub event: OutputEvent,
}
