use crate::event::{InputEvent, Node, OutputEvent};
use crate::renderer::Renderer;
use std::io::{stdin, stdout, Write};

/// Plays the sequence on stdout and reads choices from stdin.
pub struct TerminalRenderer {
    // 当前段落是否已有字符，决定换段时是否需要换行
    mid_line: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self { mid_line: false }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for TerminalRenderer {
    fn render(&mut self, out: &OutputEvent) -> Option<InputEvent> {
        match out {
            OutputEvent::MountVector { container, strokes, width, height } => {
                println!("[{}] + svg {}x{} ({} strokes)", container, width, height, strokes.len());
                for s in strokes {
                    log::debug!("  {} transition: {}", s.id, s.transition());
                }
                None
            }
            OutputEvent::MountImage { container, src } => {
                println!("[{}] + img {}", container, src);
                None
            }
            OutputEvent::DrawStrokes { count } => {
                println!("[Draw] {} strokes", count);
                None
            }
            OutputEvent::SetOpacity { node, value } => {
                println!("[Fade] {} -> {:.1}", node_name(*node), value);
                None
            }
            OutputEvent::RemoveNode { container, node } => {
                println!("[{}] - {}", container, node_name(*node));
                None
            }
            OutputEvent::DimBackground { container, opacity } => {
                println!("[{}] dim {:.2}", container, opacity);
                None
            }
            OutputEvent::NewParagraph { .. } => {
                self.end_line();
                None
            }
            OutputEvent::AppendChar { ch } => {
                print!("{}", ch);
                let _ = stdout().flush();
                self.mid_line = true;
                None
            }
            OutputEvent::ShowChoices { items, .. } => {
                self.end_line();
                println!();
                for (i, item) in items.iter().enumerate() {
                    println!("  [{}] {}", i + 1, item.label);
                }
                self.wait_choice(items.len())
            }
            OutputEvent::Navigate { url } => {
                println!("-> {}", url);
                None
            }
            OutputEvent::End => {
                self.end_line();
                println!("[End]");
                None
            }
        }
    }
}

impl TerminalRenderer {
    fn end_line(&mut self) {
        if self.mid_line {
            println!();
            self.mid_line = false;
        }
    }

    fn wait_choice(&mut self, len: usize) -> Option<InputEvent> {
        loop {
            print!("Select> ");
            let _ = stdout().flush();

            let mut buf = String::new();
            match stdin().read_line(&mut buf) {
                Ok(0) | Err(_) => return Some(InputEvent::Exit),
                Ok(_) => {}
            }

            let trimmed = buf.trim();
            if trimmed.eq_ignore_ascii_case("exit") {
                return Some(InputEvent::Exit);
            }
            if let Ok(n) = trimmed.parse::<usize>() {
                if n >= 1 && n <= len {
                    return Some(InputEvent::ChoiceMade { index: n - 1 });
                }
            }
            println!("invalid");
        }
    }
}

fn node_name(node: Node) -> &'static str {
    match node {
        Node::Vector => "svg",
        Node::Image => "img",
    }
}
