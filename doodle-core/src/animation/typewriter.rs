#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypePhase {
    Typing,
    LineBreakPause,
    Done,
}

/// Result of one typing tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    Char(char),
    /// 当前行已打完，停止计时进入换行停顿
    LineEnd,
    /// Not typing; nothing happened.
    Idle,
}

/// Result of ending a line-break pause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineBreak {
    NextLine,
    Done,
}

/// Character-by-character reveal over a fixed list of lines.
///
/// The caller owns the timing: it calls [`Typewriter::tick`] once per tick
/// interval while typing, and [`Typewriter::end_pause`] once the line-break
/// pause has elapsed.
pub struct Typewriter {
    lines: Vec<Vec<char>>,
    line_index: usize,
    char_index: usize,
    phase: TypePhase,
    paragraphs: Vec<String>,
}

impl Typewriter {
    pub fn new<S: AsRef<str>>(lines: &[S]) -> Self {
        let lines: Vec<Vec<char>> = lines.iter().map(|l| l.as_ref().chars().collect()).collect();
        let empty = lines.is_empty();

        Self {
            lines,
            line_index: 0,
            char_index: 0,
            phase: if empty { TypePhase::Done } else { TypePhase::Typing },
            paragraphs: if empty { Vec::new() } else { vec![String::new()] },
        }
    }

    pub fn tick(&mut self) -> Tick {
        if self.phase != TypePhase::Typing {
            return Tick::Idle;
        }

        let line = &self.lines[self.line_index];
        if self.char_index < line.len() {
            let ch = line[self.char_index];
            self.char_index += 1;
            if let Some(p) = self.paragraphs.last_mut() {
                p.push(ch);
            }
            Tick::Char(ch)
        } else {
            self.phase = TypePhase::LineBreakPause;
            Tick::LineEnd
        }
    }

    /// Moves to the next line. `None` when not in a line-break pause.
    pub fn end_pause(&mut self) -> Option<LineBreak> {
        if self.phase != TypePhase::LineBreakPause {
            return None;
        }

        self.line_index += 1;
        self.char_index = 0;

        if self.line_index >= self.lines.len() {
            self.phase = TypePhase::Done;
            return Some(LineBreak::Done);
        }

        self.phase = TypePhase::Typing;
        self.paragraphs.push(String::new());
        Some(LineBreak::NextLine)
    }

    pub fn phase(&self) -> TypePhase {
        self.phase
    }

    pub fn is_done(&self) -> bool {
        self.phase == TypePhase::Done
    }

    pub fn line_index(&self) -> usize {
        self.line_index
    }

    pub fn char_index(&self) -> usize {
        self.char_index
    }

    /// Text revealed so far, one entry per opened paragraph.
    pub fn paragraphs(&self) -> &[String] {
        &self.paragraphs
    }
}
