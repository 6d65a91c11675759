use doodle_core::animation::{LineBreak, Tick, TypePhase, Typewriter};

#[test]
fn types_lines_with_pauses() {
    let mut tw = Typewriter::new(&["ab", "", "c"]);
    assert_eq!(tw.phase(), TypePhase::Typing);

    assert_eq!(tw.tick(), Tick::Char('a'));
    assert_eq!(tw.tick(), Tick::Char('b'));
    assert_eq!(tw.tick(), Tick::LineEnd);
    assert_eq!(tw.phase(), TypePhase::LineBreakPause);
    // 停顿中不出字
    assert_eq!(tw.tick(), Tick::Idle);

    assert_eq!(tw.end_pause(), Some(LineBreak::NextLine));
    assert_eq!((tw.line_index(), tw.char_index()), (1, 0));
    assert_eq!(tw.tick(), Tick::LineEnd);

    assert_eq!(tw.end_pause(), Some(LineBreak::NextLine));
    assert_eq!(tw.tick(), Tick::Char('c'));
    assert_eq!(tw.tick(), Tick::LineEnd);

    assert_eq!(tw.end_pause(), Some(LineBreak::Done));
    assert!(tw.is_done());
    assert_eq!(tw.end_pause(), None);
    assert_eq!(tw.tick(), Tick::Idle);

    assert_eq!(tw.paragraphs(), &["ab".to_string(), String::new(), "c".to_string()]);
}

#[test]
fn counts_char_ticks() {
    let mut tw = Typewriter::new(&["ab", "", "c"]);
    let mut chars = 0;
    let mut done = 0;

    for _ in 0..64 {
        match tw.tick() {
            Tick::Char(_) => chars += 1,
            Tick::LineEnd => {
                if tw.end_pause() == Some(LineBreak::Done) {
                    done += 1;
                }
            }
            Tick::Idle => {}
        }
    }

    assert_eq!(chars, 3);
    assert_eq!(done, 1);
}

#[test]
fn empty_script_is_done() {
    let tw = Typewriter::new::<&str>(&[]);
    assert!(tw.is_done());
    assert!(tw.paragraphs().is_empty());
}

#[test]
fn unicode_is_per_char() {
    let mut tw = Typewriter::new(&["你好"]);
    assert_eq!(tw.tick(), Tick::Char('你'));
    assert_eq!(tw.tick(), Tick::Char('好'));
    assert_eq!(tw.tick(), Tick::LineEnd);
}
