use doodle_core::config::{SequenceConfig, Variant};
use doodle_core::event::{InputEvent, OutputEvent};
use doodle_core::renderer::driver::{Driver, Outcome, Pace};
use doodle_core::renderer::Renderer;
use doodle_core::runtime::{DirSource, MemorySource};
use doodle_core::{Ctx, Sequencer};

const SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10">
  <path id="only" d="M1 1 L9 9" fill="none" stroke="black"/>
</svg>"#;

/// Records everything and answers choices with a fixed index.
struct Recorder {
    seen: Vec<OutputEvent>,
    answer: Option<InputEvent>,
}

impl Recorder {
    fn new(answer: Option<InputEvent>) -> Self {
        Self { seen: Vec::new(), answer }
    }
}

impl Renderer for Recorder {
    fn render(&mut self, out: &OutputEvent) -> Option<InputEvent> {
        self.seen.push(out.clone());
        match out {
            OutputEvent::ShowChoices { .. } => self.answer.clone(),
            _ => None,
        }
    }
}

fn sequencer(variant: Variant) -> Sequencer {
    let mut cfg = SequenceConfig::default();
    cfg.animation.variant = variant;
    cfg.dialogue.lines = vec!["hi".into()];
    let source = MemorySource::new().with("smiley.svg", SVG);
    let mut seq = Sequencer::new(cfg);
    seq.start(&source);
    seq
}

#[test]
fn runs_reveal_to_the_end() {
    let mut ctx = Ctx::default();
    let mut driver = Driver::new(sequencer(Variant::Reveal), Recorder::new(None));

    assert_eq!(driver.run(&mut ctx, Pace::Skip), Outcome::Finished);
    let seen = &driver.renderer().seen;
    assert_eq!(seen.last(), Some(&OutputEvent::End));
    assert_eq!(driver.sequencer().now(), 1225);
}

#[test]
fn choice_reply_navigates() {
    let mut ctx = Ctx::default();
    let answer = Some(InputEvent::ChoiceMade { index: 0 });
    let mut driver = Driver::new(sequencer(Variant::Dialogue), Recorder::new(answer));

    assert_eq!(driver.run(&mut ctx, Pace::Skip), Outcome::Finished);
    let (_, recorder) = driver.into_parts();
    let typed: String = recorder
        .seen
        .iter()
        .filter_map(|e| match e {
            OutputEvent::AppendChar { ch } => Some(*ch),
            _ => None,
        })
        .collect();
    assert_eq!(typed, "hi");
    assert_eq!(
        recorder.seen.last(),
        Some(&OutputEvent::Navigate { url: "https://github.com/".into() })
    );
}

#[test]
fn silent_renderer_leaves_choices_open() {
    let mut ctx = Ctx::default();
    let mut driver = Driver::new(sequencer(Variant::Dialogue), Recorder::new(None));
    assert_eq!(driver.run(&mut ctx, Pace::Skip), Outcome::AwaitingInput);
}

#[test]
fn exit_reply_stops_the_run() {
    let mut ctx = Ctx::default();
    let mut driver = Driver::new(sequencer(Variant::Dialogue), Recorder::new(Some(InputEvent::Exit)));
    assert_eq!(driver.run(&mut ctx, Pace::Skip), Outcome::Exited);
    assert!(!driver.renderer().seen.iter().any(|e| matches!(e, OutputEvent::Navigate { .. })));
}

#[test]
fn missing_file_stalls() {
    let mut ctx = Ctx::default();
    let mut seq = Sequencer::new(SequenceConfig::default());
    seq.start(&DirSource::new("no/such/assets"));

    let mut driver = Driver::new(seq, Recorder::new(None));
    assert_eq!(driver.run(&mut ctx, Pace::Skip), Outcome::Stalled);
    assert!(driver.renderer().seen.is_empty());
}

#[test]
fn loads_from_disk() {
    let dir = std::env::temp_dir().join(format!("doodle-driver-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("smiley.svg"), SVG).unwrap();

    let mut cfg = SequenceConfig::default();
    cfg.animation.variant = Variant::Reveal;
    let mut seq = Sequencer::new(cfg);
    seq.start(&DirSource::new(&dir));

    let mut ctx = Ctx::default();
    let mut driver = Driver::new(seq, Recorder::new(None));
    assert_eq!(driver.run(&mut ctx, Pace::Skip), Outcome::Finished);
    assert!(matches!(
        driver.renderer().seen.first(),
        Some(OutputEvent::MountVector { strokes, .. }) if strokes.len() == 1
    ));

    let _ = std::fs::remove_dir_all(&dir);
}
