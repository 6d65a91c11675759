use crate::animation::StrokeSet;
use crate::config::SequenceConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Mount,
    Draw,
    CrossFade,
    Teardown,
    Dialogue,
    Choices,
}

impl Stage {
    pub fn name(self) -> &'static str {
        match self {
            Stage::Mount => "mount",
            Stage::Draw => "draw",
            Stage::CrossFade => "cross_fade",
            Stage::Teardown => "teardown",
            Stage::Dialogue => "dialogue",
            Stage::Choices => "choices",
        }
    }
}

/// Wait between the previous stage and this one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delay {
    Fixed(u64),
    /// The stroke draw time, or nothing when not waiting for the draw.
    DrawDuration,
}

impl Delay {
    pub fn resolve(self, strokes: &StrokeSet, wait_for_draw: bool) -> u64 {
        match self {
            Delay::Fixed(ms) => ms,
            Delay::DrawDuration => strokes.completion_delay(wait_for_draw),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageSpec {
    pub stage: Stage,
    pub delay: Delay,
}

impl StageSpec {
    pub fn new(stage: Stage, delay: Delay) -> Self {
        Self { stage, delay }
    }
}

/// The stage list for the configured variant, in run order.
pub fn plan(cfg: &SequenceConfig) -> Vec<StageSpec> {
    let anim = &cfg.animation;
    let mut stages = vec![
        StageSpec::new(Stage::Mount, Delay::Fixed(0)),
        StageSpec::new(Stage::Draw, Delay::Fixed(anim.pre_draw_pause_ms)),
        StageSpec::new(Stage::CrossFade, Delay::DrawDuration),
        StageSpec::new(Stage::Teardown, Delay::Fixed(anim.post_draw_pause_ms)),
    ];

    if anim.variant.has_dialogue() {
        stages.push(StageSpec::new(Stage::Dialogue, Delay::Fixed(0)));
        stages.push(StageSpec::new(Stage::Choices, Delay::Fixed(0)));
    }

    stages
}
