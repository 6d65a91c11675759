mod scheduler;
mod stage;

pub use scheduler::{Scheduler, TimerId};
pub use stage::{plan, Delay, Stage, StageSpec};

use std::sync::mpsc::TryRecvError;

use crate::animation::{LineBreak, StrokeSet, Tick, Typewriter};
use crate::choice::ChoiceMenu;
use crate::config::SequenceConfig;
use crate::event::{InputEvent, Node, OutputEvent};
use crate::runtime::{AssetSource, Ctx, Fetch, VectorDoc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Running(Stage),
    AwaitingChoice,
    Finished,
    /// The asset never arrived; nothing will happen any more.
    Stalled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Task {
    Stage(usize),
    TypeTick,
    LineBreak,
}

/// Runs the landing animation once: load, draw, fade, and for the dialogue
/// variant type out the lines and offer the choices.
///
/// All effects are pushed into a [`Ctx`] as events stamped with the virtual
/// time they happen at; [`Sequencer::update`] moves that time forward.
pub struct Sequencer {
    cfg: SequenceConfig,
    plan: Vec<StageSpec>,
    sched: Scheduler<Task>,
    phase: Phase,
    cursor: usize,

    fetch: Option<Fetch>,
    size: (f32, f32),
    strokes: StrokeSet,

    typewriter: Option<Typewriter>,
    tick_timer: Option<TimerId>,
    menu: ChoiceMenu,
}

impl Sequencer {
    pub fn new(cfg: SequenceConfig) -> Self {
        let plan = stage::plan(&cfg);
        let menu = ChoiceMenu::new(cfg.choices.clone());

        Self {
            cfg,
            plan,
            sched: Scheduler::new(),
            phase: Phase::Idle,
            cursor: 0,
            fetch: None,
            size: (0.0, 0.0),
            strokes: StrokeSet::default(),
            typewriter: None,
            tick_timer: None,
            menu,
        }
    }

    /// Issues the one and only asset request.
    pub fn start(&mut self, source: &dyn AssetSource) {
        if self.phase != Phase::Idle {
            log::warn!("Sequencer already started, ignoring start()");
            return;
        }

        let path = &self.cfg.animation.vector_asset;
        log::info!("Requesting vector asset '{}'", path);
        self.fetch = Some(source.request(path));
        self.phase = Phase::Loading;
    }

    /// Advances the virtual clock by `dt_ms`, running every timer that falls
    /// due on the way at its own due time.
    pub fn update(&mut self, ctx: &mut Ctx, dt_ms: u64) {
        if self.phase == Phase::Loading {
            self.poll_asset();
        }

        let target = self.sched.now().saturating_add(dt_ms);
        while !self.is_over() {
            let Some((at, task)) = self.sched.pop_due(target) else { break };
            self.run_task(ctx, at, task);
        }
        self.sched.advance_to(target);
    }

    pub fn feed(&mut self, ctx: &mut Ctx, ev: InputEvent) {
        let now = self.sched.now();
        match ev {
            InputEvent::ChoiceMade { index } => {
                if self.phase != Phase::AwaitingChoice {
                    log::warn!("Choice {} ignored in phase {:?}", index, self.phase);
                    return;
                }
                if let Some(nav) = self.menu.activate(index) {
                    ctx.push(now, nav);
                    self.phase = Phase::Finished;
                }
            }
            InputEvent::Exit => {
                log::info!("Exit requested at {}ms", now);
                if self.phase != Phase::Stalled {
                    self.phase = Phase::Finished;
                }
            }
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Finished | Phase::Stalled)
    }

    pub fn now(&self) -> u64 {
        self.sched.now()
    }

    pub fn next_deadline(&self) -> Option<u64> {
        if self.is_over() {
            return None;
        }
        self.sched.next_due()
    }

    pub fn plan(&self) -> &[StageSpec] {
        &self.plan
    }

    pub fn strokes(&self) -> &StrokeSet {
        &self.strokes
    }

    pub fn typewriter(&self) -> Option<&Typewriter> {
        self.typewriter.as_ref()
    }

    pub fn menu(&self) -> &ChoiceMenu {
        &self.menu
    }

    fn poll_asset(&mut self) {
        let received = match &self.fetch {
            Some(rx) => rx.try_recv(),
            None => return,
        };

        let bytes = match received {
            Ok(Ok(bytes)) => bytes,
            Ok(Err(e)) => return self.stall(&format!("{:#}", e)),
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => return self.stall("asset request dropped"),
        };
        self.fetch = None;

        let doc = match VectorDoc::parse(&bytes) {
            Ok(doc) => doc,
            Err(e) => return self.stall(&format!("{:#}", e)),
        };

        log::info!("Vector asset loaded: {} paths, {}x{}", doc.path_ids.len(), doc.width, doc.height);
        self.size = (doc.width, doc.height);
        self.strokes = doc.into_strokes();

        let total = self.strokes.prepare(self.cfg.animation.path_delay_ms);
        log::debug!("Stroke draw time: {}ms", total);

        let delay = self.plan[0].delay.resolve(&self.strokes, self.cfg.animation.wait_for_draw);
        self.sched.after(delay, Task::Stage(0));
    }

    fn stall(&mut self, reason: &str) {
        log::error!("Vector asset unavailable, sequence stalled: {}", reason);
        self.fetch = None;
        self.phase = Phase::Stalled;
    }

    fn run_task(&mut self, ctx: &mut Ctx, at: u64, task: Task) {
        match task {
            Task::Stage(index) => self.run_stage(ctx, at, index),
            Task::TypeTick => self.type_tick(ctx, at),
            Task::LineBreak => self.line_break(ctx, at),
        }
    }

    fn run_stage(&mut self, ctx: &mut Ctx, at: u64, index: usize) {
        let Some(spec) = self.plan.get(index).copied() else { return };
        log::debug!("Stage '{}' at {}ms", spec.stage.name(), at);

        self.cursor = index;
        self.phase = Phase::Running(spec.stage);
        let containers = &self.cfg.containers;

        match spec.stage {
            Stage::Mount => {
                ctx.push(at, OutputEvent::MountVector {
                    container: containers.stage.clone(),
                    strokes: self.strokes.strokes().to_vec(),
                    width: self.size.0,
                    height: self.size.1,
                });
                ctx.push(at, OutputEvent::MountImage {
                    container: containers.stage.clone(),
                    src: self.cfg.animation.raster_asset.clone(),
                });
            }
            Stage::Draw => {
                self.strokes.draw();
                ctx.push(at, OutputEvent::DrawStrokes { count: self.strokes.len() });
            }
            Stage::CrossFade => {
                ctx.push(at, OutputEvent::SetOpacity { node: Node::Image, value: 1.0 });
                ctx.push(at, OutputEvent::SetOpacity { node: Node::Vector, value: 0.0 });
            }
            Stage::Teardown => {
                ctx.push(at, OutputEvent::RemoveNode {
                    container: containers.stage.clone(),
                    node: Node::Vector,
                });
                self.strokes = StrokeSet::default();
                if self.cfg.animation.variant.dims_background() {
                    ctx.push(at, OutputEvent::DimBackground {
                        container: containers.background.clone(),
                        opacity: self.cfg.animation.dim_opacity,
                    });
                }
            }
            Stage::Dialogue => {
                self.start_dialogue(ctx, at);
                return;
            }
            Stage::Choices => {
                ctx.push(at, self.menu.present(&containers.writer));
                self.phase = Phase::AwaitingChoice;
                return;
            }
        }

        self.schedule_next(ctx, at);
    }

    fn schedule_next(&mut self, ctx: &mut Ctx, at: u64) {
        let next = self.cursor + 1;
        match self.plan.get(next) {
            Some(spec) => {
                let delay = spec.delay.resolve(&self.strokes, self.cfg.animation.wait_for_draw);
                self.sched.after(delay, Task::Stage(next));
            }
            None => {
                ctx.push(at, OutputEvent::End);
                self.phase = Phase::Finished;
                log::info!("Sequence finished at {}ms", at);
            }
        }
    }

    fn start_dialogue(&mut self, ctx: &mut Ctx, at: u64) {
        let typewriter = Typewriter::new(&self.cfg.dialogue.lines);
        let empty = typewriter.is_done();
        self.typewriter = Some(typewriter);

        if empty {
            log::debug!("Dialogue script is empty");
            self.schedule_next(ctx, at);
            return;
        }

        ctx.push(at, OutputEvent::NewParagraph { container: self.cfg.containers.writer.clone() });
        self.tick_timer = Some(self.sched.every(self.cfg.dialogue.tick_ms, Task::TypeTick));
    }

    fn type_tick(&mut self, ctx: &mut Ctx, at: u64) {
        let tick = match self.typewriter.as_mut() {
            Some(tw) => tw.tick(),
            None => return,
        };

        match tick {
            Tick::Char(ch) => ctx.push(at, OutputEvent::AppendChar { ch }),
            Tick::LineEnd => {
                if let Some(id) = self.tick_timer.take() {
                    self.sched.cancel(id);
                }
                self.sched.after(self.cfg.dialogue.line_pause_ms, Task::LineBreak);
            }
            Tick::Idle => {}
        }
    }

    fn line_break(&mut self, ctx: &mut Ctx, at: u64) {
        let step = match self.typewriter.as_mut() {
            Some(tw) => tw.end_pause(),
            None => return,
        };

        match step {
            Some(LineBreak::NextLine) => {
                ctx.push(at, OutputEvent::NewParagraph { container: self.cfg.containers.writer.clone() });
                self.tick_timer = Some(self.sched.every(self.cfg.dialogue.tick_ms, Task::TypeTick));
            }
            Some(LineBreak::Done) => {
                log::info!("Dialogue finished at {}ms", at);
                self.schedule_next(ctx, at);
            }
            None => {}
        }
    }
}
