use std::thread;
use std::time::Duration;

use crate::event::InputEvent;
use crate::renderer::Renderer;
use crate::runtime::Ctx;
use crate::sequence::{Phase, Sequencer};

/// Clock step while the asset request is still out.
const LOAD_POLL_MS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pace {
    /// Sleep until each deadline.
    RealTime,
    /// Jump the virtual clock straight to each deadline.
    Skip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Finished,
    Stalled,
    /// The renderer asked to quit.
    Exited,
    /// Waiting for a choice the renderer never made.
    AwaitingInput,
}

/// Feeds a sequencer's output into a renderer and its replies back.
pub struct Driver<R: Renderer> {
    seq: Sequencer,
    renderer: R,
}

impl<R: Renderer> Driver<R> {
    pub fn new(seq: Sequencer, renderer: R) -> Self {
        Self { seq, renderer }
    }

    pub fn run(&mut self, ctx: &mut Ctx, pace: Pace) -> Outcome {
        loop {
            if !self.dispatch(ctx) {
                return Outcome::Exited;
            }

            let step = match self.seq.phase() {
                Phase::Finished => return Outcome::Finished,
                Phase::Stalled => return Outcome::Stalled,
                Phase::Idle => {
                    log::warn!("Driver run before the sequencer was started");
                    return Outcome::Stalled;
                }
                Phase::Loading => {
                    // 资源线程是真实 IO，两种模式都要等
                    thread::sleep(Duration::from_millis(LOAD_POLL_MS));
                    LOAD_POLL_MS
                }
                _ => match self.seq.next_deadline() {
                    Some(due) => {
                        let step = due.saturating_sub(self.seq.now());
                        if pace == Pace::RealTime && step > 0 {
                            thread::sleep(Duration::from_millis(step));
                        }
                        step
                    }
                    None => return Outcome::AwaitingInput,
                },
            };

            self.seq.update(ctx, step);
        }
    }

    /// Hands every queued event to the renderer. `false` once it asks to exit.
    pub fn dispatch(&mut self, ctx: &mut Ctx) -> bool {
        while let Some(emitted) = ctx.pop() {
            let Some(input) = self.renderer.render(&emitted.event) else { continue };
            log::debug!("Input {:?} at {}ms", input, self.seq.now());

            if input == InputEvent::Exit {
                self.seq.feed(ctx, input);
                return false;
            }
            self.seq.feed(ctx, input);
        }
        true
    }

    pub fn sequencer(&self) -> &Sequencer {
        &self.seq
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_parts(self) -> (Sequencer, R) {
        (self.seq, self.renderer)
    }
}
