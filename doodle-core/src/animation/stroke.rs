/// One vector path with its own timed opacity transition.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    pub id: String,
    pub delay_ms: u64,
    pub duration_ms: u64,
    pub opacity: f32,
}

impl Stroke {
    pub fn new(id: String) -> Self {
        Self {
            id,
            delay_ms: 0,
            duration_ms: 0,
            opacity: 0.0,
        }
    }

    /// CSS shorthand of the configured transition.
    pub fn transition(&self) -> String {
        format!("opacity {}ms {}ms linear", self.duration_ms, self.delay_ms)
    }

    /// Time at which this stroke is fully drawn, counted from `draw`.
    pub fn finish_ms(&self) -> u64 {
        self.delay_ms.saturating_add(self.duration_ms)
    }
}

/// The ordered paths of one loaded vector image.
#[derive(Clone, Debug, Default)]
pub struct StrokeSet {
    strokes: Vec<Stroke>,
    draw_time_ms: u64,
}

impl StrokeSet {
    pub fn new(ids: impl IntoIterator<Item = String>) -> Self {
        Self {
            strokes: ids.into_iter().map(Stroke::new).collect(),
            draw_time_ms: 0,
        }
    }

    /// Assigns every stroke a transition of `per_path_delay_ms`, staggered in
    /// reverse document order: the delay accumulates before it is assigned,
    /// so the last path starts after one step and the first path after `n`.
    /// Returns the total draw time, `per_path_delay_ms * n`.
    pub fn prepare(&mut self, per_path_delay_ms: u64) -> u64 {
        let mut delay: u64 = 0;
        for stroke in self.strokes.iter_mut().rev() {
            delay = delay.saturating_add(per_path_delay_ms);
            stroke.delay_ms = delay;
            stroke.duration_ms = per_path_delay_ms;
        }

        self.draw_time_ms = delay;
        delay
    }

    /// Flips every stroke visible at once; the staggered transitions do the rest.
    pub fn draw(&mut self) {
        for stroke in &mut self.strokes {
            stroke.opacity = 1.0;
        }
    }

    /// How long after `draw` the completion callback is due.
    pub fn completion_delay(&self, wait_for_draw: bool) -> u64 {
        if wait_for_draw { self.draw_time_ms } else { 0 }
    }

    pub fn draw_time_ms(&self) -> u64 {
        self.draw_time_ms
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub fn is_drawn(&self) -> bool {
        self.strokes.iter().all(|s| s.opacity >= 1.0)
    }
}
