use doodle_core::animation::StrokeSet;

fn ids(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("p{}", i)).collect()
}

#[test]
fn prepare_total_is_count_times_delay() {
    let mut set = StrokeSet::new(ids(4));
    assert_eq!(set.prepare(25), 100);
    assert_eq!(set.draw_time_ms(), 100);
}

#[test]
fn delays_accumulate_in_reverse() {
    let n = 5;
    let d = 20;
    let mut set = StrokeSet::new(ids(n));
    set.prepare(d);

    for (j, stroke) in set.strokes().iter().enumerate() {
        assert_eq!(stroke.delay_ms, d * (n - j) as u64, "stroke {}", j);
        assert_eq!(stroke.duration_ms, d);
    }
    // 文档顺序第一条最晚开始，最后一条最早
    assert_eq!(set.strokes()[0].delay_ms, 100);
    assert_eq!(set.strokes()[n - 1].delay_ms, 20);
}

#[test]
fn transition_shorthand() {
    let mut set = StrokeSet::new(ids(2));
    set.prepare(25);
    assert_eq!(set.strokes()[0].transition(), "opacity 25ms 50ms linear");
    assert_eq!(set.strokes()[1].transition(), "opacity 25ms 25ms linear");
    assert_eq!(set.strokes()[0].finish_ms(), 75);
}

#[test]
fn draw_flips_every_stroke() {
    let mut set = StrokeSet::new(ids(3));
    set.prepare(10);
    assert!(!set.is_drawn());
    set.draw();
    assert!(set.is_drawn());
    assert!(set.strokes().iter().all(|s| s.opacity == 1.0));
}

#[test]
fn empty_set_has_zero_duration() {
    let mut set = StrokeSet::new(Vec::new());
    assert!(set.is_empty());
    assert_eq!(set.prepare(25), 0);
    set.draw();
    assert_eq!(set.completion_delay(true), 0);
    assert_eq!(set.completion_delay(false), 0);
}

#[test]
fn completion_delay_respects_wait_flag() {
    let mut set = StrokeSet::new(ids(3));
    set.prepare(20);
    assert_eq!(set.completion_delay(true), 60);
    assert_eq!(set.completion_delay(false), 0);
}

#[test]
fn huge_delay_saturates_instead_of_overflowing() {
    let mut set = StrokeSet::new(ids(3));
    let total = set.prepare(9_000_000_000_000_000_000);
    assert_eq!(total, u64::MAX);
    assert_eq!(set.strokes()[2].delay_ms, 9_000_000_000_000_000_000);
    assert_eq!(set.strokes()[0].delay_ms, u64::MAX);
    assert_eq!(set.strokes()[0].finish_ms(), u64::MAX);
}
