//! Count-up animation for the headline statistics.

/// Groups digits French-style with a narrow no-break space: `12 500`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('\u{202f}');
        }
        out.push(ch);
    }
    out
}

#[derive(Debug, Clone, PartialEq)]
pub struct CounterFrame {
    pub text: String,
    pub done: bool,
}

/// Counts from 0 to `target` in equal per-frame steps.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: u64,
    step: f64,
    current: f64,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: u64, duration_ms: u32, frame_ms: u32) -> Self {
        let frames = f64::from(duration_ms.max(1)) / f64::from(frame_ms.max(1));
        Self {
            target,
            step: target as f64 / frames,
            current: 0.0,
            finished: false,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Moves one frame forward. The last frame always shows the exact target.
    pub fn advance(&mut self) -> CounterFrame {
        if !self.finished {
            self.current += self.step;
        }
        if !self.finished && self.current < self.target as f64 {
            CounterFrame {
                text: format_count(self.current.ceil() as u64),
                done: false,
            }
        } else {
            self.finished = true;
            CounterFrame {
                text: format_count(self.target),
                done: true,
            }
        }
    }
}

/// Counters that start together and advance on the same frames.
#[derive(Debug, Clone, Default)]
pub struct CounterGroup {
    counters: Vec<CounterAnimation>,
}

impl CounterGroup {
    pub fn new(targets: impl IntoIterator<Item = u64>, duration_ms: u32, frame_ms: u32) -> Self {
        Self {
            counters: targets
                .into_iter()
                .map(|target| CounterAnimation::new(target, duration_ms, frame_ms))
                .collect(),
        }
    }

    /// Texts for every counter after one more frame, and whether all are done.
    pub fn advance(&mut self) -> (Vec<String>, bool) {
        let frames: Vec<CounterFrame> = self.counters.iter_mut().map(|c| c.advance()).collect();
        let done = frames.iter().all(|frame| frame.done);
        (frames.into_iter().map(|frame| frame.text).collect(), done)
    }
}

/// Latch that lets a group of counters start only once per page session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OnceLatch {
    fired: bool,
}

impl OnceLatch {
    /// True the first time, false afterwards.
    pub fn fire(&mut self) -> bool {
        !std::mem::replace(&mut self.fired, true)
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1250), "1\u{202f}250");
        assert_eq!(format_count(1_234_567), "1\u{202f}234\u{202f}567");
    }

    #[test]
    fn reaches_target_in_duration_over_frame_steps() {
        let mut counter = CounterAnimation::new(1250, 2000, 16);
        let mut frames = Vec::new();
        loop {
            let frame = counter.advance();
            let done = frame.done;
            frames.push(frame);
            if done {
                break;
            }
        }
        // 2000 / 16 = 125 steps of 10
        assert_eq!(frames.len(), 125);
        assert_eq!(frames[0].text, "10");
        assert_eq!(frames.last().unwrap().text, "1\u{202f}250");
        assert!(counter.is_finished());
        assert!(counter.advance().done);
    }

    #[test]
    fn zero_target_finishes_immediately() {
        let mut counter = CounterAnimation::new(0, 2000, 16);
        assert_eq!(counter.advance(), CounterFrame { text: "0".into(), done: true });
    }

    #[test]
    fn group_finishes_with_its_largest_counter() {
        let mut group = CounterGroup::new([250, 1250], 2000, 16);
        let (texts, done) = group.advance();
        assert_eq!(texts, vec!["2".to_string(), "10".to_string()]);
        assert!(!done);

        let mut frames = 1;
        loop {
            frames += 1;
            let (texts, done) = group.advance();
            if done {
                assert_eq!(texts, vec!["250".to_string(), "1\u{202f}250".to_string()]);
                break;
            }
            assert!(frames < 1_000);
        }
        assert_eq!(frames, 125);
    }

    #[test]
    fn latch_fires_once() {
        let mut latch = OnceLatch::default();
        assert!(latch.fire());
        assert!(!latch.fire());
        assert!(latch.has_fired());
    }
}
