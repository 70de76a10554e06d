// ── Identifier Generation ────────────────────────────────────────────────────

/// Issues time-based identifiers: Unix milliseconds as a decimal string.
///
/// Two calls in the same millisecond (or a clock that steps backwards) would
/// collide, so each identifier is bumped past the previous one and past
/// anything the caller reports as taken.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self, taken: impl Fn(&str) -> bool) -> String {
        let now = chrono::Utc::now().timestamp_millis();
        let mut candidate = now.max(self.last + 1);
        while taken(&candidate.to_string()) {
            candidate += 1;
        }
        self.last = candidate;
        candidate.to_string()
    }
}
