/// Id generation for tasks and columns.
///
/// The only contract is uniqueness within a process lifetime; the format is
/// not load-bearing anywhere.
pub trait IdGenerator {
    fn next_id(&mut self, prefix: &str) -> String;
}

/// Default generator: `{prefix}-{millis}-{counter}`. The process-local
/// counter keeps ids unique even when the clock does not advance between
/// calls.
#[derive(Debug, Default)]
pub struct TimestampIds {
    counter: u64,
}

impl IdGenerator for TimestampIds {
    fn next_id(&mut self, prefix: &str) -> String {
        self.counter += 1;
        format!("{}-{}-{}", prefix, timestamp_millis(), self.counter)
    }
}

/// Millisecond timestamp from the current system time.
fn timestamp_millis() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique_and_prefixed() {
        let mut ids = TimestampIds::default();
        let a = ids.next_id("task");
        let b = ids.next_id("task");
        let c = ids.next_id("col");
        assert_ne!(a, b);
        assert!(a.starts_with("task-"));
        assert!(c.starts_with("col-"));
    }
}
