// history.rs

const DEFAULT_CAPACITY: usize = 5;

/// Bounded most-recent-first log of executed command lines. Entry 0 is
/// the newest; once the log is full the oldest entry falls off. The
/// capacity can be changed at runtime and nothing is ever persisted.
pub struct History {
    entries: Vec<String>,
    capacity: usize,
}

impl History {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// A zero-capacity log accepts nothing.
    pub fn push(&mut self, line: &str) {
        if self.capacity == 0 {
            return;
        }
        self.entries.insert(0, line.to_string());
        self.entries.truncate(self.capacity);
    }

    /// Zero-based, newest first.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Shrinking discards the oldest entries; growing keeps what is there.
    pub fn resize(&mut self, capacity: usize) {
        self.capacity = capacity;
        self.entries.truncate(capacity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(history: &History) -> Vec<&str> {
        history.iter().collect()
    }

    #[test]
    fn newest_entry_comes_first() {
        let mut history = History::new();
        history.push("first");
        history.push("second");
        assert_eq!(collect(&history), vec!["second", "first"]);
        assert_eq!(history.get(0), Some("second"));
    }

    #[test]
    fn overflow_discards_the_oldest() {
        let mut history = History::new();
        for i in 1..=7 {
            history.push(&format!("cmd{}", i));
        }
        assert_eq!(
            collect(&history),
            vec!["cmd7", "cmd6", "cmd5", "cmd4", "cmd3"]
        );
    }

    #[test]
    fn shrinking_truncates_the_oldest() {
        let mut history = History::new();
        history.push("a");
        history.push("b");
        history.push("c");
        history.resize(2);
        assert_eq!(collect(&history), vec!["c", "b"]);
        history.push("d");
        assert_eq!(collect(&history), vec!["d", "c"]);
    }

    #[test]
    fn growing_keeps_existing_entries() {
        let mut history = History::new();
        history.push("a");
        history.resize(10);
        assert_eq!(collect(&history), vec!["a"]);
        for i in 1..=9 {
            history.push(&format!("cmd{}", i));
        }
        assert_eq!(history.iter().count(), 10);
    }

    #[test]
    fn zero_capacity_accepts_nothing() {
        let mut history = History::new();
        history.resize(0);
        history.push("dropped");
        assert_eq!(history.iter().count(), 0);
        history.resize(3);
        history.push("kept");
        assert_eq!(collect(&history), vec!["kept"]);
    }

    #[test]
    fn get_past_the_end_is_none() {
        let mut history = History::new();
        history.push("only");
        assert_eq!(history.get(1), None);
    }
}
