//! The visible session record.
//!
//! [`OutputLog`] is append-only: entries are only ever added at the end, and
//! the whole log can be cleared by an explicit `clear`. A front end can attach
//! a [`LogObserver`] to render entries the moment they are appended.

/// Receives log changes as they happen.
pub trait LogObserver {
    fn on_append(&mut self, entry: &str);
    fn on_clear(&mut self);
}

#[derive(Default)]
pub struct OutputLog {
    entries: Vec<String>,
    observer: Option<Box<dyn LogObserver>>,
}

impl OutputLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_observer(observer: Box<dyn LogObserver>) -> Self {
        Self {
            entries: Vec::new(),
            observer: Some(observer),
        }
    }

    pub fn append(&mut self, entry: String) {
        if let Some(observer) = self.observer.as_mut() {
            observer.on_append(&entry);
        }
        self.entries.push(entry);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        if let Some(observer) = self.observer.as_mut() {
            observer.on_clear();
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The whole log rendered as text, one entry per line block.
    #[must_use]
    pub fn render(&self) -> String {
        self.entries.join("\n")
    }
}

/// State owned by one console session: the output log plus any input staged
/// for the next submission (for instance a loaded script).
#[derive(Default)]
pub struct Session {
    log: OutputLog,
    pending_input: Option<String>,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_log(log: OutputLog) -> Self {
        Self {
            log,
            pending_input: None,
        }
    }

    #[must_use]
    pub fn log(&self) -> &OutputLog {
        &self.log
    }

    pub fn log_mut(&mut self) -> &mut OutputLog {
        &mut self.log
    }

    pub fn stage_input(&mut self, input: &str) {
        self.pending_input = Some(input.to_string());
    }

    #[must_use]
    pub fn pending_input(&self) -> Option<&str> {
        self.pending_input.as_deref()
    }

    pub fn take_pending_input(&mut self) -> Option<String> {
        self.pending_input.take()
    }

    /// Erases the log and the pending input.
    pub fn clear(&mut self) {
        self.log.clear();
        self.pending_input = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Recorder {
        events: Rc<RefCell<Vec<String>>>,
    }

    impl LogObserver for Recorder {
        fn on_append(&mut self, entry: &str) {
            self.events.borrow_mut().push(format!("append:{entry}"));
        }

        fn on_clear(&mut self) {
            self.events.borrow_mut().push("clear".to_string());
        }
    }

    #[test]
    fn test_append_keeps_order() {
        let mut log = OutputLog::new();
        log.append("first".to_string());
        log.append("second".to_string());

        assert_eq!(log.entries(), &["first".to_string(), "second".to_string()]);
        assert_eq!(log.render(), "first\nsecond");
    }

    #[test]
    fn test_observer_sees_appends_and_clear() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let recorder = Recorder {
            events: Rc::clone(&events),
        };
        let mut log = OutputLog::with_observer(Box::new(recorder));

        log.append("> mkdisk".to_string());
        log.clear();
        log.append("> help".to_string());

        assert_eq!(
            *events.borrow(),
            vec!["append:> mkdisk", "clear", "append:> help"]
        );
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_pending_input_is_taken_once() {
        let mut session = Session::new();
        session.stage_input("mkdisk -size=10\nfdisk -size=5");

        assert_eq!(session.pending_input(), Some("mkdisk -size=10\nfdisk -size=5"));
        assert!(session.take_pending_input().is_some());
        assert!(session.take_pending_input().is_none());
    }
}
