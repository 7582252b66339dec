use std::sync::atomic::{AtomicU64, Ordering};

/// A monotonically increasing id stream.
///
/// The counter starts at zero and is incremented before each id is handed
/// out, so the first id has suffix `1`. It is never reset. Increments are
/// atomic, so concurrent callers always receive distinct suffixes.
///
/// [`uniq_id`] draws from one process-wide instance; construct your own
/// `IdCounter` for an independent stream.
///
/// # Examples
///
/// ```
/// use value_utils::IdCounter;
///
/// let ids = IdCounter::new();
/// assert_eq!(ids.next_id("row_"), "row_1");
/// assert_eq!(ids.next_id("row_"), "row_2");
/// assert_eq!(ids.next_id(""), "3");
/// ```
#[derive(Debug, Default)]
pub struct IdCounter {
    counter: AtomicU64,
}

static PROCESS_IDS: IdCounter = IdCounter::new();

impl IdCounter {
    pub const fn new() -> Self {
        Self {
            counter: AtomicU64::new(0),
        }
    }

    /// The process-wide counter behind [`uniq_id`].
    pub fn global() -> &'static IdCounter {
        &PROCESS_IDS
    }

    /// Returns `prefix` followed by the next counter value.
    pub fn next_id(&self, prefix: &str) -> String {
        let id = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{prefix}{id}")
    }
}

/// Generates a process-unique id: `prefix` followed by the next value of the
/// process-wide counter. Ids are sequential, not random.
///
/// # Examples
///
/// ```
/// use value_utils::uniq_id;
///
/// let id = uniq_id("user_");
/// assert!(id.starts_with("user_"));
/// assert!(id["user_".len()..].parse::<u64>().unwrap() >= 1);
/// ```
pub fn uniq_id(prefix: &str) -> String {
    PROCESS_IDS.next_id(prefix)
}
