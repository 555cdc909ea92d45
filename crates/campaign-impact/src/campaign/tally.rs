use super::document::TaskStatus;
use std::collections::HashMap;

/// Per-status task counts. Statuses only appear once a task carrying them
/// has been seen.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StatusTally {
    counts: HashMap<TaskStatus, usize>,
}

impl StatusTally {
    pub fn from_statuses<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = TaskStatus>,
    {
        let mut tally = Self::default();
        for status in statuses {
            tally.record(status);
        }
        tally
    }

    pub fn record(&mut self, status: TaskStatus) {
        *self.counts.entry(status).or_default() += 1;
    }

    pub fn count(&self, status: TaskStatus) -> usize {
        self.counts.get(&status).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Non-zero counts in display order.
    pub fn entries(&self) -> Vec<(TaskStatus, usize)> {
        TaskStatus::ordered()
            .into_iter()
            .filter_map(|status| self.counts.get(&status).map(|count| (status, *count)))
            .collect()
    }
}

impl FromIterator<TaskStatus> for StatusTally {
    fn from_iter<I: IntoIterator<Item = TaskStatus>>(iter: I) -> Self {
        Self::from_statuses(iter)
    }
}
