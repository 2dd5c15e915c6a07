//! Priority grouping and card rendering data.

use crate::task::domain::{Priority, Task, TaskId};
use chrono::{DateTime, Local, TimeZone};
use std::fmt;

/// Tasks partitioned by priority.
///
/// Each bucket keeps the order of the input slice. Every input task appears
/// in exactly one bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriorityBuckets<'a> {
    /// Tasks with [`Priority::High`].
    pub high: Vec<&'a Task>,
    /// Tasks with [`Priority::Medium`].
    pub medium: Vec<&'a Task>,
    /// Tasks with [`Priority::Low`].
    pub low: Vec<&'a Task>,
}

impl<'a> PriorityBuckets<'a> {
    /// Returns the bucket for `priority`.
    #[must_use]
    pub fn bucket(&self, priority: Priority) -> &[&'a Task] {
        match priority {
            Priority::High => &self.high,
            Priority::Medium => &self.medium,
            Priority::Low => &self.low,
        }
    }

    /// Returns the total number of tasks across all buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.high.len() + self.medium.len() + self.low.len()
    }

    /// Returns `true` when no bucket holds a task.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over the columns in display order.
    pub fn columns(&self) -> impl Iterator<Item = (Priority, &[&'a Task])> + '_ {
        Priority::ALL
            .into_iter()
            .map(move |priority| (priority, self.bucket(priority)))
    }
}

/// Partitions `tasks` into priority buckets.
///
/// This is a filter, not a sort: order within a bucket is the input order.
#[must_use]
pub fn group_by_priority(tasks: &[Task]) -> PriorityBuckets<'_> {
    let mut buckets = PriorityBuckets::default();
    for task in tasks {
        match task.priority() {
            Priority::High => buckets.high.push(task),
            Priority::Medium => buckets.medium.push(task),
            Priority::Low => buckets.low.push(task),
        }
    }
    buckets
}

/// Formats a creation timestamp the way task cards show it, for example
/// `July 19, 10:00 AM`.
///
/// The label uses the timestamp's own offset; convert it to the viewer's
/// zone first.
#[must_use]
pub fn created_at_label<Tz>(created_at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    created_at.format("%B %-d, %-I:%M %p").to_string()
}

/// Display data for a single task card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskCard {
    /// Task the card represents; edit, delete and toggle target this id.
    pub id: TaskId,
    /// Card heading.
    pub title: String,
    /// Card body, possibly empty.
    pub description: String,
    /// Column the card is placed in.
    pub priority: Priority,
    /// Whether the card is shown as done.
    pub completed: bool,
    /// Creation label from [`created_at_label`].
    pub created_label: String,
}

impl TaskCard {
    /// Builds the card with its creation label rendered in `zone`.
    #[must_use]
    pub fn in_zone<Tz>(task: &Task, zone: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        Self {
            id: task.id(),
            title: task.title().to_string(),
            description: task.description().to_owned(),
            priority: task.priority(),
            completed: task.is_completed(),
            created_label: created_at_label(&task.created_at().with_timezone(zone)),
        }
    }
}

/// Renders the creation label in the local time zone.
impl From<&Task> for TaskCard {
    fn from(task: &Task) -> Self {
        Self::in_zone(task, &Local)
    }
}
