//! Task board domain
//!
//! Tasks, the dashboard's board state and the views computed from it
//! (counters, review grouping, weekly report, scan results).

pub mod board;
pub mod changes;
pub mod entities;
pub mod grouping;
pub mod report;
pub mod scan;
pub mod snapshot;
pub mod stats;

pub use board::{SyncRecord, TaskBoard};
pub use changes::{FieldChange, TaskChanges};
pub use entities::{Priority, Task, TaskOwnerType, TaskStatus, UpdateLogEntry};
pub use grouping::{GroupBy, NO_COMPANY, ReviewFilter, TaskGroup, group_tasks};
pub use report::{BreakdownEntry, WeeklyReport};
pub use scan::{DuplicateCandidate, ScanResult};
pub use snapshot::decode_task_list;
pub use stats::DashboardStats;
