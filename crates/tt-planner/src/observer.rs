//! Planner observer trait: receive timetables as the search finds them.

use crate::Timetable;

/// Callbacks invoked by [`Planner::run`][crate::Planner::run].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: streaming printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl PlanObserver for Printer {
///     fn on_timetable(&mut self, timetable: &Timetable) {
///         for c in timetable.scheduled() {
///             println!("{} {}", c.course_code(), c.primary().code());
///         }
///     }
/// }
/// ```
pub trait PlanObserver {
    /// Called once before the search starts.
    fn on_search_start(&mut self, _course_count: usize) {}

    /// Called for every complete timetable, in traversal order.
    ///
    /// `timetable` is the planner's live accumulator.  It changes as soon as
    /// this call returns, so keep a [`Timetable::snapshot`], never the
    /// reference.
    fn on_timetable(&mut self, _timetable: &Timetable) {}

    /// Called once after the search space is exhausted.
    fn on_search_end(&mut self, _found: usize) {}
}

/// A [`PlanObserver`] that does nothing.  Use with `run` to only count
/// timetables.
pub struct NoopObserver;

impl PlanObserver for NoopObserver {}

/// Keeps a snapshot of every timetable it is shown.
#[derive(Default)]
pub struct TimetableCollector {
    timetables: Vec<Timetable>,
}

impl TimetableCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn timetables(&self) -> &[Timetable] {
        &self.timetables
    }

    pub fn into_timetables(self) -> Vec<Timetable> {
        self.timetables
    }
}

impl PlanObserver for TimetableCollector {
    fn on_timetable(&mut self, timetable: &Timetable) {
        self.timetables.push(timetable.snapshot());
    }
}
