//! The `Planner` and its backtracking search.
//!
//! # Search order
//!
//! ```text
//! explore(course i):
//!   i == n            → hand the accumulator to the observer
//!   for each primary of course i (catalog order):
//!     skip if infeasible or clashing with the accumulator
//!     no sub groups   → push, explore(i + 1), pop
//!     otherwise       → pick one sub per kind group (odometer order, last
//!                       kind fastest); skip picks that are infeasible or
//!                       clash with the accumulator, the primary, or an
//!                       earlier pick; push, explore(i + 1), pop
//! ```
//!
//! A pick is rejected the moment it is made rather than after the whole
//! combination is built.  The surviving combinations and their order are the
//! same either way; rejecting early just skips the doomed suffixes.
//!
//! Recursion depth is the course count plus the deepest kind-group count.
//! The search is exhaustive and deterministic: the same input slice always
//! yields the same timetables in the same order.

use tracing::{debug, info, trace, warn};

use tt_catalog::{Course, PrimarySection, Section};

use crate::{
    PlanObserver, ScheduledCourse, SectionFilter, SectionPredicate, Timetable, TimetableCollector,
};

/// Enumerate every conflict-free timetable for `courses` under `filter`.
///
/// Courses are scheduled in slice order; the result lists timetables in
/// search order.  Zero timetables is a valid answer.  An empty `courses`
/// slice yields exactly one empty timetable.
pub fn build_all_timetables(courses: &[Course], filter: &SectionFilter) -> Vec<Timetable> {
    Planner::new(courses, filter).collect()
}

// ── Planner ───────────────────────────────────────────────────────────────────

/// Drives the search over a borrowed course list.
///
/// `P` is any [`SectionPredicate`]; [`SectionFilter`] is the usual choice.
pub struct Planner<'a, P: SectionPredicate = SectionFilter> {
    courses: &'a [Course],
    filter:  &'a P,
}

impl<'a, P: SectionPredicate> Planner<'a, P> {
    pub fn new(courses: &'a [Course], filter: &'a P) -> Self {
        Self { courses, filter }
    }

    /// Run the full search, streaming each timetable to `observer`.
    ///
    /// Returns the number of timetables found.  Options the predicate
    /// reports as ignored are logged at `warn` before the search starts.
    pub fn run<O: PlanObserver>(&self, observer: &mut O) -> usize {
        for option in self.filter.ignored_options() {
            warn!(option, "filter option is not applied yet; ignoring it");
        }
        observer.on_search_start(self.courses.len());

        let mut search = Search {
            courses:  self.courses,
            filter:   self.filter,
            acc:      Timetable::with_capacity(self.courses.len()),
            found:    0,
            observer: &mut *observer,
        };
        search.explore(0);
        let found = search.found;

        observer.on_search_end(found);
        info!(courses = self.courses.len(), timetables = found, "search complete");
        found
    }

    /// Run the full search and keep a snapshot of every timetable.
    pub fn collect(&self) -> Vec<Timetable> {
        let mut collector = TimetableCollector::new();
        self.run(&mut collector);
        collector.into_timetables()
    }
}

// ── Search state ──────────────────────────────────────────────────────────────

/// Mutable state for one run: the live accumulator and the solution count.
struct Search<'a, 'o, P: SectionPredicate, O: PlanObserver> {
    courses:  &'a [Course],
    filter:   &'a P,
    acc:      Timetable,
    found:    usize,
    observer: &'o mut O,
}

impl<'a, P: SectionPredicate, O: PlanObserver> Search<'a, '_, P, O> {
    fn explore(&mut self, depth: usize) {
        let courses = self.courses;
        let Some(course) = courses.get(depth) else {
            self.found += 1;
            self.observer.on_timetable(&self.acc);
            return;
        };

        for primary in course.primary_sections() {
            let section = primary.section();
            if !self.filter.feasible(section) {
                trace!(course = course.code(), section = section.code(), "primary infeasible");
                continue;
            }
            if self.acc.conflicts_with(section) {
                trace!(course = course.code(), section = section.code(), "primary clashes");
                continue;
            }

            if !primary.has_sub_groups() {
                self.acc.push(ScheduledCourse::new(course.code(), section.clone(), Vec::new()));
                self.explore(depth + 1);
                self.acc.pop();
                continue;
            }

            let groups: Vec<&'a [Section]> =
                primary.sub_groups().values().map(Vec::as_slice).collect();
            if groups.iter().any(|g| g.is_empty()) {
                debug!(
                    course = course.code(),
                    section = section.code(),
                    "primary declares an empty sub-offering group; no combination possible"
                );
                continue;
            }

            let mut picks: Vec<&'a Section> = Vec::with_capacity(groups.len());
            self.explore_subs(depth, course, primary, &groups, &mut picks);
        }
    }

    /// Choose one sub-offering from `groups[picks.len()]` onward, then
    /// schedule the course and descend.
    fn explore_subs(
        &mut self,
        depth:   usize,
        course:  &'a Course,
        primary: &'a PrimarySection,
        groups:  &[&'a [Section]],
        picks:   &mut Vec<&'a Section>,
    ) {
        let Some(&group) = groups.get(picks.len()) else {
            let subs = picks.iter().map(|&s| s.clone()).collect();
            self.acc.push(ScheduledCourse::new(course.code(), primary.section().clone(), subs));
            self.explore(depth + 1);
            self.acc.pop();
            return;
        };

        for sub in group {
            if !self.filter.feasible(sub)
                || self.acc.conflicts_with(sub)
                || primary.section().conflicts_with(sub)
                || picks.iter().any(|p| p.conflicts_with(sub))
            {
                trace!(course = course.code(), section = sub.code(), "sub-offering rejected");
                continue;
            }
            picks.push(sub);
            self.explore_subs(depth, course, primary, groups, picks);
            picks.pop();
        }
    }
}
