//! `ScheduledCourse` and the `Timetable` accumulator.
//!
//! # Push / pop discipline
//!
//! The planner keeps exactly one `Timetable` alive for the whole search.  It
//! pushes a `ScheduledCourse` before descending into the next course and pops
//! it on the way back up, so at any point the accumulator holds the choices
//! along the current branch.  The accumulator does not check that pushes and
//! pops pair up; that is the caller's job.
//!
//! Because the live accumulator keeps changing after a leaf is reached,
//! [`Timetable::snapshot`] is the only correct way to keep a result.

use tt_catalog::Section;

// ── ScheduledCourse ───────────────────────────────────────────────────────────

/// The sections chosen for one course: a primary plus one sub-offering per
/// kind group that primary declares, in kind order.
///
/// Sections are owned copies, so a `ScheduledCourse` outlives the catalog it
/// was chosen from.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduledCourse {
    course_code:  String,
    primary:      Section,
    sub_sections: Vec<Section>,
}

impl ScheduledCourse {
    pub fn new(course_code: impl Into<String>, primary: Section, sub_sections: Vec<Section>) -> Self {
        Self {
            course_code: course_code.into(),
            primary,
            sub_sections,
        }
    }

    pub fn course_code(&self) -> &str {
        &self.course_code
    }

    pub fn primary(&self) -> &Section {
        &self.primary
    }

    pub fn sub_sections(&self) -> &[Section] {
        &self.sub_sections
    }

    /// The primary followed by every sub-offering.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        std::iter::once(&self.primary).chain(self.sub_sections.iter())
    }

    /// `true` if `candidate` overlaps any section chosen for this course.
    pub fn conflicts_with(&self, candidate: &Section) -> bool {
        self.sections().any(|s| s.conflicts_with(candidate))
    }
}

// ── Timetable ─────────────────────────────────────────────────────────────────

/// An ordered list of scheduled courses: the live accumulator during search,
/// and one complete schedule once snapshotted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timetable {
    scheduled: Vec<ScheduledCourse>,
}

impl Timetable {
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty timetable with room for `courses` entries.
    pub fn with_capacity(courses: usize) -> Self {
        Self { scheduled: Vec::with_capacity(courses) }
    }

    /// Read-only view of the scheduled courses, in the order they were added.
    pub fn scheduled(&self) -> &[ScheduledCourse] {
        &self.scheduled
    }

    pub fn len(&self) -> usize {
        self.scheduled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scheduled.is_empty()
    }

    /// The entry for `course_code`, if that course has been scheduled.
    pub fn get(&self, course_code: &str) -> Option<&ScheduledCourse> {
        self.scheduled.iter().find(|c| c.course_code == course_code)
    }

    /// Every chosen section across every course.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.scheduled.iter().flat_map(ScheduledCourse::sections)
    }

    // ── Accumulator operations ────────────────────────────────────────────

    /// `true` if any meeting of `candidate` overlaps any meeting already in
    /// the timetable.  Full pairwise scan.
    pub fn conflicts_with(&self, candidate: &Section) -> bool {
        self.scheduled.iter().any(|c| c.conflicts_with(candidate))
    }

    pub fn push(&mut self, scheduled: ScheduledCourse) {
        self.scheduled.push(scheduled);
    }

    /// Remove and return the most recently pushed course.
    pub fn pop(&mut self) -> Option<ScheduledCourse> {
        self.scheduled.pop()
    }

    /// An independent deep copy.  Later pushes and pops on `self` do not
    /// affect it.
    pub fn snapshot(&self) -> Timetable {
        self.clone()
    }
}
