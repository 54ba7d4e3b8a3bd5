//! Section admissibility: which sections a student is willing to take at all.
//!
//! The planner asks a [`SectionPredicate`] about every primary and
//! sub-offering before it tries to place it.  [`SectionFilter`] is the
//! configurable predicate; [`AcceptAll`] admits everything; predicates
//! compose with [`SectionPredicateExt::and`].
//!
//! Feasibility is a property of one section on its own.  Clashes between
//! chosen sections are the timetable's concern, not the filter's.

use tt_catalog::Section;
use tt_core::{conflicts, ClassTime};

// ── Trait ─────────────────────────────────────────────────────────────────────

/// Per-section admissibility test.
///
/// # Contract
///
/// - Must be pure: the same section always gets the same answer.
/// - Must not block or perform I/O.  It runs once per section per branch.
pub trait SectionPredicate {
    fn feasible(&self, section: &Section) -> bool;

    /// Names of configured options this predicate accepts but does not
    /// apply.  [`Planner::run`][crate::Planner::run] logs a warning for each.
    fn ignored_options(&self) -> Vec<&'static str> {
        Vec::new()
    }
}

// ── Accept-all ────────────────────────────────────────────────────────────────

/// A predicate that admits every section.
pub struct AcceptAll;

impl SectionPredicate for AcceptAll {
    #[inline]
    fn feasible(&self, _section: &Section) -> bool {
        true
    }
}

// ── Conjunction ───────────────────────────────────────────────────────────────

/// Admits a section only if both predicates do.  `first` is asked first.
pub struct Both<A: SectionPredicate, B: SectionPredicate> {
    first:  A,
    second: B,
}

impl<A: SectionPredicate, B: SectionPredicate> SectionPredicate for Both<A, B> {
    #[inline]
    fn feasible(&self, section: &Section) -> bool {
        self.first.feasible(section) && self.second.feasible(section)
    }

    fn ignored_options(&self) -> Vec<&'static str> {
        let mut names = self.first.ignored_options();
        names.extend(self.second.ignored_options());
        names
    }
}

/// Extension trait that adds `.and(other)` to any `SectionPredicate`.
pub trait SectionPredicateExt: SectionPredicate + Sized {
    fn and<B: SectionPredicate>(self, other: B) -> Both<Self, B> {
        Both { first: self, second: other }
    }
}

impl<P: SectionPredicate + Sized> SectionPredicateExt for P {}

// ── SectionFilter ─────────────────────────────────────────────────────────────

/// The configurable filter.  Every option is independent; the default
/// admits everything.
///
/// Malformed values are never an error.  An excluded block on a day with no
/// classes, for example, simply never matches.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SectionFilter {
    /// Weekly blocks the student is unavailable.  A section with any meeting
    /// overlapping any block is rejected.
    pub excluded_times: Vec<ClassTime>,

    /// Reserved: blocks the student would prefer classes to fall inside.
    /// Accepted and stored but not applied yet; the planner logs a warning
    /// when it is non-empty.
    // TODO: apply included_times as a mask once "inside" is defined for
    // sections with several meetings (all meetings vs. any meeting).
    pub included_times: Vec<ClassTime>,

    /// Reject sections that need an add code to register.
    pub reject_add_code: bool,

    /// Reject sections whose enrollment has reached the cap.
    pub reject_full: bool,

    /// Reject fully online sections.
    pub reject_online: bool,
}

impl SectionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exclude(mut self, block: ClassTime) -> Self {
        self.excluded_times.push(block);
        self
    }

    pub fn include(mut self, block: ClassTime) -> Self {
        self.included_times.push(block);
        self
    }

    pub fn reject_add_code(mut self, on: bool) -> Self {
        self.reject_add_code = on;
        self
    }

    pub fn reject_full(mut self, on: bool) -> Self {
        self.reject_full = on;
        self
    }

    pub fn reject_online(mut self, on: bool) -> Self {
        self.reject_online = on;
        self
    }

    /// `true` if any meeting of `section` overlaps any excluded block.
    pub fn hits_excluded_time(&self, section: &Section) -> bool {
        section
            .times()
            .any(|t| self.excluded_times.iter().any(|&block| conflicts(t, block)))
    }
}

impl SectionPredicate for SectionFilter {
    /// Checks run in a fixed order and stop at the first failure: excluded
    /// times, add code, full, online.
    fn feasible(&self, section: &Section) -> bool {
        if self.hits_excluded_time(section) {
            return false;
        }
        if self.reject_add_code && section.add_code_required() {
            return false;
        }
        if self.reject_full && section.is_full() {
            return false;
        }
        if self.reject_online && section.is_online() {
            return false;
        }
        true
    }

    fn ignored_options(&self) -> Vec<&'static str> {
        if self.included_times.is_empty() {
            Vec::new()
        } else {
            vec!["included_times"]
        }
    }
}

impl<P: SectionPredicate + ?Sized> SectionPredicate for &P {
    #[inline]
    fn feasible(&self, section: &Section) -> bool {
        (**self).feasible(section)
    }

    fn ignored_options(&self) -> Vec<&'static str> {
        (**self).ignored_options()
    }
}
