//! Section model: one value type for every offering, plus the primary wrapper
//! that owns its sub-offerings.
//!
//! # Roles
//!
//! A catalog offering is either a *primary* (the lecture a student must pick
//! one of) or a *sub-offering* (a quiz or lab hanging off exactly one
//! primary).  Both share the same shape, so they share the same type:
//! [`Section`] carries a [`SectionRole`] instead of living in two parallel
//! hierarchies.  The role and [`SectionKind`] are resolved once, at
//! ingestion; nothing downstream re-derives them from the code string.
//!
//! `Section` is immutable once built.  Construct with [`Section::primary`] or
//! [`Section::sub`] and chain the `with_*` methods.

use std::collections::BTreeMap;

use tt_core::{ClassTime, RegistrationId};

use crate::{CatalogError, CatalogResult};

// ── SectionKind ───────────────────────────────────────────────────────────────

/// What kind of meeting a section is.
///
/// The declaration order is the iteration order of a primary's sub-offering
/// groups: quizzes before labs.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SectionKind {
    Lecture,
    Quiz,
    Laboratory,
}

impl SectionKind {
    pub fn from_token(token: &str) -> CatalogResult<SectionKind> {
        match token.trim() {
            "lecture"    => Ok(SectionKind::Lecture),
            "quiz"       => Ok(SectionKind::Quiz),
            "laboratory" => Ok(SectionKind::Laboratory),
            other        => Err(CatalogError::UnknownKind(other.to_owned())),
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            SectionKind::Lecture    => "lecture",
            SectionKind::Quiz       => "quiz",
            SectionKind::Laboratory => "laboratory",
        }
    }

    /// `true` for kinds that may only appear as sub-offerings.
    #[inline]
    pub fn is_sub_kind(self) -> bool {
        !matches!(self, SectionKind::Lecture)
    }
}

// ── LearningFormat ────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LearningFormat {
    #[default]
    InPerson,
    Hybrid,
    OnlineSync,
    OnlineAsync,
}

impl LearningFormat {
    pub fn from_token(token: &str) -> CatalogResult<LearningFormat> {
        match token.trim() {
            "in_person"    => Ok(LearningFormat::InPerson),
            "hybrid"       => Ok(LearningFormat::Hybrid),
            "online_sync"  => Ok(LearningFormat::OnlineSync),
            "online_async" => Ok(LearningFormat::OnlineAsync),
            other          => Err(CatalogError::UnknownFormat(other.to_owned())),
        }
    }

    /// `true` for the fully online variants.  Hybrid counts as in person.
    #[inline]
    pub fn is_online(self) -> bool {
        matches!(self, LearningFormat::OnlineSync | LearningFormat::OnlineAsync)
    }
}

// ── Meeting / Enrollment ──────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub building: String,
    pub room:     String,
}

/// One weekly slot of a section and where it is held, if known.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Meeting {
    pub time:     ClassTime,
    pub location: Option<Location>,
}

impl From<ClassTime> for Meeting {
    fn from(time: ClassTime) -> Meeting {
        Meeting { time, location: None }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enrollment {
    pub max:   u32,
    pub count: u32,
}

impl Enrollment {
    /// Full when the count sits exactly at the cap.  An over-enrolled
    /// section (`count > max`) is not reported as full.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.count == self.max
    }
}

// ── Section ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SectionRole {
    Primary,
    /// A sub-offering; `parent` is the code of its primary.
    Sub { parent: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Section {
    code:              String,
    role:              SectionRole,
    registration_id:   RegistrationId,
    kind:              SectionKind,
    format:            LearningFormat,
    meetings:          Vec<Meeting>,
    instructors:       Vec<String>,
    enrollment:        Enrollment,
    add_code_required: bool,
}

impl Section {
    /// A primary section with no meetings and in-person format.
    ///
    /// Enrollment starts at `0 / 0`, which reads as full until
    /// [`with_enrollment`](Self::with_enrollment) sets a cap.
    pub fn primary(code: impl Into<String>, kind: SectionKind) -> Section {
        Section::with_role(code.into(), SectionRole::Primary, kind)
    }

    /// A sub-offering of the primary coded `parent`.
    pub fn sub(code: impl Into<String>, parent: impl Into<String>, kind: SectionKind) -> Section {
        Section::with_role(code.into(), SectionRole::Sub { parent: parent.into() }, kind)
    }

    fn with_role(code: String, role: SectionRole, kind: SectionKind) -> Section {
        Section {
            code,
            role,
            registration_id:   RegistrationId(0),
            kind,
            format:            LearningFormat::default(),
            meetings:          Vec::new(),
            instructors:       Vec::new(),
            enrollment:        Enrollment::default(),
            add_code_required: false,
        }
    }

    // ── Builder methods ───────────────────────────────────────────────────

    pub fn with_registration_id(mut self, id: RegistrationId) -> Self {
        self.registration_id = id;
        self
    }

    pub fn with_format(mut self, format: LearningFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_meeting(mut self, meeting: impl Into<Meeting>) -> Self {
        self.meetings.push(meeting.into());
        self
    }

    pub fn with_meetings<I, M>(mut self, meetings: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<Meeting>,
    {
        self.meetings.extend(meetings.into_iter().map(Into::into));
        self
    }

    pub fn with_instructor(mut self, name: impl Into<String>) -> Self {
        self.instructors.push(name.into());
        self
    }

    pub fn with_enrollment(mut self, max: u32, count: u32) -> Self {
        self.enrollment = Enrollment { max, count };
        self
    }

    pub fn with_add_code_required(mut self, required: bool) -> Self {
        self.add_code_required = required;
        self
    }

    /// Ingestion appends meetings row by row while a section is still a draft.
    pub(crate) fn push_meeting(&mut self, meeting: Meeting) {
        self.meetings.push(meeting);
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn role(&self) -> &SectionRole {
        &self.role
    }

    pub fn is_primary(&self) -> bool {
        matches!(self.role, SectionRole::Primary)
    }

    /// Code of the owning primary, or `None` for a primary.
    pub fn parent_code(&self) -> Option<&str> {
        match &self.role {
            SectionRole::Primary        => None,
            SectionRole::Sub { parent } => Some(parent),
        }
    }

    pub fn registration_id(&self) -> RegistrationId {
        self.registration_id
    }

    pub fn kind(&self) -> SectionKind {
        self.kind
    }

    pub fn format(&self) -> LearningFormat {
        self.format
    }

    pub fn meetings(&self) -> &[Meeting] {
        &self.meetings
    }

    pub fn instructors(&self) -> &[String] {
        &self.instructors
    }

    pub fn enrollment(&self) -> Enrollment {
        self.enrollment
    }

    pub fn add_code_required(&self) -> bool {
        self.add_code_required
    }

    pub fn is_full(&self) -> bool {
        self.enrollment.is_full()
    }

    pub fn is_online(&self) -> bool {
        self.format.is_online()
    }

    /// Every weekly slot of this section, in meeting order.
    pub fn times(&self) -> impl Iterator<Item = ClassTime> + '_ {
        self.meetings.iter().map(|m| m.time)
    }

    /// `true` if any meeting of `self` overlaps any meeting of `other`.
    pub fn conflicts_with(&self, other: &Section) -> bool {
        self.times()
            .any(|a| other.times().any(|b| tt_core::conflicts(a, b)))
    }
}

// ── PrimarySection ────────────────────────────────────────────────────────────

/// A primary section and the sub-offerings that belong to it, grouped by kind.
///
/// A student who picks this primary must also pick exactly one section from
/// every group present.  Groups are kept in [`SectionKind`] order; sections
/// within a group keep the order they were added in.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrimarySection {
    section:    Section,
    sub_groups: BTreeMap<SectionKind, Vec<Section>>,
}

impl PrimarySection {
    /// Wrap a section whose role is [`SectionRole::Primary`] and whose kind is
    /// [`SectionKind::Lecture`].
    pub fn new(section: Section) -> CatalogResult<PrimarySection> {
        if !section.is_primary() {
            return Err(CatalogError::RoleMismatch { code: section.code });
        }
        if section.kind.is_sub_kind() {
            return Err(CatalogError::KindMismatch { code: section.code, kind: section.kind });
        }
        Ok(PrimarySection { section, sub_groups: BTreeMap::new() })
    }

    /// Attach a sub-offering.  Its parent code must be this section's code and
    /// its kind must be a sub kind.
    pub fn add_sub_section(&mut self, sub: Section) -> CatalogResult<()> {
        let declared = match &sub.role {
            SectionRole::Primary        => return Err(CatalogError::RoleMismatch { code: sub.code }),
            SectionRole::Sub { parent } => parent.clone(),
        };
        if declared != self.section.code {
            return Err(CatalogError::ParentMismatch {
                code:     sub.code,
                declared,
                expected: self.section.code.clone(),
            });
        }
        if !sub.kind.is_sub_kind() {
            return Err(CatalogError::KindMismatch { code: sub.code, kind: sub.kind });
        }
        self.sub_groups.entry(sub.kind).or_default().push(sub);
        Ok(())
    }

    /// Chain-style [`add_sub_section`](Self::add_sub_section).
    pub fn with_sub_section(mut self, sub: Section) -> CatalogResult<Self> {
        self.add_sub_section(sub)?;
        Ok(self)
    }

    /// Declare a group for `kind` without adding any sections to it.
    ///
    /// An empty declared group leaves no valid pick for that kind, so the
    /// planner discards this primary.
    pub fn declare_group(&mut self, kind: SectionKind) {
        self.sub_groups.entry(kind).or_default();
    }

    pub fn section(&self) -> &Section {
        &self.section
    }

    pub fn code(&self) -> &str {
        self.section.code()
    }

    pub fn sub_groups(&self) -> &BTreeMap<SectionKind, Vec<Section>> {
        &self.sub_groups
    }

    pub fn has_sub_groups(&self) -> bool {
        !self.sub_groups.is_empty()
    }

    /// Sub-offerings of one kind, or an empty slice if the kind is absent.
    pub fn subs_of(&self, kind: SectionKind) -> &[Section] {
        self.sub_groups.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of sub-offerings across all groups.
    pub fn sub_section_count(&self) -> usize {
        self.sub_groups.values().map(Vec::len).sum()
    }
}
