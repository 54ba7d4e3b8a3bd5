//! CSV catalog loader.
//!
//! # CSV format
//!
//! One row per meeting of a section.  Rows for the same course share
//! `course_code`, `credit`, and `title`; rows for the same section share
//! every non-meeting column and differ only in `days`, `time`, `building`,
//! and `room`.
//!
//! ```csv
//! course_code,credit,title,section_code,parent_code,registration_id,kind,format,days,time,building,room,instructors,enroll_max,enroll_count,add_code
//! CSE 123,4,Intro to Programming III,A,,12345,lecture,in_person,MWF,10:30 AM - 11:20 AM,CSE2,G20,Ada Lovelace,300,280,false
//! CSE 123,4,Intro to Programming III,AA,A,12346,quiz,in_person,Th,9:30 AM - 10:20 AM,MGH,241,,30,30,false
//! ```
//!
//! | Column         | Meaning                                                |
//! |----------------|--------------------------------------------------------|
//! | `section_code` | `A` → primary; `AA` → sub-offering of primary `A`      |
//! | `parent_code`  | empty for primaries; for subs, must match the prefix   |
//! | `kind`         | `lecture` (primaries), `quiz` / `laboratory` (subs)    |
//! | `format`       | `in_person`, `hybrid`, `online_sync`, `online_async`   |
//! | `days`         | concatenated tokens: `MWF`, `TTh`                      |
//! | `time`         | `start - end`; empty with empty `days` = arranged      |
//! | `instructors`  | `;`-separated names                                    |
//!
//! Courses come back in first-appearance order, primaries within a course in
//! first-appearance order, and sub-offerings within a kind group in
//! first-appearance order.  Any malformed row aborts the whole load.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use tt_core::{ClassTime, RegistrationId};

use crate::{
    CatalogError, CatalogResult, Course, LearningFormat, Location, Meeting, PrimarySection,
    Section, SectionKind,
};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct SectionRecord {
    course_code:     String,
    credit:          u8,
    title:           String,
    section_code:    String,
    parent_code:     Option<String>,
    registration_id: u32,
    kind:            String,
    format:          String,
    days:            Option<String>,
    time:            Option<String>,
    building:        Option<String>,
    room:            Option<String>,
    instructors:     Option<String>,
    enroll_max:      u32,
    enroll_count:    u32,
    add_code:        bool,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load every course in a catalog CSV file.
pub fn load_courses_csv(path: &Path) -> CatalogResult<Vec<Course>> {
    let file = std::fs::File::open(path).map_err(CatalogError::Io)?;
    load_courses_reader(file)
}

/// Like [`load_courses_csv`] but accepts any `Read` source.
pub fn load_courses_reader<R: Read>(reader: R) -> CatalogResult<Vec<Course>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut drafts: Vec<CourseDraft> = Vec::new();
    let mut by_code: HashMap<String, usize> = HashMap::new();

    for result in csv_reader.deserialize::<SectionRecord>() {
        let row = result.map_err(|e| CatalogError::Parse(e.to_string()))?;
        let idx = *by_code.entry(row.course_code.clone()).or_insert_with(|| {
            drafts.push(CourseDraft::new(&row));
            drafts.len() - 1
        });
        drafts[idx].add_row(row)?;
    }

    let courses = drafts
        .into_iter()
        .map(CourseDraft::finish)
        .collect::<CatalogResult<Vec<Course>>>()?;

    info!(
        courses  = courses.len(),
        sections = courses.iter().map(Course::section_count).sum::<usize>(),
        "catalog loaded"
    );
    Ok(courses)
}

// ── Course assembly ───────────────────────────────────────────────────────────

/// Sections collected for one course before primaries and subs are linked.
struct CourseDraft {
    code:     String,
    credit:   u8,
    title:    String,
    sections: Vec<Section>,
    index:    HashMap<String, usize>,
}

impl CourseDraft {
    fn new(first: &SectionRecord) -> Self {
        Self {
            code:     first.course_code.clone(),
            credit:   first.credit,
            title:    first.title.clone(),
            sections: Vec::new(),
            index:    HashMap::new(),
        }
    }

    fn add_row(&mut self, row: SectionRecord) -> CatalogResult<()> {
        if row.credit != self.credit {
            return Err(self.inconsistent("credit"));
        }
        if row.title != self.title {
            return Err(self.inconsistent("title"));
        }

        // Every row is validated in full, not just the first one per section.
        let section = self.new_section(&row)?;
        let meetings = parse_meetings(&row)?;
        let idx = match self.index.get(&row.section_code) {
            Some(&i) => {
                self.check_same_section(&self.sections[i], &section)?;
                i
            }
            None => {
                self.sections.push(section);
                self.index.insert(row.section_code.clone(), self.sections.len() - 1);
                self.sections.len() - 1
            }
        };
        for m in meetings {
            self.sections[idx].push_meeting(m);
        }
        Ok(())
    }

    /// Continuation rows must repeat the section's metadata unchanged.
    fn check_same_section(&self, first: &Section, row: &Section) -> CatalogResult<()> {
        let field = if first.role() != row.role() {
            "parent_code"
        } else if first.kind() != row.kind() {
            "kind"
        } else if first.format() != row.format() {
            "format"
        } else if first.registration_id() != row.registration_id() {
            "registration_id"
        } else if first.enrollment() != row.enrollment() {
            "enrollment"
        } else if first.add_code_required() != row.add_code_required() {
            "add_code"
        } else if first.instructors() != row.instructors() {
            "instructors"
        } else {
            return Ok(());
        };
        Err(CatalogError::InconsistentSection {
            course: self.code.clone(),
            code:   first.code().to_owned(),
            field,
        })
    }

    /// Build a section's metadata from one of its rows.
    fn new_section(&self, row: &SectionRecord) -> CatalogResult<Section> {
        let code = row.section_code.as_str();
        let kind = SectionKind::from_token(&row.kind)?;
        let format = LearningFormat::from_token(&row.format)?;
        let declared = row.parent_code.as_deref().filter(|p| !p.is_empty());

        let section = match classify_code(code) {
            Some(CodeShape::Primary) => {
                if declared.is_some() {
                    return Err(CatalogError::RoleMismatch { code: code.to_owned() });
                }
                if kind.is_sub_kind() {
                    return Err(CatalogError::KindMismatch { code: code.to_owned(), kind });
                }
                Section::primary(code, kind)
            }
            Some(CodeShape::Sub { parent }) => {
                if let Some(declared) = declared {
                    if declared != parent {
                        return Err(CatalogError::ParentMismatch {
                            code:     code.to_owned(),
                            declared: declared.to_owned(),
                            expected: parent.to_owned(),
                        });
                    }
                }
                if !kind.is_sub_kind() {
                    return Err(CatalogError::KindMismatch { code: code.to_owned(), kind });
                }
                Section::sub(code, parent, kind)
            }
            None => {
                return Err(CatalogError::BadSectionCode {
                    course: self.code.clone(),
                    code:   code.to_owned(),
                });
            }
        };

        let instructors = row
            .instructors
            .as_deref()
            .unwrap_or("")
            .split(';')
            .map(str::trim)
            .filter(|name| !name.is_empty());

        let mut section = section
            .with_registration_id(RegistrationId(row.registration_id))
            .with_format(format)
            .with_enrollment(row.enroll_max, row.enroll_count)
            .with_add_code_required(row.add_code);
        for name in instructors {
            section = section.with_instructor(name);
        }
        Ok(section)
    }

    /// Link every sub-offering to its primary and produce the `Course`.
    fn finish(self) -> CatalogResult<Course> {
        let (primaries, subs): (Vec<Section>, Vec<Section>) =
            self.sections.into_iter().partition(Section::is_primary);

        let mut primary_sections = primaries
            .into_iter()
            .map(PrimarySection::new)
            .collect::<CatalogResult<Vec<_>>>()?;

        for sub in subs {
            let parent = sub.parent_code().unwrap_or_default().to_owned();
            let owner = primary_sections
                .iter_mut()
                .find(|p| p.code() == parent)
                .ok_or_else(|| CatalogError::OrphanSubSection {
                    course: self.code.clone(),
                    code:   sub.code().to_owned(),
                    parent: parent.clone(),
                })?;
            owner.add_sub_section(sub)?;
        }

        debug!(course = %self.code, primaries = primary_sections.len(), "course assembled");
        Ok(Course::new(self.code, self.credit, self.title, primary_sections))
    }

    fn inconsistent(&self, field: &'static str) -> CatalogError {
        CatalogError::InconsistentCourse { course: self.code.clone(), field }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

enum CodeShape<'a> {
    Primary,
    Sub { parent: &'a str },
}

/// `A` is a primary; `AA` or `A1` is a sub-offering of `A`.
fn classify_code(code: &str) -> Option<CodeShape<'_>> {
    let bytes = code.as_bytes();
    match bytes {
        [p] if p.is_ascii_uppercase() => Some(CodeShape::Primary),
        [p, s] if p.is_ascii_uppercase() && (s.is_ascii_uppercase() || s.is_ascii_digit()) => {
            Some(CodeShape::Sub { parent: &code[..1] })
        }
        _ => None,
    }
}

fn parse_meetings(row: &SectionRecord) -> CatalogResult<Vec<Meeting>> {
    let days = row.days.as_deref().filter(|d| !d.is_empty());
    let time = row.time.as_deref().filter(|t| !t.is_empty());
    let times = match (days, time) {
        (None, None) => return Ok(Vec::new()),
        (Some(days), Some(time)) => ClassTime::expand(days, time)?,
        _ => {
            return Err(CatalogError::IncompleteMeeting { code: row.section_code.clone() });
        }
    };

    let location = row.building.as_ref().map(|building| Location {
        building: building.clone(),
        room:     row.room.clone().unwrap_or_default(),
    });
    Ok(times
        .into_iter()
        .map(|time| Meeting { time, location: location.clone() })
        .collect())
}
