//! Course model: the primary sections offered for one catalog course.

use crate::{CatalogError, CatalogResult, PrimarySection};

/// One catalog course, e.g. `CSE 123`.
///
/// Owns its primary sections in catalog order; that order is the order the
/// planner tries them in.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Course {
    code:             String,
    credit:           u8,
    title:            String,
    primary_sections: Vec<PrimarySection>,
}

impl Course {
    pub fn new(
        code:             impl Into<String>,
        credit:           u8,
        title:            impl Into<String>,
        primary_sections: Vec<PrimarySection>,
    ) -> Self {
        Self {
            code: code.into(),
            credit,
            title: title.into(),
            primary_sections,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn credit(&self) -> u8 {
        self.credit
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn primary_sections(&self) -> &[PrimarySection] {
        &self.primary_sections
    }

    pub fn find_primary(&self, code: &str) -> Option<&PrimarySection> {
        self.primary_sections.iter().find(|p| p.code() == code)
    }

    /// Primaries plus all of their sub-offerings.
    pub fn section_count(&self) -> usize {
        self.primary_sections
            .iter()
            .map(|p| 1 + p.sub_section_count())
            .sum()
    }
}

/// Pick the requested courses out of a loaded catalog, in request order.
///
/// Fails on the first code that is not in `catalog`.  A code requested twice
/// appears twice.
pub fn select_courses<S: AsRef<str>>(catalog: &[Course], codes: &[S]) -> CatalogResult<Vec<Course>> {
    codes
        .iter()
        .map(|code| {
            let code = code.as_ref();
            catalog
                .iter()
                .find(|c| c.code == code)
                .cloned()
                .ok_or_else(|| CatalogError::UnknownCourse(code.to_owned()))
        })
        .collect()
}
