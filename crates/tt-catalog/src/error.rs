//! Ingestion error type.
//!
//! Every variant except `Io` and `Parse` describes a malformed or
//! unrecognised catalog payload.  All of them are fatal to the load: the
//! loader never hands back a partial `Course`.

use thiserror::Error;
use tt_core::CoreError;

use crate::SectionKind;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("course {course}: section code {code:?} is neither a primary (A) nor a sub-offering (AA) code")]
    BadSectionCode { course: String, code: String },

    #[error("unknown offering type {0:?}")]
    UnknownKind(String),

    #[error("unknown learning format {0:?}")]
    UnknownFormat(String),

    #[error("section {code}: kind {kind:?} does not match its role")]
    KindMismatch { code: String, kind: SectionKind },

    #[error("section {code}: wrong role for this position")]
    RoleMismatch { code: String },

    #[error("section {code} declares parent {declared:?} but belongs to {expected:?}")]
    ParentMismatch {
        code:     String,
        declared: String,
        expected: String,
    },

    #[error("course {course}: sub-offering {code} has no primary section {parent}")]
    OrphanSubSection {
        course: String,
        code:   String,
        parent: String,
    },

    #[error("course {course}: rows disagree on {field}")]
    InconsistentCourse { course: String, field: &'static str },

    #[error("course {course}: rows for section {code} disagree on {field}")]
    InconsistentSection {
        course: String,
        code:   String,
        field:  &'static str,
    },

    #[error("section {code}: meeting row has days without a time range or vice versa")]
    IncompleteMeeting { code: String },

    #[error("course {0:?} is not in the catalog")]
    UnknownCourse(String),

    #[error("time model error: {0}")]
    Time(#[from] CoreError),

    #[error("catalog parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
