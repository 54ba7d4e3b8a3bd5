//! `tt-catalog` — section and course model, plus CSV ingestion.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`section`] | `Section`, `SectionRole`, `SectionKind`, `PrimarySection`, … |
//! | [`course`]  | `Course`, `select_courses`                                  |
//! | [`loader`]  | `load_courses_csv`, `load_courses_reader`                   |
//! | [`error`]   | `CatalogError`, `CatalogResult<T>`                          |
//!
//! Everything the planner consumes is built here.  Kind and role are
//! resolved once at ingestion and never re-derived from section codes.

pub mod course;
pub mod error;
pub mod loader;
pub mod section;


pub use course::{select_courses, Course};
pub use error::{CatalogError, CatalogResult};
pub use loader::{load_courses_csv, load_courses_reader};
pub use section::{
    Enrollment, LearningFormat, Location, Meeting, PrimarySection, Section, SectionKind,
    SectionRole,
};
