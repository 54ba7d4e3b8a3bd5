//! `tt-planner` — timetable enumeration.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`filter`]    | `SectionPredicate`, `SectionFilter`, `AcceptAll`, `Both` |
//! | [`timetable`] | `ScheduledCourse`, `Timetable` (the accumulator)         |
//! | [`observer`]  | `PlanObserver`, `NoopObserver`, `TimetableCollector`     |
//! | [`planner`]   | `Planner`, [`build_all_timetables`]                      |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use tt_catalog::{load_courses_csv, select_courses};
//! use tt_planner::{build_all_timetables, SectionFilter};
//!
//! let catalog = load_courses_csv(path)?;
//! let courses = select_courses(&catalog, &["CSE 123", "PHYS 121"])?;
//! let filter = SectionFilter::new().reject_full(true);
//! for timetable in build_all_timetables(&courses, &filter) {
//!     // render timetable.scheduled()
//! }
//! ```
//!
//! # Cargo features
//!
//! | Feature | Effect                                                        |
//! |---------|---------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on `SectionFilter` and `Timetable`. |

pub mod filter;
pub mod observer;
pub mod planner;
pub mod timetable;


pub use filter::{AcceptAll, Both, SectionFilter, SectionPredicate, SectionPredicateExt};
pub use observer::{NoopObserver, PlanObserver, TimetableCollector};
pub use planner::{build_all_timetables, Planner};
pub use timetable::{ScheduledCourse, Timetable};
