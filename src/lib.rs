//! A small interactive course planner.
//!
//! Courses and their prerequisites are read from a comma-separated file into a
//! [`Catalog`]. The [`Shell`] drives a numeric menu over that catalog: load a
//! file, list every course in identifier order, or show one course with its
//! prerequisites.
//!
//! The file format is one course per line, `id,name[,prereq...]`, with no
//! quoting. Prerequisites that are never defined on a line of their own still
//! get an entry in the catalog, with an empty name.

pub mod catalog;
pub mod course;
pub mod input;
pub mod loader;
pub mod printer;
mod shell;

pub use catalog::Catalog;
pub use course::Course;
pub use input::{EditorInput, LineSource, ReaderInput};
pub use loader::{LoadError, load_catalog};
/// The menu loop and its session state.
///
/// See [`Shell`] for an example of driving it from a script.
pub use shell::{Choice, Shell, ShellState};
