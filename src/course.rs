/// A single course as described by one line of a catalog file.
///
/// A course that was only ever referenced as a prerequisite is a placeholder:
/// its `name` is empty and its prerequisite list is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Course {
    /// Unique course identifier, e.g. `CSCI100`.
    pub id: String,
    /// Display name. Empty for placeholders.
    pub name: String,
    /// Prerequisite identifiers in file order. Duplicates are kept.
    pub prerequisites: Vec<String>,
}

impl Course {
    /// Create a course with no prerequisites.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            prerequisites: Vec::new(),
        }
    }

    /// Create a placeholder record for an identifier seen only as a prerequisite.
    pub fn placeholder(id: impl Into<String>) -> Self {
        Self::new(id, String::new())
    }

    pub fn has_prerequisites(&self) -> bool {
        !self.prerequisites.is_empty()
    }
}
