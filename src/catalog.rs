use crate::course::Course;
use std::collections::HashMap;

/// In-memory mapping from course identifier to [`Course`].
///
/// Storage is unordered; use [`Catalog::sorted_ids`] when a stable order is needed.
/// Every identifier that appears in some course's prerequisite list also has an
/// entry of its own, possibly a placeholder with an empty name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    courses: HashMap<String, Course>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Course> {
        self.courses.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.courses.contains_key(id)
    }

    /// Create the course if absent, otherwise overwrite its identifier and name.
    ///
    /// Prerequisites already recorded for the course are kept, so a course defined
    /// on several lines accumulates prerequisites from all of them.
    pub fn define(&mut self, id: &str, name: &str) -> &mut Course {
        let course = self
            .courses
            .entry(id.to_string())
            .or_insert_with(|| Course::placeholder(id));
        course.id = id.to_string();
        course.name = name.to_string();
        course
    }

    /// Append `prereq_id` to the prerequisites of `course_id`.
    ///
    /// `course_id` is created as a placeholder if it is not known yet. The
    /// prerequisite itself gets a placeholder entry if it is not known yet.
    pub fn add_prerequisite(&mut self, course_id: &str, prereq_id: &str) {
        self.courses
            .entry(course_id.to_string())
            .or_insert_with(|| Course::placeholder(course_id))
            .prerequisites
            .push(prereq_id.to_string());
        self.insert_placeholder(prereq_id);
    }

    /// Insert an empty-named record for `id` unless one already exists.
    ///
    /// Returns `true` when a new placeholder was inserted.
    pub fn insert_placeholder(&mut self, id: &str) -> bool {
        if self.courses.contains_key(id) {
            return false;
        }
        tracing::trace!(course = id, "inserting placeholder course");
        self.courses.insert(id.to_string(), Course::placeholder(id));
        true
    }

    /// All identifiers in lexicographic (code point) order.
    pub fn sorted_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.courses.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn iter(&self) -> impl Iterator<Item = &Course> {
        self.courses.values()
    }
}
