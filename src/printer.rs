use crate::catalog::Catalog;
use crate::course::Course;
use std::io::{Result, Write};

/// `(identifier, name)` pairs for every course, ordered by identifier.
pub fn course_list(catalog: &Catalog) -> Vec<(&str, &str)> {
    let mut courses: Vec<&Course> = catalog.iter().collect();
    courses.sort_unstable_by(|a, b| a.id.cmp(&b.id));
    courses
        .into_iter()
        .map(|course| (course.id.as_str(), course.name.as_str()))
        .collect()
}

/// Print every course as `identifier, name`, sorted by identifier.
///
/// Placeholders are included with an empty name.
pub fn write_course_list(catalog: &Catalog, stdout: &mut dyn Write) -> Result<()> {
    writeln!(stdout)?;
    writeln!(stdout, "Course List:")?;
    for (id, name) in course_list(catalog) {
        writeln!(stdout, "{}, {}", id, name)?;
    }
    Ok(())
}

/// Print one course with its prerequisites.
///
/// Returns `false` when `id` is not in the catalog; only the not-found message
/// is printed in that case.
pub fn write_course_details(catalog: &Catalog, id: &str, stdout: &mut dyn Write) -> Result<bool> {
    let Some(course) = catalog.get(id) else {
        tracing::debug!(course = id, "course lookup missed");
        writeln!(stdout, "Error: Course not found.")?;
        return Ok(false);
    };
    write_course(course, stdout)?;
    Ok(true)
}

fn write_course(course: &Course, stdout: &mut dyn Write) -> Result<()> {
    writeln!(stdout)?;
    writeln!(stdout, "Course Number: {}", course.id)?;
    writeln!(stdout, "Course Name: {}", course.name)?;
    if course.has_prerequisites() {
        writeln!(stdout, "Prerequisites:")?;
        for prereq in &course.prerequisites {
            writeln!(stdout, " - {}", prereq)?;
        }
    } else {
        writeln!(stdout, "No prerequisites.")?;
    }
    Ok(())
}
