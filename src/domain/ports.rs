use crate::domain::error::RegistrationError;
use crate::domain::model::Course;
use std::cmp::Ordering;

pub trait Student {
    fn id(&self) -> i32;
    fn name(&self) -> &str;
    fn courses(&self) -> &[Course];

    /// Enrolls in `course`. The list is only touched once every check passes.
    fn add_course(&mut self, course: Course) -> Result<(), RegistrationError>;

    /// Removes the first course equal to `course`; absent courses are ignored.
    fn drop_course(&mut self, course: &Course);

    fn is_enrolled_in(&self, course: &Course) -> bool {
        self.courses().contains(course)
    }

    /// Orders by id only. Students sharing an id compare `Equal`.
    fn compare_to(&self, other: &dyn Student) -> Ordering {
        self.id().cmp(&other.id())
    }
}

/// Comparator for `sort_by`, ordering students by ascending id.
pub fn by_id<S: Student + ?Sized>(a: &S, b: &S) -> Ordering {
    a.id().cmp(&b.id())
}
