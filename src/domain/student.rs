use crate::domain::error::{PrerequisiteError, RegistrationError};
use crate::domain::model::Course;
use crate::domain::ports::Student;

/// A student holding an ordered list of enrolled courses.
///
/// Equality and hashing are structural over name, id and courses, with the
/// course order feeding the hash. Mutating the course list of a student that
/// already sits in a `HashSet`/`HashMap` leaves it under a stale hash.
///
/// There is no `Ord` impl: ordering is by id alone, which would disagree with
/// the structural `Eq`. Use [`Student::compare_to`] or [`by_id`](crate::domain::ports::by_id).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegisteredStudent {
    id: i32,
    name: String,
    courses: Vec<Course>,
}

impl RegisteredStudent {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            courses: Vec::new(),
        }
    }
}

impl Student for RegisteredStudent {
    fn id(&self) -> i32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn courses(&self) -> &[Course] {
        &self.courses
    }

    // No duplicate check: adding an enrolled course again stores it twice.
    fn add_course(&mut self, course: Course) -> Result<(), RegistrationError> {
        if !course.is_offered() {
            return Err(RegistrationError::not_offered());
        }

        if let Some(prerequisite) = course.prerequisite() {
            if !self.courses.contains(prerequisite) {
                return Err(PrerequisiteError::missing(course.name()).into());
            }
        }

        self.courses.push(course);
        Ok(())
    }

    fn drop_course(&mut self, course: &Course) {
        if let Some(index) = self.courses.iter().position(|c| c == course) {
            self.courses.remove(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::by_id;
    use std::cmp::Ordering;

    fn cs101() -> Course {
        Course::new("CS101", true)
    }

    fn cs201() -> Course {
        Course::with_prerequisite("CS201", cs101(), true)
    }

    #[test]
    fn test_not_offered_fails_regardless_of_prerequisite() {
        let mut student = RegisteredStudent::new(1, "Ada");
        student.add_course(cs101()).unwrap();

        let closed = Course::new("CS150", false);
        let closed_with_met_prereq = Course::with_prerequisite("CS250", cs101(), false);
        let closed_with_missing_prereq =
            Course::with_prerequisite("CS350", Course::new("CS300", true), false);

        for course in [closed, closed_with_met_prereq, closed_with_missing_prereq] {
            let err = student.add_course(course).unwrap_err();
            assert!(matches!(err, RegistrationError::NotOffered { .. }));
            assert!(!err.is_prerequisite());
        }
        assert_eq!(student.courses(), &[cs101()]);
    }

    #[test]
    fn test_offered_without_prerequisite_is_added() {
        let mut student = RegisteredStudent::new(1, "Ada");
        student.add_course(cs101()).unwrap();

        assert!(student.is_enrolled_in(&cs101()));
        assert_eq!(student.courses().len(), 1);
    }

    #[test]
    fn test_missing_prerequisite_is_rejected_without_mutation() {
        let mut student = RegisteredStudent::new(1, "Ada");

        let err = student.add_course(cs201()).unwrap_err();
        assert!(err.is_prerequisite());
        assert_eq!(err.message(), Some("Missing prerequisite CS201"));
        assert!(student.courses().is_empty());
    }

    #[test]
    fn test_prerequisite_present_allows_add() {
        let mut student = RegisteredStudent::new(1, "Ada");
        student.add_course(cs101()).unwrap();
        student.add_course(cs201()).unwrap();

        assert_eq!(student.courses(), &[cs101(), cs201()]);
    }

    #[test]
    fn test_prerequisite_matched_by_name() {
        let mut student = RegisteredStudent::new(1, "Ada");
        // A different value with the same name satisfies the prerequisite.
        let mut other_cs101 = Course::new("CS101", true);
        other_cs101.set_offered(false);
        student.add_course(cs101()).unwrap();

        let course = Course::with_prerequisite("CS201", other_cs101, true);
        assert!(student.add_course(course).is_ok());
    }

    #[test]
    fn test_duplicate_add_is_kept() {
        let mut student = RegisteredStudent::new(1, "Ada");
        student.add_course(cs101()).unwrap();
        student.add_course(cs101()).unwrap();

        assert_eq!(student.courses().len(), 2);
    }

    #[test]
    fn test_drop_removes_one_occurrence() {
        let mut student = RegisteredStudent::new(1, "Ada");
        student.add_course(cs101()).unwrap();
        student.add_course(cs101()).unwrap();
        student.add_course(cs201()).unwrap();

        student.drop_course(&Course::new("CS101", false));
        assert_eq!(student.courses(), &[cs101(), cs201()]);
    }

    #[test]
    fn test_drop_absent_is_noop() {
        let mut student = RegisteredStudent::new(1, "Ada");
        student.add_course(cs101()).unwrap();

        student.drop_course(&Course::new("MATH100", true));
        assert_eq!(student.courses(), &[cs101()]);
    }

    #[test]
    fn test_compare_to_uses_id_only() {
        let mut a = RegisteredStudent::new(7, "Ada");
        let b = RegisteredStudent::new(7, "Grace");
        a.add_course(cs101()).unwrap();

        assert_eq!(a.compare_to(&b), Ordering::Equal);
        assert_ne!(a, b);
        assert_eq!(
            RegisteredStudent::new(1, "Z").compare_to(&RegisteredStudent::new(2, "A")),
            Ordering::Less
        );
    }

    #[test]
    fn test_sort_by_id() {
        let mut students = vec![
            RegisteredStudent::new(3, "Cy"),
            RegisteredStudent::new(1, "Ada"),
            RegisteredStudent::new(2, "Bo"),
        ];
        students.sort_by(|a, b| by_id(a, b));

        let ids: Vec<i32> = students.iter().map(Student::id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_structural_equality_is_order_sensitive() {
        let math = Course::new("MATH100", true);
        let mut a = RegisteredStudent::new(1, "Ada");
        let mut b = RegisteredStudent::new(1, "Ada");
        a.add_course(cs101()).unwrap();
        a.add_course(math.clone()).unwrap();
        b.add_course(math).unwrap();
        b.add_course(cs101()).unwrap();

        assert_ne!(a, b);
    }

    #[test]
    fn test_prerequisite_order_walkthrough() {
        let mut student = RegisteredStudent::new(42, "Lin");

        let err = student.add_course(cs201()).unwrap_err();
        assert!(matches!(err, RegistrationError::Prerequisite(_)));

        student.add_course(cs101()).unwrap();
        student.add_course(cs201()).unwrap();
        assert!(student.is_enrolled_in(&cs101()));
        assert!(student.is_enrolled_in(&cs201()));
    }
}
