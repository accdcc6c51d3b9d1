pub mod allocation;
pub mod arrays;
pub mod formatting;
pub mod functions;
pub mod maps;
pub mod structs;

use crate::domain::model::Topic;
use crate::domain::ports::Lesson;

/// Static lesson registry; every menu topic has exactly one runner.
pub fn lesson_for(topic: Topic) -> &'static dyn Lesson {
    match topic {
        Topic::ArraysAndVectors => &arrays::ArraysLesson,
        Topic::Maps => &maps::MapsLesson,
        Topic::Structs => &structs::StructsLesson,
        Topic::ConstructingValues => &allocation::AllocationLesson,
    }
}
