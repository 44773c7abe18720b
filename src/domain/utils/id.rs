use serde::Serialize;
use std::fmt;
use std::marker::PhantomData;

/// String identifier tagged with the kind of entity it names, so a `TaskId`
/// can never be passed where a `ProcessorId` is expected.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Serialize)]
#[serde(transparent)]
pub struct Id<T> {
    pub id: String,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    pub fn new(id: impl Into<String>) -> Self {
        Id { id: id.into(), _marker: PhantomData }
    }

    pub fn as_str(&self) -> &str {
        &self.id
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl<T> From<Id<T>> for String {
    fn from(id_wrapper: Id<T>) -> Self {
        id_wrapper.id
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let full_name = std::any::type_name::<T>();
        let clean_name = full_name.split("::").last().unwrap_or(full_name);
        let display_name = clean_name.replace("Tag", "Id");

        write!(f, "{}: {:?}", display_name, self.id)
    }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub struct TaskTag;
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub struct ProcessorTag;

pub type TaskId = Id<TaskTag>;
pub type ProcessorId = Id<ProcessorTag>;

impl TaskId {
    /// Id of the `index`-th loaded task, counting from 1: "T1", "T2", ...
    pub fn from_load_index(index: usize) -> Self {
        Id::new(format!("T{}", index))
    }
}

impl ProcessorId {
    /// Id of the `index`-th processor of the pool, counting from 1: "P1", "P2", ...
    pub fn from_pool_index(index: usize) -> Self {
        Id::new(format!("P{}", index))
    }
}
