use serde::Serialize;
use std::fmt;
use std::marker::PhantomData;

/// A string identifier tagged with the kind of entity it names, so that an
/// employee name can never be passed where a restaurant name is expected.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Serialize)]
#[serde(transparent, bound = "")]
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
        let display_name = clean_name.replace("Tag", "Name");

        write!(f, "{}: {:?}", display_name, self.id)
    }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub struct EmployeeTag;
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub struct RestaurantTag;

pub type EmployeeName = Id<EmployeeTag>;
pub type RestaurantName = Id<RestaurantTag>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_names_the_entity_kind() {
        let name = EmployeeName::new("Kate");
        assert_eq!(format!("{:?}", name), "EmployeeName: \"Kate\"");
        assert_eq!(name.to_string(), "Kate");
    }

    #[test]
    fn serializes_as_plain_string() {
        let name = RestaurantName::new("Bar Mleczny Apis");
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"Bar Mleczny Apis\"");
    }
}
