use slotmap::{SlotMap, new_key_type};
use std::collections::HashMap;

use crate::domain::employee::employee::Employee;
use crate::domain::utils::id::EmployeeName;
use crate::error::{Error, Result};

new_key_type! {
    /// Internal key of an employee inside a [`Roster`]. Written into vacancy blocks.
    pub struct EmployeeId;
}

/// The ordered list of employees taking part in one scheduling run.
///
/// Declaration order is kept because it breaks ties during selection.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    /// Employee storage.
    employees: SlotMap<EmployeeId, Employee>,

    /// Declaration order of the employees.
    order: Vec<EmployeeId>,

    /// Lookup of the internal key using the employee name.
    name_index: HashMap<EmployeeName, EmployeeId>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an employee at the end of the roster.
    ///
    /// # Returns
    /// The internal key, or a `ConfigurationError` if the name is already taken.
    pub fn add(&mut self, employee: Employee) -> Result<EmployeeId> {
        if self.name_index.contains_key(employee.name()) {
            return Err(Error::ConfigurationError(format!("employee '{}' is declared twice", employee.name())));
        }

        let name = employee.name().clone();
        let key = self.employees.insert(employee);
        self.order.push(key);
        self.name_index.insert(name, key);

        Ok(key)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn get(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: EmployeeId) -> Option<&mut Employee> {
        self.employees.get_mut(id)
    }

    pub fn get_by_name(&self, name: &str) -> Option<&Employee> {
        self.id_of(name).and_then(|id| self.employees.get(id))
    }

    pub fn id_of(&self, name: &str) -> Option<EmployeeId> {
        self.name_index.get(&EmployeeName::new(name)).copied()
    }

    pub fn name_of(&self, id: EmployeeId) -> Option<&EmployeeName> {
        self.employees.get(id).map(Employee::name)
    }

    /// Keys in declaration order.
    pub fn ids(&self) -> &[EmployeeId] {
        &self.order
    }

    /// Employees in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (EmployeeId, &Employee)> {
        self.order.iter().map(|id| (*id, &self.employees[*id]))
    }

    /// Position of the employee in declaration order.
    pub fn position(&self, id: EmployeeId) -> Option<usize> {
        self.order.iter().position(|key| *key == id)
    }

    pub fn total_hours_scheduled(&self) -> u32 {
        self.employees.values().map(Employee::hours_scheduled).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::employee::employee::ShiftConstraints;

    #[test]
    fn keeps_declaration_order_and_name_index() {
        let mut roster = Roster::new();
        let john = roster.add(Employee::new("John", "john@mail.com", ShiftConstraints::default())).unwrap();
        let kate = roster.add(Employee::new("Kate", "kate@mail.com", ShiftConstraints::default())).unwrap();

        assert_eq!(roster.ids(), &[john, kate]);
        assert_eq!(roster.id_of("Kate"), Some(kate));
        assert_eq!(roster.name_of(john).map(|n| n.as_str()), Some("John"));
        assert_eq!(roster.position(kate), Some(1));
        assert!(roster.get_by_name("Nobody").is_none());
    }

    #[test]
    fn rejects_duplicate_names() {
        let mut roster = Roster::new();
        roster.add(Employee::new("EMPTY", "a@mail.com", ShiftConstraints::default())).unwrap();

        let duplicate = roster.add(Employee::new("EMPTY", "b@mail.com", ShiftConstraints::default()));
        assert!(matches!(duplicate, Err(Error::ConfigurationError(_))));
        assert_eq!(roster.len(), 1);
    }
}
