//! Pre-built datasets for exercising grouping and join operators.

use serde::{Deserialize, Serialize};

/// A department in the sample company.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Department {
    pub id: u32,
    pub name: String,
}

/// An employee belonging to a [`Department`] by `department_id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Employee {
    pub id: u32,
    pub name: String,
    pub department_id: u32,
}

/// A customer, joinable with [`Order`] on `id == person_id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Order {
    pub person_id: u32,
    pub product: String,
}

/// Five departments; `Sales` (id 4) has no employees in [`employees`].
///
/// # Example
///
/// ```
/// use sequery::testing::departments;
///
/// assert_eq!(departments().len(), 5);
/// ```
#[must_use]
pub fn departments() -> Vec<Department> {
    [(1, "Engineering"), (2, "HR"), (3, "Marketing"), (4, "Sales"), (5, "IT")]
        .into_iter()
        .map(|(id, name)| Department {
            id,
            name: name.to_string(),
        })
        .collect()
}

/// Seven employees spread over departments 1, 2, 3 and 5.
#[must_use]
pub fn employees() -> Vec<Employee> {
    [
        (1, "John", 1),
        (2, "Alice", 1),
        (3, "Bob", 2),
        (4, "Eve", 2),
        (5, "Charlie", 1),
        (6, "Diana", 3),
        (7, "Frank", 5),
    ]
    .into_iter()
    .map(|(id, name, department_id)| Employee {
        id,
        name: name.to_string(),
        department_id,
    })
    .collect()
}

/// Alice (1) and Bob (2).
#[must_use]
pub fn people() -> Vec<Person> {
    vec![
        Person {
            id: 1,
            name: "Alice".to_string(),
        },
        Person {
            id: 2,
            name: "Bob".to_string(),
        },
    ]
}

/// Two orders for Alice, one for Bob.
#[must_use]
pub fn orders() -> Vec<Order> {
    [(1, "Laptop"), (1, "Mouse"), (2, "Keyboard")]
        .into_iter()
        .map(|(person_id, product)| Order {
            person_id,
            product: product.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_employee_has_a_department() {
        let ids: Vec<u32> = departments().iter().map(|d| d.id).collect();
        assert!(employees().iter().all(|e| ids.contains(&e.department_id)));
    }
}
