//! Stakeholder roles and per-role data storage.
//!
//! ## Role
//!
//! The five acting stakeholders, in fixed cyclic turn order.
//!
//! ## RoleMap
//!
//! Per-role data storage backed by a fixed array for O(1) access.
//! Supports iteration and indexing by `Role`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// An acting stakeholder in the simulation.
///
/// Roles take turns in the fixed order `Neighborhoods -> Business ->
/// Medical -> Shelters -> University`, wrapping back to the first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Neighborhoods,
    Business,
    Medical,
    Shelters,
    University,
}

impl Role {
    /// All roles in turn order.
    pub const ALL: [Role; 5] = [
        Role::Neighborhoods,
        Role::Business,
        Role::Medical,
        Role::Shelters,
        Role::University,
    ];

    /// Number of acting roles.
    pub const COUNT: usize = Self::ALL.len();

    /// Position of this role in the turn order (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The role that acts after this one, wrapping at the end of the cycle.
    ///
    /// ```
    /// use citywalls::core::Role;
    ///
    /// assert_eq!(Role::Neighborhoods.next(), Role::Business);
    /// assert_eq!(Role::University.next(), Role::Neighborhoods);
    /// ```
    #[must_use]
    pub const fn next(self) -> Role {
        Self::ALL[(self.index() + 1) % Self::COUNT]
    }

    /// Name of this role's budget pool in textual diffs and reports.
    #[must_use]
    pub const fn budget_label(self) -> &'static str {
        match self {
            Role::Neighborhoods => "neighborhood_budget",
            Role::Business => "business_budget",
            Role::Medical => "medical_budget",
            Role::Shelters => "shelter_budget",
            Role::University => "university_budget",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Role::Neighborhoods => "Neighborhoods",
            Role::Business => "Business",
            Role::Medical => "Medical",
            Role::Shelters => "Shelters",
            Role::University => "University",
        };
        write!(f, "{name}")
    }
}

/// Per-role data storage with O(1) access.
///
/// Backed by a fixed array with one entry per role.
/// Use `RoleMap::new()` to create with a factory function,
/// or `RoleMap::with_value()` to initialize all entries to the same value.
///
/// ## Example
///
/// ```
/// use citywalls::core::{Role, RoleMap};
///
/// let mut budgets: RoleMap<f64> = RoleMap::with_value(100.0);
///
/// assert_eq!(budgets[Role::Medical], 100.0);
///
/// budgets[Role::Medical] = 40.0;
/// assert_eq!(budgets[Role::Medical], 40.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoleMap<T> {
    data: [T; Role::COUNT],
}

impl<T> RoleMap<T> {
    /// Create a new RoleMap with values from a factory function.
    ///
    /// The factory receives the `Role` for each entry.
    pub fn new(factory: impl Fn(Role) -> T) -> Self {
        Self {
            data: std::array::from_fn(|i| factory(Role::ALL[i])),
        }
    }

    /// Create a new RoleMap with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a new RoleMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a role's data.
    #[must_use]
    pub fn get(&self, role: Role) -> &T {
        &self.data[role.index()]
    }

    /// Get a mutable reference to a role's data.
    pub fn get_mut(&mut self, role: Role) -> &mut T {
        &mut self.data[role.index()]
    }

    /// Iterate over (Role, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, &T)> {
        Role::ALL.iter().map(move |&r| (r, &self.data[r.index()]))
    }

    /// Iterate over values in turn order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<Role> for RoleMap<T> {
    type Output = T;

    fn index(&self, role: Role) -> &Self::Output {
        self.get(role)
    }
}

impl<T> IndexMut<Role> for RoleMap<T> {
    fn index_mut(&mut self, role: Role) -> &mut Self::Output {
        self.get_mut(role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_order() {
        assert_eq!(Role::ALL.len(), 5);
        assert_eq!(Role::Neighborhoods.index(), 0);
        assert_eq!(Role::University.index(), 4);
    }

    #[test]
    fn test_role_next_cycles() {
        assert_eq!(Role::Neighborhoods.next(), Role::Business);
        assert_eq!(Role::Business.next(), Role::Medical);
        assert_eq!(Role::Medical.next(), Role::Shelters);
        assert_eq!(Role::Shelters.next(), Role::University);
        assert_eq!(Role::University.next(), Role::Neighborhoods);
    }

    #[test]
    fn test_role_full_cycle_returns_to_start() {
        let mut role = Role::Neighborhoods;
        for _ in 0..Role::COUNT {
            role = role.next();
        }
        assert_eq!(role, Role::Neighborhoods);
    }

    #[test]
    fn test_role_display() {
        assert_eq!(format!("{}", Role::Shelters), "Shelters");
        assert_eq!(format!("{}", Role::Neighborhoods), "Neighborhoods");
    }

    #[test]
    fn test_budget_labels() {
        assert_eq!(Role::Shelters.budget_label(), "shelter_budget");
        assert_eq!(Role::Neighborhoods.budget_label(), "neighborhood_budget");
        assert_eq!(Role::University.budget_label(), "university_budget");
    }

    #[test]
    fn test_role_map_new() {
        let map: RoleMap<usize> = RoleMap::new(|r| r.index() * 10);

        assert_eq!(map[Role::Neighborhoods], 0);
        assert_eq!(map[Role::Business], 10);
        assert_eq!(map[Role::University], 40);
    }

    #[test]
    fn test_role_map_with_value() {
        let map: RoleMap<f64> = RoleMap::with_value(750.0);

        for (_, value) in map.iter() {
            assert_eq!(*value, 750.0);
        }
    }

    #[test]
    fn test_role_map_mutation() {
        let mut map: RoleMap<f64> = RoleMap::with_value(0.0);

        map[Role::Medical] = 900.0;
        map[Role::Shelters] += 50.0;

        assert_eq!(map[Role::Medical], 900.0);
        assert_eq!(map[Role::Shelters], 50.0);
        assert_eq!(map[Role::Business], 0.0);
    }

    #[test]
    fn test_role_map_iter_order() {
        let map: RoleMap<usize> = RoleMap::new(Role::index);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs.len(), 5);
        assert_eq!(pairs[0], (Role::Neighborhoods, &0));
        assert_eq!(pairs[4], (Role::University, &4));
    }

    #[test]
    fn test_role_map_serialization() {
        let map: RoleMap<f64> = RoleMap::new(|r| r.index() as f64);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: RoleMap<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
