//! Validated action catalog with name and role indexes.

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::core::role::{Role, RoleMap};

use super::action::{ActionDef, EffectSpec};

/// Stable identifier for an action within one catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActionId(u32);

impl ActionId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        ActionId(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Rejections raised while validating a catalog.
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("catalog has no actions")]
    Empty,

    #[error("duplicate action name '{name}'")]
    DuplicateName { name: String },

    #[error("action '{name}' has difficulty {difficulty} outside 0.0..=0.8")]
    DifficultyOutOfRange { name: String, difficulty: f64 },

    #[error("action '{name}' charges a non-positive amount to the {pool} pool")]
    NonPositiveCost { name: String, pool: Role },

    #[error("action '{name}' queues a zero-unit build")]
    ZeroUnits { name: String },

    #[error("role {role} has no actions")]
    RoleWithoutActions { role: Role },
}

/// Immutable, validated set of actions for one scenario.
///
/// Validation happens once at construction; afterwards every lookup is
/// infallible or a plain `Option`. A catalog must give every role at
/// least one action, otherwise the turn cycle would deadlock on the
/// first role with nothing to submit.
#[derive(Debug, Clone)]
pub struct Catalog {
    actions: Vec<ActionDef>,
    by_name: FxHashMap<String, ActionId>,
    by_role: RoleMap<Vec<ActionId>>,
}

impl Catalog {
    /// Validate and index a set of actions.
    pub fn new(actions: Vec<ActionDef>) -> Result<Self, CatalogError> {
        if actions.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut by_name = FxHashMap::default();
        let mut by_role: RoleMap<Vec<ActionId>> = RoleMap::with_default();

        for (index, action) in actions.iter().enumerate() {
            let id = ActionId::new(index as u32);

            if by_name.insert(action.name.clone(), id).is_some() {
                return Err(CatalogError::DuplicateName {
                    name: action.name.clone(),
                });
            }
            if !(0.0..=0.8).contains(&action.difficulty) {
                return Err(CatalogError::DifficultyOutOfRange {
                    name: action.name.clone(),
                    difficulty: action.difficulty,
                });
            }
            for (pool, amount) in action.cost.iter() {
                if amount <= 0.0 {
                    return Err(CatalogError::NonPositiveCost {
                        name: action.name.clone(),
                        pool,
                    });
                }
            }
            for effect in &action.effects {
                if let EffectSpec::Build { units: 0, .. } = effect {
                    return Err(CatalogError::ZeroUnits {
                        name: action.name.clone(),
                    });
                }
            }

            by_role[action.role].push(id);
        }

        for role in Role::ALL {
            if by_role[role].is_empty() {
                return Err(CatalogError::RoleWithoutActions { role });
            }
        }

        Ok(Self {
            actions,
            by_name,
            by_role,
        })
    }

    /// Look up by id. Panics if `id` came from a different catalog.
    #[must_use]
    pub fn get(&self, id: ActionId) -> &ActionDef {
        &self.actions[id.raw() as usize]
    }

    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&ActionDef> {
        self.id_of(name).map(|id| self.get(id))
    }

    #[must_use]
    pub fn id_of(&self, name: &str) -> Option<ActionId> {
        self.by_name.get(name).copied()
    }

    /// Ids of the actions `role` may submit, in catalog order.
    pub fn for_role(&self, role: Role) -> impl Iterator<Item = ActionId> + '_ {
        self.by_role[role].iter().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ActionId, &ActionDef)> + '_ {
        self.actions
            .iter()
            .enumerate()
            .map(|(index, action)| (ActionId::new(index as u32), action))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
