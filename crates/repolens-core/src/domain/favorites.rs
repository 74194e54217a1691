//! The client-side favorites set.

use std::collections::BTreeSet;

use super::profile::ProfileId;

/// Set of profile identifiers the user has marked as favorites.
///
/// Owned entirely by the client. No referential integrity with server data
/// is kept: an id may outlive the profile it points to, in which case it is
/// simply never matched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteSet {
    ids: BTreeSet<ProfileId>,
}

impl FavoriteSet {
    /// Create an empty set.
    pub const fn new() -> Self {
        Self {
            ids: BTreeSet::new(),
        }
    }

    pub fn contains(&self, id: ProfileId) -> bool {
        self.ids.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Flip membership of `id`. Returns `true` if it is now a favorite.
    pub fn toggle(&mut self, id: ProfileId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    /// Identifiers in ascending order.
    pub fn ids(&self) -> Vec<ProfileId> {
        self.ids.iter().copied().collect()
    }
}

impl FromIterator<ProfileId> for FavoriteSet {
    fn from_iter<I: IntoIterator<Item = ProfileId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
