/// Asset pools
///
/// A pool maps asset names to decoded assets for one category. Pools only grow:
/// the first asset stored under a name stays, later inserts for it are ignored.
use std::collections::BTreeMap;

use rand::seq::IteratorRandom;
use rand::Rng;

use crate::category::Category;

/// Named, decoded assets of one category
#[derive(Debug, Clone)]
pub struct AssetPool<T> {
    assets: BTreeMap<String, T>,
}

impl<T> AssetPool<T> {
    /// Create an empty pool
    pub fn new() -> Self {
        Self {
            assets: BTreeMap::new(),
        }
    }

    /// Store an asset unless the name is already taken. Returns whether it was stored.
    pub fn insert(&mut self, name: impl Into<String>, asset: T) -> bool {
        let name = name.into();
        if self.assets.contains_key(&name) {
            return false;
        }
        self.assets.insert(name, asset);
        true
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.assets.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.assets.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Names of all stored assets, sorted
    pub fn names(&self) -> Vec<&str> {
        self.assets.keys().map(String::as_str).collect()
    }

    /// Pick one asset uniformly at random
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<(&str, &T)> {
        self.assets
            .iter()
            .choose(rng)
            .map(|(name, asset)| (name.as_str(), asset))
    }
}

impl<T> Default for AssetPool<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// One pool per category
#[derive(Debug, Clone)]
pub struct CategoryPools<T> {
    correct: AssetPool<T>,
    wrong: AssetPool<T>,
}

impl<T> CategoryPools<T> {
    pub fn new() -> Self {
        Self {
            correct: AssetPool::new(),
            wrong: AssetPool::new(),
        }
    }

    pub fn get(&self, category: Category) -> &AssetPool<T> {
        match category {
            Category::Correct => &self.correct,
            Category::Wrong => &self.wrong,
        }
    }

    pub fn get_mut(&mut self, category: Category) -> &mut AssetPool<T> {
        match category {
            Category::Correct => &mut self.correct,
            Category::Wrong => &mut self.wrong,
        }
    }

    /// Total number of assets across categories
    pub fn total(&self) -> usize {
        self.correct.len() + self.wrong.len()
    }
}

impl<T> Default for CategoryPools<T> {
    fn default() -> Self {
        Self::new()
    }
}
