use super::LuaData;

/// Ordered Value → Value mapping.
///
/// Entries stay sorted by ascending key hash (see [`super::key_order`]); keys
/// that tie on hash keep insertion order. Key uniqueness is structural
/// equality, not hash equality. Iteration order is the wire order: a non-array
/// table serializes its entries exactly as `iter` yields them.
#[derive(Debug, Clone, Default)]
pub struct LuaTable {
    entries: Vec<(LuaData, LuaData)>,
}

impl LuaTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &LuaData) -> Option<&LuaData> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &LuaData) -> bool {
        self.get(key).is_some()
    }

    /// Inserts an entry, replacing the value of a structurally equal key.
    /// Returns the replaced value, if any.
    pub fn insert(&mut self, key: LuaData, value: LuaData) -> Option<LuaData> {
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            return Some(std::mem::replace(&mut slot.1, value));
        }

        let hash = key.data_hash();
        let pos = self
            .entries
            .partition_point(|(k, _)| k.data_hash() <= hash);
        self.entries.insert(pos, (key, value));

        None
    }

    /// Removes the entry with a structurally equal key, returning its value.
    pub fn remove(&mut self, key: &LuaData) -> Option<LuaData> {
        let pos = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(pos).1)
    }

    /// Entries in wire order: ascending key hash, insertion order among ties.
    pub fn iter(&self) -> impl Iterator<Item = (&LuaData, &LuaData)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }
}

impl PartialEq for LuaTable {
    /// Deep, order-insensitive entry equality.
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self.entries.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl FromIterator<(LuaData, LuaData)> for LuaTable {
    fn from_iter<I: IntoIterator<Item = (LuaData, LuaData)>>(iter: I) -> Self {
        let mut table = LuaTable::new();
        for (key, value) in iter {
            table.insert(key, value);
        }
        table
    }
}

impl<const N: usize> From<[(LuaData, LuaData); N]> for LuaTable {
    fn from(entries: [(LuaData, LuaData); N]) -> Self {
        entries.into_iter().collect()
    }
}
