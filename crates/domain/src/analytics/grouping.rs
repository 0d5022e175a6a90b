use std::{collections::HashMap, hash::Hash};

/// Members sharing one grouping key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<K, T> {
    pub key: K,
    pub members: Vec<T>,
}

/// Groups `items` by `key_fn`, keeping groups in order of first key appearance
/// and members in input order.
pub fn group_by_first_appearance<T, K, I, F>(items: I, mut key_fn: F) -> Vec<Group<K, T>>
where
    I: IntoIterator<Item = T>,
    K: Eq + Hash + Clone,
    F: FnMut(&T) -> K,
{
    let mut slots: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<Group<K, T>> = Vec::new();
    for item in items {
        let key = key_fn(&item);
        match slots.get(&key) {
            Some(&slot) => groups[slot].members.push(item),
            None => {
                slots.insert(key.clone(), groups.len());
                groups.push(Group { key, members: vec![item] });
            }
        }
    }
    groups
}
