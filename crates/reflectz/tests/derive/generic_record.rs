use std::collections::BTreeMap;

use reflectz::{Reflect, inspect};

#[derive(Reflect)]
pub struct Page<T, K: Ord> {
    pub items: Vec<T>,
    pub index: BTreeMap<K, usize>,
    pub cursor: Option<T>,
}

pub fn main() {
    let page = Page {
        items: vec![1u32, 2],
        index: BTreeMap::from([("a".to_string(), 0)]),
        cursor: None,
    };
    let fields = inspect(&page).unwrap();
    assert_eq!(fields.len(), 3);
    assert!(fields[2].is_zero);
}
