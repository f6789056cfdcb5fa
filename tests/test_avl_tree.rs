use avl_collections::avl_tree::AvlMap;
use avl_collections::Error;
use rand::{Rng, SeedableRng, XorShiftRng};

const NUM_OF_OPERATIONS: usize = 10_000;

fn rng() -> XorShiftRng {
    SeedableRng::from_seed([1, 1, 1, 1])
}

// An avl tree with n nodes is never taller than 1.44 * log2(n + 2).
fn max_height(len: usize) -> usize {
    (1.45 * ((len + 2) as f64).log2()) as usize
}

#[test]
fn int_test_random_inserts() {
    let mut rng = rng();
    let mut map = AvlMap::new();
    let mut expected = Vec::new();
    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen::<u32>();
        let val = rng.gen::<u32>();

        if map.contains_key(&key) {
            let len = map.len();
            assert!(!map.insert(key, val));
            assert_eq!(map.len(), len);
        } else {
            assert!(map.insert(key, val));
            expected.push((key, val));
        }
    }

    expected.sort();
    assert_eq!(map.len(), expected.len());
    assert_eq!(
        map.in_order(),
        expected.iter().map(|pair| pair.0).collect::<Vec<u32>>(),
    );
    for (key, val) in &expected {
        assert_eq!(map.find(key), Ok(val));
    }
    assert!(map.height() <= max_height(map.len()));
}

#[test]
fn int_test_in_order_is_strictly_ascending() {
    let mut rng = rng();
    let mut map = AvlMap::new();
    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen_range(0, 1000);
        map.insert(key, ());
    }

    let keys = map.in_order();
    assert_eq!(keys.len(), map.len());
    assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
    for key in &keys {
        assert!(map.contains_key(key));
    }
}

#[test]
fn int_test_shuffled_range() {
    let mut rng = rng();
    let mut keys: Vec<u32> = (0..NUM_OF_OPERATIONS as u32).collect();
    rng.shuffle(&mut keys);

    let mut map = AvlMap::new();
    for key in &keys {
        assert!(map.insert(*key, key.to_string()));
        assert!(map.height() <= max_height(map.len()));
    }
    for key in &keys {
        assert!(!map.insert(*key, String::new()));
    }

    assert_eq!(map.len(), keys.len());
    assert_eq!(map.in_order(), (0..NUM_OF_OPERATIONS as u32).collect::<Vec<u32>>());
    assert_eq!(map.pre_order().len(), keys.len());
    assert_eq!(map.post_order().len(), keys.len());
    assert_eq!(map.find(&42).map(String::as_str), Ok("42"));
}

#[test]
fn int_test_traversal_roots() {
    let mut rng = rng();
    let mut map = AvlMap::new();
    for _ in 0..1000 {
        map.insert(rng.gen::<u16>(), ());
    }

    let pre_order = map.pre_order();
    let post_order = map.post_order();
    let mut sorted_pre_order = pre_order.clone();
    sorted_pre_order.sort();
    let mut sorted_post_order = post_order.clone();
    sorted_post_order.sort();

    assert_eq!(pre_order.first(), post_order.last());
    assert_eq!(sorted_pre_order, map.in_order());
    assert_eq!(sorted_post_order, map.in_order());
}

#[test]
fn int_test_ascending_keys() {
    let mut map = AvlMap::new();
    for key in 1..=7 {
        map.insert(key, key);
    }
    assert_eq!(map.in_order(), vec![1, 2, 3, 4, 5, 6, 7]);
    assert!(map.height() <= 3);
}

#[test]
fn int_test_find_missing() {
    let mut rng = rng();
    let mut map = AvlMap::new();
    for _ in 0..1000 {
        let key = rng.gen_range(0, 1000) * 2;
        map.insert(key, key);
    }
    for key in (0..1000).map(|key| key * 2 + 1) {
        assert!(!map.contains_key(&key));
        assert_eq!(map.find(&key), Err(Error::ElementNotFound));
        assert_eq!(map.find_mut(&key), Err(Error::ElementNotFound));
    }
}

#[test]
fn int_test_write_through_find_mut() {
    let mut map = AvlMap::new();
    for key in 0..100u32 {
        map.insert(key, 0);
    }
    for key in 0..100u32 {
        *map.find_mut(&key).unwrap() += key;
    }
    for key in 0..100u32 {
        assert_eq!(map.find(&key), Ok(&key));
    }
}

#[test]
fn int_test_clone_independence() {
    let mut rng = rng();
    let mut map = AvlMap::new();
    for _ in 0..1000 {
        map.insert(rng.gen::<u32>(), rng.gen::<u32>());
    }

    let mut copy = map.clone();
    let copy_keys = copy.in_order();
    let map_keys = map.in_order();
    assert_eq!(copy_keys, map_keys);

    for _ in 0..1000 {
        map.insert(rng.gen::<u32>(), 0);
    }
    assert_eq!(copy.in_order(), copy_keys);

    for _ in 0..1000 {
        copy.insert(rng.gen::<u32>(), 0);
    }
    let mut assigned = AvlMap::new();
    assigned.insert(0, 0);
    assigned.clone_from(&copy);
    assert_eq!(assigned, copy);

    copy.clear();
    assert!(copy.is_empty());
    assert!(!assigned.is_empty());
    assert!(map.len() >= map_keys.len());
}
