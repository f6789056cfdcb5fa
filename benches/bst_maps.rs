use avl_collections::avl_tree::AvlMap;
use avl_collections::word_count::count_words;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use std::collections::BTreeMap;

const NUM_OF_OPERATIONS: usize = 100;

fn bench_btreemap_insert(c: &mut Criterion) {
    c.bench_function("bench btreemap insert", |b| {
        b.iter(|| {
            let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
            let mut map = BTreeMap::new();
            for _ in 0..NUM_OF_OPERATIONS {
                let key = rng.next_u32();
                let val = rng.next_u32();

                map.insert(key, val);
            }
        })
    });
}

fn bench_btreemap_get(c: &mut Criterion) {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut map = BTreeMap::new();
    let mut values = Vec::new();
    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.next_u32();
        let val = rng.next_u32();

        map.insert(key, val);
        values.push(key);
    }

    c.bench_function("bench btreemap get", move |b| {
        b.iter(|| {
            for key in &values {
                black_box(map.get(key));
            }
        })
    });
}

fn bench_avl_map_insert(c: &mut Criterion) {
    c.bench_function("bench avl_map insert", |b| {
        b.iter(|| {
            let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
            let mut map = AvlMap::new();
            for _ in 0..NUM_OF_OPERATIONS {
                let key = rng.next_u32();
                let val = rng.next_u32();

                map.insert(key, val);
            }
        })
    });
}

fn bench_avl_map_insert_ascending(c: &mut Criterion) {
    c.bench_function("bench avl_map insert ascending", |b| {
        b.iter(|| {
            let mut map = AvlMap::new();
            for key in 0..NUM_OF_OPERATIONS {
                map.insert(key, key);
            }
            black_box(map.height())
        })
    });
}

fn bench_avl_map_find(c: &mut Criterion) {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut map = AvlMap::new();
    let mut values = Vec::new();
    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.next_u32();
        let val = rng.next_u32();

        map.insert(key, val);
        values.push(key);
    }

    c.bench_function("bench avl_map find", move |b| {
        b.iter(|| {
            for key in &values {
                black_box(map.find(key).ok());
            }
        })
    });
}

fn bench_word_count(c: &mut Criterion) {
    let text = "to be or not to be that is the question ".repeat(NUM_OF_OPERATIONS);
    c.bench_function("bench word_count", move |b| {
        b.iter(|| black_box(count_words(&text).len()))
    });
}

criterion_group!(
    benches,
    bench_btreemap_get,
    bench_btreemap_insert,
    bench_avl_map_find,
    bench_avl_map_insert,
    bench_avl_map_insert_ascending,
    bench_word_count,
);
criterion_main!(benches);
