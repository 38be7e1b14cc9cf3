use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{Rng, SeedableRng, XorShiftRng};
use std::collections::BTreeSet;

const NUM_OF_OPERATIONS: usize = 100;

fn bench_btreeset_insert(c: &mut Criterion) {
    c.bench_function("bench btreeset insert", |b| {
        b.iter(|| {
            let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
            let mut set = BTreeSet::new();
            for _ in 0..NUM_OF_OPERATIONS {
                set.insert(rng.next_u32());
            }
        })
    });
}

fn bench_btreeset_get(c: &mut Criterion) {
    let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
    let mut set = BTreeSet::new();
    let mut values = Vec::new();
    for _ in 0..NUM_OF_OPERATIONS {
        let value = rng.next_u32();
        set.insert(value);
        values.push(value);
    }

    c.bench_function("bench btreeset get", move |b| {
        b.iter(|| {
            for value in &values {
                black_box(set.get(value));
            }
        })
    });
}

macro_rules! search_tree_benches {
    ($($module_name:ident: $type_name:ident,)*) => {
        $(
            mod $module_name {
                use criterion::{black_box, Criterion};
                use rand::{Rng, SeedableRng, XorShiftRng};
                use search_trees::search_tree::$type_name;
                use std::cmp::Ordering;
                use super::NUM_OF_OPERATIONS;

                fn natural(a: &u32, b: &u32) -> Ordering {
                    a.cmp(b)
                }

                pub fn bench_insert(c: &mut Criterion) {
                    let name = format!("bench {} insert", stringify!($module_name));
                    c.bench_function(&name, |b| {
                        b.iter(|| {
                            let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
                            let mut tree = $type_name::new(natural);
                            for _ in 0..NUM_OF_OPERATIONS {
                                tree.insert(rng.next_u32());
                            }
                        })
                    });
                }

                pub fn bench_insert_increasing(c: &mut Criterion) {
                    let name = format!("bench {} insert increasing", stringify!($module_name));
                    c.bench_function(&name, |b| {
                        b.iter(|| {
                            let mut tree = $type_name::new(natural);
                            for value in 0..NUM_OF_OPERATIONS as u32 {
                                tree.insert(value);
                            }
                            black_box(tree.height());
                        })
                    });
                }

                pub fn bench_get(c: &mut Criterion) {
                    let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
                    let mut tree = $type_name::new(natural);
                    let mut values = Vec::new();

                    for _ in 0..NUM_OF_OPERATIONS {
                        let value = rng.next_u32();
                        tree.insert(value);
                        values.push(value);
                    }

                    let name = format!("bench {} get", stringify!($module_name));
                    c.bench_function(&name, move |b| {
                        b.iter(|| {
                            for value in &values {
                                black_box(tree.get(value));
                            }
                        })
                    });
                }
            }
        )*

        criterion_group!(
            benches,
            bench_btreeset_get,
            bench_btreeset_insert,
            $(
                $module_name::bench_get,
                $module_name::bench_insert,
                $module_name::bench_insert_increasing,
            )*
        );
    }
}

search_tree_benches!(
    binary_tree: BinaryTree,
    avl_tree: AvlTree,
);

criterion_main!(benches);
