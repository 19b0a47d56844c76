use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::seq::SliceRandom;

use bstree::queue::Queue;
use bstree::tree::Tree;

/// Keys `0..n` in a shuffled order. The tree never rebalances, so inserting
/// sorted keys would bench a worst-case chain instead of a typical tree.
fn shuffled_keys(n: usize) -> Vec<i64> {
    let mut keys: Vec<i64> = (0..n as i64).collect();
    keys.shuffle(&mut rand::rng());
    keys
}

/// Helper to bench a function on a BST.
/// It creates a group for the given name and closure and runs tests for
/// various tree sizes before finishing the group.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut Tree<i64>, i64)) {
    let mut group = c.benchmark_group(name);

    for num_levels in [3, 7, 11, 15] {
        let num_nodes = 2usize.pow(num_levels as u32) - 1;
        let largest_element_in_tree = num_nodes as i64 - 1;

        let tree = {
            let mut tree = Tree::new();
            for key in shuffled_keys(num_nodes) {
                tree.insert(key, key);
            }

            tree
        };

        let id = BenchmarkId::from_parameter(largest_element_in_tree);
        group.bench_function(id, |b| {
            b.iter_custom(|iters| {
                let mut time = std::time::Duration::ZERO;
                for _ in 0..iters {
                    let mut tree = black_box(tree.clone());
                    let instant = std::time::Instant::now();
                    f(&mut tree, black_box(largest_element_in_tree));
                    let elapsed = instant.elapsed();
                    time += elapsed;
                }
                time
            })
        });
    }

    group.finish();
}

pub fn tree_benchmark(c: &mut Criterion) {
    bench_helper(c, "find", |tree, i| {
        let _value = black_box(tree.find(i));
    });
    bench_helper(c, "delete", |tree, i| {
        tree.delete(i);
    });

    bench_helper(c, "insert", |tree, i| {
        tree.insert(i + 1, i + 1);
    });

    bench_helper(c, "find-miss", |tree, i| {
        let _value = black_box(tree.find(i + 1));
    });
    bench_helper(c, "delete-miss", |tree, i| {
        tree.delete(i + 1);
    });
}

pub fn queue_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue");

    for num_values in [128usize, 2048, 32768] {
        let id = BenchmarkId::new("push-pop", num_values);
        group.bench_function(id, |b| {
            b.iter(|| {
                let mut queue = Queue::new();
                for x in 0..num_values {
                    queue.push(black_box(x));
                }
                while let Some(value) = queue.pop() {
                    black_box(value);
                }
            })
        });
    }

    group.finish();
}

criterion_group!(benches, tree_benchmark, queue_benchmark);
criterion_main!(benches);
