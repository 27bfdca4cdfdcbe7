use super::*;

#[test]
fn can_collect_in_parallel_keeping_order() {
    let result = parallel_into_collect((0..100).collect::<Vec<_>>(), |item| item * 2);

    assert_eq!(result, (0..100).map(|item| item * 2).collect::<Vec<_>>());
}

#[test]
fn can_execute_on_bounded_thread_pool() {
    let pool = ThreadPool::new(2);

    let threads = pool.execute(rayon::current_num_threads);

    assert_eq!(threads, 2);
}

#[test]
fn can_create_thread_pool_with_at_least_one_thread() {
    let pool = ThreadPool::new(0);

    assert_eq!(pool.execute(rayon::current_num_threads), 1);
}
