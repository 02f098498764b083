use super::*;

#[test]
fn can_collect_in_source_order() {
    let source = (0..100).collect::<Vec<_>>();

    let by_ref = parallel_collect(source.as_slice(), |value| value * 2);
    let by_value = parallel_into_collect(source.clone(), |value| value + 1);

    assert_eq!(by_ref, source.iter().map(|value| value * 2).collect::<Vec<_>>());
    assert_eq!(by_value, source.iter().map(|value| value + 1).collect::<Vec<_>>());
}

#[test]
fn can_execute_on_thread_pool() {
    let pool = ThreadPool::new(2).expect("cannot create pool");

    let result = pool.execute(|| (rayon::current_num_threads(), std::thread::current().name().map(str::to_string)));

    assert_eq!(result.0, 2);
    assert!(result.1.is_some_and(|name| name.starts_with("loadplan-worker-")));
}
