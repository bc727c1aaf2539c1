use std::thread;
use trove_core::{StoreConfig, TripleStore, subjects_in_all};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_store_is_send_and_sync() {
    assert_send_sync::<TripleStore>();
}

#[test]
fn test_parallel_queries_on_shared_store() {
    let config = StoreConfig::with_vocabulary("type", "subClassOf");
    let mut statements = Vec::new();
    for i in 0..200 {
        statements.push((format!("e{i}"), "type".to_string(), format!("C{}", i % 10)));
        statements.push((format!("e{i}"), "knows".to_string(), format!("e{}", (i + 1) % 200)));
    }
    for class in 0..10 {
        statements.push((format!("C{class}"), "subClassOf".to_string(), "Top".to_string()));
    }
    let store = TripleStore::from_statements_with_config(statements, &config).unwrap();
    let expected = store.sorted_statements();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let store = &store;
                scope.spawn(move || {
                    let subject = format!("e{}", worker * 25);
                    let class = format!("C{}", worker * 25 % 10);
                    assert_eq!(store.classes_of(&subject), vec![class.as_str(), "Top"]);
                    assert_eq!(store.entities_of_class("Top").len(), 200);
                    assert_eq!(store.statements_by_subject(&subject).len(), 2);
                    store.sorted_statements()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_parallel_intersections() {
    let stores: Vec<TripleStore> = (0..4)
        .map(|offset| {
            TripleStore::from_statements((offset..offset + 10).map(|i| (format!("s{i}"), "p", "o")))
        })
        .collect();
    let refs: Vec<&TripleStore> = stores.iter().collect();

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                assert_eq!(subjects_in_all(&refs), vec!["s3", "s4", "s5", "s6", "s7", "s8", "s9"]);
            });
        }
    });
}
