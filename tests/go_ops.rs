//! Suspending-variant behavior
//!
//! The `go_*` operations must return exactly what their direct
//! counterparts return, whether invoked from a plain thread (where the
//! join parks the thread) or from inside a `may` coroutine (where the
//! caller is suspended while the store round-trip runs).

use specimen::{MemoryStore, Repository, SpecimenModel};

#[derive(SpecimenModel, Clone, Debug, PartialEq)]
#[table_name = "visits"]
pub struct Visit {
    #[primary_key]
    pub id: i64,
    pub vet: String,
    pub outcome: String,
}

fn visit(vet: &str, outcome: &str) -> Visit {
    Visit {
        id: 0,
        vet: vet.to_string(),
        outcome: outcome.to_string(),
    }
}

fn seeded() -> (MemoryStore, Repository<Visit>) {
    let store = MemoryStore::new();
    let repo: Repository<Visit> = Repository::new().unwrap();
    repo.insert_many(
        &store,
        &[visit("carla", "healthy"), visit("smith", "follow-up")],
    )
    .unwrap();
    (store, repo)
}

#[cfg(feature = "tracing")]
fn init_logging() {
    specimen::metrics::tracing_helpers::init_tracing();
}

#[cfg(not(feature = "tracing"))]
fn init_logging() {}

#[test]
fn test_go_find_variants_match_direct_results() {
    init_logging();
    let (store, repo) = seeded();
    let example = VisitExample {
        vet: Some("carla".to_string()),
        ..VisitExample::default()
    };

    assert_eq!(
        repo.find_one(&store, &example, false).unwrap(),
        repo.go_find_one(&store, &example, false).unwrap()
    );
    assert_eq!(
        repo.find_one_detached(&store, &example, false).unwrap(),
        repo.go_find_one_detached(&store, &example, false).unwrap()
    );
    assert_eq!(
        repo.find_all(&store, &example, false).unwrap(),
        repo.go_find_all(&store, &example, false).unwrap()
    );
    assert_eq!(
        repo.find_all_detached(&store, &example, false).unwrap(),
        repo.go_find_all_detached(&store, &example, false).unwrap()
    );
}

#[test]
fn test_go_ops_inside_coroutine() {
    let (store, repo) = seeded();

    // Run the whole flow on a coroutine: the inner go_* join suspends this
    // coroutine rather than blocking the scheduler thread.
    let handle = may::go!(move || {
        let example = VisitExample {
            outcome: Some("follow-up".to_string()),
            ..VisitExample::default()
        };
        let found = repo.go_find_one(&store, &example, false)?;
        let inserted = repo.go_insert_one(&store, visit("jones", "healthy"))?;
        Ok::<_, specimen::RepositoryError>((found, inserted))
    });

    let (found, inserted) = handle.join().expect("coroutine completed").unwrap();
    assert_eq!(found.unwrap().vet, "smith");
    assert!(inserted.id > 0);
}

#[test]
fn test_go_insert_many_round_trip() {
    let store = MemoryStore::new();
    let repo: Repository<Visit> = Repository::new().unwrap();

    let stored = repo
        .go_insert_many(&store, vec![visit("a", "x"), visit("b", "y")])
        .unwrap();
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].vet, "a");
    assert_eq!(stored[1].vet, "b");

    let everyone = repo
        .go_find_all(&store, &VisitExample::default(), false)
        .unwrap();
    assert_eq!(everyone.len(), 2);
}

#[test]
fn test_go_find_build_errors_stay_on_caller() {
    use specimen::sea_query::Value;
    use specimen::ExampleTrait;

    struct Unknown;
    impl ExampleTrait for Unknown {
        type Model = Visit;
        fn fields(&self) -> Vec<(&'static str, Option<Value>)> {
            vec![("specialty", Some(Value::from("exotics".to_string())))]
        }
    }

    let (store, repo) = seeded();
    // Filter building happens before the coroutine hop, so the error comes
    // back as a filter error, not a store error.
    let err = repo.go_find_one(&store, &Unknown, false).unwrap_err();
    assert!(matches!(err, specimen::RepositoryError::Filter(_)));
}
