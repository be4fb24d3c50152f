mod common;
use common::{portrait_bytes, results, seeded_pool, setup_images, setup_test_db};

use chrono::NaiveDate;
use slvm::core::materialize::{load, try_load};
use slvm::db::initialize::{ensure_schema, init_db};
use slvm::db::pool::DbPool;
use slvm::db::queries::count_rows;
use slvm::errors::AppError;
use slvm::models::result::{MatchResult, Slot};
use slvm::models::schema::TableKind;
use std::fs;

#[test]
fn test_connector_reports_new_file() {
    let db_path = setup_test_db("connector_new");

    let pool = DbPool::new(&db_path).expect("open");
    assert!(pool.created);
    drop(pool);

    let pool = DbPool::new(&db_path).expect("reopen");
    assert!(!pool.created, "existing file must not be reported as created");
}

#[test]
fn test_bootstrap_creates_tables_and_seed_rows() {
    let pool = seeded_pool("bootstrap_seed");

    assert_eq!(count_rows(&pool.conn, "players").unwrap(), 4);
    assert_eq!(count_rows(&pool.conn, "results").unwrap(), 1);

    let players = try_load(&pool.conn, TableKind::Players)
        .unwrap()
        .players()
        .unwrap();
    let names: Vec<&str> = players.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Aina", "Pep", "Marta", "Jordi"]);

    let jordi = &players[3];
    assert_eq!(jordi.handicap_initial, -1.2);
    assert_eq!(jordi.handicap_current, -0.8);
    assert_eq!(jordi.handicap_playing, -1);
    assert_eq!(jordi.image.as_deref(), Some(portrait_bytes("Jordi").as_slice()));
    assert_eq!(jordi.image_extension(), "png");
}

#[test]
fn test_materialize_after_bootstrap_matches_seed() {
    let pool = seeded_pool("bootstrap_roundtrip");
    let rows = results(&pool).results().unwrap();

    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert!(row.id.is_some());
    assert_eq!(row.day, NaiveDate::from_ymd_opt(2025, 3, 15).unwrap());
    assert_eq!(
        row.slots,
        vec![
            Slot {
                player: "Aina".into(),
                score: 2
            },
            Slot {
                player: "Pep".into(),
                score: 0
            },
        ]
    );
}

#[test]
fn test_bootstrap_twice_never_duplicates_seed() {
    let db_path = setup_test_db("bootstrap_twice");
    let images = setup_images("bootstrap_twice");

    let mut pool = DbPool::new(&db_path).unwrap();
    assert!(init_db(&mut pool, &images).unwrap());
    // same connection, flag still set: emptiness guard kicks in
    assert!(!init_db(&mut pool, &images).unwrap());
    drop(pool);

    let mut pool = DbPool::new(&db_path).unwrap();
    assert!(!init_db(&mut pool, &images).unwrap());

    assert_eq!(count_rows(&pool.conn, "players").unwrap(), 4);
    assert_eq!(count_rows(&pool.conn, "results").unwrap(), 1);
}

#[test]
fn test_existing_file_gets_tables_but_no_seed() {
    let db_path = setup_test_db("bootstrap_existing");
    let images = setup_images("bootstrap_existing");
    fs::write(&db_path, b"").unwrap();

    let mut pool = DbPool::new(&db_path).unwrap();
    assert!(!pool.created);
    assert!(!init_db(&mut pool, &images).unwrap());

    assert_eq!(count_rows(&pool.conn, "players").unwrap(), 0);
    assert_eq!(results(&pool).len(), 0);
}

#[test]
fn test_missing_image_is_fatal_and_writes_nothing() {
    let db_path = setup_test_db("bootstrap_missing_image");
    let images = setup_images("bootstrap_missing_image");
    fs::remove_file(images.join("marta.png")).unwrap();

    let mut pool = DbPool::new(&db_path).unwrap();
    assert!(pool.created);
    let err = init_db(&mut pool, &images).unwrap_err();

    match err {
        AppError::MissingImage(path) => assert!(path.ends_with("marta.png")),
        other => panic!("unexpected error: {other}"),
    }
    drop(pool);

    assert!(
        !std::path::Path::new(&db_path).exists(),
        "a failed first bootstrap must not leave a database behind"
    );
}

#[test]
fn test_retry_after_missing_image_seeds_the_store() {
    let db_path = setup_test_db("bootstrap_retry");
    let images = setup_images("bootstrap_retry");
    fs::remove_file(images.join("marta.png")).unwrap();

    let mut pool = DbPool::new(&db_path).unwrap();
    assert!(init_db(&mut pool, &images).is_err());
    drop(pool);

    fs::write(images.join("marta.png"), portrait_bytes("Marta")).unwrap();

    let mut pool = DbPool::new(&db_path).unwrap();
    assert!(pool.created);
    assert!(init_db(&mut pool, &images).unwrap());

    assert_eq!(count_rows(&pool.conn, "players").unwrap(), 4);
    assert_eq!(count_rows(&pool.conn, "results").unwrap(), 1);
}

#[test]
fn test_load_missing_table_is_absent_not_fatal() {
    let pool = DbPool::in_memory().unwrap();

    assert!(load(&pool.conn, TableKind::Results).is_none());
    assert!(load(&pool.conn, TableKind::Players).is_none());

    ensure_schema(&pool.conn).unwrap();
    let snapshot = load(&pool.conn, TableKind::Results).expect("table exists now");
    assert!(snapshot.is_empty());
}

#[test]
fn test_legacy_day_text_is_parsed() {
    let pool = DbPool::in_memory().unwrap();
    ensure_schema(&pool.conn).unwrap();
    pool.conn
        .execute(
            "INSERT INTO results (day, player1, score1, player2, score2)
             VALUES ('15-03-2025', 'Aina', 2, 'Pep', 0)",
            [],
        )
        .unwrap();

    let rows = results_of(&pool);
    assert_eq!(rows[0].day, NaiveDate::from_ymd_opt(2025, 3, 15).unwrap());
}

fn results_of(pool: &DbPool) -> Vec<MatchResult> {
    try_load(&pool.conn, TableKind::Results)
        .unwrap()
        .results()
        .unwrap()
}
