#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use slvm::core::materialize::{Snapshot, try_load};
use slvm::db::initialize::init_db;
use slvm::db::pool::DbPool;
use slvm::db::seed::SEED_PLAYERS;
use slvm::models::schema::TableKind;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub fn slvm() -> Command {
    cargo_bin_cmd!("slvm")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_slvm.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_slvm_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Fake portrait bytes: a PNG signature followed by the player name.
pub fn portrait_bytes(name: &str) -> Vec<u8> {
    let mut bytes = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    bytes.extend_from_slice(name.as_bytes());
    bytes
}

/// Fresh directory holding every seed portrait.
pub fn setup_images(name: &str) -> PathBuf {
    let mut dir: PathBuf = env::temp_dir();
    dir.push(format!("{}_slvm_images", name));
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).expect("create images dir");

    for p in SEED_PLAYERS.iter() {
        fs::write(dir.join(p.image), portrait_bytes(p.name)).expect("write portrait");
    }
    dir
}

/// Fresh, bootstrapped database with the seed rows.
pub fn seeded_pool(name: &str) -> DbPool {
    let db_path = setup_test_db(name);
    let images = setup_images(name);
    let mut pool = DbPool::new(&db_path).expect("open db");
    assert!(init_db(&mut pool, &images).expect("bootstrap"));
    pool
}

pub fn results(pool: &DbPool) -> Snapshot {
    try_load(&pool.conn, TableKind::Results).expect("load results")
}

pub fn path_str(p: &Path) -> String {
    p.to_string_lossy().to_string()
}
