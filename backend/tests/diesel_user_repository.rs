//! Integration tests for `DieselUserRepository` against embedded PostgreSQL.
//!
//! Each test runs on a fresh database migrated with the crate's embedded
//! migrations, so ids start at 1.

use business_backend::domain::ports::{UserRepository, UserRepositoryError};
use business_backend::domain::{User, UserDraft, UserId};
use business_backend::outbound::persistence::{DieselUserRepository, run_pending_migrations};
use rstest::{fixture, rstest};

mod pg_support;

use pg_support::{PgContext, migrated_database};

#[fixture]
fn database() -> Option<PgContext> {
    migrated_database()
}

fn draft(company_name: &str, user_name: &str) -> UserDraft {
    UserDraft {
        company_name: company_name.to_owned(),
        user_name: user_name.to_owned(),
    }
}

fn insert(db: &PgContext, repo: &DieselUserRepository, user: UserDraft) -> User {
    db.block_on(repo.insert(&user)).expect("insert succeeds")
}

#[rstest]
fn inserts_receive_sequential_ids_and_list_in_id_order(database: Option<PgContext>) {
    let Some(db) = database else { return };
    let repo = DieselUserRepository::new(db.pool());

    let first = insert(&db, &repo, draft("○○○会社", "瀬川"));
    let second = insert(&db, &repo, draft("△△△会社", "瀬川2"));
    assert_eq!(first.id(), UserId::new(1));
    assert_eq!(second.id(), UserId::new(2));

    let listed = db.block_on(repo.list_all()).expect("list succeeds");
    assert_eq!(listed, vec![first, second]);
}

#[rstest]
fn find_by_id_returns_stored_row_or_none(database: Option<PgContext>) {
    let Some(db) = database else { return };
    let repo = DieselUserRepository::new(db.pool());
    let stored = insert(&db, &repo, draft("xxx会社", "瀬川3"));

    let found = db
        .block_on(repo.find_by_id(stored.id()))
        .expect("lookup succeeds");
    assert_eq!(found, Some(stored));

    let missing = db
        .block_on(repo.find_by_id(UserId::new(99)))
        .expect("lookup succeeds");
    assert!(missing.is_none());
}

#[rstest]
fn update_overwrites_existing_row_only(database: Option<PgContext>) {
    let Some(db) = database else { return };
    let repo = DieselUserRepository::new(db.pool());
    let stored = insert(&db, &repo, draft("○○○会社", "瀬川"));

    let renamed = User::new(stored.id(), draft("yyy会社", "瀬川4"));
    assert!(db.block_on(repo.update(&renamed)).expect("update succeeds"));
    let found = db
        .block_on(repo.find_by_id(stored.id()))
        .expect("lookup succeeds");
    assert_eq!(found, Some(renamed));

    let ghost = User::new(UserId::new(99), draft("zzz会社", "幽霊"));
    assert!(!db.block_on(repo.update(&ghost)).expect("update succeeds"));
}

#[rstest]
fn deleted_ids_are_not_reused(database: Option<PgContext>) {
    let Some(db) = database else { return };
    let repo = DieselUserRepository::new(db.pool());
    let first = insert(&db, &repo, draft("○○○会社", "瀬川"));

    assert!(db.block_on(repo.delete(first.id())).expect("delete succeeds"));
    assert!(!db.block_on(repo.delete(first.id())).expect("delete succeeds"));

    let next = insert(&db, &repo, draft("△△△会社", "瀬川2"));
    assert_eq!(next.id(), UserId::new(2));
}

#[rstest]
fn names_are_bounded_by_characters(database: Option<PgContext>) {
    let Some(db) = database else { return };
    let repo = DieselUserRepository::new(db.pool());
    let longest = "あ".repeat(256);

    let stored = insert(&db, &repo, draft(&longest, "瀬川"));
    assert_eq!(stored.company_name(), longest);

    let err = db
        .block_on(repo.insert(&draft(&"あ".repeat(257), "瀬川")))
        .expect_err("column is varchar(256)");
    assert_eq!(err, UserRepositoryError::query("database error"));
}

#[rstest]
fn rerunning_migrations_keeps_rows(database: Option<PgContext>) {
    let Some(db) = database else { return };
    let repo = DieselUserRepository::new(db.pool());
    let stored = insert(&db, &repo, draft("○○○会社", "瀬川"));

    db.block_on(run_pending_migrations(db.database_url()))
        .expect("no pending migrations");

    let listed = db.block_on(repo.list_all()).expect("list succeeds");
    assert_eq!(listed, vec![stored]);
}
