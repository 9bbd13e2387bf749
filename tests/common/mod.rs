#![allow(dead_code)]

use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use member_search::db::{DbPool, establish_connection_pool};
use member_search::domain::member::NewMember;
use member_search::domain::team::{NewTeam, Team};
use member_search::domain::types::{Age, MemberName, TeamName};
use member_search::repository::{DieselRepository, MemberWriter, TeamWriter};
use tempfile::TempDir;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Migrated SQLite database living in a temporary directory.
pub struct TestDb {
    _dir: TempDir,
    pool: DbPool,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let url = path.to_str().expect("utf-8 temp path").to_string();

        let pool = establish_connection_pool(&url).expect("create pool");
        let mut conn = pool.get().expect("get connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("run migrations");

        Self { _dir: dir, pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn repository(&self) -> DieselRepository {
        DieselRepository::new(self.pool.clone())
    }
}

pub fn new_team(repo: &DieselRepository, name: &str) -> Team {
    repo.create_team(&NewTeam::new(TeamName::new(name).unwrap()))
        .expect("create team")
}

pub fn new_member(username: &str, age: i32, team: Option<&Team>) -> NewMember {
    NewMember::new(
        MemberName::new(username).unwrap(),
        Age::new(age).unwrap(),
        team.map(|team| team.id),
    )
}

/// member1(10), member2(20) in teamA; member3(30), member4(40) in teamB.
pub fn seed_members(repo: &DieselRepository) -> (Team, Team) {
    let team_a = new_team(repo, "teamA");
    let team_b = new_team(repo, "teamB");

    let inserted = repo
        .create_members(&[
            new_member("member1", 10, Some(&team_a)),
            new_member("member2", 20, Some(&team_a)),
            new_member("member3", 30, Some(&team_b)),
            new_member("member4", 40, Some(&team_b)),
        ])
        .expect("create members");
    assert_eq!(inserted, 4);

    (team_a, team_b)
}
