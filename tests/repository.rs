use member_search::domain::member::{MemberBulkUpdate, MemberTeamDto};
use member_search::domain::page::PageRequest;
use member_search::domain::search::{MemberListQuery, MemberSearchCondition};
use member_search::domain::team::NewTeam;
use member_search::domain::types::{MemberName, TeamName};
use member_search::repository::errors::RepositoryError;
use member_search::repository::{MemberReader, MemberWriter, TeamReader, TeamWriter};
use member_search::services::member::{
    search_members, search_members_page, search_members_page_optimized,
};

mod common;

fn usernames(rows: &[MemberTeamDto]) -> Vec<&str> {
    rows.iter().map(|row| row.username.as_str()).collect()
}

#[test]
fn test_empty_condition_returns_every_member() {
    let test_db = common::TestDb::new("test_empty_condition_returns_every_member.db");
    let repo = test_db.repository();
    common::seed_members(&repo);

    let rows = search_members(&repo, &MemberSearchCondition::new()).unwrap();

    assert_eq!(
        usernames(&rows),
        vec!["member1", "member2", "member3", "member4"]
    );
    assert_eq!(rows[0].team_name(), Some("teamA"));
    assert_eq!(rows[3].team_name(), Some("teamB"));
}

#[test]
fn test_blank_username_is_ignored() {
    let test_db = common::TestDb::new("test_blank_username_is_ignored.db");
    let repo = test_db.repository();
    common::seed_members(&repo);

    let rows = search_members(&repo, &MemberSearchCondition::new().username("   ")).unwrap();
    assert_eq!(rows.len(), 4);

    let rows = search_members(&repo, &MemberSearchCondition::new().username("member3")).unwrap();
    assert_eq!(usernames(&rows), vec!["member3"]);
}

#[test]
fn test_age_range_search_and_page() {
    let test_db = common::TestDb::new("test_age_range_search_and_page.db");
    let repo = test_db.repository();
    common::seed_members(&repo);

    let condition = MemberSearchCondition::new().age_goe(15).age_loe(35);

    let rows = search_members(&repo, &condition).unwrap();
    assert_eq!(usernames(&rows), vec!["member2", "member3"]);
    assert_eq!(rows[0].age, 20);
    assert_eq!(rows[0].team_name(), Some("teamA"));
    assert_eq!(rows[1].age, 30);
    assert_eq!(rows[1].team_name(), Some("teamB"));

    let page = search_members_page(&repo, &condition, PageRequest::new(0, 1)).unwrap();
    assert_eq!(usernames(&page.content), vec!["member2"]);
    assert_eq!(page.total, 2);
}

#[test]
fn test_upper_bound_is_less_or_equal() {
    let test_db = common::TestDb::new("test_upper_bound_is_less_or_equal.db");
    let repo = test_db.repository();
    common::seed_members(&repo);

    let loe = search_members(&repo, &MemberSearchCondition::new().age_loe(20)).unwrap();
    assert_eq!(usernames(&loe), vec!["member1", "member2"]);

    let goe = search_members(&repo, &MemberSearchCondition::new().age_goe(20)).unwrap();
    assert_eq!(usernames(&goe), vec!["member2", "member3", "member4"]);
}

#[test]
fn test_team_name_search() {
    let test_db = common::TestDb::new("test_team_name_search.db");
    let repo = test_db.repository();
    common::seed_members(&repo);

    let rows = search_members(&repo, &MemberSearchCondition::new().team_name("teamA")).unwrap();

    assert_eq!(usernames(&rows), vec!["member1", "member2"]);
    assert!(rows.iter().all(|row| row.team_name() == Some("teamA")));
}

#[test]
fn test_members_without_team_are_left_joined() {
    let test_db = common::TestDb::new("test_members_without_team_are_left_joined.db");
    let repo = test_db.repository();
    common::seed_members(&repo);
    common::new_team(&repo, "teamC");
    repo.create_members(&[common::new_member("loner", 50, None)])
        .unwrap();

    let rows = search_members(&repo, &MemberSearchCondition::new()).unwrap();
    assert_eq!(rows.len(), 5);
    let loner = rows.iter().find(|row| row.username == "loner").unwrap();
    assert!(loner.team.is_none());

    // teamC exists but has no members; the teamless member must not match it.
    let rows = search_members(&repo, &MemberSearchCondition::new().team_name("teamC")).unwrap();
    assert!(rows.is_empty());
    assert_eq!(
        repo.count_members(&MemberSearchCondition::new().team_name("teamC"))
            .unwrap(),
        0
    );

    let rows = search_members(&repo, &MemberSearchCondition::new().age_goe(45)).unwrap();
    assert_eq!(usernames(&rows), vec!["loner"]);
}

#[test]
fn test_optimized_page_matches_plain_page() {
    let test_db = common::TestDb::new("test_optimized_page_matches_plain_page.db");
    let repo = test_db.repository();
    common::seed_members(&repo);

    let conditions = [
        MemberSearchCondition::new(),
        MemberSearchCondition::new().team_name("teamB"),
        MemberSearchCondition::new().age_goe(15).age_loe(35),
        MemberSearchCondition::new().username("nobody"),
    ];

    for condition in &conditions {
        for limit in 1..=5 {
            for offset in 0..=6 {
                let request = PageRequest::new(offset, limit);
                let plain = search_members_page(&repo, condition, request).unwrap();
                let optimized = search_members_page_optimized(&repo, condition, request).unwrap();
                assert_eq!(plain, optimized, "{condition:?} {request:?}");
            }
        }
    }
}

#[test]
fn test_short_first_page_reports_its_length() {
    let test_db = common::TestDb::new("test_short_first_page_reports_its_length.db");
    let repo = test_db.repository();
    common::seed_members(&repo);

    let page = search_members_page_optimized(
        &repo,
        &MemberSearchCondition::new().age_goe(20),
        PageRequest::new(0, 10),
    )
    .unwrap();

    assert_eq!(page.content.len(), 3);
    assert_eq!(page.total, 3);
}

#[test]
fn test_offset_beyond_total() {
    let test_db = common::TestDb::new("test_offset_beyond_total.db");
    let repo = test_db.repository();
    common::seed_members(&repo);

    let page =
        search_members_page_optimized(&repo, &MemberSearchCondition::new(), PageRequest::new(10, 2))
            .unwrap();
    assert!(page.content.is_empty());
    assert_eq!(page.total, 4);

    let page = search_members_page_optimized(
        &repo,
        &MemberSearchCondition::new().username("nobody"),
        PageRequest::new(0, 2),
    )
    .unwrap();
    assert!(page.content.is_empty());
    assert_eq!(page.total, 0);
}

#[test]
fn test_search_is_idempotent() {
    let test_db = common::TestDb::new("test_search_is_idempotent.db");
    let repo = test_db.repository();
    common::seed_members(&repo);

    let condition = MemberSearchCondition::new().team_name("teamB").age_goe(0);
    let first = search_members(&repo, &condition).unwrap();
    let second = search_members(&repo, &condition).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_inverted_range_matches_nothing_in_repository() {
    let test_db = common::TestDb::new("test_inverted_range_matches_nothing_in_repository.db");
    let repo = test_db.repository();
    common::seed_members(&repo);

    let condition = MemberSearchCondition::new().age_goe(35).age_loe(15);
    let rows = repo
        .list_members(MemberListQuery::new(condition.clone()))
        .unwrap();

    assert!(rows.is_empty());
    assert_eq!(repo.count_members(&condition).unwrap(), 0);
}

#[test]
fn test_bulk_update_members() {
    let test_db = common::TestDb::new("test_bulk_update_members.db");
    let repo = test_db.repository();
    common::seed_members(&repo);

    let renamed = repo
        .bulk_update_members(
            &MemberSearchCondition::new().age_loe(27),
            &MemberBulkUpdate::Rename(MemberName::new("guest").unwrap()),
        )
        .unwrap();
    assert_eq!(renamed, 2);

    let guests = search_members(&repo, &MemberSearchCondition::new().username("guest")).unwrap();
    assert_eq!(guests.len(), 2);
    assert!(guests.iter().all(|row| row.age <= 27));

    let aged = repo
        .bulk_update_members(&MemberSearchCondition::new(), &MemberBulkUpdate::AddAge(1))
        .unwrap();
    assert_eq!(aged, 4);

    let doubled = repo
        .bulk_update_members(
            &MemberSearchCondition::new().team_name("teamB"),
            &MemberBulkUpdate::MultiplyAge(2),
        )
        .unwrap();
    assert_eq!(doubled, 2);

    let ages: Vec<i32> = search_members(&repo, &MemberSearchCondition::new())
        .unwrap()
        .iter()
        .map(|row| row.age)
        .collect();
    assert_eq!(ages, vec![11, 21, 62, 82]);
}

#[test]
fn test_bulk_delete_members() {
    let test_db = common::TestDb::new("test_bulk_delete_members.db");
    let repo = test_db.repository();
    common::seed_members(&repo);

    let deleted = repo
        .bulk_delete_members(&MemberSearchCondition::new().age_goe(19).team_name("teamA"))
        .unwrap();
    assert_eq!(deleted, 1);

    let rows = search_members(&repo, &MemberSearchCondition::new()).unwrap();
    assert_eq!(usernames(&rows), vec!["member1", "member3", "member4"]);
}

#[test]
fn test_team_stats() {
    let test_db = common::TestDb::new("test_team_stats.db");
    let repo = test_db.repository();
    common::seed_members(&repo);
    common::new_team(&repo, "teamC");
    repo.create_members(&[common::new_member("loner", 50, None)])
        .unwrap();

    let stats = repo.list_team_stats(&MemberSearchCondition::new()).unwrap();

    assert_eq!(stats.len(), 2);
    assert_eq!(stats[0].team_name.as_str(), "teamA");
    assert_eq!(stats[0].member_count, 2);
    assert_eq!(stats[0].average_age(), Some(15.0));
    assert_eq!(stats[1].team_name.as_str(), "teamB");
    assert_eq!(stats[1].average_age(), Some(35.0));
    assert_eq!(stats[1].min_age, Some(30));
    assert_eq!(stats[1].max_age, Some(40));

    let filtered = repo
        .list_team_stats(&MemberSearchCondition::new().age_goe(20))
        .unwrap();
    assert_eq!(filtered[0].member_count, 1);
    assert_eq!(filtered[0].age_sum, 20);
}

#[test]
fn test_bulk_update_keeps_ages_in_range() {
    let test_db = common::TestDb::new("test_bulk_update_keeps_ages_in_range.db");
    let repo = test_db.repository();
    common::seed_members(&repo);

    let member1 = MemberSearchCondition::new().username("member1");
    let result = repo.bulk_update_members(&member1, &MemberBulkUpdate::AddAge(-100));
    assert!(matches!(result, Err(RepositoryError::ConstraintViolation(_))));

    let member4 = MemberSearchCondition::new().username("member4");
    let result = repo.bulk_update_members(&member4, &MemberBulkUpdate::MultiplyAge(i32::MAX));
    assert!(matches!(result, Err(RepositoryError::ConstraintViolation(_))));

    let rows = search_members(&repo, &MemberSearchCondition::new()).unwrap();
    let ages: Vec<i32> = rows.iter().map(|row| row.age).collect();
    assert_eq!(ages, vec![10, 20, 30, 40]);

    let first = repo.get_member_by_id(rows[0].member_id).unwrap().unwrap();
    assert_eq!(first.age.get(), 10);
}

#[test]
fn test_get_member_by_id() {
    let test_db = common::TestDb::new("test_get_member_by_id.db");
    let repo = test_db.repository();
    let (team_a, _) = common::seed_members(&repo);

    let first = search_members(&repo, &MemberSearchCondition::new().username("member1")).unwrap();
    let member = repo.get_member_by_id(first[0].member_id).unwrap().unwrap();

    assert_eq!(member.username.as_str(), "member1");
    assert_eq!(member.age.get(), 10);
    assert_eq!(member.team_id, Some(team_a.id));

    repo.bulk_delete_members(&MemberSearchCondition::new().username("member1"))
        .unwrap();
    assert!(repo.get_member_by_id(first[0].member_id).unwrap().is_none());
}

#[test]
fn test_team_repository() {
    let test_db = common::TestDb::new("test_team_repository.db");
    let repo = test_db.repository();
    let (team_a, _) = common::seed_members(&repo);

    let found = repo
        .get_team_by_name(&TeamName::new("teamA").unwrap())
        .unwrap()
        .unwrap();
    assert_eq!(found.id, team_a.id);

    assert!(
        repo.get_team_by_name(&TeamName::new("missing").unwrap())
            .unwrap()
            .is_none()
    );

    let names: Vec<String> = repo
        .list_teams()
        .unwrap()
        .into_iter()
        .map(|team| team.name.into_inner())
        .collect();
    assert_eq!(names, vec!["teamA", "teamB"]);
}

#[test]
fn test_duplicate_team_is_constraint_violation() {
    let test_db = common::TestDb::new("test_duplicate_team_is_constraint_violation.db");
    let repo = test_db.repository();
    common::new_team(&repo, "teamA");

    let err = repo
        .create_team(&NewTeam::new(TeamName::new("teamA").unwrap()))
        .unwrap_err();
    assert!(matches!(err, RepositoryError::ConstraintViolation(_)));
}
