use super::fake_store::FakeStore;

use crate::{
    BEING_INVITED, INVITING_A_FRIEND, LeaderboardSort, LedgerError, LedgerService, NewUser,
    PageRequest, RewardCatalog, UserId,
};

use std::sync::Arc;

use googletest::prelude::*;

const STEPS: &str = "10k_daily_steps";

fn catalog() -> RewardCatalog {
    RewardCatalog::new([
        (STEPS, 50),
        ("8h_sleep", 30),
        (INVITING_A_FRIEND, 100),
        (BEING_INVITED, 25),
    ])
    .unwrap()
}

fn service_with(store: Arc<FakeStore>) -> LedgerService {
    LedgerService::new(store, Arc::new(catalog()))
}

fn setup() -> (Arc<FakeStore>, LedgerService) {
    let store = Arc::new(FakeStore::default());
    (store.clone(), service_with(store))
}

async fn register(service: &LedgerService, nickname: &str) -> UserId {
    service
        .add_user(NewUser::new(nickname, format!("{nickname}@x.com")))
        .await
        .unwrap()
        .id
}

// =========================================================================
// Registration
// =========================================================================

#[tokio::test]
async fn given_valid_user_when_added_twice_then_one_row_and_same_id() {
    let (store, service) = setup();

    let first = service.add_user(NewUser::new("al", "a@x.com")).await.unwrap();
    let second = service.add_user(NewUser::new("al", "a@x.com")).await.unwrap();

    assert_that!(store.row_count(), eq(1));
    assert_that!(second.id, eq(first.id));
}

#[tokio::test]
async fn given_padded_nickname_when_added_then_same_registration_as_trimmed() {
    let (store, service) = setup();

    let plain = service.add_user(NewUser::new("al", "a@x.com")).await.unwrap();
    let padded = service
        .add_user(NewUser {
            nickname: " al ".to_string(),
            email: "a@x.com".to_string(),
        })
        .await
        .unwrap();

    assert_that!(store.row_count(), eq(1));
    assert_that!(padded.id, eq(plain.id));
    assert_that!(padded.nickname, eq("al"));
}

#[tokio::test]
async fn given_malformed_email_when_added_then_validation_error_and_no_row() {
    let (store, service) = setup();

    let result = service.add_user(NewUser::new("al", "a-at-x.com")).await;

    assert!(matches!(result, Err(LedgerError::Validation { .. })));
    assert_that!(store.row_count(), eq(0));
}

#[tokio::test]
async fn given_empty_nickname_when_added_then_validation_error() {
    let (_store, service) = setup();

    let result = service.add_user(NewUser::new("", "a@x.com")).await;

    match result {
        Err(LedgerError::Validation { source, .. }) => {
            assert_that!(source.field(), some(eq("nickname")))
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

// =========================================================================
// Status
// =========================================================================

#[tokio::test]
async fn given_new_user_when_status_then_zero_score_and_no_referrer() {
    let (_store, service) = setup();
    let id = register(&service, "al").await;

    let user = service.status(id).await.unwrap();

    assert_that!(user.score, eq(0));
    assert_that!(user.invited_by, none());
    assert_that!(user.nickname.as_str(), eq("al"));
}

#[tokio::test]
async fn given_missing_user_when_status_then_not_found() {
    let (_store, service) = setup();

    let result = service.status(UserId(404)).await;

    assert!(matches!(result, Err(LedgerError::NotFound { user_id, .. }) if user_id == UserId(404)));
}

#[tokio::test]
async fn given_store_outage_when_status_then_storage_error() {
    let (store, service) = setup();
    store.fail_next_calls();

    let result = service.status(UserId(1)).await;

    assert!(matches!(result, Err(LedgerError::Storage { .. })));
}

// =========================================================================
// Task completion
// =========================================================================

#[tokio::test]
async fn given_known_task_when_completed_then_score_increases_by_reward() {
    let (_store, service) = setup();
    let id = register(&service, "al").await;

    let awarded = service.task_complete(id, STEPS).await.unwrap();

    assert_that!(awarded, eq(50));
    assert_that!(service.status(id).await.unwrap().score, eq(50));
}

#[tokio::test]
async fn given_unknown_task_when_completed_then_error_and_score_unchanged() {
    let (_store, service) = setup();
    let id = register(&service, "al").await;

    let result = service.task_complete(id, "climb_everest").await;

    assert!(matches!(result, Err(LedgerError::UnknownTask { ref task, .. }) if task == "climb_everest"));
    assert_that!(service.status(id).await.unwrap().score, eq(0));
}

#[tokio::test]
async fn given_same_task_twice_when_completed_then_points_counted_twice() {
    let (_store, service) = setup();
    let id = register(&service, "al").await;

    service.task_complete(id, STEPS).await.unwrap();
    service.task_complete(id, STEPS).await.unwrap();

    assert_that!(service.status(id).await.unwrap().score, eq(100));
}

#[tokio::test]
async fn given_missing_user_when_task_completed_then_not_found() {
    let (_store, service) = setup();

    let result = service.task_complete(UserId(9), STEPS).await;

    assert!(matches!(result, Err(LedgerError::NotFound { .. })));
}

// =========================================================================
// Referrals
// =========================================================================

#[tokio::test]
async fn given_fresh_users_when_invited_then_both_rewarded_and_referrer_bound() {
    let (_store, service) = setup();
    let referrer = register(&service, "al").await;
    let invitee = register(&service, "bo").await;

    service.invited_by(invitee, referrer).await.unwrap();

    let invitee_after = service.status(invitee).await.unwrap();
    let referrer_after = service.status(referrer).await.unwrap();
    assert_that!(invitee_after.invited_by, some(eq(referrer)));
    assert_that!(invitee_after.score, eq(25));
    assert_that!(referrer_after.score, eq(100));
    assert_that!(referrer_after.invited_by, none());
}

#[tokio::test]
async fn given_already_invited_user_when_invited_again_then_already_invited_and_unchanged() {
    let (_store, service) = setup();
    let first = register(&service, "al").await;
    let second = register(&service, "cy").await;
    let invitee = register(&service, "bo").await;
    service.invited_by(invitee, first).await.unwrap();

    let result = service.invited_by(invitee, second).await;

    assert!(matches!(result, Err(LedgerError::AlreadyInvited { .. })));
    let invitee_after = service.status(invitee).await.unwrap();
    assert_that!(invitee_after.invited_by, some(eq(first)));
    assert_that!(invitee_after.score, eq(25));
    assert_that!(service.status(second).await.unwrap().score, eq(0));
}

#[tokio::test]
async fn given_missing_referrer_when_invited_then_not_found_and_user_untouched() {
    let (store, service) = setup();
    let invitee = register(&service, "bo").await;
    store.set_score(invitee, 7);

    let result = service.invited_by(invitee, UserId(999)).await;

    assert!(matches!(result, Err(LedgerError::NotFound { user_id, .. }) if user_id == UserId(999)));
    let invitee_after = service.status(invitee).await.unwrap();
    assert_that!(invitee_after.invited_by, none());
    assert_that!(invitee_after.score, eq(7));
}

#[tokio::test]
async fn given_self_referral_when_invited_then_rejected() {
    let (_store, service) = setup();
    let id = register(&service, "al").await;

    let result = service.invited_by(id, id).await;

    assert!(matches!(result, Err(LedgerError::SelfReferral { .. })));
    assert_that!(service.status(id).await.unwrap().invited_by, none());
}

#[tokio::test]
async fn given_catalog_without_referral_rewards_when_invited_then_bound_without_points() {
    let store = Arc::new(FakeStore::default());
    let service = LedgerService::new(
        store.clone(),
        Arc::new(RewardCatalog::new([(STEPS, 50)]).unwrap()),
    );
    let referrer = register(&service, "al").await;
    let invitee = register(&service, "bo").await;

    service.invited_by(invitee, referrer).await.unwrap();

    let invitee_after = store.user(invitee).unwrap();
    assert_that!(invitee_after.invited_by, some(eq(referrer)));
    assert_that!(invitee_after.score, eq(0));
    assert_that!(store.user(referrer).unwrap().score, eq(0));
}

#[tokio::test]
async fn given_zero_invitee_reward_when_invited_then_referrer_bound_and_paid() {
    let store = Arc::new(FakeStore::default());
    let service = LedgerService::new(
        store.clone(),
        Arc::new(
            RewardCatalog::new([(STEPS, 50), (INVITING_A_FRIEND, 100), (BEING_INVITED, 0)])
                .unwrap(),
        ),
    );
    let referrer = register(&service, "al").await;
    let invitee = register(&service, "bo").await;

    service.invited_by(invitee, referrer).await.unwrap();

    let invitee_after = store.user(invitee).unwrap();
    assert_that!(invitee_after.invited_by, some(eq(referrer)));
    assert_that!(invitee_after.score, eq(0));
    assert_that!(store.user(referrer).unwrap().score, eq(100));
}

// =========================================================================
// Leaderboard
// =========================================================================

#[tokio::test]
async fn given_scored_users_when_leaderboard_by_score_then_non_increasing() {
    let (store, service) = setup();
    for (nickname, score) in [("al", 10), ("bo", 40), ("cy", 20)] {
        let id = register(&service, nickname).await;
        store.set_score(id, score);
    }

    let users = service
        .leaderboard(LeaderboardSort::Score, PageRequest::all())
        .await
        .unwrap();

    let scores: Vec<i64> = users.iter().map(|u| u.score).collect();
    assert_that!(scores, elements_are![eq(&40), eq(&20), eq(&10)]);
}

#[tokio::test]
async fn given_users_when_leaderboard_paginated_then_returns_requested_slice() {
    let (_store, service) = setup();
    for nickname in ["al", "bo", "cy", "di", "ed"] {
        register(&service, nickname).await;
    }

    let users = service
        .leaderboard(LeaderboardSort::Id, PageRequest::new(2, 2).unwrap())
        .await
        .unwrap();

    let names: Vec<&str> = users.iter().map(|u| u.nickname.as_str()).collect();
    assert_that!(names, elements_are![eq(&"cy"), eq(&"di")]);
}

// =========================================================================
// End-to-end scenario
// =========================================================================

#[tokio::test]
async fn given_registration_tasks_and_referral_then_balances_follow_catalog() {
    let (_store, service) = setup();

    let al = register(&service, "al").await;
    let status = service.status(al).await.unwrap();
    assert_that!(status.score, eq(0));
    assert_that!(status.invited_by, none());

    service.task_complete(al, STEPS).await.unwrap();
    assert_that!(service.status(al).await.unwrap().score, eq(50));

    let bo = register(&service, "bo").await;
    service.invited_by(bo, al).await.unwrap();

    let bo_after = service.status(bo).await.unwrap();
    assert_that!(bo_after.score, eq(25));
    assert_that!(bo_after.invited_by, some(eq(al)));
    assert_that!(service.status(al).await.unwrap().score, eq(150));
}
