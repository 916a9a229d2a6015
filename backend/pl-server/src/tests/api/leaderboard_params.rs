use crate::{ApiError, LeaderboardParams};

use pl_core::LeaderboardSort;

#[test]
fn test_empty_params_return_everything_by_id() {
    let (sort, page) = LeaderboardParams::default().resolve().unwrap();

    assert_eq!(sort, LeaderboardSort::Id);
    assert_eq!(page.size(), 0);
    assert_eq!(page.limit_offset(), None);
}

#[test]
fn test_score_sort_with_page_and_size() {
    let params = LeaderboardParams {
        sort_by: Some("Score".into()),
        page: Some(3),
        size: Some(10),
    };

    let (sort, page) = params.resolve().unwrap();

    assert_eq!(sort, LeaderboardSort::Score);
    assert_eq!(page.limit_offset(), Some((10, 20)));
}

#[test]
fn test_unknown_sort_key_falls_back_to_id() {
    let params = LeaderboardParams {
        sort_by: Some("karma".into()),
        ..LeaderboardParams::default()
    };

    let (sort, _) = params.resolve().unwrap();

    assert_eq!(sort, LeaderboardSort::Id);
}

#[test]
fn test_page_zero_with_size_is_rejected() {
    let params = LeaderboardParams {
        sort_by: None,
        page: Some(0),
        size: Some(5),
    };

    let result = params.resolve();

    assert!(matches!(
        result,
        Err(ApiError::Validation { field: Some(ref f), .. }) if f == "page"
    ));
}
