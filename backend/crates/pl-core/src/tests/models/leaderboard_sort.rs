use crate::LeaderboardSort;

#[test]
fn test_leaderboard_sort_from_key() {
    assert_eq!(LeaderboardSort::from_key("score"), LeaderboardSort::Score);
    assert_eq!(
        LeaderboardSort::from_key("nickname"),
        LeaderboardSort::Nickname
    );
    assert_eq!(LeaderboardSort::from_key("id"), LeaderboardSort::Id);
    assert_eq!(LeaderboardSort::from_key(" SCORE "), LeaderboardSort::Score);
}

#[test]
fn test_leaderboard_sort_unknown_key_falls_back_to_id() {
    assert_eq!(LeaderboardSort::from_key("karma"), LeaderboardSort::Id);
    assert_eq!(LeaderboardSort::from_key(""), LeaderboardSort::Id);
}

#[test]
fn test_leaderboard_sort_default() {
    assert_eq!(LeaderboardSort::default(), LeaderboardSort::Id);
}

#[test]
fn test_leaderboard_sort_deserialize_falls_back_instead_of_failing() {
    assert_eq!(deserialize_key("registered"), LeaderboardSort::Id);
    assert_eq!(deserialize_key("score"), LeaderboardSort::Score);
    assert_eq!(deserialize_key("nickname"), LeaderboardSort::Nickname);
}

fn deserialize_key(key: &str) -> LeaderboardSort {
    use serde::Deserialize;
    use serde::de::IntoDeserializer;
    use serde::de::value::{Error as ValueError, StrDeserializer};

    let deserializer: StrDeserializer<'_, ValueError> = key.into_deserializer();
    LeaderboardSort::deserialize(deserializer).unwrap()
}
