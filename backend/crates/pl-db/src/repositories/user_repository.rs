//! SQLite-backed `UserStore`.
//!
//! ## Referral claims
//!
//! `claim_referral` opens a transaction whose first statement is the
//! conditional write on `invited_by`. SQLite takes the write lock on that
//! statement, so concurrent claims for the same user serialize there and only
//! the first one sees `invited_by IS NULL`. Reading first and writing later
//! would open a read snapshot that cannot be upgraded once another writer
//! commits.

use crate::{DbError, Result as DbErrorResult};

use pl_core::{
    LeaderboardSort, NewUser, PageRequest, ReferralClaim, ReferralOutcome, StoreResult, User,
    UserId, UserStore,
};

use std::panic::Location;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use log::debug;
use sqlx::{FromRow, SqliteConnection, SqlitePool};

const USER_COLUMNS: &str = "id, nickname, email, score, registered, invited_by";

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    nickname: String,
    email: String,
    score: i64,
    registered: i64,
    invited_by: Option<i64>,
}

impl TryFrom<UserRow> for User {
    type Error = DbError;

    #[track_caller]
    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let registered = DateTime::<Utc>::from_timestamp(row.registered, 0).ok_or_else(|| {
            DbError::CorruptRow {
                table: "users",
                message: format!(
                    "user {} has out-of-range registered timestamp {}",
                    row.id, row.registered
                ),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        Ok(User {
            id: UserId(row.id),
            nickname: row.nickname,
            email: row.email,
            score: row.score,
            registered,
            invited_by: row.invited_by.map(UserId),
        })
    }
}

fn order_clause(sort: LeaderboardSort) -> &'static str {
    match sort {
        LeaderboardSort::Score => "score DESC, id ASC",
        LeaderboardSort::Nickname => "nickname ASC, id ASC",
        LeaderboardSort::Id => "id ASC",
    }
}

#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn insert(&self, user: &NewUser) -> DbErrorResult<User> {
        let registered = Utc::now().timestamp();

        let inserted = sqlx::query(
            r#"
                INSERT INTO users (nickname, email, score, registered)
                VALUES (?, ?, 0, ?)
                ON CONFLICT (nickname, email) DO NOTHING
            "#,
        )
        .bind(&user.nickname)
        .bind(&user.email)
        .bind(registered)
        .execute(&self.pool)
        .await?
        .rows_affected();

        if inserted == 0 {
            debug!("User {} <{}> already registered", user.nickname, user.email);
        }

        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE nickname = ? AND email = ?");
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(&user.nickname)
            .bind(&user.email)
            .fetch_one(&self.pool)
            .await?;

        User::try_from(row)
    }

    pub async fn find_by_id(&self, id: UserId) -> DbErrorResult<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?");
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await?;

        row.map(User::try_from).transpose()
    }

    pub async fn list(&self, sort: LeaderboardSort, page: PageRequest) -> DbErrorResult<Vec<User>> {
        let mut sql = format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY {}",
            order_clause(sort)
        );
        let limit_offset = page.limit_offset();
        if limit_offset.is_some() {
            sql.push_str(" LIMIT ? OFFSET ?");
        }

        let mut query = sqlx::query_as::<_, UserRow>(&sql);
        if let Some((limit, offset)) = limit_offset {
            query = query.bind(limit).bind(offset);
        }

        let rows = query.fetch_all(&self.pool).await?;
        rows.into_iter().map(User::try_from).collect()
    }

    /// Returns `false` when the user does not exist; a sum past `i64::MAX`
    /// fails with `ScoreOverflow` and leaves the score untouched.
    pub async fn add_points(&self, id: UserId, points: i64) -> DbErrorResult<bool> {
        let mut conn = self.pool.acquire().await?;
        let updated = Self::credit(&mut conn, id.get(), points).await?;
        Ok(updated == 1)
    }

    pub async fn claim_referral(&self, claim: &ReferralClaim) -> DbErrorResult<ReferralOutcome> {
        let user_id = claim.user_id.get();
        let referrer_id = claim.referrer_id.get();

        let mut tx = self.pool.begin().await?;

        let bound = sqlx::query(
            r#"
                UPDATE users SET invited_by = ?1
                WHERE id = ?2
                  AND invited_by IS NULL
                  AND EXISTS (SELECT 1 FROM users WHERE id = ?1)
            "#,
        )
        .bind(referrer_id)
        .bind(user_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if bound == 0 {
            // Nothing written; dropping `tx` rolls back.
            let outcome = if !Self::exists(&mut tx, user_id).await? {
                ReferralOutcome::UserNotFound
            } else if !Self::exists(&mut tx, referrer_id).await? {
                ReferralOutcome::ReferrerNotFound
            } else {
                ReferralOutcome::AlreadyInvited
            };
            return Ok(outcome);
        }

        for (id, points) in [
            (user_id, claim.invitee_points),
            (referrer_id, claim.referrer_points),
        ] {
            Self::credit(&mut tx, id, points).await?;
        }

        tx.commit().await?;
        Ok(ReferralOutcome::Claimed)
    }

    async fn credit(conn: &mut SqliteConnection, id: i64, points: i64) -> DbErrorResult<u64> {
        let result = sqlx::query("UPDATE users SET score = score + ? WHERE id = ?")
            .bind(points)
            .bind(id)
            .execute(&mut *conn)
            .await;

        match result {
            Ok(done) => Ok(done.rows_affected()),
            Err(sqlx::Error::Database(e)) if e.is_check_violation() => {
                Err(DbError::ScoreOverflow {
                    user_id: id,
                    location: ErrorLocation::from(Location::caller()),
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn exists(
        tx: &mut sqlx::Transaction<'static, sqlx::Sqlite>,
        id: i64,
    ) -> DbErrorResult<bool> {
        let found: Option<i64> = sqlx::query_scalar("SELECT id FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut **tx)
            .await?;
        Ok(found.is_some())
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn insert_user(&self, user: &NewUser) -> StoreResult<User> {
        Ok(self.insert(user).await?)
    }

    async fn get_user(&self, id: UserId) -> StoreResult<Option<User>> {
        Ok(self.find_by_id(id).await?)
    }

    async fn list_users(
        &self,
        sort: LeaderboardSort,
        page: PageRequest,
    ) -> StoreResult<Vec<User>> {
        Ok(self.list(sort, page).await?)
    }

    async fn add_points(&self, id: UserId, points: i64) -> StoreResult<bool> {
        Ok(UserRepository::add_points(self, id, points).await?)
    }

    async fn claim_referral(&self, claim: &ReferralClaim) -> StoreResult<ReferralOutcome> {
        Ok(UserRepository::claim_referral(self, claim).await?)
    }
}
