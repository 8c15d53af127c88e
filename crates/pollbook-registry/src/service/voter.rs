//! Voter lookup and the guarded voted-transition

use chrono::{DateTime, Utc};
use pollbook_common::CHECKIN_TIMESTAMP_FORMAT;
use pollbook_persistence::entity::voters;
use sea_orm::sea_query::Expr;
use sea_orm::*;

use crate::model::CheckInError;

pub async fn find(db: &DatabaseConnection, number: &str) -> anyhow::Result<Option<voters::Model>> {
    let voter = voters::Entity::find_by_id(number).one(db).await?;

    Ok(voter)
}

/// Insert a roll entry. Used by bulk import; check-in never creates voters.
pub async fn create(db: &DatabaseConnection, number: &str, name: &str) -> anyhow::Result<()> {
    let entity = voters::ActiveModel {
        number: Set(number.to_string()),
        name: Set(name.to_string()),
        voted: Set(false),
        ..Default::default()
    };

    voters::Entity::insert(entity).exec(db).await?;

    Ok(())
}

/// Record that a voter has cast a ballot.
///
/// The transition is a single conditional UPDATE guarded on
/// `voted = false`, so it is atomic at the storage engine: two concurrent
/// attempts on the same number cannot both match, and exactly one wins.
/// A zero-row update means the guard failed; a follow-up read tells
/// `NotFound` apart from `AlreadyVoted`. The losing attempt never touches
/// the winner's ballot_box_id, running_number, timestamp, or operator.
pub async fn mark_voted(
    db: &DatabaseConnection,
    number: &str,
    ballot_box_id: &str,
    running_number: i32,
    operator: &str,
    now: DateTime<Utc>,
) -> Result<voters::Model, CheckInError> {
    let timestamp = now.format(CHECKIN_TIMESTAMP_FORMAT).to_string();

    let result = voters::Entity::update_many()
        .col_expr(voters::Column::Voted, Expr::value(true))
        .col_expr(voters::Column::BallotBoxId, Expr::value(ballot_box_id))
        .col_expr(voters::Column::RunningNumber, Expr::value(running_number))
        .col_expr(voters::Column::Timestamp, Expr::value(timestamp))
        .col_expr(voters::Column::CheckedInBy, Expr::value(operator))
        .filter(voters::Column::Number.eq(number))
        .filter(voters::Column::Voted.eq(false))
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        return match voters::Entity::find_by_id(number).one(db).await? {
            Some(_) => Err(CheckInError::AlreadyVoted(number.to_string())),
            None => Err(CheckInError::NotFound(number.to_string())),
        };
    }

    tracing::info!(number = %number, operator = %operator, "voter checked in");

    // Reload the committed record for the response
    voters::Entity::find_by_id(number)
        .one(db)
        .await?
        .ok_or_else(|| CheckInError::NotFound(number.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pollbook_persistence::entity::operators;
    use pollbook_persistence::{connect, setup_schema};
    use std::sync::Arc;

    const TEST_NUMBER: &str = "2456789";

    async fn test_db() -> DatabaseConnection {
        // A single pooled connection: every fresh in-memory SQLite
        // connection is a brand-new database.
        let db = connect("sqlite::memory:", 1).await.unwrap();
        setup_schema(&db).await.unwrap();
        // Satisfy the voters.checked_in_by -> operators.username FK
        operators::ActiveModel {
            username: Set("team_1".to_string()),
            password: Set("secret".to_string()),
        }
        .insert(&db)
        .await
        .unwrap();
        create(&db, TEST_NUMBER, "Werner Wusel").await.unwrap();
        db
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2021, 1, 18, 10, 10, 10).unwrap()
            + chrono::Duration::milliseconds(123)
    }

    #[tokio::test]
    async fn test_mark_voted_sets_all_fields() {
        let db = test_db().await;

        let voter = mark_voted(&db, TEST_NUMBER, "11", 7, "team_1", fixed_now())
            .await
            .unwrap();

        assert!(voter.voted);
        assert_eq!(voter.ballot_box_id.as_deref(), Some("11"));
        assert_eq!(voter.running_number, Some(7));
        assert_eq!(voter.timestamp.as_deref(), Some("2021-01-18T10:10:10.123Z"));
        assert_eq!(voter.checked_in_by.as_deref(), Some("team_1"));
    }

    #[tokio::test]
    async fn test_mark_voted_unknown_number() {
        let db = test_db().await;

        let err = mark_voted(&db, "0000000", "11", 7, "team_1", fixed_now())
            .await
            .unwrap_err();
        assert!(matches!(err, CheckInError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_mark_voted_twice_preserves_first_check_in() {
        let db = test_db().await;

        mark_voted(&db, TEST_NUMBER, "11", 7, "team_1", fixed_now())
            .await
            .unwrap();

        let err = mark_voted(&db, TEST_NUMBER, "9", 99, "team_2", Utc::now())
            .await
            .unwrap_err();
        assert!(matches!(err, CheckInError::AlreadyVoted(_)));

        let voter = find(&db, TEST_NUMBER).await.unwrap().unwrap();
        assert_eq!(voter.ballot_box_id.as_deref(), Some("11"));
        assert_eq!(voter.running_number, Some(7));
        assert_eq!(voter.timestamp.as_deref(), Some("2021-01-18T10:10:10.123Z"));
        assert_eq!(voter.checked_in_by.as_deref(), Some("team_1"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_concurrent_check_ins_yield_one_winner() {
        let db = Arc::new(test_db().await);

        let mut handles = Vec::new();
        for i in 0..16 {
            let db = db.clone();
            handles.push(tokio::spawn(async move {
                mark_voted(
                    &db,
                    TEST_NUMBER,
                    &format!("{}", i),
                    i,
                    "team_1",
                    Utc::now(),
                )
                .await
            }));
        }

        let mut successes = 0;
        let mut already_voted = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => successes += 1,
                Err(CheckInError::AlreadyVoted(_)) => already_voted += 1,
                Err(e) => panic!("unexpected error: {}", e),
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(already_voted, 15);
    }
}
