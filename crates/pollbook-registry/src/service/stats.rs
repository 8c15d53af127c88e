//! Read-only check-in statistics

use std::collections::BTreeMap;

use pollbook_common::HOUR_BUCKET_LEN;
use pollbook_persistence::entity::voters;
use sea_orm::*;

/// Count completed check-ins per hour bucket, ascending by bucket.
///
/// Buckets are the `YYYY-MM-DDTHH` prefix of the stored timestamp. The
/// query runs concurrently with check-ins and may miss an in-flight
/// transition; it is internally consistent, not linearizable.
pub async fn hourly_counts(db: &DatabaseConnection) -> anyhow::Result<BTreeMap<String, u64>> {
    let timestamps = voters::Entity::find()
        .select_only()
        .column(voters::Column::Timestamp)
        .filter(voters::Column::Voted.eq(true))
        .filter(voters::Column::Timestamp.is_not_null())
        .into_tuple::<String>()
        .all(db)
        .await?;

    let mut buckets = BTreeMap::new();
    for timestamp in timestamps {
        match timestamp.get(..HOUR_BUCKET_LEN) {
            Some(bucket) => *buckets.entry(bucket.to_string()).or_insert(0u64) += 1,
            None => {
                tracing::warn!(timestamp = %timestamp, "skipping malformed check-in timestamp")
            }
        }
    }

    Ok(buckets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::voter;
    use chrono::{TimeZone, Utc};
    use pollbook_persistence::{connect, setup_schema};

    #[tokio::test]
    async fn test_hourly_counts_empty_roll() {
        let db = connect("sqlite::memory:", 1).await.unwrap();
        setup_schema(&db).await.unwrap();

        let counts = hourly_counts(&db).await.unwrap();
        assert!(counts.is_empty());
    }

    #[tokio::test]
    async fn test_hourly_counts_buckets_ascending() {
        let db = connect("sqlite::memory:", 1).await.unwrap();
        setup_schema(&db).await.unwrap();

        // Satisfy the voters.checked_in_by -> operators.username FK
        pollbook_persistence::entity::operators::ActiveModel {
            username: Set("team_1".to_string()),
            password: Set("secret".to_string()),
        }
        .insert(&db)
        .await
        .unwrap();

        for (number, hour) in [("1", 10), ("2", 10), ("3", 9)] {
            voter::create(&db, number, "Voter").await.unwrap();
            let now = Utc.with_ymd_and_hms(2021, 1, 18, hour, 30, 0).unwrap();
            voter::mark_voted(&db, number, "11", 1, "team_1", now)
                .await
                .unwrap();
        }
        // Unvoted voters never show up
        voter::create(&db, "4", "Voter").await.unwrap();

        let counts = hourly_counts(&db).await.unwrap();
        let entries: Vec<(String, u64)> = counts.into_iter().collect();
        assert_eq!(
            entries,
            vec![
                ("2021-01-18T09".to_string(), 1),
                ("2021-01-18T10".to_string(), 2),
            ]
        );
    }
}
