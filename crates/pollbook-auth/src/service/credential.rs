//! Credential store
//!
//! Operator accounts live in the `operators` table; passwords are stored as
//! bcrypt hashes. Verification reports only success or failure: an unknown
//! username and a wrong password are indistinguishable to the caller, so
//! the login endpoint cannot be used to enumerate usernames by response
//! shape. (bcrypt's verify provides the constant-time-equivalent
//! comparison; the hash-lookup miss is still marginally faster, which is a
//! documented limitation rather than a solved problem.)

use pollbook_persistence::entity::operators;
use sea_orm::*;

use crate::model::Operator;

const BCRYPT_COST: u32 = 10;

pub async fn find_by_username(
    db: &DatabaseConnection,
    username: &str,
) -> anyhow::Result<Option<Operator>> {
    let operator = operators::Entity::find_by_id(username)
        .one(db)
        .await?
        .map(Operator::from);

    Ok(operator)
}

/// Verify a plaintext password against the stored hash.
///
/// Returns false for unknown operators and for mismatches alike.
pub async fn verify(
    db: &DatabaseConnection,
    username: &str,
    plaintext: &str,
) -> anyhow::Result<bool> {
    match find_by_username(db, username).await? {
        Some(operator) => Ok(bcrypt::verify(plaintext, &operator.password).unwrap_or(false)),
        None => Ok(false),
    }
}

/// Hash a plaintext password for provisioning.
pub fn hash_password(plaintext: &str) -> anyhow::Result<String> {
    bcrypt::hash(plaintext, BCRYPT_COST)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))
}

/// Create an operator account. Fails if the username is already taken.
pub async fn create(db: &DatabaseConnection, username: &str, password: &str) -> anyhow::Result<()> {
    let hashed_password = hash_password(password)?;
    let entity = operators::ActiveModel {
        username: Set(username.to_string()),
        password: Set(hashed_password),
    };

    operators::Entity::insert(entity).exec(db).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pollbook_persistence::{connect, setup_schema};

    async fn test_db() -> DatabaseConnection {
        let db = connect("sqlite::memory:", 1).await.unwrap();
        setup_schema(&db).await.unwrap();
        db
    }

    #[tokio::test]
    async fn test_verify_known_operator() {
        let db = test_db().await;
        create(&db, "team_1", "team_1password").await.unwrap();

        assert!(verify(&db, "team_1", "team_1password").await.unwrap());
        assert!(!verify(&db, "team_1", "wrong").await.unwrap());
    }

    #[tokio::test]
    async fn test_verify_unknown_operator_is_plain_false() {
        let db = test_db().await;
        assert!(!verify(&db, "nobody", "whatever").await.unwrap());
    }

    #[tokio::test]
    async fn test_create_duplicate_fails() {
        let db = test_db().await;
        create(&db, "team_1", "pw").await.unwrap();
        assert!(create(&db, "team_1", "pw").await.is_err());
    }

    #[test]
    fn test_hash_is_not_plaintext() {
        let hash = hash_password("secret").unwrap();
        assert_ne!(hash, "secret");
        assert!(bcrypt::verify("secret", &hash).unwrap());
    }
}
