//! Startup provisioning of the first admin account.

use helpdesk_core::admin::NewAdmin;
use helpdesk_core::auth::password::hash_password;
use helpdesk_core::error::CoreResult;
use helpdesk_core::store::AdminRepository;

/// Create the admin `email` with `password` unless it already exists.
///
/// Returns `true` if an account was created. An existing account is left
/// untouched, password included.
pub async fn ensure_admin(
    admins: &dyn AdminRepository,
    email: &str,
    password: &str,
) -> CoreResult<bool> {
    if admins.find_by_email(email).await?.is_some() {
        tracing::debug!(%email, "Bootstrap admin already present");
        return Ok(false);
    }

    let admin = admins
        .create(NewAdmin {
            email: email.to_string(),
            password_hash: hash_password(password)?,
        })
        .await?;

    tracing::info!(admin_id = admin.id, %email, "Bootstrap admin created");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use helpdesk_core::auth::password::verify_password;
    use helpdesk_core::store::MemoryStore;

    use super::*;

    #[tokio::test]
    async fn creates_once_and_keeps_existing_password() {
        let store = MemoryStore::new();

        assert!(ensure_admin(&store, "ops@corp.example", "first-pass").await.unwrap());
        assert!(!ensure_admin(&store, "ops@corp.example", "second-pass").await.unwrap());

        let admin = store
            .find_by_email("ops@corp.example")
            .await
            .unwrap()
            .expect("admin exists");
        assert!(verify_password("first-pass", &admin.password_hash).unwrap());
    }
}
