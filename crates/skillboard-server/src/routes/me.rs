use axum::{extract::State, Json};
use skillboard_core::identity::{current_user_or_none, Identity};

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/me: the signed-in user for the header, or `null` when no
/// identity is configured.
pub async fn get_me(State(app): State<AppState>) -> Result<Json<Option<Identity>>, AppError> {
    let identity = app.identity.clone();
    let me = tokio::task::spawn_blocking(move || current_user_or_none(&*identity))
        .await
        .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))?;
    Ok(Json(me))
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillboard_core::config::Config;
    use skillboard_core::identity::ConfiguredIdentity;
    use skillboard_core::store::MemoryStore;
    use std::sync::Arc;

    fn app_at(dir: &tempfile::TempDir) -> AppState {
        let root = dir.path().to_path_buf();
        let identity = Arc::new(ConfiguredIdentity::with_user_file(
            &root,
            root.join("missing-user.yaml"),
        ));
        AppState::with_collaborators(root, Arc::new(MemoryStore::default()), identity)
    }

    #[tokio::test]
    async fn no_identity_is_null() {
        let dir = tempfile::TempDir::new().unwrap();
        let me = get_me(State(app_at(&dir))).await.unwrap();
        assert!(me.0.is_none());
    }

    #[tokio::test]
    async fn configured_identity_is_returned() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut cfg = Config::new("board");
        cfg.identity = Some(Identity {
            display_name: "Ada Lovelace".into(),
            avatar_url: None,
            email_address: "ada@example.com".into(),
        });
        cfg.save(dir.path()).unwrap();

        let me = get_me(State(app_at(&dir))).await.unwrap();
        assert_eq!(me.0.unwrap().display_name, "Ada Lovelace");
    }
}
