use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::editor::text::split_comma_trim;
use crate::editor::CollectionEditor;
use crate::errors::AppError;
use crate::models::portfolio::{PortfolioRecord, Profile};
use crate::models::seed::seed_record;
use crate::session::{Collection, Session};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
}

/// POST /api/v1/session/login
///
/// Cosmetic allow-list gate for the manage view. Not a security boundary.
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<StatusCode, AppError> {
    if !looks_like_email(&req.email) {
        return Err(AppError::Validation(
            "Please enter a valid email address.".to_string(),
        ));
    }
    let allowed = state
        .config
        .admin_emails
        .iter()
        .any(|email| email.eq_ignore_ascii_case(&req.email));
    if allowed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Unauthorized)
    }
}

fn looks_like_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

/// GET /api/v1/record
pub async fn handle_get_record(State(state): State<AppState>) -> Json<PortfolioRecord> {
    Json(state.session.lock().await.record.clone())
}

/// PUT /api/v1/record
pub async fn handle_put_record(
    State(state): State<AppState>,
    Json(record): Json<PortfolioRecord>,
) -> StatusCode {
    state.session.lock().await.replace_record(record);
    StatusCode::NO_CONTENT
}

/// PUT /api/v1/record/profile
pub async fn handle_put_profile(
    State(state): State<AppState>,
    Json(profile): Json<Profile>,
) -> StatusCode {
    state.session.lock().await.record.profile = profile;
    StatusCode::NO_CONTENT
}

#[derive(Debug, Deserialize)]
pub struct SkillsText {
    pub text: String,
}

/// PUT /api/v1/record/skills
///
/// The skills field is edited as one comma-separated line.
pub async fn handle_put_skills(
    State(state): State<AppState>,
    Json(req): Json<SkillsText>,
) -> Json<Vec<String>> {
    let mut session = state.session.lock().await;
    session.record.skills = split_comma_trim(&req.text);
    Json(session.record.skills.clone())
}

#[derive(Debug, Serialize)]
pub struct AppendResponse {
    pub index: usize,
    pub length: usize,
}

/// POST /api/v1/record/:collection/items
pub async fn handle_append_item(
    State(state): State<AppState>,
    Path(collection): Path<Collection>,
) -> Json<AppendResponse> {
    let mut session = state.session.lock().await;
    let Session { record, removal } = &mut *session;

    let index = match collection {
        Collection::Experience => {
            CollectionEditor::new(&mut record.experience, &mut removal.experience).append_blank()
        }
        Collection::Education => {
            CollectionEditor::new(&mut record.education, &mut removal.education).append_blank()
        }
        Collection::Projects => {
            CollectionEditor::new(&mut record.projects, &mut removal.projects).append_blank()
        }
        Collection::Links => {
            CollectionEditor::new(&mut record.profile.links, &mut removal.links).append_blank()
        }
    };

    Json(AppendResponse {
        index,
        length: index + 1,
    })
}

/// PUT /api/v1/record/:collection/items/:index
///
/// Body is the shape's form representation (multi-line and
/// comma-separated text fields).
pub async fn handle_update_item(
    State(state): State<AppState>,
    Path((collection, index)): Path<(Collection, usize)>,
    Json(body): Json<Value>,
) -> Result<StatusCode, AppError> {
    let mut session = state.session.lock().await;
    let Session { record, removal } = &mut *session;

    match collection {
        Collection::Experience => {
            CollectionEditor::new(&mut record.experience, &mut removal.experience)
                .update_form(index, parse_form(body)?)?
        }
        Collection::Education => {
            CollectionEditor::new(&mut record.education, &mut removal.education)
                .update_form(index, parse_form(body)?)?
        }
        Collection::Projects => {
            CollectionEditor::new(&mut record.projects, &mut removal.projects)
                .update_form(index, parse_form(body)?)?
        }
        Collection::Links => {
            CollectionEditor::new(&mut record.profile.links, &mut removal.links)
                .update_form(index, parse_form(body)?)?
        }
    }

    Ok(StatusCode::NO_CONTENT)
}

fn parse_form<F: serde::de::DeserializeOwned>(body: Value) -> Result<F, AppError> {
    serde_json::from_value(body)
        .map_err(|e| AppError::Validation(format!("invalid item payload: {e}")))
}

/// POST /api/v1/record/:collection/items/:index/remove
///
/// First phase of the two-phase delete: arms confirmation, mutates
/// nothing.
pub async fn handle_arm_removal(
    State(state): State<AppState>,
    Path((collection, index)): Path<(Collection, usize)>,
) -> Result<StatusCode, AppError> {
    let mut session = state.session.lock().await;
    let Session { record, removal } = &mut *session;

    match collection {
        Collection::Experience => {
            CollectionEditor::new(&mut record.experience, &mut removal.experience)
                .request_removal(index)?
        }
        Collection::Education => {
            CollectionEditor::new(&mut record.education, &mut removal.education)
                .request_removal(index)?
        }
        Collection::Projects => {
            CollectionEditor::new(&mut record.projects, &mut removal.projects)
                .request_removal(index)?
        }
        Collection::Links => {
            CollectionEditor::new(&mut record.profile.links, &mut removal.links)
                .request_removal(index)?
        }
    }

    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Serialize)]
pub struct RemovalOutcome {
    pub removed: bool,
    pub length: usize,
}

/// POST /api/v1/record/:collection/remove/confirm
///
/// Second phase: removes the armed index. A no-op when nothing is armed.
pub async fn handle_confirm_removal(
    State(state): State<AppState>,
    Path(collection): Path<Collection>,
) -> Json<RemovalOutcome> {
    let mut session = state.session.lock().await;
    let Session { record, removal } = &mut *session;

    let (removed, length) = match collection {
        Collection::Experience => {
            let mut editor =
                CollectionEditor::new(&mut record.experience, &mut removal.experience);
            (editor.confirm_removal().is_some(), editor.len())
        }
        Collection::Education => {
            let mut editor = CollectionEditor::new(&mut record.education, &mut removal.education);
            (editor.confirm_removal().is_some(), editor.len())
        }
        Collection::Projects => {
            let mut editor = CollectionEditor::new(&mut record.projects, &mut removal.projects);
            (editor.confirm_removal().is_some(), editor.len())
        }
        Collection::Links => {
            let mut editor = CollectionEditor::new(&mut record.profile.links, &mut removal.links);
            (editor.confirm_removal().is_some(), editor.len())
        }
    };

    Json(RemovalOutcome { removed, length })
}

/// POST /api/v1/record/:collection/remove/cancel
pub async fn handle_cancel_removal(
    State(state): State<AppState>,
    Path(collection): Path<Collection>,
) -> StatusCode {
    let mut session = state.session.lock().await;
    let Session { record, removal } = &mut *session;

    match collection {
        Collection::Experience => {
            CollectionEditor::new(&mut record.experience, &mut removal.experience)
                .cancel_removal()
        }
        Collection::Education => {
            CollectionEditor::new(&mut record.education, &mut removal.education).cancel_removal()
        }
        Collection::Projects => {
            CollectionEditor::new(&mut record.projects, &mut removal.projects).cancel_removal()
        }
        Collection::Links => {
            CollectionEditor::new(&mut record.profile.links, &mut removal.links).cancel_removal()
        }
    }

    StatusCode::NO_CONTENT
}

/// POST /api/v1/record/save
///
/// Commits the in-memory record to the store. The only way manual edits
/// reach persistence.
pub async fn handle_save_record(State(state): State<AppState>) -> StatusCode {
    let session = state.session.lock().await;
    state.store.save(&session.record);
    StatusCode::NO_CONTENT
}

/// DELETE /api/v1/record
///
/// Clears the slot and re-seeds the session with the built-in default.
/// The default is not persisted until the next explicit save.
pub async fn handle_delete_record(State(state): State<AppState>) -> StatusCode {
    state.store.clear();
    state.session.lock().await.replace_record(seed_record());
    StatusCode::NO_CONTENT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::extraction::ExtractionCapability;
    use crate::llm_client::{EncodedDocument, LlmError};
    use crate::store::PortfolioStore;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;
    use tempfile::TempDir;
    use tokio::sync::Mutex;

    struct NullExtractor;

    #[async_trait]
    impl ExtractionCapability for NullExtractor {
        async fn generate(&self, _document: &EncodedDocument) -> Result<String, LlmError> {
            Err(LlmError::EmptyContent)
        }
    }

    fn test_state(dir: &TempDir, record: PortfolioRecord) -> AppState {
        AppState {
            store: Arc::new(PortfolioStore::new(dir.path()).unwrap()),
            extractor: Arc::new(NullExtractor),
            session: Arc::new(Mutex::new(Session::new(record))),
            extracting: Arc::new(AtomicBool::new(false)),
            config: Config {
                gemini_api_key: "test-key".to_string(),
                data_dir: dir.path().to_path_buf(),
                admin_emails: vec!["admin@example.com".to_string()],
                port: 0,
                rust_log: "info".to_string(),
            },
        }
    }

    #[test]
    fn test_looks_like_email() {
        assert!(looks_like_email("admin@example.com"));
        assert!(!looks_like_email("admin"));
        assert!(!looks_like_email("admin@nodot"));
        assert!(!looks_like_email("admin@.com"));
        assert!(!looks_like_email("two words@example.com"));
        assert!(!looks_like_email("@example.com"));
    }

    #[tokio::test]
    async fn test_login_allows_listed_email_case_insensitively() {
        let dir = TempDir::new().unwrap();
        let state = test_state(&dir, PortfolioRecord::empty());

        let ok = handle_login(
            State(state.clone()),
            Json(LoginRequest {
                email: "Admin@Example.com".to_string(),
            }),
        )
        .await;
        assert_eq!(ok.unwrap(), StatusCode::NO_CONTENT);

        let denied = handle_login(
            State(state),
            Json(LoginRequest {
                email: "other@example.com".to_string(),
            }),
        )
        .await;
        assert!(matches!(denied, Err(AppError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_skills_edit_save_and_reload_scenario() {
        let dir = TempDir::new().unwrap();
        let mut record = PortfolioRecord::empty();
        record.skills = vec!["Python".to_string(), "SQL".to_string()];
        let state = test_state(&dir, record);

        let Json(skills) = handle_put_skills(
            State(state.clone()),
            Json(SkillsText {
                text: "Python, SQL, Go".to_string(),
            }),
        )
        .await;
        assert_eq!(skills, vec!["Python", "SQL", "Go"]);

        handle_save_record(State(state.clone())).await;
        let reloaded = state.store.load().unwrap();
        assert_eq!(reloaded.skills, vec!["Python", "SQL", "Go"]);
    }

    #[tokio::test]
    async fn test_append_update_confirm_flow() {
        let dir = TempDir::new().unwrap();
        let state = test_state(&dir, PortfolioRecord::empty());

        let Json(appended) =
            handle_append_item(State(state.clone()), Path(Collection::Experience)).await;
        assert_eq!(appended.index, 0);
        assert_eq!(appended.length, 1);

        let updated = handle_update_item(
            State(state.clone()),
            Path((Collection::Experience, 0)),
            Json(json!({
                "role": "Engineer",
                "company": "Acme",
                "period": "2020 - Present",
                "location": "Remote",
                "description": "Shipped widgets\nMentored juniors"
            })),
        )
        .await
        .unwrap();
        assert_eq!(updated, StatusCode::NO_CONTENT);

        {
            let session = state.session.lock().await;
            assert_eq!(
                session.record.experience[0].description,
                vec!["Shipped widgets", "Mentored juniors"]
            );
        }

        handle_arm_removal(State(state.clone()), Path((Collection::Experience, 0)))
            .await
            .unwrap();
        let Json(outcome) =
            handle_confirm_removal(State(state.clone()), Path(Collection::Experience)).await;
        assert!(outcome.removed);
        assert_eq!(outcome.length, 0);
    }

    #[tokio::test]
    async fn test_cancel_leaves_collection_untouched() {
        let dir = TempDir::new().unwrap();
        let mut record = PortfolioRecord::empty();
        record.profile.links.push(crate::models::portfolio::Link {
            name: "GitHub".to_string(),
            url: "https://github.com/".to_string(),
        });
        let state = test_state(&dir, record);

        handle_arm_removal(State(state.clone()), Path((Collection::Links, 0)))
            .await
            .unwrap();
        handle_cancel_removal(State(state.clone()), Path(Collection::Links)).await;

        let Json(outcome) =
            handle_confirm_removal(State(state.clone()), Path(Collection::Links)).await;
        assert!(!outcome.removed);
        assert_eq!(outcome.length, 1);
    }

    #[tokio::test]
    async fn test_update_out_of_range_is_rejected() {
        let dir = TempDir::new().unwrap();
        let state = test_state(&dir, PortfolioRecord::empty());

        let result = handle_update_item(
            State(state),
            Path((Collection::Links, 3)),
            Json(json!({"name": "x", "url": "y"})),
        )
        .await;
        assert!(matches!(result, Err(AppError::OutOfRange(_))));
    }

    #[tokio::test]
    async fn test_delete_record_clears_store_and_reseeds_session() {
        let dir = TempDir::new().unwrap();
        let state = test_state(&dir, PortfolioRecord::empty());
        state.store.save(&seed_record());

        handle_delete_record(State(state.clone())).await;

        assert!(state.store.load().is_none());
        let session = state.session.lock().await;
        assert_eq!(session.record, seed_record());
    }
}
