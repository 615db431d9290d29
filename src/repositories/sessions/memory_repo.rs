//! 테스트용 인메모리 세션 저장소

use std::collections::HashMap;
use std::sync::Mutex;
use async_trait::async_trait;
use crate::{
    config::AuthProvider,
    domain::models::auth::SessionUser,
    errors::AppError,
    repositories::sessions::{
        generate_oauth_state, generate_session_token, OAuthStateGrant, OAuthStateRecord, SessionStore,
    },
};

const STATE_SECRET: &str = "in-memory";

#[derive(Default)]
pub struct InMemorySessionRepository {
    sessions: Mutex<HashMap<String, SessionUser>>,
    states: Mutex<HashMap<String, OAuthStateRecord>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session_count(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionRepository {
    async fn create(&self, user: &SessionUser) -> Result<String, AppError> {
        let token = generate_session_token()?;
        self.sessions.lock().unwrap().insert(token.clone(), user.clone());
        Ok(token)
    }

    async fn get(&self, token: &str) -> Result<Option<SessionUser>, AppError> {
        Ok(self.sessions.lock().unwrap().get(token).cloned())
    }

    async fn destroy(&self, token: &str) -> Result<(), AppError> {
        self.sessions.lock().unwrap().remove(token);
        Ok(())
    }

    async fn issue_oauth_state(
        &self,
        provider: AuthProvider,
        session_token: Option<&str>,
    ) -> Result<String, AppError> {
        let state = generate_oauth_state();
        let record = OAuthStateRecord::new(STATE_SECRET, provider, session_token);
        self.states.lock().unwrap().insert(state.clone(), record);
        Ok(state)
    }

    async fn consume_oauth_state(
        &self,
        state: &str,
        session_token: Option<&str>,
    ) -> Result<Option<OAuthStateGrant>, AppError> {
        let record = self.states.lock().unwrap().remove(state);
        Ok(record.map(|record| record.grant(STATE_SECRET, session_token)))
    }
}
