// ============================================================================
// SESSION STORE - Ciclo de vida de la sesión de usuario
// ============================================================================
// El estado evoluciona con eventos a través de un reducer puro; los efectos
// (HTTP, localStorage) quedan en los métodos async del store. Invariante:
// `is_authenticated` equivale a tener token, con o sin perfil cargado.
// ============================================================================

use std::rc::Rc;

use crate::error::ApiError;
use crate::models::User;
use crate::services::ApiClient;
use crate::state::reactivity::{ReactiveState, SubscriptionId};
use crate::utils::storage;

#[derive(Clone, PartialEq, Debug)]
pub struct AuthSnapshot {
    pub token: Option<String>,
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl Default for AuthSnapshot {
    fn default() -> Self {
        Self {
            token: None,
            user: None,
            is_authenticated: false,
            is_loading: false,
            error: None,
        }
    }
}

#[derive(Clone, Debug)]
pub enum AuthEvent {
    /// Arranca un login o registro
    Started,
    Authenticated { token: String, user: User },
    Failed(String),
    LoggedOut,
    /// El backend rechazó el token que llevábamos
    TokenRejected,
    UserUpdated(User),
    ErrorCleared,
}

/// Reducer puro: cada evento produce el siguiente snapshot
pub fn reduce(state: &AuthSnapshot, event: AuthEvent) -> AuthSnapshot {
    match event {
        AuthEvent::Started => AuthSnapshot {
            is_loading: true,
            error: None,
            ..state.clone()
        },
        AuthEvent::Authenticated { token, user } => AuthSnapshot {
            token: Some(token),
            user: Some(user),
            is_authenticated: true,
            is_loading: false,
            error: None,
        },
        AuthEvent::Failed(message) => AuthSnapshot {
            token: None,
            user: None,
            is_authenticated: false,
            is_loading: false,
            error: Some(message),
        },
        AuthEvent::LoggedOut | AuthEvent::TokenRejected => AuthSnapshot::default(),
        AuthEvent::UserUpdated(user) => {
            // sin token no hay sesión que actualizar
            if state.token.is_none() {
                state.clone()
            } else {
                AuthSnapshot {
                    user: Some(user),
                    ..state.clone()
                }
            }
        }
        AuthEvent::ErrorCleared => AuthSnapshot {
            error: None,
            ..state.clone()
        },
    }
}

#[derive(Clone)]
pub struct SessionStore {
    state: Rc<ReactiveState<AuthSnapshot>>,
    api: ApiClient,
}

impl SessionStore {
    /// Al crearse restaura el token persistido de forma optimista; el
    /// perfil llega después vía `bootstrap`.
    pub fn new() -> Self {
        let mut initial = AuthSnapshot::default();
        if let Some(token) = storage::load_token() {
            log::info!("🔑 Token persistido encontrado, restaurando sesión");
            initial.token = Some(token);
            initial.is_authenticated = true;
        }
        Self {
            state: Rc::new(ReactiveState::new(initial)),
            api: ApiClient::new(),
        }
    }

    pub fn snapshot(&self) -> AuthSnapshot {
        self.state.snapshot()
    }

    pub fn token(&self) -> Option<String> {
        self.state.snapshot().token
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + 'static,
    {
        self.state.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.state.unsubscribe(id);
    }

    fn dispatch(&self, event: AuthEvent) {
        self.state.update(|state| *state = reduce(state, event));
    }

    /// Valida el token restaurado pidiendo el perfil. Cualquier fallo
    /// (red incluida) descarta el token en vez de dejar una sesión coja.
    pub async fn bootstrap(&self) {
        let Some(token) = self.token() else {
            return;
        };
        match self.api.get_profile(&token).await {
            Ok(user) => {
                log::info!("✅ Sesión restaurada: {}", user.username);
                self.dispatch(AuthEvent::UserUpdated(user));
            }
            Err(error) => {
                log::warn!("⚠️ No se pudo restaurar la sesión: {}", error);
                self.token_rejected();
            }
        }
    }

    /// El error de login no se propaga: queda en el estado para la vista
    pub async fn login(&self, username: &str, password: &str) {
        self.dispatch(AuthEvent::Started);
        match self.api.login(username, password).await {
            Ok(response) => {
                if let Err(e) = storage::save_token(&response.access_token) {
                    log::warn!("⚠️ {}", e);
                }
                self.dispatch(AuthEvent::Authenticated {
                    token: response.access_token,
                    user: response.user,
                });
            }
            Err(error) => {
                log::warn!("❌ Login fallido: {}", error);
                self.dispatch(AuthEvent::Failed(error.user_message()));
            }
        }
    }

    /// Registro seguido de login automático con las mismas credenciales.
    /// Además de dejar el error en el estado, se devuelve al llamante
    /// para que el formulario pueda reaccionar.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        self.dispatch(AuthEvent::Started);
        if let Err(error) = self.api.register(username, email, password).await {
            log::warn!("❌ Registro fallido: {}", error);
            self.dispatch(AuthEvent::Failed(error.user_message()));
            return Err(error);
        }
        match self.api.login(username, password).await {
            Ok(response) => {
                if let Err(e) = storage::save_token(&response.access_token) {
                    log::warn!("⚠️ {}", e);
                }
                self.dispatch(AuthEvent::Authenticated {
                    token: response.access_token,
                    user: response.user,
                });
                Ok(())
            }
            Err(error) => {
                log::warn!("❌ Login tras registro fallido: {}", error);
                self.dispatch(AuthEvent::Failed(error.user_message()));
                Err(error)
            }
        }
    }

    /// Avisa al backend si se puede; la limpieza local ocurre siempre
    pub async fn logout(&self) {
        if let Some(token) = self.token() {
            if let Err(error) = self.api.logout(&token).await {
                log::warn!("⚠️ Logout en backend falló: {}", error);
            }
        }
        if let Err(e) = storage::remove_token() {
            log::warn!("⚠️ {}", e);
        }
        self.dispatch(AuthEvent::LoggedOut);
        log::info!("👋 Sesión cerrada");
    }

    /// Cualquier 401 con token en vuelo acaba aquí
    pub fn token_rejected(&self) {
        log::warn!("🔒 Token rechazado por el backend, limpiando sesión");
        if let Err(e) = storage::remove_token() {
            log::warn!("⚠️ {}", e);
        }
        self.dispatch(AuthEvent::TokenRejected);
    }

    pub fn update_user(&self, user: User) {
        self.dispatch(AuthEvent::UserUpdated(user));
    }

    pub fn clear_error(&self) {
        self.dispatch(AuthEvent::ErrorCleared);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: 7,
            username: "ana".to_string(),
            email: "ana@example.com".to_string(),
            role: "user".to_string(),
            is_active: true,
            created_at: Some("2024-01-15T10:30:00".to_string()),
            last_login: None,
        }
    }

    fn authenticated() -> AuthSnapshot {
        reduce(
            &AuthSnapshot::default(),
            AuthEvent::Authenticated {
                token: "tok".to_string(),
                user: sample_user(),
            },
        )
    }

    #[test]
    fn started_sets_loading_and_clears_previous_error() {
        let errored = reduce(&AuthSnapshot::default(), AuthEvent::Failed("nope".to_string()));
        let state = reduce(&errored, AuthEvent::Started);
        assert!(state.is_loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn failed_login_lands_in_error_state() {
        let started = reduce(&AuthSnapshot::default(), AuthEvent::Started);
        let state = reduce(&started, AuthEvent::Failed("Invalid credentials".to_string()));
        assert!(!state.is_authenticated);
        assert_eq!(state.token, None);
        assert_eq!(state.user, None);
        assert!(!state.is_loading);
        assert_eq!(state.error.as_deref(), Some("Invalid credentials"));
    }

    #[test]
    fn authenticated_always_means_token_present() {
        let state = authenticated();
        assert_eq!(state.is_authenticated, state.token.is_some());
        assert_eq!(state.error, None);
        assert!(!state.is_loading);
    }

    #[test]
    fn update_user_is_a_no_op_without_session() {
        let state = reduce(&AuthSnapshot::default(), AuthEvent::UserUpdated(sample_user()));
        assert_eq!(state, AuthSnapshot::default());
    }

    #[test]
    fn update_user_replaces_the_profile() {
        let mut changed = sample_user();
        changed.email = "nueva@example.com".to_string();
        let state = reduce(&authenticated(), AuthEvent::UserUpdated(changed.clone()));
        assert_eq!(state.user, Some(changed));
        assert!(state.is_authenticated);
    }

    #[test]
    fn hydrated_session_fills_profile_later() {
        // al restaurar desde localStorage hay token pero aún no hay perfil
        let hydrated = AuthSnapshot {
            token: Some("persisted".to_string()),
            is_authenticated: true,
            ..AuthSnapshot::default()
        };
        assert_eq!(hydrated.is_authenticated, hydrated.token.is_some());

        let state = reduce(&hydrated, AuthEvent::UserUpdated(sample_user()));
        assert_eq!(state.user.as_ref().map(|u| u.id), Some(7));
        assert_eq!(state.token.as_deref(), Some("persisted"));
    }

    #[test]
    fn token_rejection_resets_everything() {
        let state = reduce(&authenticated(), AuthEvent::TokenRejected);
        assert_eq!(state, AuthSnapshot::default());
    }

    #[test]
    fn logout_resets_everything() {
        let state = reduce(&authenticated(), AuthEvent::LoggedOut);
        assert_eq!(state, AuthSnapshot::default());
    }

    #[test]
    fn clearing_the_error_keeps_the_rest() {
        let errored = reduce(&authenticated(), AuthEvent::ErrorCleared);
        assert_eq!(errored, authenticated());

        let failed = reduce(&AuthSnapshot::default(), AuthEvent::Failed("x".to_string()));
        let cleared = reduce(&failed, AuthEvent::ErrorCleared);
        assert_eq!(cleared.error, None);
        assert!(!cleared.is_authenticated);
    }
}
