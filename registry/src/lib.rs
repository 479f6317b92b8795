use std::sync::Arc;

use adapter::repository::{
    event::EventRepositoryImpl, health::HealthCheckRepositoryImpl,
    session::SessionRepositoryImpl, user::UserRepositoryImpl,
};
use adapter::database::ConnectionPool;
use kernel::repository::{
    health::HealthCheckRepository, session::SessionRepository,
};
use kernel::service::EventRegistrationService;
use shared::config::{AppConfig, AuthConfig};

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    session_repository: Arc<dyn SessionRepository>,
    registration_service: EventRegistrationService,
    auth_config: AuthConfig,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool, app_config: AppConfig) -> Self {
        Self::with_auth_config(pool, app_config.auth)
    }

    pub fn with_auth_config(pool: ConnectionPool, auth_config: AuthConfig) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let event_repository = Arc::new(EventRepositoryImpl::new(pool.clone()));
        let user_repository = Arc::new(UserRepositoryImpl::new(pool.clone()));
        let session_repository = Arc::new(SessionRepositoryImpl::new(pool.clone()));
        let registration_service =
            EventRegistrationService::new(event_repository, user_repository);
        Self {
            health_check_repository,
            session_repository,
            registration_service,
            auth_config,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn session_repository(&self) -> Arc<dyn SessionRepository> {
        self.session_repository.clone()
    }

    pub fn registration_service(&self) -> EventRegistrationService {
        self.registration_service.clone()
    }

    pub fn auth_config(&self) -> &AuthConfig {
        &self.auth_config
    }
}
