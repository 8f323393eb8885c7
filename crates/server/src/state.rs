use shared::{
    abstract_trait::{DynHashing, DynJwtService},
    config::{Config, ConnectionPool, Hashing, JwtConfig},
    di::{DependenciesInject, DependenciesInjectDeps},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub jwt_config: DynJwtService,
    pub di_container: DependenciesInject,
}

impl AppState {
    pub fn new(pool: ConnectionPool, config: &Config) -> Self {
        let jwt_config = Arc::new(JwtConfig::new(&config.jwt_secret)) as DynJwtService;
        let hash = Arc::new(Hashing::new()) as DynHashing;

        let di_container = DependenciesInject::new(DependenciesInjectDeps {
            pool,
            hash,
            jwt_config: jwt_config.clone(),
            translate: config.translate.clone(),
        });

        Self {
            jwt_config,
            di_container,
        }
    }
}
