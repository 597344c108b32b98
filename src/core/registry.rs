//! # Strategy Registry
//!
//! 이름으로 인증 전략을 등록하고 찾는 호스트 측 레지스트리입니다.
//! 애플리케이션 시작 시 한 번 전략을 등록하고, 요청 처리 중에는 읽기만 합니다.
//!
//! ```rust,ignore
//! let registry = StrategyRegistry::new();
//! registry.use_strategy(Arc::new(IfstaStrategy::with_defaults(options, verify)?));
//!
//! let outcome = registry.authenticate("ifsta", TokenGrant::new(token)).await?;
//! ```

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::core::strategy::Strategy;
use crate::domain::models::oauth::ifsta_oauth_model::{AuthOutcome, TokenGrant};
use crate::errors::{AppError, AppResult};

pub type SharedStrategy<U> = Arc<dyn Strategy<User = U>>;

pub struct StrategyRegistry<U: Send + 'static> {
    strategies: RwLock<HashMap<String, SharedStrategy<U>>>,
}

impl<U: Send + 'static> StrategyRegistry<U> {
    pub fn new() -> Self {
        Self {
            strategies: RwLock::new(HashMap::new()),
        }
    }

    /// 전략 자신의 이름으로 등록합니다. 같은 이름이 있으면 교체합니다.
    pub fn use_strategy(&self, strategy: SharedStrategy<U>) {
        let name = strategy.name().to_string();
        self.use_named(name, strategy);
    }

    /// 지정한 이름으로 등록합니다.
    pub fn use_named(&self, name: impl Into<String>, strategy: SharedStrategy<U>) {
        let name = name.into();
        log::info!("인증 전략 등록: {}", name);

        let mut strategies = self.strategies.write().unwrap_or_else(PoisonError::into_inner);
        if strategies.insert(name.clone(), strategy).is_some() {
            log::warn!("기존 인증 전략을 교체했습니다: {}", name);
        }
    }

    /// 등록을 해제합니다. 해제된 전략이 있으면 `true`
    pub fn unuse(&self, name: &str) -> bool {
        let mut strategies = self.strategies.write().unwrap_or_else(PoisonError::into_inner);
        strategies.remove(name).is_some()
    }

    pub fn get(&self, name: &str) -> AppResult<SharedStrategy<U>> {
        let strategies = self.strategies.read().unwrap_or_else(PoisonError::into_inner);
        strategies
            .get(name)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Unknown authentication strategy \"{}\"", name)))
    }

    /// 등록된 전략 이름 (정렬됨)
    pub fn names(&self) -> Vec<String> {
        let strategies = self.strategies.read().unwrap_or_else(PoisonError::into_inner);
        let mut names: Vec<String> = strategies.keys().cloned().collect();
        names.sort();
        names
    }

    /// 이름으로 전략을 찾아 인증을 수행합니다.
    pub async fn authenticate(&self, name: &str, grant: TokenGrant) -> AppResult<AuthOutcome<U>> {
        let strategy = self.get(name)?;
        strategy.authenticate(grant).await
    }
}

impl<U: Send + 'static> Default for StrategyRegistry<U> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::oauth::ifsta_oauth_model::Profile;
    use async_trait::async_trait;
    use serde_json::json;

    struct FixedStrategy {
        name: &'static str,
    }

    #[async_trait]
    impl Strategy for FixedStrategy {
        type User = String;

        fn name(&self) -> &str {
            self.name
        }

        fn authorization_url(&self, state: &str, _scope: Option<&str>) -> String {
            format!("https://{}.example.org/authorize?state={}", self.name, state)
        }

        async fn user_profile(&self, access_token: &str) -> AppResult<Profile> {
            Ok(Profile {
                id: Some(json!(access_token)),
                provider: Some(self.name.to_string()),
                ..Default::default()
            })
        }

        async fn authenticate(&self, grant: TokenGrant) -> AppResult<AuthOutcome<String>> {
            let profile = self.user_profile(&grant.access_token).await?;
            Ok(profile.id_string().into())
        }
    }

    #[test]
    fn test_register_and_lookup_by_name() {
        let registry: StrategyRegistry<String> = StrategyRegistry::new();
        registry.use_strategy(Arc::new(FixedStrategy { name: "ifsta" }));
        registry.use_named("ifsta-staging", Arc::new(FixedStrategy { name: "ifsta" }));

        assert_eq!(registry.names(), vec!["ifsta".to_string(), "ifsta-staging".to_string()]);
        assert_eq!(registry.get("ifsta").unwrap().name(), "ifsta");
    }

    #[test]
    fn test_unknown_strategy_is_not_found() {
        let registry: StrategyRegistry<String> = StrategyRegistry::new();

        match registry.get("github") {
            Err(AppError::NotFound(msg)) => assert!(msg.contains("github")),
            Err(other) => panic!("Expected NotFound, got {:?}", other),
            Ok(_) => panic!("Expected NotFound"),
        }
    }

    #[test]
    fn test_unuse_removes_strategy() {
        let registry: StrategyRegistry<String> = StrategyRegistry::new();
        registry.use_strategy(Arc::new(FixedStrategy { name: "ifsta" }));

        assert!(registry.unuse("ifsta"));
        assert!(!registry.unuse("ifsta"));
        assert!(registry.names().is_empty());
    }

    #[actix_web::test]
    async fn test_authenticate_dispatches_to_named_strategy() {
        let registry: StrategyRegistry<String> = StrategyRegistry::new();
        registry.use_strategy(Arc::new(FixedStrategy { name: "ifsta" }));

        let outcome = registry
            .authenticate("ifsta", TokenGrant::new("user-7"))
            .await
            .unwrap();

        assert_eq!(outcome, AuthOutcome::Success("user-7".to_string()));
    }
}
