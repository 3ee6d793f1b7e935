//! Tests for configuration validation

#[cfg(test)]
mod tests {
    use super::super::trait_def::Validate;
    use crate::auth::password::{PasswordEncoding, hash_password};
    use crate::config::models::*;

    fn user(name: &str) -> UserConfig {
        UserConfig {
            username: name.to_string(),
            password: "secret".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_server_config_validation() {
        let mut config = ServerConfig::default();
        assert!(Validate::validate(&config).is_ok());

        config.port = 0;
        assert!(Validate::validate(&config).is_err());

        config.port = 8080;
        config.host = "".to_string();
        assert!(Validate::validate(&config).is_err());
    }

    #[test]
    fn test_token_config_validation() {
        let mut config = TokenConfig::default();
        assert!(config.validate().is_ok());

        config.ttl_secs = 0;
        assert!(config.validate().is_err());

        config.ttl_secs = 60;
        config.sweep_interval_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_filter_config_validation() {
        let mut config = FilterConfig::default();
        assert!(config.validate().is_ok());

        config.processes_url = "api/**".to_string();
        assert!(config.validate().is_err());

        config.processes_url = "/api/**".to_string();
        config.logout_url = config.login_url.clone();
        assert!(config.validate().is_err());

        config.logout_url = "/token/logout".to_string();
        config.ignored_urls = vec!["health".to_string()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_acl_rule_validation() {
        let mut config = AclConfig::default();
        config.rules.push(AclRuleConfig {
            pattern: "/api/reports/**".to_string(),
            roles: vec!["reader".to_string()],
            ..Default::default()
        });
        assert!(config.validate().is_ok());

        config.rules.push(AclRuleConfig {
            pattern: "reports".to_string(),
            ..Default::default()
        });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_duplicate_users_rejected() {
        let users = vec![user("alice"), user("bob")];
        assert!(users.validate().is_ok());

        let users = vec![user("alice"), user("alice")];
        let err = users.validate().unwrap_err();
        assert!(err.contains("Duplicate username"));
    }

    #[test]
    fn test_argon2_user_requires_phc_hash() {
        let mut alice = user("alice");
        alice.password_encoding = PasswordEncoding::Argon2;
        assert!(alice.validate().is_err());

        alice.password = hash_password("secret").unwrap();
        assert!(alice.validate().is_ok());
    }

    #[test]
    fn test_default_security_config_is_valid() {
        assert!(SecurityConfig::default().validate().is_ok());
    }
}
