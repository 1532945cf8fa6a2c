#[cfg(test)]
mod tests {
    use super::super::*;
    use secrecy::ExposeSecret;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_file_or_env() {
        let config = AppConfig::from_sources(None, env_of(&[])).unwrap();
        assert_eq!(config.server.bind_addr.to_string(), "127.0.0.1:8000");
        assert_eq!(config.llm.model, "gpt-4o-mini");
        assert_eq!(config.llm.base_url, "https://api.openai.com");
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_api_key_read_from_env() {
        let config = AppConfig::from_sources(None, env_of(&[("OPENAI_API_KEY", "sk-abc")])).unwrap();
        assert_eq!(config.openai_api_key.unwrap().expose_secret(), "sk-abc");
    }

    #[test]
    fn test_blank_api_key_is_degraded_mode() {
        let config = AppConfig::from_sources(None, env_of(&[("OPENAI_API_KEY", "  ")])).unwrap();
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_api_key_not_printed_by_debug() {
        let config = AppConfig::from_sources(None, env_of(&[("OPENAI_API_KEY", "sk-very-secret")])).unwrap();
        assert!(!format!("{:?}", config).contains("sk-very-secret"));
    }

    #[test]
    fn test_file_values_and_env_overrides() {
        let toml_text = r#"
            [server]
            bind_addr = "0.0.0.0:9000"

            [llm]
            model = "gpt-4o"
        "#;
        let config = AppConfig::from_sources(Some(toml_text), env_of(&[])).unwrap();
        assert_eq!(config.server.bind_addr.port(), 9000);
        assert_eq!(config.llm.model, "gpt-4o");
        assert_eq!(config.llm.base_url, "https://api.openai.com");

        let config = AppConfig::from_sources(
            Some(toml_text),
            env_of(&[
                ("SENTIMYX_MODEL", "gpt-4o-mini"),
                ("SENTIMYX_BIND_ADDR", "127.0.0.1:8080"),
                ("OPENAI_BASE_URL", "http://localhost:1234"),
            ]),
        )
        .unwrap();
        assert_eq!(config.llm.model, "gpt-4o-mini");
        assert_eq!(config.server.bind_addr.port(), 8080);
        assert_eq!(config.llm.base_url, "http://localhost:1234");
    }

    #[test]
    fn test_invalid_bind_addr_is_rejected() {
        let err = AppConfig::from_sources(None, env_of(&[("SENTIMYX_BIND_ADDR", "not-an-addr")]))
            .unwrap_err();
        assert!(err.to_string().contains("SENTIMYX_BIND_ADDR"));
    }

    #[test]
    fn test_malformed_file_is_rejected() {
        assert!(AppConfig::from_sources(Some("[server\nbind_addr = 1"), env_of(&[])).is_err());
    }
}
