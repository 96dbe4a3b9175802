use strum_macros::{Display, EnumIter, EnumString};

/// Environment tag variable, e.g. `SCHULBIB_APP_ENV=development`.
pub const ENV_APP_ENV: &str = "SCHULBIB_APP_ENV";

/// Explicit base URL override; wins over the per-environment default.
pub const ENV_API_BASE_URL: &str = "SCHULBIB_API_BASE_URL";

/// Deployment environments the dashboard can run against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Environment {
    /// Local mock backend, no real services required.
    #[default]
    Mock,
    Development,
    Test,
    Production,
}

/// Resolved once at startup and handed to the API client; never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub environment: Environment,
    pub api_base_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::resolve(
            std::env::var(ENV_APP_ENV).ok(),
            std::env::var(ENV_API_BASE_URL).ok(),
        )
    }

    /// Pure resolution from explicit inputs. A missing or unrecognized tag
    /// falls back to the mock environment.
    pub fn resolve(app_env: Option<String>, base_url_override: Option<String>) -> Self {
        let environment = app_env
            .as_deref()
            .and_then(|tag| tag.parse::<Environment>().ok())
            .unwrap_or_default();

        let api_base_url =
            base_url_override.unwrap_or_else(|| default_base_url(environment).to_string());

        Self {
            environment,
            api_base_url,
        }
    }

    pub fn is_mock(&self) -> bool {
        self.environment == Environment::Mock
    }

    pub fn environment_name(&self) -> String {
        self.environment.to_string()
    }
}

fn default_base_url(environment: Environment) -> &'static str {
    match environment {
        Environment::Mock => "http://localhost:4010",
        Environment::Development => "http://localhost:8080",
        Environment::Test => "http://localhost:9080",
        Environment::Production => "https://api.schulbibliothek.de",
    }
}
