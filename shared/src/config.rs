use anyhow::Result;

const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_SESSION_COOKIE_NAME: &str = "session_token";

pub struct AppConfig {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub auth: AuthConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let database = DatabaseConfig {
            host: std::env::var("DATABASE_HOST")?,
            port: std::env::var("DATABASE_PORT")?.parse::<u16>()?,
            username: std::env::var("DATABASE_USERNAME")?,
            password: std::env::var("DATABASE_PASSWORD")?,
            database: std::env::var("DATABASE_NAME")?,
            max_connections: match std::env::var("DATABASE_MAX_CONNECTIONS") {
                Ok(v) => v.parse::<u32>()?,
                Err(_) => DEFAULT_MAX_CONNECTIONS,
            },
        };
        let server = ServerConfig {
            port: match std::env::var("PORT") {
                Ok(v) => v.parse::<u16>()?,
                Err(_) => DEFAULT_PORT,
            },
        };
        let auth = AuthConfig {
            cookie_name: std::env::var("SESSION_COOKIE_NAME")
                .unwrap_or_else(|_| DEFAULT_SESSION_COOKIE_NAME.into()),
        };
        Ok(Self {
            database,
            server,
            auth,
        })
    }
}

pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
    pub max_connections: u32,
}

pub struct ServerConfig {
    pub port: u16,
}

#[derive(Clone)]
pub struct AuthConfig {
    // Name of the cookie the session provider stores its token in.
    pub cookie_name: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            cookie_name: DEFAULT_SESSION_COOKIE_NAME.into(),
        }
    }
}
