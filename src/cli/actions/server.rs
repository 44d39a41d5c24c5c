use crate::cli::actions::Action;
use crate::custodia::{auth::config::AuthConfig, new};
use anyhow::Result;
use url::Url;

/// Handle the server action
pub async fn handle(action: Action) -> Result<()> {
    match action {
        Action::Server {
            port,
            dsn,
            session_ttl,
            cookie_secure,
        } => {
            // Fail early on an unparseable DSN instead of inside the pool
            let dsn = Url::parse(&dsn)?;

            let config = AuthConfig::new()
                .with_session_ttl_seconds(session_ttl)
                .with_cookie_secure(cookie_secure);

            new(port, dsn.to_string(), config).await?;
        }
    }

    Ok(())
}
