pub mod server;

/// Actions the CLI can dispatch to
#[derive(Debug)]
pub enum Action {
    Server {
        port: u16,
        dsn: String,
        session_ttl: i64,
        cookie_secure: bool,
    },
}
