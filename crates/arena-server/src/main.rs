//! Arena Server — application entry point.
//!
//! Wires the in-memory store, the authentication service and the
//! domain services together. Configuration comes from the
//! environment: `ARENA_JWT_SECRET` (required) and
//! `ARENA_ACCESS_TOKEN_TTL_SECS` (optional, default 3600).

use arena_auth::{AuthConfig, AuthService};
use arena_domain::{
    CompetitionService, MatchService, ParticipantService, UserService, VenueService,
};
use arena_store::{
    MemoryCompetitionRepository, MemoryDb, MemoryMatchRepository, MemoryParticipantRepository,
    MemoryUserRepository, MemoryVenueRepository,
};
use tracing_subscriber::EnvFilter;

const DEFAULT_ACCESS_TOKEN_TTL_SECS: u64 = 3600;

fn load_config() -> Result<AuthConfig, String> {
    let jwt_secret =
        std::env::var("ARENA_JWT_SECRET").map_err(|_| "ARENA_JWT_SECRET is not set".to_string())?;

    let access_ttl = match std::env::var("ARENA_ACCESS_TOKEN_TTL_SECS") {
        Ok(raw) => raw
            .parse::<u64>()
            .map_err(|_| format!("invalid ARENA_ACCESS_TOKEN_TTL_SECS: {raw}"))?,
        Err(_) => DEFAULT_ACCESS_TOKEN_TTL_SECS,
    };

    Ok(AuthConfig::new(jwt_secret, access_ttl))
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("arena=info".parse().unwrap()))
        .json()
        .init();

    tracing::info!("Starting Arena server...");

    let config = match load_config() {
        Ok(config) => config,
        Err(message) => {
            tracing::error!(%message, "configuration error");
            std::process::exit(1);
        }
    };

    let db = MemoryDb::new();
    let users = MemoryUserRepository::new(db.clone());

    let _auth = AuthService::new(users.clone(), config);
    let _users = UserService::new(users.clone());
    let _venues = VenueService::new(MemoryVenueRepository::new(db.clone()));
    let _competitions = CompetitionService::new(
        MemoryCompetitionRepository::new(db.clone()),
        users.clone(),
        MemoryVenueRepository::new(db.clone()),
    );
    let _matches = MatchService::new(MemoryMatchRepository::new(db.clone()), users.clone());
    let _participants =
        ParticipantService::new(MemoryParticipantRepository::new(db.clone()), users.clone());

    tracing::info!("Arena server ready.");

    // TODO: mount the HTTP layer once the transport crate lands.

    tracing::info!("Arena server stopped.");
}
