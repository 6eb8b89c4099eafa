use ocelot_cors::{CorsPolicy, site};

#[derive(Clone)]
pub struct AppState {
    pub policy: &'static CorsPolicy,
    pub greeting: &'static str,
}

pub fn build_state() -> AppState {
    AppState {
        policy: site::policy(),
        greeting: "Ocelot Training course catalog",
    }
}

pub mod middleware;
