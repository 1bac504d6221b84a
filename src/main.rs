use crate::config::AppConfig;
use crate::router::handle;
use crate::state::AppState;
use astra::{Request, Server};
use std::time::Instant;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod config;
mod domain;
mod errors;
mod responses;
mod router;
mod services;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("propiz=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() {
    init_tracing();

    // 1️⃣ Configuration
    let config = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    // 2️⃣ Load the catalog and company data
    let state = match AppState::from_seed() {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "failed to load seed data");
            std::process::exit(1);
        }
    };
    info!(
        properties = state.properties.get_properties().len(),
        "catalog ready"
    );

    // 3️⃣ Start the server
    info!(addr = %config.addr, workers = config.max_workers, "starting server");
    let server = Server::bind(&config.addr).max_workers(config.max_workers);

    // 4️⃣ Serve requests, sharing the state with every worker
    let result = server.serve(move |req: Request, _info| {
        let started = Instant::now();
        let method = req.method().clone();
        let path = req.uri().path().to_owned();

        let resp = match handle(req, &state) {
            Ok(resp) => resp,
            Err(err) => responses::error_to_response(err),
        };

        info!(
            %method,
            %path,
            status = resp.status().as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "request"
        );
        resp
    });

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
    }

    info!("server shut down");
}
