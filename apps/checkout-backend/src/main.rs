use checkout_backend::config::http::HttpConfig;
use checkout_backend::server::CheckoutServer;
use checkout_backend::telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - Docker: Set via docker-compose env_file or docker run --env-file
    // - Local dev: Source env files manually (e.g., set -a; . ./.env; set +a)
    let config = match HttpConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Invalid HTTP configuration: {e}");
            std::process::exit(1);
        }
    };

    println!(
        "🚀 Starting Checkout Backend on http://{}:{}",
        config.host, config.port
    );

    let server = match CheckoutServer::bind(&config) {
        Ok(server) => server,
        Err(e) => {
            eprintln!("❌ Failed to bind server: {e}");
            std::process::exit(1);
        }
    };

    println!("✅ Listening on {}", server.local_addr());

    server.run().await
}
