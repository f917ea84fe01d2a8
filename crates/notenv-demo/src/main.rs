//! Demo: source database configuration through not-env.
//!
//! Requires `NOT_ENV_URL` and `NOT_ENV_API_KEY` in the host environment;
//! everything else comes from the backend.

fn main() {
    tracing_subscriber::fmt::init();

    // Blocks until variables are loaded; exits with status 1 on failure.
    let env = notenv_sdk::init_or_exit();

    println!("Database configuration:");
    println!("  host: {}", env.get_or("DB_HOST", "not set"));
    println!("  port: {}", env.get_or("DB_PORT", "not set"));
    println!("  name: {}", env.get_or("DB_NAME", "not set"));

    let parts = ["DB_USER", "DB_PASSWORD", "DB_HOST", "DB_PORT", "DB_NAME"]
        .map(|key| env.get_opt(key));

    if let [Some(user), Some(password), Some(host), Some(port), Some(name)] = parts {
        println!("connection: postgresql://{user}:{password}@{host}:{port}/{name}");
    } else {
        println!("some database variables are missing");
    }
}
