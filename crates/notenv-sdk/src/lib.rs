//! not-env SDK for Rust.
//!
//! Fetches configuration variables from a not-env backend once at startup
//! and installs them as a hermetic, read-only [`EnvironmentView`] the rest
//! of the process reads from. The host environment contributes exactly two
//! values -- `NOT_ENV_URL` and `NOT_ENV_API_KEY` -- which bootstrap the
//! fetch and stay host-resolved afterwards.
//!
//! # Usage
//!
//! ```no_run
//! fn main() {
//!     // Blocks until variables are loaded; exits with status 1 on failure.
//!     let env = notenv_sdk::init_or_exit();
//!
//!     let db_host = env.get_or("DB_HOST", "localhost");
//!     println!("connecting to {db_host}");
//! }
//! ```
//!
//! Prefer passing the returned `&'static EnvironmentView` to the code that
//! needs it. [`env`] is the documented global accessor for code that cannot
//! be refactored to accept injection. The real process environment is never
//! mutated: code calling `std::env::var` directly bypasses the view and
//! sees the host values.
//!
//! # Lifecycle
//!
//! Initialization runs once: resolve bootstrap values, perform one fetch
//! (30 second bound), build the immutable store, install the view. Every
//! failure along the way is classified ([`SdkError`]) and fatal at the
//! [`init_or_exit`] boundary. A second initialization in the same process
//! is a no-op returning the installed view.

pub mod error;
pub mod registry;
pub mod sdk;

pub use error::{SdkError, SdkResult};
pub use registry::{env, init_or_exit, initialize, initialize_blocking, initialize_with};
pub use sdk::{Sdk, SdkOptions};

// Re-export the view types applications interact with.
pub use notenv_client::{FetchError, StaticVariableSource, VariableSource};
pub use notenv_env::{EnvError, EnvironmentView, PreservedKeys, VariableStore, API_KEY_KEY, URL_KEY};
