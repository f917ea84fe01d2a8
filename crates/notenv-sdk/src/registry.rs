use std::sync::OnceLock;

use notenv_env::EnvironmentView;

use crate::error::{SdkError, SdkResult};
use crate::sdk::{Sdk, SdkOptions};

// The process-wide environment slot. Written at most once, after a fully
// successful fetch and build; a half-initialized view is never observable.
static INSTALLED: OnceLock<EnvironmentView> = OnceLock::new();

/// The installed view, if initialization has run.
///
/// This is the documented global seam for code that cannot take the view by
/// injection. New code should prefer passing the `&'static EnvironmentView`
/// returned by [`initialize`] through its composition root.
pub fn env() -> Option<&'static EnvironmentView> {
    INSTALLED.get()
}

/// Initialize from the host environment's bootstrap values and install the
/// resulting view process-wide.
///
/// A second call in the same process is a no-op: the already-installed view
/// is returned and no second fetch occurs.
pub async fn initialize() -> SdkResult<&'static EnvironmentView> {
    initialize_with(SdkOptions::default()).await
}

/// [`initialize`] with explicit bootstrap overrides.
pub async fn initialize_with(options: SdkOptions) -> SdkResult<&'static EnvironmentView> {
    if let Some(view) = INSTALLED.get() {
        tracing::debug!("not-env already initialized, reusing installed view");
        return Ok(view);
    }

    let sdk = Sdk::with_options(options)?;
    let view = sdk.build_view().await?;

    // Under a concurrent race the first writer wins; the losing view is
    // dropped and its fetch result discarded.
    let installed = INSTALLED.get_or_init(|| view);
    tracing::info!(keys = installed.len(), "not-env environment view installed");
    Ok(installed)
}

/// Blocking wrapper around [`initialize`] for applications without an async
/// runtime of their own.
pub fn initialize_blocking() -> SdkResult<&'static EnvironmentView> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| SdkError::Runtime(e.to_string()))?;
    runtime.block_on(initialize())
}

/// Composition-root helper: initialize, or print one diagnostic line to
/// stderr and exit the process with status 1.
///
/// Call this first in `main`, before any code that reads configuration.
/// The library core itself never exits; only this helper does.
pub fn init_or_exit() -> &'static EnvironmentView {
    match initialize_blocking() {
        Ok(view) => view,
        Err(e) => {
            eprintln!("Failed to initialize not-env: {e}");
            std::process::exit(1);
        }
    }
}
