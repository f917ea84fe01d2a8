//! Hermetic environment container for the not-env SDK.
//!
//! This crate implements the substitute for the process environment that
//! application code observes after initialization. Variables come from an
//! immutable [`VariableStore`] built from a single remote fetch; only the two
//! bootstrap keys ([`URL_KEY`] and [`API_KEY_KEY`]) keep resolving from the
//! host environment.
//!
//! # Components
//!
//! - [`VariableStore`] -- immutable key/value mapping, built once
//! - [`PreservedKeys`] -- the fixed pair of host-resolved bootstrap keys
//! - [`EnvironmentView`] -- the read-only container applications read from
//!
//! # Design Rules
//!
//! 1. Reads are hermetic: non-preserved keys resolve from the store only,
//!    never from the host environment.
//! 2. Preserved keys resolve from the host snapshot only, even when the
//!    remote store defines the same name.
//! 3. Every write-style operation fails with [`EnvError::MutationRejected`]
//!    and changes nothing.
//! 4. All operations are O(1) or O(n) in stored keys; none touch the network.
//! 5. The view holds no interior mutability, so concurrent readers need no
//!    locking.

pub mod error;
pub mod preserved;
pub mod store;
pub mod view;

pub use error::{EnvError, EnvResult};
pub use preserved::{PreservedKeys, API_KEY_KEY, URL_KEY};
pub use store::VariableStore;
pub use view::EnvironmentView;
