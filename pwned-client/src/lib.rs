//! Password breach checking over the Have I Been Pwned k-anonymity range API.
//!
//! A lookup never sends the password, or even its full hash, to the remote
//! service. The password is SHA-1 hashed locally, only the first five hex
//! characters of the digest (the range key) go over the wire, and the
//! remaining 35 characters (the selector) are matched locally against the
//! candidate list the API returns for that range. The result is the number
//! of breach datasets the password has appeared in.
//!
//! Every lookup is stateless: nothing is cached or retained between calls,
//! and a single [`BreachChecker`] is safe to share across concurrent call
//! sites.
//!
//! # Example
//!
//! ```no_run
//! use pwned_client::{BreachChecker, Config};
//!
//! # async fn run() -> Result<(), pwned_client::Error> {
//! let checker = BreachChecker::new(Config::default())?;
//!
//! // Has the password ever appeared in breach data?
//! if checker.has_been_pwned("hunter2").await? {
//!     println!("pick another password");
//! }
//!
//! // Tolerate up to 5 appearances before rejecting.
//! let compromised = checker.has_been_pwned_with_minimum("hunter2", 5).await?;
//! # Ok(())
//! # }
//! ```
//!
//! Transport failures surface as [`Error::ConnectionFailed`] rather than a
//! false "not compromised" verdict; see [`Error`] for the full taxonomy.

pub mod checker;
pub mod config;
pub mod error;
pub mod fingerprint;
pub mod transport;

pub use checker::{BreachChecker, parse_range_body};
pub use config::Config;
pub use error::Error;
pub use fingerprint::{FINGERPRINT_LEN, RANGE_SIZE, fingerprint, split};
pub use transport::{HttpTransport, Transport};
