//! This crate contains all shared UI for the workspace.

mod session;
pub use session::{expire_session, navigate_to, use_api, use_session, SessionProvider};

mod tokens;
pub use tokens::make_tokens;

pub mod guard;
pub use guard::{check_credential, GuardOutcome, Loading};

mod header;
pub use header::Header;

mod footer;
pub use footer::Footer;
