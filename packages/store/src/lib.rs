pub mod models;
pub mod session;
pub mod token;

mod memory;
pub use memory::MemoryTokens;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod cookie;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use cookie::CookieTokens;

pub use models::User;
pub use session::{Session, SessionStore};
pub use token::TokenStore;
