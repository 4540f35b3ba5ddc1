pub mod analysis;
pub mod cipher;
pub mod config;
pub mod consts;
pub mod error;
pub mod profile;
pub mod text;
// cmd and reports belong to the binary crate (main.rs).

pub use cipher::{decrypt, encrypt, Direction, Key};
pub use error::{VgResult, VigenereError};
pub use text::{normalize, NormalizedText};
