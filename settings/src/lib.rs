#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![doc = include_str!("../README.md")]

pub use settings_core::*;

#[doc = include_str!("derive_settings.md")]
pub use settings_macros::*;

pub use settings_reflect::*;

mod locale;
pub use locale::*;

mod convert;
pub use convert::*;

mod source;
pub use source::*;

mod error;
pub use error::*;

mod deserialize;
pub use deserialize::*;

mod schema;
pub use schema::*;
