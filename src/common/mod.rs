//! Types and helpers shared by every supported specification version.

pub mod bool_or;
pub mod extensions;
pub mod formats;
pub mod helpers;
pub mod pointer;
pub mod reference;
pub mod url;
