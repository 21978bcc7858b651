//! Contains some types used for domain specific entities

use crate::errors::DemoError;


/// Outcome of any operation working on a single demo
pub type DemoResult<T> = Result<T, DemoError>;
