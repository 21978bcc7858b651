//! Contains some types used across layers

use std::result;


/// For operations whose errors are only meant to be reported, never matched upon
pub type Result<T> = result::Result<T, Box<dyn std::error::Error>>;
