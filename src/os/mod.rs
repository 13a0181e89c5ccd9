//! OS-level helpers.
//!
//! Provides [`Env`](env::Env), the environment snapshot every path strategy reads from.

pub mod env;
