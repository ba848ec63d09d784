//! Domain primitives shared by the database and HTTP layers.
//!
//! Nothing in here touches the database or the network.

pub mod error;
pub mod types;
pub mod validation;
