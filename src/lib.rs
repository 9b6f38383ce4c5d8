#![allow(nonstandard_style)]

pub mod environment;
pub mod error_handling;
pub mod evaluating;
pub mod logging;
pub mod parsing;
pub mod scanning;
pub mod session;
pub mod statement;

pub use environment::Environment;
pub use error_handling::{CalcError, Result};
pub use evaluating::evaluate;
pub use session::{Flow, Session};
