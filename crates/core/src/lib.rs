#![forbid(unsafe_code)]

pub mod format;
pub mod model;
pub mod session;

pub use session::{
    RequestFailure, RequestKind, RequestTicket, SessionEvent, SessionState, ValidationError,
};
