pub mod err;
pub mod token;

#[cfg(feature = "tracing")]
pub mod trace;
