pub mod crud;

#[cfg(feature = "cli")]
mod dispatch;

#[cfg(feature = "cli")]
pub use dispatch::run;
