//! Domain core of the notification hub.
//!
//! Holds the delivery-preference model, the in-memory [`store::PreferenceStore`]
//! and the intake resolver that decides which channels a notification is
//! routed to. Nothing here performs network or disk I/O; the HTTP binding
//! lives in the `hub-api` crate.

pub mod channels;
pub mod intake;
pub mod notification;
pub mod preference;
pub mod store;
