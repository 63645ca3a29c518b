//! Static lookup data for value generators.
//!
//! Only Indonesian (`id_ID`) tables ship; every semantic generator draws from
//! [`id_id`].

pub mod id_id;
