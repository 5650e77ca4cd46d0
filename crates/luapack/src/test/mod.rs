pub mod test_transport;

#[cfg(feature = "serde")]
pub mod test_serde;
