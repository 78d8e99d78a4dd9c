pub(crate) mod connection;
pub(crate) mod guides;
pub(crate) mod snap;
