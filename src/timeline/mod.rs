pub(crate) mod drag;
pub(crate) mod scale;
pub(crate) mod snap;
pub(crate) mod span;
