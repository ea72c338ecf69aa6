pub(crate) mod rotation;
pub(crate) mod scale;
