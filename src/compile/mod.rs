pub(crate) mod compiler;
pub(crate) mod opts;
pub(crate) mod plan;
