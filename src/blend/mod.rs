pub(crate) mod op;
pub(crate) mod resolve;
pub(crate) mod table;
