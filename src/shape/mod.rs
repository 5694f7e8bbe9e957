pub(crate) mod generator;
pub(crate) mod kind;
pub(crate) mod table;
