pub(crate) mod splice;
pub(crate) mod tokenize;
