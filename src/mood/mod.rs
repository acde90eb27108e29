pub(crate) mod category;
pub(crate) mod detection;
pub(crate) mod stabilizer;
pub(crate) mod style;
