pub(crate) mod debounce;
pub(crate) mod display;
pub(crate) mod regen;
