pub(crate) mod composite;
pub(crate) mod encode;
pub(crate) mod gradient;
pub(crate) mod raster;
pub(crate) mod synth;
