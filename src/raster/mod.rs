pub(crate) mod buffer;
pub(crate) mod decode;
pub(crate) mod grayscale;
pub(crate) mod threshold;
