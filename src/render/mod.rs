pub mod backend;
pub mod formula;
pub mod raster;
pub mod svg;
