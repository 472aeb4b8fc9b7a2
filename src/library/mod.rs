mod compositing;
pub mod definitions;
pub mod errors;
mod library_cfg;
mod utils;

//exports
pub use compositing::{
    compositor::{compose, composite_dimensions_of},
    line_layout::{check_line_geometry, line_offsets},
};
pub use errors::CompositeError;
pub use library_cfg::{CompositeCfg, InputCfg};
pub use utils::img_ops;
pub use utils::img_ops::RgbImgBuf;
