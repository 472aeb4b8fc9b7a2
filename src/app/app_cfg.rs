use std::path::PathBuf;

use crate::library::{CompositeCfg, InputCfg};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportVerbosity {
    Quiet,
    Default,
    Verbose,
}

#[derive(Debug, Clone)]
pub struct OutputCfg {
    //None when writing is disabled.
    pub output_path: Option<PathBuf>,
    pub show: bool,
    pub json_output: bool,

    pub verbosity: ReportVerbosity,
}

#[derive(Debug, Clone)]
pub struct AppCfg {
    pub input_cfg: InputCfg,
    pub composite_cfg: CompositeCfg,

    pub output_cfg: OutputCfg,
}
