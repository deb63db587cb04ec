mod args;
mod exit_status;

pub use self::{
    args::{Args, ColorConfig, OutputFormat},
    exit_status::ExitStatus,
};
