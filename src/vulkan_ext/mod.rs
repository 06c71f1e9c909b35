mod command_buffer_ext;
mod command_buffer_ext_error;

pub use self::{
    command_buffer_ext::{full_scissor, full_viewport, CommandBufferExt},
    command_buffer_ext_error::{CommandBufferExtError, CommandResult},
};
