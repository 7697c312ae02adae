use crate::cli::Command;
use crate::context::Context;

pub mod init;
pub mod status;

impl Command {
    pub fn run(&self, ctx: &Context) -> anyhow::Result<()> {
        match self {
            Command::Init => init::run(ctx),
            Command::Status => status::run(ctx),
        }
    }
}
