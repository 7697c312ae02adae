use crate::configuration::Configuration;

pub struct Context {
    pub config: Configuration,
}

impl Context {
    pub fn from_cli(cli: &crate::cli::Cli) -> Self {
        let config = Configuration {
            data_dir: cli.data_dir.clone(),
            log_file: cli.log_file.clone(),
            reset: cli.reset,
        };
        Self { config }
    }
}
