use clap::Subcommand;

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    #[command(
        about = "Create, index and seed the built-in crawl collections",
        long_about = "Runs the full bootstrap plan: the github_crawl repository collection \
and the stackoverflow_crawl question collection. This is also what runs when no \
subcommand is given."
    )]
    Init,
    #[command(about = "Show collections, indexes and document counts per store")]
    Status,
}
