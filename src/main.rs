mod cli;
mod logging;
mod materialize;
mod runner;
mod templates;
mod tree;

fn main() -> anyhow::Result<()> {
    let app = cli::parse();
    logging::init(app.verbose);
    runner::run(app)
}
