use anyhow::Result;

mod app;
mod logging;

fn main() -> Result<()> {
    let args = tidy_move::cli::parse();
    app::run(args)
}
