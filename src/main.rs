//! booklister — catalogue ebook files into per-directory CSV reports.
//!
//! Thin binary entry point. All logic lives in the `booklister-core`
//! and `booklister-cli` crates.

fn main() -> anyhow::Result<()> {
    let cli = booklister_cli::parse_args();

    // Logs go to stderr; stdout carries prompts and results only.
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("booklister starting");

    booklister_cli::execute(&cli)
}
