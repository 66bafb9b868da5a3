use clap::Parser;
use folder2rs_cli::commands::{GenerateArgs, run_generate};
use folder2rs_cli::utils::ui;
use miette::Result as MietteResult;

#[derive(Parser)]
#[command(name = "folder2rs")]
#[command(about = "Embed every file of a directory into a generated Rust or Go source file")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    generate: GenerateArgs,

    /// Log debug output to stderr (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> MietteResult<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))
    .ok();

    let cli = Cli::parse();

    if std::env::var_os(ui::E2E_ENV).is_some() {
        ui::set_e2e_mode(true);
    }
    ui::init_logging(cli.verbose);

    run_generate(cli.generate).map_err(miette::Report::new)
}
