use anyhow::Context;
use argh::FromArgs;
use course_planner::{EditorInput, Shell};
use std::path::PathBuf;

#[derive(FromArgs)]
/// Load a course catalog and browse it from an interactive menu.
struct Args {
    #[argh(option, short = 'f')]
    /// catalog file to load before the first menu is shown
    file: Option<PathBuf>,

    #[argh(switch, short = 'v')]
    /// increase log verbosity; may be repeated (-v, -vv, -vvv)
    verbose: u8,
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn run(args: Args) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();
    let mut shell = Shell::new();

    if let Some(path) = &args.file {
        shell
            .load(path, &mut stdout, &mut stderr)
            .with_context(|| format!("failed to preload {}", path.display()))?;
    }

    let mut input = EditorInput::new().context("failed to start line editor")?;
    shell.run(&mut input, &mut stdout, &mut stderr)
}

fn main() {
    let args: Args = argh::from_env();
    setup_logging(args.verbose);

    // failures are reported, but the process always exits successfully
    if let Err(err) = run(args) {
        tracing::error!(error = ?err, "course planner stopped");
        eprintln!("Error: {:#}", err);
    }
}
