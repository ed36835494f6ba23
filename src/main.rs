use clap::{Parser, Subcommand};
use pincer_mini::PointerArgs;

#[derive(Parser)]
#[command(author, version, about, long_about = None, styles=get_styles())] // Read from `Cargo.toml`
struct Cli {
    #[command(subcommand)]
    commands: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a two pointer exercise on your own input
    Run(PointerArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.commands {
        Commands::Run(pointer_args) => pointer_args.run(),
    }
}

fn get_styles() -> clap::builder::Styles {
    clap::builder::Styles::styled()
        .usage(
            anstyle::Style::new()
                .bold()
                .underline()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))),
        )
        .header(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))),
        )
        .literal(
            anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
        )
        .invalid(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
        )
        .error(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
        )
        .valid(
            anstyle::Style::new()
                .bold()
                .underline()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Cyan))),
        )
        .placeholder(
            anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
        )
}

#[test]
fn verify_cli() {
    use clap::CommandFactory;
    Cli::command().debug_assert()
}

#[test]
fn negative_number_lists() {
    let parsed = Cli::try_parse_from([
        "pincer",
        "run",
        "sorted-squares",
        "--nums",
        "-4,-1,0,3,10",
    ]);
    assert!(parsed.is_ok());

    let parsed = Cli::try_parse_from([
        "pincer",
        "run",
        "remove-element",
        "--nums",
        "5,-8,8",
        "--val",
        "-8",
    ]);
    assert!(parsed.is_ok());
}

#[test]
fn rejects_non_numbers() {
    let parsed = Cli::try_parse_from(["pincer", "run", "three-sum", "--nums", "1,two,3"]);
    assert!(parsed.is_err());
}

#[test]
fn out_of_range_colors_fail_at_run_time() {
    let cli = Cli::try_parse_from(["pincer", "run", "sort-colors", "--colors", "0,3,1"])
        .expect("parses as a list of numbers");
    let Commands::Run(args) = cli.commands;
    assert!(args.run().is_err());
}
