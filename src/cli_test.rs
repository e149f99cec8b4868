use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("pathview").chain(args.iter().copied())).expect("parse")
}

#[test]
fn defaults_to_shell_variant_and_text() {
    let cli = parse(&["routes"]);
    assert_eq!(cli.variant, VariantArg::Shell);
    assert_eq!(cli.format, OutputFormat::Text);
    assert_eq!(cli.command, Command::Routes);
}

#[test]
fn variant_and_format_are_accepted_after_subcommand() {
    let cli = parse(&["resolve", "/about", "--variant", "browser", "--format", "json"]);
    assert_eq!(cli.variant, VariantArg::Browser);
    assert_eq!(cli.format, OutputFormat::Json);
    assert_eq!(cli.command, Command::Resolve { path: "/about".to_owned() });
}

#[test]
fn walk_requires_at_least_one_step() {
    assert!(Cli::try_parse_from(["pathview", "walk"]).is_err());
    let cli = parse(&["walk", "/about", "/login", "back"]);
    assert_eq!(
        cli.command,
        Command::Walk {
            steps: vec!["/about".to_owned(), "/login".to_owned(), "back".to_owned()],
        }
    );
}

#[test]
fn variant_arg_maps_to_client_variant() {
    assert_eq!(Variant::from(VariantArg::Hash), Variant::Hash);
    assert_eq!(Variant::from(VariantArg::Browser), Variant::Browser);
    assert_eq!(Variant::from(VariantArg::Shell), Variant::Shell);
}

#[test]
fn unknown_variant_is_rejected() {
    assert!(Cli::try_parse_from(["pathview", "--variant", "memory", "routes"]).is_err());
}
