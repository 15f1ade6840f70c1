use super::commands::resolve_paths;
use super::*;
use wsc_core::config::WscConfig;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_generate_defaults() {
    match parse(&["wsc", "generate"]) {
        CliCommand::Generate {
            projects,
            template,
            output,
        } => {
            assert!(projects.is_none());
            assert!(template.is_none());
            assert!(output.is_none());
        }
        _ => panic!("expected Generate"),
    }
}

#[test]
fn cli_parse_generate_paths() {
    match parse(&[
        "wsc",
        "generate",
        "--projects",
        "data/projects.json",
        "--template",
        "README.md.tmpl",
        "-o",
        "/tmp/README.md",
    ]) {
        CliCommand::Generate {
            projects,
            template,
            output,
        } => {
            assert_eq!(projects, Some(PathBuf::from("data/projects.json")));
            assert_eq!(template, Some(PathBuf::from("README.md.tmpl")));
            assert_eq!(output, Some(PathBuf::from("/tmp/README.md")));
        }
        _ => panic!("expected Generate with paths"),
    }
}

#[test]
fn cli_parse_licenses() {
    match parse(&["wsc", "licenses"]) {
        CliCommand::Licenses { projects } => assert!(projects.is_none()),
        _ => panic!("expected Licenses"),
    }
    match parse(&["wsc", "licenses", "--projects", "p.json"]) {
        CliCommand::Licenses { projects } => {
            assert_eq!(projects, Some(PathBuf::from("p.json")))
        }
        _ => panic!("expected Licenses with --projects"),
    }
}

#[test]
fn cli_rejects_unknown_subcommand() {
    assert!(Cli::try_parse_from(["wsc", "publish"]).is_err());
    assert!(Cli::try_parse_from(["wsc"]).is_err());
}

#[test]
fn flags_override_config_paths() {
    let cfg = WscConfig::default();
    let paths = resolve_paths(&cfg, None, Some(PathBuf::from("t.tmpl")), None);
    assert_eq!(paths.projects, PathBuf::from("projects.json"));
    assert_eq!(paths.template, PathBuf::from("t.tmpl"));
    assert_eq!(paths.output, PathBuf::from("README.md"));
}

#[test]
fn command_names_match_subcommands() {
    assert_eq!(parse(&["wsc", "generate"]).name(), "generate");
    assert_eq!(parse(&["wsc", "licenses"]).name(), "licenses");
}
