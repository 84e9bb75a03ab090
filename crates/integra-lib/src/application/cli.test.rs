use super::*;
use clap::Parser;

#[test]
fn running_without_a_subcommand_is_allowed() {
    let cli = Cli::try_parse_from(["integra"]).unwrap();
    assert!(cli.command.is_none());
}

#[test]
fn platform_names_parse_lowercase() {
    let cli = Cli::try_parse_from(["integra", "info", "curseforge", "ae2"]).unwrap();
    match cli.command {
        Some(Commands::Info {
            platform,
            identifier,
            description,
        }) => {
            assert_eq!(platform, Platform::CurseForge);
            assert_eq!(identifier, "ae2");
            assert!(!description);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn deps_accepts_depth_and_file_selection() {
    let cli = Cli::try_parse_from([
        "integra",
        "deps",
        "modrinth",
        "sodium",
        "--deep",
        "--max-depth",
        "3",
        "--file",
        "v1",
    ])
    .unwrap();
    match cli.command {
        Some(Commands::Deps {
            platform,
            identifier,
            file,
            deep,
            max_depth,
        }) => {
            assert_eq!(platform, Platform::Modrinth);
            assert_eq!(identifier, "sodium");
            assert_eq!(file.as_deref(), Some("v1"));
            assert!(deep);
            assert_eq!(max_depth, 3);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn global_tuning_flags_land_in_app_config() {
    let cli = Cli::try_parse_from([
        "integra",
        "-j",
        "4",
        "--net-timeout",
        "90",
        "--log-format",
        "json",
        "files",
        "spiget",
        "9089",
    ])
    .unwrap();
    assert_eq!(cli.config.net_jobs, Some(4));
    assert_eq!(cli.config.net_timeout, 90);
    assert!(matches!(
        cli.config.log_format,
        crate::primitives::LogFormat::Json
    ));
    assert!(matches!(cli.command, Some(Commands::Files { .. })));
}

#[test]
fn unknown_platform_is_rejected() {
    assert!(Cli::try_parse_from(["integra", "info", "hangar", "x"]).is_err());
}
