use super::*;

#[test]
fn verbosity_maps_to_levels() {
    assert_eq!(LogLevel::from_verbosity(0), LogLevel::Error);
    assert_eq!(LogLevel::from_verbosity(2), LogLevel::Info);
    assert_eq!(LogLevel::from_verbosity(4), LogLevel::Trace);
    // Anything above trace saturates
    assert_eq!(LogLevel::from_verbosity(200), LogLevel::Trace);
}

#[test]
fn log_format_parses_aliases() {
    assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Text);
    assert_eq!("plain".parse::<LogFormat>().unwrap(), LogFormat::Text);
    assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
    assert!("xml".parse::<LogFormat>().is_err());
}

#[test]
fn log_output_parses() {
    assert_eq!("stderr".parse::<LogOutput>().unwrap(), LogOutput::Stderr);
    assert_eq!("stdout".parse::<LogOutput>().unwrap(), LogOutput::Stdout);
}
