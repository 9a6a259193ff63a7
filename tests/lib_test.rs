//! Library integration tests.

use mypy_adapter::{AdapterError, Location, Message};

#[test]
fn error_types_are_public() {
    let err = AdapterError::UnparseableLine {
        line: "Interrupted".into(),
    };
    assert!(err.to_string().contains("Interrupted"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> mypy_adapter::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn message_types_are_public() {
    let message = Message {
        source: "mypy".into(),
        code: "error".into(),
        location: Location::new("app.py", 3, Some(7)),
        message: "Name \"x\" is not defined".into(),
    };

    assert_eq!(message.location.to_string(), "app.py:3:7");
}

#[test]
fn parse_line_is_public() {
    use mypy_adapter::tools::mypy::parse_line;

    let message = parse_line("lib/util.py:40: note: Revealed type is \"builtins.int\"").unwrap();
    assert_eq!(message.code, "note");
    assert_eq!(message.location.line, 40);
    assert_eq!(message.location.character, None);
    assert_eq!(message.message, "Revealed type is \"builtins.int\"");
}

#[test]
fn cli_types_are_public() {
    use mypy_adapter::cli::{Cli, Commands};
    use mypy_adapter::output::OutputFormat;
    use clap::Parser;

    let cli = Cli::parse_from(["mypy-adapter", "check", "--format", "json", "src"]);

    if let Some(Commands::Check(args)) = cli.command {
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.paths.len(), 1);
    } else {
        panic!("Expected Check command");
    }
}
