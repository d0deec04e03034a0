//! Integration tests for configuring a [`Logger`] from a [`LevelConfig`].

use loggisch::{Environment, LevelConfig, Logger, Severity, Surface};
use test_support::{RecordingConsole, text_args};

/// Verifies a snapshot applied to a fresh logger reproduces its state.
#[test]
fn snapshot_transfers_between_loggers() {
    let source = Logger::builder()
        .level(Severity::Debug)
        .style(Surface::Terminal, Severity::Debug, "\x1b[36m")
        .console(RecordingConsole::new())
        .build();

    let target = Logger::builder()
        .config(LevelConfig::snapshot(source.store()))
        .console(RecordingConsole::new())
        .build();

    assert_eq!(target.level(), Severity::Debug);
    assert_eq!(target.terminal_styles(), source.terminal_styles());
    assert_eq!(target.browser_styles(), source.browser_styles());
}

/// Verifies builder overrides reach the rendered line.
#[test]
fn builder_style_reaches_output() {
    let console = RecordingConsole::new();
    let logger = Logger::builder()
        .environment(Environment::Browser)
        .style(Surface::Browser, Severity::Severe, "font-size: 2em;")
        .console(console.clone())
        .build();

    logger.severe(["!"]);
    assert_eq!(text_args(&console.single())[1], "font-size: 2em;");
}

/// Verifies a host configuration document can drive the logger.
#[cfg(feature = "serde")]
#[test]
fn json_config_drives_logger() {
    let config: LevelConfig = serde_json::from_str(
        r#"{ "level": "info", "terminal": { "info": "" } }"#,
    )
    .unwrap();

    let console = RecordingConsole::new();
    let logger = Logger::builder()
        .environment(Environment::Terminal)
        .config(config)
        .console(console.clone())
        .build();

    logger.info(["configured"]);
    let args = text_args(&console.single());
    assert_eq!(args[1], "");
    assert_eq!(args[2], "[INFO]");
}
