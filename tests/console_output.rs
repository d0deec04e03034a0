//! Integration tests for the line a console receives from each log call.
//!
//! Every case builds its own [`Logger`] over a recording console, so nothing
//! here touches the process-wide logger.

use loggisch::{Environment, ErrorValue, Logger, Severity, Shared, TERMINAL_RESET, Value};
use test_support::{FailingConsole, RecordingConsole, is_timestamp, text_args};

fn logger(environment: Environment, level: Severity) -> (Logger, RecordingConsole) {
    let console = RecordingConsole::new();
    let logger = Logger::builder()
        .level(level)
        .environment(environment)
        .console(console.clone())
        .build();
    (logger, console)
}

// ============================================================================
// Terminal Layout
// ============================================================================

/// Verifies the terminal layout for a single string.
#[test]
fn terminal_error_with_one_string() {
    let (logger, console) = logger(Environment::Terminal, Severity::Error);
    logger.error(["peter"]);

    let args = text_args(&console.single());
    assert_eq!(args.len(), 5);
    assert!(is_timestamp(&args[0]), "{:?}", args[0]);
    assert_eq!(args[1..], ["\x1b[31m", "[ERROR]", TERMINAL_RESET, "peter"]);
}

/// Verifies several values stay separate arguments, in order.
#[test]
fn terminal_keeps_each_value_as_its_own_argument() {
    let (logger, console) = logger(Environment::Terminal, Severity::Error);
    loggisch::error!(logger: logger; "peter", "paul", "mary");

    let args = text_args(&console.single());
    assert_eq!(args[1..], ["\x1b[31m", "[ERROR]", TERMINAL_RESET, "peter", "paul", "mary"]);
}

/// Verifies duplicate values are not collapsed.
#[test]
fn terminal_keeps_duplicates() {
    let (logger, console) = logger(Environment::Terminal, Severity::Info);
    logger.info(["x", "x"]);
    assert_eq!(text_args(&console.single())[4..], ["x", "x"]);
}

/// Verifies each severity uses its own tag and default token.
#[test]
fn terminal_tags_and_tokens_per_severity() {
    let (logger, console) = logger(Environment::Terminal, Severity::Trace);
    for level in Severity::ALL {
        logger.log(level, ["m"]);
    }

    let expected = [
        ("\x1b[37m\x1b[41m", "[SEVERE]"),
        ("\x1b[31m", "[ERROR]"),
        ("\x1b[33m", "[WARNING]"),
        ("\x1b[34m", "[INFO]"),
        ("\x1b[32m", "[DEBUG]"),
        ("\x1b[90m", "[TRACE]"),
    ];
    let lines = console.lines();
    assert_eq!(lines.len(), expected.len());
    for (line, (token, tag)) in lines.iter().zip(expected) {
        let args = text_args(line);
        assert_eq!(args[1], token);
        assert_eq!(args[2], tag);
    }
}

/// Verifies a changed token is used from the next call on.
#[test]
fn terminal_uses_updated_style() {
    let (logger, console) = logger(Environment::Terminal, Severity::Error);
    logger.set_terminal_style(Severity::Error, "");
    logger.error(["plain"]);
    assert_eq!(text_args(&console.single())[1], "");
}

// ============================================================================
// Browser Layout
// ============================================================================

/// Verifies the browser template and its two trailing style arguments.
#[test]
fn browser_error_with_one_string() {
    let (logger, console) = logger(Environment::Browser, Severity::Error);
    logger.error(["peter"]);

    let args = text_args(&console.single());
    assert_eq!(args.len(), 3);
    let (stamp, rest) = args[0].split_once(' ').unwrap();
    assert!(is_timestamp(stamp), "{stamp:?}");
    assert!(rest.starts_with("%c[error]%c"));
    assert!(rest.contains("peter"));
    assert_eq!(args[1], "color:red; font-weight:bold; text-transform: uppercase;");
    assert_eq!(args[2], "");
}

/// Verifies values are joined into the template with single spaces.
#[test]
fn browser_joins_values() {
    let (logger, console) = logger(Environment::Browser, Severity::Warning);
    loggisch::warning!(logger: logger; "disk", 91, "percent");

    let args = text_args(&console.single());
    assert!(args[0].ends_with(" %c[warning]%c disk 91 percent"), "{:?}", args[0]);
}

/// Verifies a changed browser token is passed through.
#[test]
fn browser_uses_updated_style() {
    let (logger, console) = logger(Environment::Browser, Severity::Error);
    logger.set_browser_style(Severity::Error, "color: purple;");
    logger.error(["x"]);
    assert_eq!(text_args(&console.single())[1], "color: purple;");
}

// ============================================================================
// Value Formatting
// ============================================================================

/// Verifies a self-referencing object is logged with a marker.
#[test]
fn circular_object_is_logged() {
    let (logger, console) = logger(Environment::Terminal, Severity::Error);
    let node = Shared::new(Value::object().with_field("name", "loop"));
    node.insert("self", &node);

    logger.error([&node]);
    node.replace(Value::Null);

    let args = text_args(&console.single());
    assert_eq!(args[4], "{\n  \"name\": \"loop\",\n  \"self\": \"[Circular]\"\n}");
}

/// Verifies the fallback chain for values that are not structural.
#[test]
fn non_structural_values_use_fallbacks() {
    let (logger, console) = logger(Environment::Terminal, Severity::Error);
    let error = std::io::Error::other("disk on fire");
    loggisch::error!(
        logger: logger;
        Value::error(&error),
        ErrorValue::new("boom").with_stack("boom\n    at main"),
        Value::function(),
        Value::display(std::net::Ipv4Addr::LOCALHOST),
        Value::Opaque,
    );

    let args = text_args(&console.single());
    assert_eq!(
        args[4..],
        ["disk on fire", "boom\n    at main", "[Function]", "127.0.0.1", "[Unloggable]"]
    );
}

/// Verifies numbers pass through unchanged and structures are pretty-printed.
#[test]
fn numbers_and_structures() {
    let (logger, console) = logger(Environment::Terminal, Severity::Error);
    loggisch::error!(logger: logger; 42, 1.5, vec![1, 2], true, None::<i32>);

    let line = console.single();
    assert_eq!(line.args()[4], loggisch::Loggable::Number(loggisch::Number::Int(42)));
    assert_eq!(
        text_args(&line)[5..],
        ["1.5", "[\n  1,\n  2\n]", "true", "null"]
    );
}

/// Verifies nested callables are dropped or nulled and nested errors are empty.
#[test]
fn nested_non_structural_values_follow_json_rules() {
    let (logger, console) = logger(Environment::Terminal, Severity::Error);
    let payload = Value::object()
        .with_field("a", 1)
        .with_field("cb", Value::function())
        .with_field("err", ErrorValue::new("late"));
    loggisch::error!(logger: logger; payload, vec![Value::from(1), Value::function()]);

    let args = text_args(&console.single());
    assert_eq!(args[4..], ["{\n  \"a\": 1,\n  \"err\": {}\n}", "[\n  1,\n  null\n]"]);
}

// ============================================================================
// Console Failures
// ============================================================================

/// Verifies a failing console does not surface an error or panic.
#[test]
fn console_errors_are_swallowed() {
    let logger = Logger::builder()
        .environment(Environment::Terminal)
        .console(FailingConsole)
        .build();
    logger.error(["lost"]);
    logger.severe(["also lost"]);
}
