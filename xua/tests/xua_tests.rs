//! Integration tests for the identity string parser

use xua::{AppNamePolicy, Grammar, OsFieldPolicy, RejectReason, UserAgent, XuaError, parse};

fn all_grammars() -> Vec<Grammar> {
    let mut grammars = Vec::new();
    for app_name in [AppNamePolicy::AnyExceptSlash, AppNamePolicy::WordLike] {
        for os_field in [OsFieldPolicy::Split, OsFieldPolicy::Combined] {
            grammars.push(
                Grammar::new()
                    .with_app_name(app_name)
                    .with_os_field(os_field),
            );
        }
    }
    grammars
}

fn assert_fields(ua: &UserAgent, expected: [&str; 6]) {
    assert_eq!(
        [
            ua.app_name(),
            ua.app_version(),
            ua.device_model(),
            ua.os_name(),
            ua.os_version(),
            ua.trailing(),
        ],
        expected
    );
}

#[test]
fn test_minimum_user_agent() {
    let ua = parse("a/1 (b, c 1, d)").unwrap();
    assert_fields(&ua, ["a", "1", "b", "c", "1", "d"]);
}

#[test]
fn test_multi_word_app_and_device() {
    let ua = parse("App 1/2.3.1 (Device Model 1, Android 11, Other)").unwrap();
    assert_fields(
        &ua,
        ["App 1", "2.3.1", "Device Model 1", "Android", "11", "Other"],
    );
}

#[test]
fn test_accepted_user_agents() {
    let cases = [
        (
            "com.example.app/3.9.3 (Device-Model, Android 10, Other)",
            ["com.example.app", "3.9.3", "Device-Model", "Android", "10", "Other"],
        ),
        (
            "App Windows/4.0.0 (Device Model, Windows 10, Other)",
            ["App Windows", "4.0.0", "Device Model", "Windows", "10", "Other"],
        ),
        (
            "App-1/10 (Device-Model, Windows 10, Other)",
            ["App-1", "10", "Device-Model", "Windows", "10", "Other"],
        ),
        (
            "jp.retailai.raicart/3.9.3 (S-500, Android 10, trial)",
            ["jp.retailai.raicart", "3.9.3", "S-500", "Android", "10", "trial"],
        ),
        (
            "SCT/1.0.0 (Toshiba T380, Windows 11, Aeon)",
            ["SCT", "1.0.0", "Toshiba T380", "Windows", "11", "Aeon"],
        ),
        (
            "ISM Flutter/2.3.1 (Samsung S8 Pro, Android 11, Sugi)",
            ["ISM Flutter", "2.3.1", "Samsung S8 Pro", "Android", "11", "Sugi"],
        ),
        (
            "SC Windows/2.5.0 (Lenovo ThinkPad, Windows 8, Taiyo)",
            ["SC Windows", "2.5.0", "Lenovo ThinkPad", "Windows", "8", "Taiyo"],
        ),
    ];

    for (input, expected) in cases {
        let ua = parse(input).unwrap_or_else(|e| panic!("{input}: {e}"));
        assert_fields(&ua, expected);
    }
}

#[test]
fn test_version_group_boundaries() {
    assert_eq!(parse("a/1 (b, c 1, d)").unwrap().app_version(), "1");
    assert_eq!(parse("a/1.0 (b, c 1, d)").unwrap().app_version(), "1.0");
    assert_eq!(parse("a/1.0.0 (b, c 1, d)").unwrap().app_version(), "1.0.0");
    assert!(parse("a/1.0.0.0 (b, c 1, d)").is_err());
}

#[test]
fn test_os_version_is_not_range_checked() {
    assert_eq!(parse("a/1 (b, c 0, d)").unwrap().os_version(), "0");
    assert_eq!(parse("a/1 (b, c 007, d)").unwrap().os_version(), "007");
    let huge = "9".repeat(64);
    let ua = parse(&format!("a/1 (b, c {huge}, d)")).unwrap();
    assert_eq!(ua.os_version(), huge);
}

#[test]
fn test_rejected_user_agents_every_grammar() {
    let rejected = [
        "",
        "App//1.0.0 (Device, OS 1, X)",
        "App/notNum (Device, OS 1, X)",
        "App/1.0.0.0 (Device, OS 1, X)",
        "App/1.0.0 (Device,, OS 1, X)",
        "App/1.0.0 (Device, OS1, X)",
        "App/1.0.0 (Device, OS hoge, X)",
        "App/1.0.0 (Device, OS 1, X))",
        "a/1 (b, c 1, d) ",
        "a/1 (b, c 1, d)\n",
        "a/1(b, c 1, d)",
        "a/1 (b,c 1, d)",
        "a/1 (b, c 1,d)",
        "a/1 (b, c 1, )",
        "a/1 (, c 1, d)",
        "/1 (b, c 1, d)",
        "a/ (b, c 1, d)",
        "a/1 (b, c 1, d",
    ];

    for grammar in all_grammars() {
        for input in rejected {
            let err = grammar
                .parse(input)
                .expect_err(&format!("{grammar:?} accepted {input:?}"));
            assert!(matches!(err, XuaError::MalformedIdentity { .. }));
            assert_eq!(err.input(), input);
        }
    }
}

#[test]
fn test_leading_space_is_part_of_app_name_every_grammar() {
    for grammar in all_grammars() {
        let ua = grammar.parse(" a/1 (b, c 1, d)").unwrap();
        assert_fields(&ua, [" a", "1", "b", "c", "1", "d"]);
        assert_eq!(ua.to_string(), " a/1 (b, c 1, d)");
    }
}

#[test]
fn test_minimum_user_agent_every_grammar() {
    for grammar in all_grammars() {
        let ua = grammar.parse("a/1 (b, c 1, d)").unwrap();
        assert_fields(&ua, ["a", "1", "b", "c", "1", "d"]);
    }
}

#[test]
fn test_combined_os_field_drops_detail() {
    let input = "App-1/0.1.1 (Device-Model, Windows 10 Pro 10.0 (Build 19045), Other)";
    assert!(parse(input).is_err());

    let grammar = Grammar::new().with_os_field(OsFieldPolicy::Combined);
    let ua = grammar.parse(input).unwrap();
    assert_fields(&ua, ["App-1", "0.1.1", "Device-Model", "Windows", "10", "Other"]);
}

#[test]
fn test_combined_os_field_reasons() {
    let grammar = Grammar::new().with_os_field(OsFieldPolicy::Combined);

    let err = grammar.parse("App/1.0.0 (Device, OS1, X)").unwrap_err();
    assert_eq!(err.reason(), RejectReason::MissingOsVersion);

    let err = grammar.parse("App/1.0.0 (Device, OS hoge, X)").unwrap_err();
    assert_eq!(err.reason(), RejectReason::InvalidOsVersion);

    let err = grammar.parse("App/1.0.0 (Device, OS9 1, X)").unwrap_err();
    assert_eq!(err.reason(), RejectReason::InvalidOsName);
}

#[test]
fn test_word_like_app_name_policy() {
    let grammar = Grammar::new().with_app_name(AppNamePolicy::WordLike);
    assert_eq!(
        grammar
            .parse("jp.retailai.raicart/3.9.3 (S-500, Android 10, trial)")
            .unwrap()
            .app_name(),
        "jp.retailai.raicart"
    );
    let err = grammar
        .parse("App-1/10 (Device-Model, Windows 10, Other)")
        .unwrap_err();
    assert_eq!(err.reason(), RejectReason::GrammarMismatch);
}

#[test]
fn test_round_trip() {
    let inputs = [
        "a/1 (b, c 1, d)",
        "App 1/2.3.1 (Device Model 1, Android 11, Other)",
        "jp.retailai.raicart/3.9.3 (S-500, Android 10, trial)",
        "x/1 (y, z 2, tag, with comma)",
    ];
    for input in inputs {
        let ua = parse(input).unwrap();
        let formatted = ua.to_string();
        assert_eq!(formatted, input);
        assert_eq!(parse(&formatted).unwrap(), ua);
    }
}

#[test]
fn test_round_trip_after_first_parse_combined() {
    let grammar = Grammar::new().with_os_field(OsFieldPolicy::Combined);
    let first = grammar
        .parse("App-1/0.1.1 (Device-Model, Windows 10 Pro 10.0 (Build 19045), Other)")
        .unwrap();
    let formatted = first.to_string();
    assert_eq!(formatted, "App-1/0.1.1 (Device-Model, Windows 10, Other)");
    assert_eq!(grammar.parse(&formatted).unwrap(), first);
    assert_eq!(parse(&formatted).unwrap(), first);
}

#[test]
fn test_result_is_independent_of_input() {
    let ua = {
        let input = String::from("a/1 (b, c 1, d)");
        parse(&input).unwrap()
    };
    assert_eq!(ua.app_name(), "a");
}

#[test]
fn test_error_message() {
    let err = parse("App/1.0.0.0 (Device, OS 1, X)").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("App/1.0.0.0 (Device, OS 1, X)"));
    assert!(msg.starts_with("Malformed identity string"));
}

#[test]
fn test_concurrent_parsing() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let input = format!("app{i}/1.{i} (device {i}, os {i}, shop)");
                parse(&input).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let ua = handle.join().unwrap();
        assert_eq!(ua.app_name(), format!("app{i}"));
        assert_eq!(ua.os_version(), i.to_string());
    }
}

#[test]
fn test_adversarial_inputs_are_rejected_quickly() {
    let n = 200_000;
    let inputs = [
        "/".repeat(n),
        format!("a/1 ({}", ",".repeat(n)),
        format!("a/1 (b, c 1, {}", ")".repeat(n)),
        format!("{}/1 (b, c 1, d", "a ".repeat(n)),
        format!("a/{} (b, c 1, d)", "1.".repeat(n)),
        format!("a/1 (b, {}1, d)", "c ".repeat(n)),
    ];

    let start = std::time::Instant::now();
    for grammar in all_grammars() {
        for input in &inputs {
            assert!(grammar.parse(input).is_err());
        }
    }
    assert!(start.elapsed() < std::time::Duration::from_secs(10));
}
