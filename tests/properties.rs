//! Property-based tests for lexing, recognition and rendering
//!
//! Declarations are generated from small grammars per language so that the
//! properties are exercised on recognized symbols, not only on empty blocks.

use docblock::lexer::tokenize;
use docblock::processor::render_line;
use docblock::renderer::strip_placeholders;
use docblock::{Language, Parser, Settings};
use proptest::prelude::*;

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-zA-Z0-9_]{0,12}"
        .prop_filter("not a keyword", |name| {
            !matches!(
                name.as_str(),
                "function" | "class" | "let" | "const" | "var" | "if" | "for" | "do" | "in"
                    | "of" | "new" | "get" | "set" | "static" | "async" | "enum" | "fn"
            )
        })
}

fn type_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("number".to_string()),
        Just("string".to_string()),
        "[A-Z][a-z]{1,8}",
        "[A-Z][a-z]{1,8}".prop_map(|inner| format!("Array<{inner}>")),
        "[A-Z][a-z]{1,8}".prop_map(|inner| format!("{inner}[]")),
    ]
}

/// `function name(a: T, b, ...)` with optional types
fn typescript_function() -> impl Strategy<Value = (String, usize)> {
    (
        name_strategy(),
        prop::collection::vec((name_strategy(), prop::option::of(type_strategy())), 0..5),
        prop::option::of(type_strategy()),
    )
        .prop_map(|(name, params, returns)| {
            let list: Vec<String> = params
                .iter()
                .map(|(param, kind)| match kind {
                    Some(kind) => format!("{param}: {kind}"),
                    None => param.clone(),
                })
                .collect();
            let returns = returns.map(|kind| format!(": {kind}")).unwrap_or_default();
            (
                format!("function {name}({}){returns} {{", list.join(", ")),
                params.len(),
            )
        })
}

/// `function name(Type $a, $b, ...)`
fn php_function() -> impl Strategy<Value = (String, usize)> {
    (
        name_strategy(),
        prop::collection::vec((name_strategy(), prop::option::of("[A-Z][a-z]{1,8}")), 0..5),
    )
        .prop_map(|(name, params)| {
            let list: Vec<String> = params
                .iter()
                .map(|(param, kind)| match kind {
                    Some(kind) => format!("{kind} ${param}"),
                    None => format!("${param}"),
                })
                .collect();
            (
                format!("public function {name}({}) {{", list.join(", ")),
                params.len(),
            )
        })
}

fn settings_strategy() -> impl Strategy<Value = Settings> {
    (0usize..5, any::<bool>(), any::<bool>()).prop_map(|(spacing, drupal, always)| Settings {
        column_spacing: spacing,
        comment_style: if drupal {
            docblock::CommentStyle::Drupal
        } else {
            docblock::CommentStyle::Default
        },
        always_show_return_tag: always,
        ..Settings::default()
    })
}

proptest! {
    #[test]
    fn lexing_never_panics(source in "\\PC{0,80}") {
        let _ = tokenize(&source);
    }

    #[test]
    fn rendering_arbitrary_text_never_fails(source in "\\PC{0,80}", settings in settings_strategy()) {
        for language in Language::ALL {
            let output = render_line(&source, language, &settings);
            prop_assert!(output.is_ok(), "{language}: {source:?}");
        }
    }

    #[test]
    fn no_trailing_whitespace(
        (code, _) in typescript_function(),
        settings in settings_strategy(),
    ) {
        let output = render_line(&code, Language::JavaScript, &settings).unwrap();
        for line in output.lines().chain(strip_placeholders(&output).lines()) {
            prop_assert_eq!(line, line.trim_end());
        }
    }

    #[test]
    fn rendering_is_idempotent(
        (code, _) in php_function(),
        settings in settings_strategy(),
    ) {
        let first = render_line(&code, Language::Php, &settings).unwrap();
        let second = render_line(&code, Language::Php, &settings).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn parameter_count_matches_declaration((code, count) in typescript_function()) {
        let symbol = Parser::new(Language::JavaScript).parse(&code).unwrap();
        prop_assert_eq!(symbol.params.len(), count);
        prop_assert!(symbol.return_info.present);
    }

    #[test]
    fn php_parameter_count_matches_declaration((code, count) in php_function()) {
        let symbol = Parser::new(Language::Php).parse(&code).unwrap();
        prop_assert_eq!(symbol.params.len(), count);
        prop_assert!(symbol.params.iter().all(|param| param.name.starts_with('$')));
    }

    #[test]
    fn descriptions_start_in_one_column((code, count) in typescript_function()) {
        prop_assume!(count > 0);
        let output = render_line(&code, Language::JavaScript, &Settings::default()).unwrap();
        let plain = strip_placeholders(&output);
        let columns: Vec<usize> = plain
            .lines()
            .filter(|line| line.contains("@param") || line.contains("@return"))
            .map(|line| line.rfind(" [").unwrap())
            .collect();
        prop_assert!(columns.windows(2).all(|pair| pair[0] == pair[1]), "{plain}");
    }
}
