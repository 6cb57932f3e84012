//! Recognition tests across all supported languages
//!
//! Each case is a single declaration line and the symbol it must produce.

use docblock::{Language, Param, Parser, Symbol, SymbolKind};
use rstest::rstest;

fn parse(language: Language, code: &str) -> Symbol {
    Parser::new(language)
        .parse(code)
        .unwrap_or_else(|err| panic!("{code}: {err}"))
}

#[rstest]
#[case::c(Language::C, "int foo = 5;", "foo")]
#[case::java(Language::Java, "private int foo = 5;", "foo")]
#[case::javascript(Language::JavaScript, "let foo = 5", "foo")]
#[case::typescript(Language::JavaScript, "const foo: number = 5;", "foo")]
#[case::parenthesized(Language::JavaScript, "const foo = (a + b) * c;", "foo")]
#[case::php(Language::Php, "$foo = 5", "$foo")]
#[case::scss(Language::Scss, "$foo: 5px;", "$foo")]
fn bare_variable(#[case] language: Language, #[case] code: &str, #[case] name: &str) {
    let symbol = parse(language, code);
    assert_eq!(symbol.kind, SymbolKind::Variable);
    assert_eq!(symbol.name, name);
    assert!(symbol.params.is_empty());
    assert!(!symbol.return_info.present);
}

#[rstest]
#[case::c(Language::C, "int add(int a, int b, int c)", &["a", "b", "c"], true)]
#[case::c_void(Language::C, "void reset(void);", &[], false)]
#[case::java(Language::Java, "public String join(List<String> parts, char sep) {", &["parts", "sep"], true)]
#[case::java_void(Language::Java, "public static void main(String[] args) {", &["args"], false)]
#[case::javascript(Language::JavaScript, "function foo(a, b) {", &["a", "b"], true)]
#[case::typescript(Language::JavaScript, "async fetch(url: string, init?: RequestInit): Promise<Response> {", &["url", "init"], true)]
#[case::php(Language::Php, "function foo($a, $b = 1) {", &["$a", "$b"], true)]
#[case::scss_function(Language::Scss, "@function rem($px) {", &["$px"], true)]
#[case::scss_mixin(Language::Scss, "@mixin theme($fg, $bg) {", &["$fg", "$bg"], false)]
fn function_parameters_in_order(
    #[case] language: Language,
    #[case] code: &str,
    #[case] names: &[&str],
    #[case] returns: bool,
) {
    let symbol = parse(language, code);
    assert_eq!(symbol.kind, SymbolKind::Function);
    let found: Vec<_> = symbol.params.iter().map(|param| param.name.as_str()).collect();
    assert_eq!(found, names);
    assert_eq!(symbol.return_info.present, returns);
}

#[rstest]
#[case::c(Language::C, "struct node {", "node")]
#[case::java(Language::Java, "public abstract class Shape implements Drawable {", "Shape")]
#[case::javascript(Language::JavaScript, "export class Store<T> {", "Store")]
#[case::typescript(Language::JavaScript, "interface Props {", "Props")]
#[case::php(Language::Php, "abstract class Model", "Model")]
fn class_declaration(#[case] language: Language, #[case] code: &str, #[case] name: &str) {
    let symbol = parse(language, code);
    assert_eq!(symbol.kind, SymbolKind::Class);
    assert_eq!(symbol.name, name);
    assert!(symbol.params.is_empty());
}

#[rstest]
#[case::c(Language::C, "return x + 1;")]
#[case::java(Language::Java, "for (int i = 0; i < n; i++) {")]
#[case::javascript(Language::JavaScript, "} else {")]
#[case::php(Language::Php, "echo $message;")]
#[case::scss(Language::Scss, "&:hover {")]
#[case::empty(Language::JavaScript, "")]
fn no_confident_match(#[case] language: Language, #[case] code: &str) {
    assert!(!parse(language, code).is_recognized());
}

#[test]
fn typescript_generic_parameter_type() {
    let symbol = parse(Language::JavaScript, "function foo(arg: Array<number>)");
    assert_eq!(symbol.params[0].kind.as_deref(), Some("Array<number>"));
}

#[test]
fn typescript_array_return_type() {
    let symbol = parse(Language::JavaScript, "function foo(): number[]");
    assert_eq!(symbol.return_info.kind.as_deref(), Some("number[]"));
}

#[rstest]
#[case::php(Language::Php, "public function all(): Foo[] {", "Foo[]")]
#[case::php_nullable(Language::Php, "function first(): ?Item {", "?Item")]
#[case::java(Language::Java, "public String[] names() {", "String[]")]
fn array_and_nullable_return_types(
    #[case] language: Language,
    #[case] code: &str,
    #[case] kind: &str,
) {
    let symbol = parse(language, code);
    assert_eq!(symbol.kind, SymbolKind::Function);
    assert_eq!(symbol.return_info.kind.as_deref(), Some(kind));
}

#[rstest]
#[case::prototype("Bar.prototype.foo = function(arg1, arg2) {")]
#[case::dotted_path("a.b.foo = function(arg1, arg2) {")]
#[case::named_expression("exports.handler = function foo(arg1, arg2) {")]
fn dotted_assignment_is_named_by_last_segment(#[case] code: &str) {
    let symbol = parse(Language::JavaScript, code);
    assert_eq!(symbol.kind, SymbolKind::Function);
    assert_eq!(symbol.name, "foo");
    assert_eq!(symbol.params.len(), 2);
}

#[test]
fn destructured_parameters_expand() {
    let symbol = parse(Language::JavaScript, "function f({ a, b }, [c, d]) {");
    let names: Vec<_> = symbol.params.iter().map(|param| param.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b", "c", "d"]);
}

/// The function rule runs before the variable rule, so an explicit function
/// keyword wins over the assignment that first made the line look like a variable.
#[rstest]
#[case::javascript(Language::JavaScript, "let fn = function(a) {", "fn")]
#[case::php(Language::Php, "$fn = function ($a) {", "$fn")]
fn function_keyword_wins_over_variable(
    #[case] language: Language,
    #[case] code: &str,
    #[case] name: &str,
) {
    let symbol = parse(language, code);
    assert_eq!(symbol.kind, SymbolKind::Function);
    assert_eq!(symbol.name, name);
}

/// A C type word is also a valid identifier shape; the type reading wins while
/// no name has been seen, and the parenthesis reclassifies the line.
#[test]
fn type_word_is_reclassified_by_parenthesis() {
    let symbol = parse(Language::C, "size_t length(const char *s)");
    assert_eq!(symbol.kind, SymbolKind::Function);
    assert_eq!(symbol.name, "length");
    assert_eq!(symbol.var_type, None);
    assert_eq!(
        symbol.params,
        vec![Param::named("s").with_type(Some("char*".to_string()))]
    );
}

#[test]
fn passes_do_not_share_state() {
    let parser = Parser::new(Language::JavaScript);
    let first = parser.parse("function foo(a, b) {").unwrap();
    let between = parser.parse("const x = 1;").unwrap();
    let second = parser.parse("function foo(a, b) {").unwrap();
    assert_eq!(first, second);
    assert_eq!(between.kind, SymbolKind::Variable);
}

#[test]
fn editor_identifiers_select_recognizers() {
    let symbol = parse(
        Language::from_id("typescriptreact").unwrap(),
        "const Button = ({ label }: Props) => {",
    );
    assert_eq!(symbol.kind, SymbolKind::Function);
    assert_eq!(symbol.name, "Button");
    assert_eq!(symbol.params, vec![Param::named("label")]);
}
