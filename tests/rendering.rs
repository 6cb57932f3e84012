//! Rendered comment blocks for representative declarations

use docblock::config::Loader;
use docblock::processor::render_line;
use docblock::renderer::strip_placeholders;
use docblock::{CommentStyle, Language, Settings};

fn snippet(language: Language, code: &str) -> String {
    render_line(code, language, &Settings::default()).unwrap()
}

fn plain(language: Language, code: &str) -> String {
    strip_placeholders(&snippet(language, code))
}

#[test]
fn parameters_share_description_column() {
    insta::assert_snapshot!(snippet(Language::JavaScript, "function foo(bar, bazzz) {"), @r###"
    /**
     * ${1:[foo description]}
     *
     * @param   {${2:[type]}}  ${3:bar}    ${4:[bar description]}
     * @param   {${5:[type]}}  ${6:bazzz}  ${7:[bazzz description]}
     *
     * @return  {${8:[type]}}         ${9:[return description]}
     */
    "###);
}

#[test]
fn unrecognized_line_renders_empty_block() {
    insta::assert_snapshot!(snippet(Language::JavaScript, "if (ready) {"), @r###"
    /**
     *
     */
    "###);
}

#[test]
fn lex_failure_renders_empty_block() {
    assert_eq!(snippet(Language::C, "int naïve = 1;"), "/**\n *\n */");
}

#[test]
fn c_function_types_align() {
    insta::assert_snapshot!(
        plain(Language::C, "static const unsigned int foo(char *name, int count) {"),
        @r###"
    /**
     * [foo description]
     *
     * @param   {char*}  name   [name description]
     * @param   {int}    count  [count description]
     *
     * @return  {int}           [return description]
     */
    "###
    );
}

#[test]
fn unnamed_parameters_get_a_name_field() {
    insta::assert_snapshot!(snippet(Language::C, "int add(int, int);"), @r###"
    /**
     * ${1:[add description]}
     *
     * @param   {${2:int}}  ${3:[name]}  ${4:[description]}
     * @param   {${5:int}}  ${6:[name]}  ${7:[description]}
     *
     * @return  {${8:int}}          ${9:[return description]}
     */
    "###);
    insta::assert_snapshot!(plain(Language::C, "int add(int, int);"), @r###"
    /**
     * [add description]
     *
     * @param   {int}  [name]  [description]
     * @param   {int}  [name]  [description]
     *
     * @return  {int}          [return description]
     */
    "###);
}

#[test]
fn typescript_generic_types() {
    insta::assert_snapshot!(
        plain(Language::JavaScript, "function pick<T>(items: Array<T>, count = 1): T[] {"),
        @r###"
    /**
     * [pick description]
     *
     * @param   {Array<T>}  items  [items description]
     * @param   {[type]}    count  [count description]
     *
     * @return  {T[]}              [return description]
     */
    "###
    );
}

#[test]
fn variable_type_tag() {
    insta::assert_snapshot!(
        snippet(Language::JavaScript, "let cache: Map<string, number> = new Map();"),
        @r###"
    /**
     * ${1:[cache description]}
     *
     * @type  {${2:Map<string, number>}}
     */
    "###
    );
}

#[test]
fn php_names_are_escaped() {
    insta::assert_snapshot!(snippet(Language::Php, "private ?Logger $logger;"), @r###"
    /**
     * ${1:[\$logger description]}
     *
     * @var  {${2:?Logger}}
     */
    "###);
}

#[test]
fn class_has_description_only() {
    insta::assert_snapshot!(snippet(Language::Java, "public final class Repository {"), @r###"
    /**
     * ${1:[Repository description]}
     */
    "###);
}

#[test]
fn drupal_style_wraps_descriptions() {
    let settings = Loader::new()
        .set_override("comment_style", "drupal")
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(settings.comment_style, CommentStyle::Drupal);

    let output = render_line(
        "public function find(int $id): ?array {",
        Language::Php,
        &settings,
    )
    .unwrap();
    insta::assert_snapshot!(output, @r###"
    /**
     * ${1:[find description]}
     *
     * @param ${2:int} ${3:\$id}
     *   ${4:[\$id description]}
     *
     * @return ${5:?array}
     *   ${6:[return description]}
     */
    "###);
}

#[test]
fn mixin_has_no_return_tag() {
    insta::assert_snapshot!(plain(Language::Scss, "@mixin size($width, $height: $width) {"), @r###"
    /**
     * [size description]
     *
     * @param  {[type]}  $width   [$width description]
     * @param  {[type]}  $height  [$height description]
     */
    "###);
}

#[test]
fn custom_markers_and_spacing() {
    let settings = Settings {
        column_spacing: 1,
        type_placeholder: "mixed".to_string(),
        always_show_return_tag: false,
        markers: docblock::config::Markers {
            open: "/*!".to_string(),
            separator: " ** ".to_string(),
            close: " **/".to_string(),
        },
        ..Settings::default()
    };
    let output = render_line("void draw(int x, int y);", Language::C, &settings).unwrap();
    insta::assert_snapshot!(strip_placeholders(&output), @r###"
    /*!
     ** [draw description]
     **
     ** @param {int} x [x description]
     ** @param {int} y [y description]
     **/
    "###);
}
