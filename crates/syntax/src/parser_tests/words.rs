// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Quoting, escapes, and expansions.

use super::*;

// =============================================================================
// Quoting
// =============================================================================

#[yare::parameterized(
    plain         = { "hello", "<word><unquoted_literal>hello</unquoted_literal></word>" },
    unicode       = { "héllo", "<word><unquoted_literal>héllo</unquoted_literal></word>" },
    equals        = { "a=b", "<word><unquoted_literal>a=b</unquoted_literal></word>" },
    single        = { "'a || b'", "<word><single_quote>a || b</single_quote></word>" },
    single_empty  = { "''", "<word><single_quote></single_quote></word>" },
    single_escape = { r"'a\'", r"<word><single_quote>a\</single_quote></word>" },
    bare_escape   = { r"a\ b", "<word><unquoted_literal>a</unquoted_literal><bare_escape> </bare_escape><unquoted_literal>b</unquoted_literal></word>" },
    escaped_quote = { r#"\""#, r#"<word><bare_escape>"</bare_escape></word>"# },
    mixed_parts   = { r#"a'b'"c""#, "<word><unquoted_literal>a</unquoted_literal><single_quote>b</single_quote><double_quote>c</double_quote></word>" },
)]
fn word_parts(input: &str, expected: &str) {
    assert_eq!(word(input), expected);
}

#[test]
fn escaped_newline_contributes_no_text() {
    let cmd = command("echo a\\\nb");
    let words: Vec<&Node> = cmd.children().collect();
    assert_eq!(
        words[1].dump(),
        "<word><unquoted_literal>a</unquoted_literal><bare_escape></bare_escape><unquoted_literal>b</unquoted_literal></word>"
    );
}

#[yare::parameterized(
    empty          = { r#""""#, "<double_quote></double_quote>" },
    text           = { r#""a b""#, "<double_quote>a b</double_quote>" },
    escaped_quote  = { r#""a\"b""#, r#"<double_quote>a<dquoted_escape>"</dquoted_escape>b</double_quote>"# },
    escaped_dollar = { r#""\$x""#, "<double_quote><dquoted_escape>$</dquoted_escape>x</double_quote>" },
    other_escape   = { r#""a\nb""#, r"<double_quote>a\nb</double_quote>" },
    parameter      = { r#""hi $USER!""#, "<double_quote>hi <named_parameter>USER</named_parameter>!</double_quote>" },
    metacharacters = { r#""a | b; c""#, "<double_quote>a | b; c</double_quote>" },
    backquote      = { r#""`date`""#, "<double_quote><double_backquote>date</double_backquote></double_quote>" },
)]
fn double_quotes(input: &str, expected: &str) {
    assert_eq!(word(input), format!("<word>{expected}</word>"));
}

// =============================================================================
// Backquotes
// =============================================================================

#[yare::parameterized(
    plain          = { "`ls -l`", "<backquote>ls -l</backquote>" },
    escaped_tick   = { r"`echo \`x\``", "<backquote>echo <backquoted_escape>`</backquoted_escape>x<backquoted_escape>`</backquoted_escape></backquote>" },
    escaped_dollar = { r"`echo \$HOME`", "<backquote>echo <backquoted_escape>$</backquoted_escape>HOME</backquote>" },
    other_escape   = { r"`echo \n`", r"<backquote>echo \n</backquote>" },
    dquote_escape  = { r#""`echo \"x\"`""#, r#"<double_quote><double_backquote>echo <backquoted_escape>"</backquoted_escape>x<backquoted_escape>"</backquoted_escape></double_backquote></double_quote>"# },
)]
fn backquotes(input: &str, expected: &str) {
    assert_eq!(word(input), format!("<word>{expected}</word>"));
}

// =============================================================================
// Parameters
// =============================================================================

#[yare::parameterized(
    named       = { "$HOME", "<named_parameter>HOME</named_parameter>" },
    underscore  = { "$_x1", "<named_parameter>_x1</named_parameter>" },
    all_args    = { "$@", "<special_parameter>@</special_parameter>" },
    status      = { "$?", "<special_parameter>?</special_parameter>" },
    pid         = { "$$", "<special_parameter>$</special_parameter>" },
    zero        = { "$0", "<special_parameter>0</special_parameter>" },
    positional  = { "$1", "<positional_parameter>1</positional_parameter>" },
    single_digit = { "$10", "<positional_parameter>1</positional_parameter><unquoted_literal>0</unquoted_literal>" },
    name_ends   = { "$a-b", "<named_parameter>a</named_parameter><unquoted_literal>-b</unquoted_literal>" },
)]
fn parameters(input: &str, expected: &str) {
    assert_eq!(word(input), format!("<word>{expected}</word>"));
}

#[yare::parameterized(
    braced          = { "${x}", "<braced_parameter_expansion>x</braced_parameter_expansion>" },
    braced_digits   = { "${10}", "<braced_parameter_expansion>10</braced_parameter_expansion>" },
    braced_special  = { "${#}", "<braced_parameter_expansion>#</braced_parameter_expansion>" },
    length          = { "${#x}", "<string_length>x</string_length>" },
    use_default     = { "${x:-def}", "<use_default>x<word><unquoted_literal>def</unquoted_literal></word></use_default>" },
    use_default_u   = { "${x-def}", "<use_default_unset>x<word><unquoted_literal>def</unquoted_literal></word></use_default_unset>" },
    assign_default  = { "${x:=1}", "<assign_default>x<word><unquoted_literal>1</unquoted_literal></word></assign_default>" },
    assign_default_u = { "${x=1}", "<assign_default_unset>x<word><unquoted_literal>1</unquoted_literal></word></assign_default_unset>" },
    indicate_error  = { "${x:?}", "<indicate_error>x<word></word></indicate_error>" },
    indicate_error_u = { "${x?oops}", "<indicate_error_unset>x<word><unquoted_literal>oops</unquoted_literal></word></indicate_error_unset>" },
    alternative     = { "${x:+y}", "<use_alternative>x<word><unquoted_literal>y</unquoted_literal></word></use_alternative>" },
    alternative_u   = { "${x+y}", "<use_alternative_unset>x<word><unquoted_literal>y</unquoted_literal></word></use_alternative_unset>" },
    small_suffix    = { "${f%.c}", "<remove_smallest_suffix>f<word><unquoted_literal>.c</unquoted_literal></word></remove_smallest_suffix>" },
    large_suffix    = { "${f%%.*}", "<remove_largest_suffix>f<word><unquoted_literal>.*</unquoted_literal></word></remove_largest_suffix>" },
    small_prefix    = { "${p#*/}", "<remove_smallest_prefix>p<word><unquoted_literal>*/</unquoted_literal></word></remove_smallest_prefix>" },
    large_prefix    = { "${p##*/}", "<remove_largest_prefix>p<word><unquoted_literal>*/</unquoted_literal></word></remove_largest_prefix>" },
    nested_operand  = { "${x:-$y}", "<use_default>x<word><named_parameter>y</named_parameter></word></use_default>" },
    quoted_operand  = { "${x:-'a b'}", "<use_default>x<word><single_quote>a b</single_quote></word></use_default>" },
)]
fn braced_expansions(input: &str, expected: &str) {
    assert_eq!(word(input), format!("<word>{expected}</word>"));
}

#[test]
fn closing_brace_ends_braced_operand_only() {
    assert_eq!(
        word("${x:-a}}"),
        "<word><use_default>x<word><unquoted_literal>a</unquoted_literal></word></use_default><unquoted_literal>}</unquoted_literal></word>"
    );
}

// =============================================================================
// Command and arithmetic expansion
// =============================================================================

#[test]
fn command_expansion() {
    assert_eq!(
        word("$(ls -la)"),
        format!(
            "<word><command_expansion><complete_command>{}</complete_command></command_expansion></word>",
            simple(&["ls", "-la"])
        )
    );
}

#[test]
fn command_expansion_with_list_and_newlines() {
    assert_eq!(
        word("$(\n  a\n  b | c\n)"),
        format!(
            "<word><command_expansion><complete_command>{}</complete_command><complete_command><pipeline>{}{}</pipeline></complete_command></command_expansion></word>",
            simple(&["a"]),
            simple(&["b"]),
            simple(&["c"])
        )
    );
}

#[test]
fn empty_command_expansion() {
    assert_eq!(word("$()"), "<word><command_expansion></command_expansion></word>");
}

#[test]
fn arithmetic_expansion() {
    assert_eq!(
        word("$((1 + 2))"),
        format!(
            "<word><arithmetic_expansion>{}{}{}</arithmetic_expansion></word>",
            lit("1"),
            lit("+"),
            lit("2")
        )
    );
}

#[test]
fn double_paren_that_is_not_arithmetic() {
    assert_eq!(
        word("$((ls); echo)"),
        format!(
            "<word><command_expansion><complete_command><list><subshell>{}</subshell>{}</list></complete_command></command_expansion></word>",
            simple(&["ls"]),
            simple(&["echo"])
        )
    );
}

#[test]
fn expansion_inside_double_quotes() {
    assert_eq!(
        word(r#""n=$(wc -l)""#),
        format!(
            "<word><double_quote>n=<command_expansion><complete_command>{}</complete_command></command_expansion></double_quote></word>",
            simple(&["wc", "-l"])
        )
    );
}

#[test]
fn nesting_limit_applies_to_command_expansion() {
    let config = ParserConfig::default().max_depth(2);
    assert!(Parser::parse_with_config("echo $(echo $(echo))", &config).is_ok());
    assert_eq!(
        Parser::parse_with_config("echo $(echo $(echo $(echo)))", &config),
        Err(ParseError::NestingTooDeep { max: 2 })
    );
}

// =============================================================================
// Rejected words
// =============================================================================

#[yare::parameterized(
    lone_dollar         = { "echo $" },
    lone_dollar_quoted  = { r#"echo "$""# },
    trailing_backslash  = { "echo \\" },
    unclosed_brace      = { "echo ${x" },
    bad_braced_name     = { "echo ${!x}" },
    blank_in_operand    = { "echo ${x:-a b}" },
    unclosed_expansion  = { "echo $(ls" },
    unclosed_backquote  = { "echo `ls" },
)]
fn malformed_words(input: &str) {
    assert!(parse_err(input).is_syntax(), "{input:?} should be a syntax error");
}
