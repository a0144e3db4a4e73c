use dollarmath::{to_html, to_html_with_options, Options};

fn no_math_html(input: &str) -> String {
    let options = Options { math: false };
    to_html_with_options(input, &options)
}

#[test]
fn test_inline_math() {
    assert_eq!(
        to_html("$1+2$"),
        "<p><span class=\"math inline\">\\(1+2\\)</span></p>\n"
    );
}

#[test]
fn test_inline_math_in_text() {
    assert_eq!(
        to_html("the value $x^2$ grows"),
        "<p>the value <span class=\"math inline\">\\(x^2\\)</span> grows</p>\n"
    );
}

#[test]
fn test_multiple_inline_spans() {
    assert_eq!(
        to_html("$a$ and $b$"),
        "<p><span class=\"math inline\">\\(a\\)</span> and <span class=\"math inline\">\\(b\\)</span></p>\n"
    );
}

#[test]
fn test_lone_dollar_is_literal() {
    assert_eq!(to_html("$ alone"), "<p>$ alone</p>\n");
    assert_eq!(to_html("price: 5$"), "<p>price: 5$</p>\n");
}

#[test]
fn test_unclosed_opener_is_literal() {
    assert_eq!(to_html("a $x b"), "<p>a $x b</p>\n");
}

#[test]
fn test_escaped_dollar_is_literal() {
    assert_eq!(to_html("\\$escaped\\$"), "<p>$escaped$</p>\n");
}

#[test]
fn test_escaped_opener_then_real_span() {
    assert_eq!(
        to_html("\\$5 and $x$"),
        "<p>$5 and <span class=\"math inline\">\\(x\\)</span></p>\n"
    );
}

#[test]
fn test_mid_text_double_dollar_run_is_literal() {
    assert_eq!(to_html("a $$ b"), "<p>a $$ b</p>\n");
}

#[test]
fn test_inline_math_spans_soft_break() {
    // paragraph lines are joined with a newline before the inline pass
    assert_eq!(
        to_html("a $x\ny$ b"),
        "<p>a <span class=\"math inline\">\\(x\ny\\)</span> b</p>\n"
    );
}

#[test]
fn test_html_escaping_inside_inline_math() {
    assert_eq!(
        to_html("$a < b$"),
        "<p><span class=\"math inline\">\\(a &lt; b\\)</span></p>\n"
    );
}

#[test]
fn test_html_escaping_outside_math() {
    assert_eq!(to_html("a < b"), "<p>a &lt; b</p>\n");
}

#[test]
fn test_math_disabled_keeps_dollars() {
    assert_eq!(no_math_html("$1+2$"), "<p>$1+2$</p>\n");
    assert_eq!(no_math_html("\\$5"), "<p>\\$5</p>\n");
}
