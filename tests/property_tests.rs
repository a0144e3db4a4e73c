use dollarmath::{to_html, to_html_with_options, Options};
use proptest::prelude::*;

proptest! {
    #[test]
    fn never_panics_on_arbitrary_input(input in ".*") {
        let _ = to_html(&input);
    }

    #[test]
    fn never_panics_on_dollar_heavy_input(
        input in "[$\\\\ xy\n]{0,64}"
    ) {
        let _ = to_html(&input);
    }

    #[test]
    fn wrappers_are_balanced(input in "[$ a\n]{0,48}") {
        let html = to_html(&input);
        prop_assert_eq!(
            html.matches("<span class=\"math").count(),
            html.matches("</span>").count()
        );
        prop_assert_eq!(html.matches("<p>").count(), html.matches("</p>").count());
    }

    #[test]
    fn disabled_math_emits_no_math_spans(input in "[$\\\\ a-z\n]{0,64}") {
        let options = Options { math: false };
        let html = to_html_with_options(&input, &options);
        prop_assert!(!html.contains("class=\"math"));
    }

    #[test]
    fn plain_text_without_specials_roundtrips(
        input in "[a-z][a-z0-9 ]{0,39}"
    ) {
        // no dollars, no markup: a single paragraph echoing the input
        prop_assert_eq!(to_html(&input), format!("<p>{input}</p>\n"));
    }
}
