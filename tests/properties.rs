use proptest::prelude::*;
use smart_trim::trim::extension::append_extension;
use smart_trim::trim::sanitize::sanitize;
use smart_trim::trim::truncate::truncate_words;
use smart_trim::{
    BoundarySummarizer, ContentItem, HtmlLinkRenderer, Summarizer, TagBalancer, TargetLink,
    TextFormat, TrimConfig, TrimUnit, Trimmer,
};

/// 夹杂标签、实体与各种空白的文本
fn markup() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-zA-Z.,!?]{1,8}",
            Just(" ".to_string()),
            Just("\n".to_string()),
            Just("\t".to_string()),
            Just("&nbsp;".to_string()),
            Just("\u{a0}".to_string()),
            Just("<p>".to_string()),
            Just("</p>".to_string()),
            Just("<b>".to_string()),
            Just("</b>".to_string()),
            Just("<br />".to_string()),
            Just("<!--break-->".to_string()),
            Just("<".to_string()),
            Just(">".to_string()),
        ],
        0..40,
    )
    .prop_map(|parts| parts.concat())
}

/// 带段落标签与手动截断点的正文
fn paragraphs() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-zA-Z .!?\n]{1,12}",
            Just("<p>".to_string()),
            Just("</p>".to_string()),
            Just("<br>".to_string()),
            Just("<!--break-->".to_string()),
        ],
        0..30,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn sanitize_is_idempotent(input in markup()) {
        let once = sanitize(&input);
        prop_assert_eq!(sanitize(&once), once);
    }

    #[test]
    fn sanitize_leaves_no_tags_or_line_breaks(input in markup()) {
        let out = sanitize(&input);
        prop_assert!(!out.contains('<'));
        prop_assert!(!out.contains(['\n', '\r', '\t']));
        prop_assert!(!out.contains("&nbsp;"));
        prop_assert_eq!(out.trim(), out.as_str());
    }

    #[test]
    fn word_trim_never_exceeds_limit(text in "[a-z]{1,6}( [a-z]{1,6}){0,30}", limit in 0usize..20) {
        let out = truncate_words(&text, limit, &TagBalancer);
        let count = text.split_whitespace().count();
        if count <= limit {
            prop_assert_eq!(out, text);
        } else {
            prop_assert_eq!(out.split_whitespace().count(), limit);
        }
    }

    #[test]
    fn nothing_happens_below_budget(text in "[a-z]{1,6}( [a-z]{1,6}){0,10}") {
        let trimmer = Trimmer::new(TrimConfig {
            trim_length: 11,
            trim_unit: TrimUnit::Words,
            ..TrimConfig::default()
        });
        let item = ContentItem::new(text.clone(), "plain_text");
        prop_assert_eq!(trimmer.render(&item, None), text);
    }

    #[test]
    fn summary_fits_budget(text in paragraphs(), budget in 0usize..120) {
        let format = TextFormat::new("plain_text", true, false);
        let out = BoundarySummarizer::new().summarize(&text, &format, budget);
        prop_assert!(out.chars().count() <= budget);
        prop_assert!(text.starts_with(&out));
    }

    #[test]
    fn period_never_doubles(words in "[a-z]{1,6}( [a-z]{1,6}){0,5}") {
        let text = format!("{words}.");
        let config = TrimConfig { suffix: ".".into(), ..TrimConfig::default() };
        let out = append_extension(&text, true, &config, None, &HtmlLinkRenderer);
        prop_assert_eq!(out, text);
    }

    #[test]
    fn break_marker_always_suppresses_link(words in "[a-z ]{0,30}") {
        let text = format!("{words}<!--break-->");
        let config = TrimConfig { more_link: true, ..TrimConfig::default() };
        let link = TargetLink::new("/node/5");
        let out = append_extension(&text, false, &config, Some(&link), &HtmlLinkRenderer);
        prop_assert!(!out.contains("more-link"));
    }

    #[test]
    fn extension_replaces_space_before_closing_tag(words in "[a-z]{1,6}( [a-z]{1,6}){0,5}") {
        let text = format!("<p>{words} </p>");
        let out = append_extension(&text, true, &TrimConfig::default(), None, &HtmlLinkRenderer);
        prop_assert_eq!(out, format!("<p>{words}...</p>"));
    }
}
