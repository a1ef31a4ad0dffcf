use linkmark_engine::{
    DocumentRef, ProjectContext, render_to_blocks, render_to_html, rendering::snapshot,
};
use proptest::prelude::*;

/// Lines built from markdown-significant fragments so the generator hits
/// markers, delimiters and link syntax far more often than random text would.
fn markdownish() -> impl Strategy<Value = String> {
    let fragment = prop_oneof![
        Just("# ".to_string()),
        Just("#### ".to_string()),
        Just("- ".to_string()),
        Just("* ".to_string()),
        Just("```".to_string()),
        Just("**".to_string()),
        Just("__".to_string()),
        Just("*".to_string()),
        Just("_".to_string()),
        Just("`".to_string()),
        Just("[[".to_string()),
        Just("]]".to_string()),
        Just("|".to_string()),
        Just("[".to_string()),
        Just("](".to_string()),
        Just(")".to_string()),
        Just("\n".to_string()),
        Just("\r\n".to_string()),
        Just("\r".to_string()),
        Just("<&\"'>".to_string()),
        "[a-z ]{1,6}",
        "[à-ÿ]{1,3}",
    ];
    prop::collection::vec(fragment, 0..40).prop_map(|parts| parts.concat())
}

fn project() -> ProjectContext {
    ProjectContext::new("p", vec![DocumentRef::new("a.md", "A")])
}

proptest! {
    #[test]
    fn rendering_is_total(md in markdownish()) {
        let _ = render_to_blocks(&md, None);
        let _ = render_to_blocks(&md, Some(&project()));
        let html = render_to_html(&md);
        prop_assert!(html.contains("<body>") && html.ends_with("</html>\n"));
    }

    #[test]
    fn every_span_covers_its_display_text(md in markdownish()) {
        let blocks = render_to_blocks(&md, Some(&project()));
        snapshot::invariants(&blocks);
    }

    #[test]
    fn arbitrary_unicode_never_panics(md in any::<String>()) {
        let blocks = render_to_blocks(&md, None);
        snapshot::invariants(&blocks);
        let _ = render_to_html(&md);
    }

    #[test]
    fn aliased_links_round_trip_offsets(
        prefix in "[a-z *_]{0,10}",
        target in "[a-z]{1,8}",
        alias in "[a-z ]{1,20}",
        suffix in "[a-z *_]{0,10}",
    ) {
        let md = format!("{prefix}[[{target}|{alias}]]{suffix} [[{target}]]");
        let blocks = render_to_blocks(&md, None);
        snapshot::invariants(&blocks);
        for b in &blocks {
            for link in &b.links {
                prop_assert_eq!(&b.content[link.range()], link.display_text.as_str());
            }
        }
    }
}
