#[cfg(test)]
mod unit_tests {

    use crate::{
        CHINESE, Context, Estimator, ExtractedLanguage, LanguageShare, MissingLanguage,
        ShareTable, assert_matcher_contract, default_target_names, estimate_coverage,
        estimate::DEFAULT_PRIMARY_OFFSET,
        extract::{KnownNameMatcher, PercentMatcher},
        extract_languages,
        lang::from_name,
        testing::matcher_contract::MatcherTestConfig,
    };

    impl MatcherTestConfig for PercentMatcher {
        fn should_extract() -> &'static [(&'static str, &'static [(&'static str, f64)])] {
            &[
                ("french (official) 80%, creole 20%", &[("french", 80.0), ("creole", 20.0)]),
                ("english only 78.2%, other 21.8%", &[("english", 78.2)]),
                ("no numbers at all", &[]),
            ]
        }
    }

    impl MatcherTestConfig for KnownNameMatcher {
        fn should_extract() -> &'static [(&'static str, &'static [(&'static str, f64)])] {
            &[
                ("japanese", &[("japanese", 100.0)]),
                (
                    "spanish, quechua, aymara (all official)",
                    &[("spanish", 85.0), ("quechua", 85.0), ("aymara", 85.0)],
                ),
                ("klingon", &[]),
            ]
        }
    }

    fn known() -> KnownNameMatcher {
        KnownNameMatcher::from_context(
            &Context::default(),
            ShareTable::EXTRACTION,
            DEFAULT_PRIMARY_OFFSET,
        )
        .unwrap()
    }

    #[test]
    fn percent_matcher_contract() {
        assert_matcher_contract!(PercentMatcher);
    }

    #[test]
    fn known_name_matcher_contract() {
        assert_matcher_contract!(known());
    }

    #[test]
    fn blank_details_give_zero_result() {
        for details in ["", "   ", "\t\n"] {
            let r = estimate_coverage(details, &["English", "Chinese"]);
            assert_eq!(r.total_percent, 0);
            assert!(r.breakdown.is_empty());
            assert!(r.missing.is_empty());
            assert!(r.is_empty());
            assert!(extract_languages(details).is_empty());
        }
    }

    #[test]
    fn single_language_country() {
        let r = estimate_coverage("Japanese", &["Japanese"]);
        assert_eq!(
            r.breakdown,
            vec![LanguageShare {
                language: "Japanese".into(),
                percent: 100.0
            }]
        );
        assert_eq!(r.total_percent, 100);
        assert!(r.missing.is_empty());
    }

    #[test]
    fn single_language_with_official_tag() {
        let r = estimate_coverage("Korean (official)", &["Korean"]);
        assert_eq!(r.breakdown[0].percent, 100.0);
    }

    #[test]
    fn explicit_share_and_missing_language() {
        let r = estimate_coverage("French (official) 80%, Creole 20%", &["French"]);
        assert_eq!(
            r.breakdown,
            vec![LanguageShare {
                language: "French".into(),
                percent: 80.0
            }]
        );
        assert_eq!(r.total_percent, 80);
        assert_eq!(
            r.missing,
            vec![MissingLanguage {
                language: "Creole".into(),
                percent: 20.0
            }]
        );
    }

    #[test]
    fn several_official_languages_without_numbers() {
        let r = estimate_coverage("Spanish, Quechua, Aymara (all official)", &["Spanish"]);
        assert_eq!(
            r.breakdown,
            vec![LanguageShare {
                language: "Spanish".into(),
                percent: 90.0
            }]
        );
        assert_eq!(r.total_percent, 90);
        let missing: Vec<_> = r.missing.iter().map(|m| m.language.as_str()).collect();
        assert_eq!(missing, ["Quechua", "Aymara"]);
    }

    #[test]
    fn extraction_fallback_table() {
        let out = extract_languages("Arabic (official), French, English widely understood");
        assert_eq!(
            out,
            vec![
                ExtractedLanguage::new("english", 15.0),
                ExtractedLanguage::new("french", 30.0),
                ExtractedLanguage::new("arabic", 85.0),
            ]
        );
    }

    #[test]
    fn missing_respects_materiality() {
        let r = estimate_coverage("English 90%, Welsh 4.9%, Gaelic 5%", &["English"]);
        let missing: Vec<_> = r.missing.iter().map(|m| m.language.as_str()).collect();
        assert_eq!(missing, ["Gaelic"]);

        let est = Estimator::builder().materiality(1.0).build().unwrap();
        let r = est.estimate_coverage("English 90%, Welsh 4.9%, Gaelic 5%", &["English"]);
        let missing: Vec<_> = r.missing.iter().map(|m| m.language.as_str()).collect();
        assert_eq!(missing, ["Gaelic", "Welsh"]);
    }

    #[test]
    fn missing_sort_is_stable() {
        let r = estimate_coverage("Hindi 40%, Tamil 10%, Telugu 10%, Urdu 10%", &["Hindi"]);
        let missing: Vec<_> = r.missing.iter().map(|m| m.language.as_str()).collect();
        assert_eq!(missing, ["Tamil", "Telugu", "Urdu"]);
    }

    #[test]
    fn duplicate_targets_count_once() {
        let r = estimate_coverage("English 60%, French 40%", &["English", "english", " ENGLISH "]);
        assert_eq!(r.breakdown.len(), 1);
        assert_eq!(r.total_percent, 60);
    }

    #[test]
    fn breakdown_keeps_caller_order() {
        let r = estimate_coverage("English 60%, Mandarin 30%", &["Chinese", "English"]);
        let langs: Vec<_> = r.breakdown.iter().map(|b| b.language.as_str()).collect();
        assert_eq!(langs, ["Chinese", "English"]);
        assert_eq!(r.total_percent, 90);
    }

    #[test]
    fn names_inside_other_names_are_not_missing() {
        let china = "Standard Chinese or Mandarin (official; Putonghua, based on the Beijing dialect), \
                     Yue (Cantonese), Wu (Shanghainese), Minbei (Fuzhou), Xiang, Gan, Hakka dialects";
        assert!(!extract_languages(china).iter().any(|l| l.name == "dari"));

        let r = estimate_coverage(china, &default_target_names());
        assert_eq!(r.total_percent, 90);
        assert_eq!(
            r.missing,
            vec![
                MissingLanguage { language: "Mandarin".into(), percent: 50.0 },
                MissingLanguage { language: "Cantonese".into(), percent: 15.0 },
            ]
        );
    }

    #[test]
    fn lang_lookup() {
        assert_eq!(from_name(" Chinese "), Some(CHINESE));
        assert_eq!(from_name("klingon"), None);
        assert_eq!(CHINESE.aliases(), ["chinese", "mandarin", "cantonese", "putonghua"]);
        assert_eq!(default_target_names(), ["English", "Chinese"]);
    }

    #[test]
    fn search_terms_fall_back_to_literal() {
        let ctx = Context::default();
        let terms: Vec<String> = ctx.search_terms("Wolof").iter().map(|t| t.to_string()).collect();
        assert_eq!(terms, ["wolof"]);
        assert_eq!(ctx.search_terms("SPANISH").len(), 2);
    }
}
