use crate::{context::Context, extract::Matcher};

/// Trait that matchers implement to opt into the shared contract suite.
pub trait MatcherTestConfig: Matcher + Sized {
    /// General samples, lowercased and non-blank as the pipeline guarantees.
    fn samples() -> &'static [&'static str] {
        &[
            "english 79%, spanish 13%, other 8%",
            "french (official), creole (official)",
            "japanese",
            "arabic (official); berber; french (lingua franca)",
            "mandarin chinese 70%, cantonese 15%, hakka",
        ]
    }

    /// Input → expected `(name, share)` pairs, in order.
    fn should_extract() -> &'static [(&'static str, &'static [(&'static str, f64)])] {
        &[]
    }
}

/// Assert that a matcher satisfies every matcher contract:
///
/// 1. `names_are_unique_and_lowercase` → no duplicate names, all lowercased
/// 2. `shares_in_range` → every share lies in `(0, 100]`
/// 3. `matcher_is_deterministic` → same input, same output
/// 4. `expected_extractions` → `should_extract()` pairs match exactly
/// 5. `no_panic_on_mixed_scripts` → survives pathological input
#[macro_export]
macro_rules! assert_matcher_contract {
    ($matcher:expr) => {
        $crate::testing::matcher_contract::names_are_unique_and_lowercase(&$matcher);
        $crate::testing::matcher_contract::shares_in_range(&$matcher);
        $crate::testing::matcher_contract::matcher_is_deterministic(&$matcher);
        $crate::testing::matcher_contract::expected_extractions(&$matcher);
        $crate::testing::matcher_contract::no_panic_on_mixed_scripts(&$matcher);
    };
}

pub fn names_are_unique_and_lowercase<M: MatcherTestConfig>(matcher: &M) {
    let ctx = Context::default();
    for &input in M::samples() {
        let out = matcher.extract(input, &ctx);
        for (i, lang) in out.iter().enumerate() {
            assert_eq!(
                lang.name,
                lang.name.to_lowercase(),
                "matcher `{}` returned non-lowercase name on `{input}`",
                matcher.name()
            );
            assert!(
                !out[..i].iter().any(|l| l.name == lang.name),
                "matcher `{}` returned `{}` twice on `{input}`",
                matcher.name(),
                lang.name
            );
        }
    }
}

pub fn shares_in_range<M: MatcherTestConfig>(matcher: &M) {
    let ctx = Context::default();
    for &input in M::samples() {
        for lang in matcher.extract(input, &ctx) {
            assert!(
                lang.share > 0.0 && lang.share <= 100.0,
                "matcher `{}` share {} out of range for `{}` on `{input}`",
                matcher.name(),
                lang.share,
                lang.name
            );
        }
    }
}

pub fn matcher_is_deterministic<M: MatcherTestConfig>(matcher: &M) {
    let ctx = Context::default();
    for &input in M::samples() {
        assert_eq!(
            matcher.extract(input, &ctx),
            matcher.extract(input, &ctx),
            "matcher `{}` not deterministic on `{input}`",
            matcher.name()
        );
    }
}

pub fn expected_extractions<M: MatcherTestConfig>(matcher: &M) {
    let ctx = Context::default();
    for &(input, expected) in M::should_extract() {
        let got: Vec<(String, f64)> = matcher
            .extract(input, &ctx)
            .into_iter()
            .map(|l| (l.name, l.share))
            .collect();
        let want: Vec<(String, f64)> = expected.iter().map(|&(n, s)| (n.to_string(), s)).collect();
        assert_eq!(got, want, "matcher `{}` on `{input}`", matcher.name());
    }
}

pub fn no_panic_on_mixed_scripts<M: MatcherTestConfig>(matcher: &M) {
    let ctx = Context::default();
    let _ = matcher.extract("hello 世界 русский 45% türkçe العربية 简体中文 (official 12%", &ctx);
    let _ = matcher.extract("% 100% (( official ; . 3.", &ctx);
}
