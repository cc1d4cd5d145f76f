//! Closed sets of heading labels.
//!
//! A line is a heading only when its trimmed content equals one of the labels
//! exactly. The set is data, so card variants and user configuration can swap
//! or extend it without touching the paragraph styler.

use std::collections::BTreeSet;

const CRYSTAL_GUIDE_LABELS: [&str; 3] = ["開運水晶指引", "開運水晶指引:", "開運水晶指引："];

const CLASSIC_LABELS: [&str; 4] = [
    "一、整體運勢分析",
    "二、感情運勢",
    "三、工作事業運勢",
    "四、財富運勢",
];

const REPORT_LABELS: [&str; 6] = [
    "一、整體運勢分析",
    "二、感情婚姻運勢",
    "三、工作事業運勢",
    "四、財富運勢",
    "五、健康運勢",
    "六、人際貴人運勢",
];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HeadingLabels {
    labels: BTreeSet<String>,
}

impl HeadingLabels {
    /// Build a set from arbitrary labels. Labels are trimmed; empty ones are
    /// dropped since no rendered line can ever be empty.
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let labels = labels
            .into_iter()
            .map(|label| label.as_ref().trim().to_string())
            .filter(|label| !label.is_empty())
            .collect();
        HeadingLabels { labels }
    }

    /// Labels used by the compact card.
    pub fn classic() -> Self {
        Self::new(CLASSIC_LABELS.iter().chain(CRYSTAL_GUIDE_LABELS.iter()))
    }

    /// Labels used by the report-style card.
    pub fn report() -> Self {
        Self::new(REPORT_LABELS.iter().chain(CRYSTAL_GUIDE_LABELS.iter()))
    }

    pub fn is_heading(&self, line: &str) -> bool {
        self.labels.contains(line.trim())
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_exact_label_after_trim() {
        let labels = HeadingLabels::classic();
        assert!(labels.is_heading("一、整體運勢分析"));
        assert!(labels.is_heading("  四、財富運勢\t"));
    }

    #[test]
    fn rejects_substrings_and_extensions() {
        let labels = HeadingLabels::classic();
        assert!(!labels.is_heading("一、整體運勢"));
        assert!(!labels.is_heading("一、整體運勢分析如下"));
        assert!(!labels.is_heading("流年主數為「3」，一、整體運勢分析"));
    }

    #[test]
    fn crystal_guide_accepts_optional_colon() {
        for labels in [HeadingLabels::classic(), HeadingLabels::report()] {
            assert!(labels.is_heading("開運水晶指引"));
            assert!(labels.is_heading("開運水晶指引:"));
            assert!(labels.is_heading("開運水晶指引："));
            assert!(!labels.is_heading("開運水晶指引::"));
        }
    }

    #[test]
    fn variants_differ_on_relationship_heading() {
        assert!(HeadingLabels::classic().is_heading("二、感情運勢"));
        assert!(!HeadingLabels::classic().is_heading("二、感情婚姻運勢"));
        assert!(HeadingLabels::report().is_heading("二、感情婚姻運勢"));
        assert!(!HeadingLabels::report().is_heading("二、感情運勢"));
    }

    #[test]
    fn custom_sets_drop_blank_labels() {
        let labels = HeadingLabels::new(["  序言 ", "", "   "]);
        assert_eq!(labels.len(), 1);
        assert!(labels.is_heading("序言"));
    }
}
