mod scoring;

pub(super) const SHORT_SOP: &str = "I am passionate about machine learning research. Specifically, I developed a model that improved accuracy by 12%. However, my goal is a career in academia.";

pub(super) fn filler(words: usize) -> String {
    vec!["lorem"; words].join(" ")
}
