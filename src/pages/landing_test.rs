use super::*;

#[test]
fn feature_titles_are_unique() {
    let mut titles: Vec<_> = FEATURES.iter().map(|f| f.title).collect();
    titles.sort_unstable();
    titles.dedup();
    assert_eq!(titles.len(), FEATURES.len());
}

#[test]
fn faq_questions_end_with_question_mark() {
    assert!(FAQS.iter().all(|f| f.question.ends_with('?')));
    assert!(FAQS.iter().all(|f| !f.answer.is_empty()));
}
