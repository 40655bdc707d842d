//! 内置示例题集（UPSC 预选考试风格）

use super::question::QuestionRecord;
use super::question_set::QuestionSet;

/// (id, 题干, [A, B, C, D], 正确答案, 作答)
type SampleRow = (
    &'static str,
    &'static str,
    [&'static str; 4],
    &'static str,
    Option<&'static str>,
);

const SAMPLE_ROWS: [SampleRow; 5] = [
    (
        "1",
        "Which river is known as the 'Ganga of the South'?",
        ["Godavari", "Krishna", "Cauvery", "Narmada"],
        "A",
        Some("A"),
    ),
    (
        "2",
        "Who founded the Mauryan Empire?",
        ["Ashoka", "Chandragupta Maurya", "Bindusara", "Samudragupta"],
        "B",
        Some("A"),
    ),
    (
        "3",
        "What is the capital of Japan?",
        ["Seoul", "Beijing", "Tokyo", "Bangkok"],
        "C",
        Some("C"),
    ),
    (
        "4",
        "Which of the following is a fundamental right in the Indian Constitution?",
        [
            "Right to Property",
            "Right to Education",
            "Right to Vote",
            "Right to Work",
        ],
        "B",
        None,
    ),
    (
        "5",
        "The Battle of Plassey was fought in which year?",
        ["1757", "1764", "1773", "1799"],
        "A",
        Some("B"),
    ),
];

/// 启动时使用的示例题集
pub fn sample_questions() -> QuestionSet {
    let records = SAMPLE_ROWS
        .iter()
        .map(|(id, text, options, correct, chosen)| QuestionRecord {
            id: id.to_string(),
            text: text.to_string(),
            options: ["A", "B", "C", "D"]
                .iter()
                .zip(options.iter())
                .map(|(key, option)| (key.to_string(), option.to_string()))
                .collect(),
            correct_option: correct.to_string(),
            chosen_option: chosen.map(str::to_string),
        })
        .collect();

    QuestionSet::from_records(records).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_questions() {
        let set = sample_questions();
        assert_eq!(set.len(), 5);
        assert_eq!(set.get(1).unwrap().options["B"], "Chandragupta Maurya");
        assert_eq!(set.get(3).unwrap().chosen_option, None);
        assert_eq!(set.iter().filter(|q| q.is_attempted()).count(), 4);
    }
}
