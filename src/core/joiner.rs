//! 단어 결합 및 단어 경계 기준 자르기

/// 단어들을 구분자로 결합
///
/// `limit`이 있으면 결과 길이(문자 수)가 `limit`을 넘지 않는 데까지만
/// 단어를 포함하고, 단어 중간에서는 절대 자르지 않음.
/// 넘치는 첫 단어부터 이후 단어는 모두 버림
pub fn join_words<S: AsRef<str>>(words: &[S], separator: &str, limit: Option<usize>) -> String {
    let Some(limit) = limit else {
        return join(words, separator);
    };

    let separator_len = separator.chars().count();
    let mut length = 0;
    let mut taken = 0;

    for (i, word) in words.iter().enumerate() {
        let word_len = word.as_ref().chars().count();
        let cost = if i == 0 { word_len } else { separator_len + word_len };

        if length + cost > limit {
            break;
        }
        length += cost;
        taken += 1;

        if length == limit {
            break;
        }
    }

    join(&words[..taken], separator)
}

fn join<S: AsRef<str>>(words: &[S], separator: &str) -> String {
    let mut result = String::new();
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            result.push_str(separator);
        }
        result.push_str(word.as_ref());
    }
    result
}
