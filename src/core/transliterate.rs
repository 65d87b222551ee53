//! 단어 단위 음역 엔진

use std::collections::HashSet;

use crate::core::table::ReplacementTable;

/// 한 단어의 코드포인트 순서열을 음역
///
/// 각 코드포인트에 대해 처음 일치하는 규칙을 적용:
/// 1. ASCII 영숫자 -> 그대로
/// 2. 무시 집합에 포함 -> 원래 문자 그대로 (음역하지 않음)
/// 3. 치환 테이블에 있으면 치환 문자열, 없으면 제거
pub fn transliterate_word(
    codepoints: &[char],
    ignored: &HashSet<char>,
    table: &ReplacementTable,
) -> String {
    let mut result = String::with_capacity(codepoints.len() * 2);

    for &c in codepoints {
        if c.is_ascii_alphanumeric() || ignored.contains(&c) {
            result.push(c);
        } else if let Some(replacement) = table.lookup(c) {
            result.push_str(replacement);
        }
    }

    log::trace!("음역: {:?} -> {:?}", codepoints, result);
    result
}
