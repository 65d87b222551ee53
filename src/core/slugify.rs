//! 텍스트 -> 슬러그 통합 변환기

use crate::core::joiner::join_words;
use crate::core::normalize::nfc_codepoints;
use crate::core::table::ReplacementTable;
use crate::core::transliterate::transliterate_word;
use crate::options::{ResolvedOptions, SlugOptions};

/// 텍스트를 슬러그로 변환
///
/// 결과가 빈 문자열이면 `None` (사용 가능한 슬러그 없음)
///
/// # Examples
/// ```
/// use slugline::{slugify, SlugOptions};
/// assert_eq!(slugify("Hello, World!", &SlugOptions::default()).as_deref(), Some("hello-world"));
/// assert_eq!(slugify("!!!", &SlugOptions::default()), None);
/// ```
pub fn slugify(input: &str, options: &SlugOptions) -> Option<String> {
    slugify_resolved(input, &ResolvedOptions::resolve(options))
}

/// 정규화된 옵션으로 텍스트를 슬러그로 변환
pub fn slugify_resolved(input: &str, options: &ResolvedOptions) -> Option<String> {
    let table = ReplacementTable::global();

    // 공백 기준으로 나눈 단어를 각각 독립적으로 음역, 빈 단어는 제외
    let words: Vec<String> = input
        .split_whitespace()
        .map(|word| transliterate_word(&nfc_codepoints(word), &options.ignored_codepoints, table))
        .filter(|word| !word.is_empty())
        .collect();

    let joined = join_words(&words, &options.separator, options.truncate_length);

    let slug = if options.lowercase {
        joined.to_lowercase()
    } else {
        joined
    };

    if slug.is_empty() {
        log::debug!("슬러그 없음: {:?}", input);
        return None;
    }
    Some(slug)
}

/// 한 가지 설정으로 여러 문자열을 변환할 때 사용하는 변환기
#[derive(Clone, Debug, Default)]
pub struct Slugifier {
    options: ResolvedOptions,
}

impl Slugifier {
    pub fn new(options: &SlugOptions) -> Self {
        Self {
            options: ResolvedOptions::resolve(options),
        }
    }

    pub fn options(&self) -> &ResolvedOptions {
        &self.options
    }

    pub fn slugify(&self, input: &str) -> Option<String> {
        slugify_resolved(input, &self.options)
    }
}
