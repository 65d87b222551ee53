//! 슬러그 옵션 정의 및 정규화
//!
//! 호출자가 넘긴 설정(구분자, 대소문자, 길이 제한, 무시 문자)을
//! 파이프라인이 쓰는 [`ResolvedOptions`]로 변환합니다.
//! 잘못된 값은 에러가 아니라 항상 기본값으로 대체됩니다.

use std::collections::HashSet;

use serde::Serialize;
use serde_json::Value;

use crate::core::normalize::nfc_codepoints;

/// 기본 구분자
pub const DEFAULT_SEPARATOR: &str = "-";

/// 옵션 JSON 파싱/로드 에러
#[derive(Debug)]
pub enum OptionsError {
    /// 파일 읽기/쓰기 실패
    IoError(std::io::Error),
    /// JSON 파싱 실패
    ParseError(String),
}

impl std::fmt::Display for OptionsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionsError::IoError(e) => write!(f, "파일 입출력 오류: {}", e),
            OptionsError::ParseError(s) => write!(f, "JSON 파싱 오류: {}", s),
        }
    }
}

impl std::error::Error for OptionsError {}

impl From<std::io::Error> for OptionsError {
    fn from(e: std::io::Error) -> Self {
        OptionsError::IoError(e)
    }
}

/// 구분자 지정 방식 (문자열 또는 코드포인트 값)
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum Separator {
    Text(String),
    Codepoint(i64),
}

impl Separator {
    /// 실제 구분자 문자열 (유효하지 않은 코드포인트면 기본 구분자)
    fn resolve(&self) -> String {
        match self {
            Separator::Text(s) => s.clone(),
            Separator::Codepoint(cp) => u32::try_from(*cp)
                .ok()
                .and_then(char::from_u32)
                .map(String::from)
                .unwrap_or_else(|| DEFAULT_SEPARATOR.to_string()),
        }
    }
}

impl From<&str> for Separator {
    fn from(s: &str) -> Self {
        Separator::Text(s.to_string())
    }
}

impl From<String> for Separator {
    fn from(s: String) -> Self {
        Separator::Text(s)
    }
}

impl From<char> for Separator {
    fn from(c: char) -> Self {
        Separator::Text(c.to_string())
    }
}

impl From<u32> for Separator {
    fn from(cp: u32) -> Self {
        Separator::Codepoint(i64::from(cp))
    }
}

/// 음역/제거하지 않고 그대로 둘 문자 지정 (문자열 또는 문자열 목록)
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum Ignore {
    Text(String),
    List(Vec<String>),
}

impl Ignore {
    /// 목록은 순서대로 이어붙인 하나의 문자열로 취급
    fn concat(&self) -> String {
        match self {
            Ignore::Text(s) => s.clone(),
            Ignore::List(items) => items.concat(),
        }
    }
}

impl From<&str> for Ignore {
    fn from(s: &str) -> Self {
        Ignore::Text(s.to_string())
    }
}

impl From<String> for Ignore {
    fn from(s: String) -> Self {
        Ignore::Text(s)
    }
}

impl From<Vec<String>> for Ignore {
    fn from(items: Vec<String>) -> Self {
        Ignore::List(items)
    }
}

impl<const N: usize> From<[&str; N]> for Ignore {
    fn from(items: [&str; N]) -> Self {
        Ignore::List(items.iter().map(|s| s.to_string()).collect())
    }
}

/// 호출자 설정
///
/// 모든 필드는 선택 사항이며, 없으면 기본값 사용
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct SlugOptions {
    /// 단어 사이 구분자 (기본 "-")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<Separator>,
    /// 결과 소문자 변환 여부 (기본 true)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lowercase: Option<bool>,
    /// 최대 길이 (문자 수, 단어 경계에서 자름). 0 이하면 빈 결과
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncate: Option<i64>,
    /// 그대로 통과시킬 문자
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore: Option<Ignore>,
}

impl SlugOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// 구분자 설정
    pub fn with_separator(mut self, separator: impl Into<Separator>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    /// 소문자 변환 여부 설정
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = Some(lowercase);
        self
    }

    /// 최대 길이 설정
    pub fn with_truncate(mut self, length: i64) -> Self {
        self.truncate = Some(length);
        self
    }

    /// 무시 문자 설정
    pub fn with_ignore(mut self, ignore: impl Into<Ignore>) -> Self {
        self.ignore = Some(ignore.into());
        self
    }

    /// JSON 문자열에서 옵션 로드
    ///
    /// JSON 문법 오류만 에러로 처리하고, 값의 타입 오류는 기본값으로 대체
    pub fn from_json(json_str: &str) -> Result<Self, OptionsError> {
        let value: Value =
            serde_json::from_str(json_str).map_err(|e| OptionsError::ParseError(e.to_string()))?;

        Ok(Self::from_json_value(&value))
    }

    /// serde_json::Value에서 옵션 생성
    ///
    /// 인식하지 못하는 키와 잘못된 타입의 값은 조용히 무시
    pub fn from_json_value(value: &Value) -> Self {
        let separator = match value.get("separator") {
            Some(Value::String(s)) => Some(Separator::Text(s.clone())),
            Some(Value::Number(n)) => n.as_i64().map(Separator::Codepoint),
            _ => None,
        };

        let lowercase = value.get("lowercase").and_then(Value::as_bool);

        // 정수가 아닌 값(실수, 문자열 등)은 길이 제한 없음
        let truncate = value.get("truncate").and_then(|v| match v {
            Value::Number(n) => n.as_i64().or_else(|| n.as_u64().map(|_| i64::MAX)),
            _ => None,
        });

        let ignore = match value.get("ignore") {
            Some(Value::String(s)) => Some(Ignore::Text(s.clone())),
            Some(Value::Array(items)) => Some(Ignore::List(
                items
                    .iter()
                    .filter_map(|item| item.as_str().map(str::to_string))
                    .collect(),
            )),
            _ => None,
        };

        Self {
            separator,
            lowercase,
            truncate,
            ignore,
        }
    }
}

/// 파이프라인이 사용하는 정규화된 옵션
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub separator: String,
    pub lowercase: bool,
    /// None이면 길이 제한 없음
    pub truncate_length: Option<usize>,
    /// 음역하지 않고 그대로 둘 코드포인트 (구분자 포함)
    pub ignored_codepoints: HashSet<char>,
}

impl ResolvedOptions {
    /// 호출자 설정을 정규화. 실패하지 않음
    pub fn resolve(options: &SlugOptions) -> Self {
        let separator = options
            .separator
            .as_ref()
            .map(Separator::resolve)
            .unwrap_or_else(|| DEFAULT_SEPARATOR.to_string());

        let lowercase = options.lowercase.unwrap_or(true);

        let truncate_length = options
            .truncate
            .map(|n| usize::try_from(n).unwrap_or(if n > 0 { usize::MAX } else { 0 }));

        // 무시 목록에서 구분자 문자열을 빼고 구분자를 덧붙인 뒤 NFC 정규화
        let mut ignored = options.ignore.as_ref().map(Ignore::concat).unwrap_or_default();
        if !separator.is_empty() {
            ignored = ignored.replace(&separator, "");
        }
        ignored.push_str(&separator);
        let ignored_codepoints = nfc_codepoints(&ignored).into_iter().collect();

        Self {
            separator,
            lowercase,
            truncate_length,
            ignored_codepoints,
        }
    }
}

impl Default for ResolvedOptions {
    fn default() -> Self {
        Self::resolve(&SlugOptions::default())
    }
}

impl From<&SlugOptions> for ResolvedOptions {
    fn from(options: &SlugOptions) -> Self {
        Self::resolve(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let resolved = ResolvedOptions::default();
        assert_eq!(resolved.separator, "-");
        assert!(resolved.lowercase);
        assert_eq!(resolved.truncate_length, None);
        assert_eq!(resolved.ignored_codepoints, HashSet::from(['-']));
    }

    #[test]
    fn test_builder_pattern() {
        let options = SlugOptions::new()
            .with_separator("_")
            .with_lowercase(false)
            .with_truncate(20)
            .with_ignore(["你", "好"]);

        let resolved = ResolvedOptions::resolve(&options);
        assert_eq!(resolved.separator, "_");
        assert!(!resolved.lowercase);
        assert_eq!(resolved.truncate_length, Some(20));
        assert_eq!(resolved.ignored_codepoints, HashSet::from(['你', '好', '_']));
    }

    #[test]
    fn test_separator_codepoint() {
        let resolved = ResolvedOptions::resolve(&SlugOptions::new().with_separator(0x5F_u32));
        assert_eq!(resolved.separator, "_");
    }

    #[test]
    fn test_invalid_codepoint_falls_back() {
        // 서로게이트, 음수, 범위 초과
        for cp in [0xD800_i64, -1, 0x110000] {
            let options = SlugOptions {
                separator: Some(Separator::Codepoint(cp)),
                ..Default::default()
            };
            assert_eq!(ResolvedOptions::resolve(&options).separator, "-");
        }
    }

    #[test]
    fn test_non_positive_truncate_is_zero() {
        for n in [0, -1, -100] {
            let resolved = ResolvedOptions::resolve(&SlugOptions::new().with_truncate(n));
            assert_eq!(resolved.truncate_length, Some(0));
        }
    }

    #[test]
    fn test_separator_removed_from_ignore() {
        let options = SlugOptions::new().with_separator("::").with_ignore("a::b.");
        let resolved = ResolvedOptions::resolve(&options);
        assert_eq!(resolved.ignored_codepoints, HashSet::from(['a', 'b', '.', ':']));
    }

    #[test]
    fn test_empty_separator() {
        let options = SlugOptions::new().with_separator("").with_ignore("#");
        let resolved = ResolvedOptions::resolve(&options);
        assert_eq!(resolved.separator, "");
        assert_eq!(resolved.ignored_codepoints, HashSet::from(['#']));
    }

    #[test]
    fn test_ignore_is_nfc_normalized() {
        let resolved = ResolvedOptions::resolve(&SlugOptions::new().with_ignore("e\u{301}"));
        assert!(resolved.ignored_codepoints.contains(&'é'));
        assert!(!resolved.ignored_codepoints.contains(&'\u{301}'));
    }

    #[test]
    fn test_from_json_value_recognized_keys() {
        let options = SlugOptions::from_json_value(&json!({
            "separator": "_",
            "lowercase": false,
            "truncate": 10,
            "ignore": ["你", "好"],
            "unknown": true
        }));
        assert_eq!(options.separator, Some(Separator::Text("_".into())));
        assert_eq!(options.lowercase, Some(false));
        assert_eq!(options.truncate, Some(10));
        assert_eq!(
            options.ignore,
            Some(Ignore::List(vec!["你".into(), "好".into()]))
        );
    }

    #[test]
    fn test_from_json_value_codepoint_separator() {
        let options = SlugOptions::from_json_value(&json!({ "separator": 46 }));
        assert_eq!(ResolvedOptions::resolve(&options).separator, ".");
    }

    #[test]
    fn test_from_json_value_wrong_types_fall_back() {
        let options = SlugOptions::from_json_value(&json!({
            "separator": ["x"],
            "lowercase": "no",
            "truncate": 10.5,
            "ignore": 42
        }));
        assert_eq!(options, SlugOptions::default());

        let resolved = ResolvedOptions::resolve(&options);
        assert_eq!(resolved.separator, "-");
        assert!(resolved.lowercase);
        assert_eq!(resolved.truncate_length, None);
    }

    #[test]
    fn test_from_json_value_string_truncate_ignored() {
        let options = SlugOptions::from_json_value(&json!({ "truncate": "10" }));
        assert_eq!(options.truncate, None);
    }

    #[test]
    fn test_from_json_value_skips_non_string_ignore_items() {
        let options = SlugOptions::from_json_value(&json!({ "ignore": ["a", 1, null, "b"] }));
        assert_eq!(options.ignore, Some(Ignore::List(vec!["a".into(), "b".into()])));
    }

    #[test]
    fn test_from_json_value_non_object() {
        assert_eq!(SlugOptions::from_json_value(&json!("x")), SlugOptions::default());
        assert_eq!(SlugOptions::from_json_value(&json!(null)), SlugOptions::default());
    }

    #[test]
    fn test_from_json_syntax_error() {
        assert!(matches!(
            SlugOptions::from_json("{ not json"),
            Err(OptionsError::ParseError(_))
        ));
    }

    #[test]
    fn test_serialize_roundtrip_through_value() {
        let options = SlugOptions::new()
            .with_separator('_')
            .with_truncate(8)
            .with_ignore("ß");
        let value = serde_json::to_value(&options).unwrap();
        assert_eq!(value, json!({ "separator": "_", "truncate": 8, "ignore": "ß" }));
        assert_eq!(SlugOptions::from_json_value(&value), options);
    }
}
