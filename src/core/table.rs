//! 코드포인트 -> ASCII 치환 테이블
//!
//! 비ASCII 유니코드 코드포인트를 가장 가까운 ASCII 표기로 매핑합니다.
//! 데이터는 `deunicode`의 문자 단위 음역 데이터에서 가져오며,
//! 프로세스당 한 번만 생성되어 모든 호출이 읽기 전용으로 공유합니다.

use std::collections::HashMap;
use std::sync::LazyLock;

/// 전역 치환 테이블 (최초 조회 시 한 번 생성)
static REPLACEMENT_TABLE: LazyLock<ReplacementTable> = LazyLock::new(ReplacementTable::build);

/// 코드포인트 -> ASCII 치환 문자열 매핑
///
/// 키에는 ASCII 코드포인트가 없음 (영숫자는 조회 없이 그대로 통과하고,
/// ASCII 구두점은 테이블에 없으므로 제거됨)
#[derive(Debug)]
pub struct ReplacementTable {
    entries: HashMap<char, Box<str>>,
}

impl ReplacementTable {
    /// 전역 테이블 참조
    pub fn global() -> &'static ReplacementTable {
        &REPLACEMENT_TABLE
    }

    /// deunicode 데이터로 테이블 생성
    ///
    /// 치환 문자열은 ASCII 영숫자만 남김 (한자 독음 뒤의 공백, 구두점의
    /// ASCII 구두점 치환 등은 슬러그에 남지 않아야 함).
    /// 남는 문자가 없는 코드포인트는 저장하지 않음
    fn build() -> Self {
        let mut entries = HashMap::new();

        for c in '\u{80}'..=char::MAX {
            let Some(raw) = deunicode::deunicode_char(c) else {
                continue;
            };
            let replacement: String = raw.chars().filter(char::is_ascii_alphanumeric).collect();
            if !replacement.is_empty() {
                entries.insert(c, replacement.into_boxed_str());
            }
        }

        log::debug!("치환 테이블 생성 완료: {}개 항목", entries.len());
        Self { entries }
    }

    /// 코드포인트의 ASCII 치환 문자열 조회
    pub fn lookup(&self, c: char) -> Option<&str> {
        self.entries.get(&c).map(|s| &**s)
    }

    pub fn contains(&self, c: char) -> bool {
        self.entries.contains_key(&c)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
