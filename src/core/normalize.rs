//! NFC 정규화 및 코드포인트 추출

use unicode_normalization::UnicodeNormalization;

/// 문자열을 NFC로 정규화한 뒤 코드포인트 순서열로 반환
///
/// 치환 테이블의 키는 NFC 기준이므로, 분해형(NFD) 입력도
/// 조회 전에 합성형으로 맞춰야 함
pub fn nfc_codepoints(input: &str) -> Vec<char> {
    input.nfc().collect()
}
