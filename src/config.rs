//! 슬러그 옵션 설정 파일 로드/저장 (JSON)

use std::fs;
use std::path::Path;

use crate::options::{OptionsError, SlugOptions};

/// 설정 파일 로드 (에러 반환)
pub fn try_load_options(path: impl AsRef<Path>) -> Result<SlugOptions, OptionsError> {
    let content = fs::read_to_string(path)?;
    SlugOptions::from_json(&content)
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_options(path: impl AsRef<Path>) -> SlugOptions {
    let path = path.as_ref();
    match try_load_options(path) {
        Ok(options) => options,
        Err(OptionsError::IoError(_)) => SlugOptions::default(),
        Err(e) => {
            log::warn!("설정 파일 무시 ({}): {}", path.display(), e);
            SlugOptions::default()
        }
    }
}

/// 설정 파일 저장
pub fn save_options(path: impl AsRef<Path>, options: &SlugOptions) -> Result<(), OptionsError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(options)
        .map_err(|e| OptionsError::ParseError(format!("직렬화 실패: {}", e)))?;
    fs::write(path, json)?;
    Ok(())
}
