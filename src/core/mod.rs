//! 슬러그 변환 파이프라인

pub mod joiner;
pub mod normalize;
pub mod slugify;
pub mod table;
pub mod transliterate;
