//! jgrep - JSON LINES GREP
//!
//! JSONL (JSON Lines) 로그 파일에서 정규식 패턴과 일치하는 라인을 검색하는 CLI 도구입니다.
//!
//! # 주요 기능
//!
//! - 🔍 **정규식 검색**: 라인의 직렬화된 JSON 전체에 대한 부분 일치 검색
//! - 🔑 **키 전용 검색**: JSON 객체의 키 이름에서만 검색 (`-k`)
//! - 🎯 **값 전용 검색**: JSON 객체의 값에서만 검색 (`-v`)
//! - 🧹 **무효 라인 무시**: 유효하지 않은 JSON 라인 건너뛰기 (`-x`)
//! - 🔠 **대소문자 무시**: 대소문자 구분 없는 매칭 (`-i`)
//! - 🔢 **카운트 모드**: 매칭된 라인 수만 출력 (`-c`)
//! - 📊 **검색 통계**: 검사/매칭/무시 라인 수와 처리 시간 표시 (`--verbose`)
//!
//! # 예제
//!
//! ```bash
//! # 기본 사용법
//! jgrep disk logs.jsonl
//!
//! # 키에서만 검색
//! jgrep -k level logs.jsonl
//!
//! # 매칭 라인 수만 출력
//! jgrep -c ERROR logs.jsonl
//! ```

pub mod cli;
pub mod decoder;
pub mod error;
pub mod matcher;
pub mod pattern;
pub mod stats;

// Re-exports for convenient access
pub use cli::Args;
pub use decoder::DecodedRecord;
pub use error::{JGrepError, Result};
pub use matcher::{evaluate, MatchResult, SearchOptions};
pub use pattern::PatternMatcher;
pub use stats::{format_bytes, Statistics};
