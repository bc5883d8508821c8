//! JSON 라인 디코딩 모듈
//!
//! 한 라인을 JSON 값으로 파싱하고 검색 후보 문자열을 추출합니다.

use serde_json::Value;

use crate::error::{JGrepError, Result};

/// 한 라인에서 디코딩된 JSON 레코드
#[derive(Debug)]
pub struct DecodedRecord {
    value: Value,
}

impl DecodedRecord {
    /// 라인 텍스트를 JSON 값으로 파싱
    ///
    /// # Arguments
    /// * `text` - 라인 원본 텍스트 (끝 개행 포함 가능)
    /// * `line_number` - 1부터 시작하는 라인 번호
    ///
    /// # Returns
    /// 디코딩된 `DecodedRecord` 또는 라인 번호가 담긴 에러
    pub fn decode(text: &str, line_number: usize) -> Result<Self> {
        serde_json::from_str(text)
            .map(|value| Self { value })
            .map_err(|_| JGrepError::InvalidJson { line: line_number })
    }

    /// 최상위 객체의 키 목록 (삽입 순서 유지)
    ///
    /// 최상위 값이 객체가 아니면 빈 목록을 반환합니다.
    pub fn keys(&self) -> Vec<String> {
        match &self.value {
            Value::Object(map) => map.keys().cloned().collect(),
            _ => Vec::new(),
        }
    }

    /// 최상위 객체의 값 목록을 문자열 형태로 반환
    ///
    /// 문자열 값은 따옴표 없이, 나머지 값은 JSON 직렬화 형태로 변환합니다.
    /// 최상위 값이 객체가 아니면 빈 목록을 반환합니다.
    pub fn values(&self) -> Vec<String> {
        match &self.value {
            Value::Object(map) => map.values().map(value_to_string).collect(),
            _ => Vec::new(),
        }
    }

    /// 전체 값의 정규화된 JSON 직렬화 문자열
    pub fn canonical(&self) -> String {
        self.value.to_string()
    }
}

/// JSON 값을 검색 후보 문자열로 변환
fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
