//! 패턴 매칭 모듈
//!
//! 정규식 패턴을 사용한 후보 문자열 검색을 담당합니다.

use regex::{Regex, RegexBuilder};

use crate::error::{JGrepError, Result};

/// 컴파일된 패턴 매처
pub struct PatternMatcher {
    regex: Regex,
}

impl PatternMatcher {
    /// 새 패턴 매처 생성
    ///
    /// # Arguments
    /// * `pattern` - 정규식 패턴 문자열
    /// * `case_insensitive` - 대소문자 구분 없이 매칭할지 여부
    ///
    /// # Returns
    /// 컴파일된 `PatternMatcher` 또는 에러
    ///
    /// # Examples
    /// ```
    /// use jgrep::pattern::PatternMatcher;
    ///
    /// let matcher = PatternMatcher::new("disk", false).unwrap();
    /// assert!(matcher.matches("disk full"));
    /// assert!(!matcher.matches("cpu load"));
    /// ```
    pub fn new(pattern: &str, case_insensitive: bool) -> Result<Self> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(case_insensitive)
            .build()
            .map_err(|e| JGrepError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self { regex })
    }

    /// 후보 문자열에 패턴이 나타나는지 확인 (부분 일치 검색)
    pub fn matches(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }

    /// 후보 문자열 중 하나라도 패턴과 일치하는지 확인
    ///
    /// 첫 일치에서 바로 true를 반환하며, 빈 후보 목록은 절대 일치하지 않습니다.
    pub fn matches_any<I, S>(&self, candidates: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        candidates
            .into_iter()
            .any(|candidate| self.matches(candidate.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_search() {
        let matcher = PatternMatcher::new("disk", false).unwrap();
        assert!(matcher.matches("disk full"));
        assert!(matcher.matches(r#"{"msg": "disk full"}"#));
        assert!(!matcher.matches("memory low"));
    }

    #[test]
    fn test_regex_syntax() {
        let matcher = PatternMatcher::new(r"^\{.*\}$", false).unwrap();
        assert!(matcher.matches(r#"{"id": 1}"#));
        assert!(!matcher.matches("plain text"));

        let matcher = PatternMatcher::new(r"err(or)?", false).unwrap();
        assert!(matcher.matches("err"));
        assert!(matcher.matches("error"));
    }

    #[test]
    fn test_case_sensitivity() {
        let sensitive = PatternMatcher::new("ERROR", false).unwrap();
        assert!(sensitive.matches("ERROR: disk full"));
        assert!(!sensitive.matches("error: disk full"));

        let insensitive = PatternMatcher::new("ERROR", true).unwrap();
        assert!(insensitive.matches("ERROR: disk full"));
        assert!(insensitive.matches("error: disk full"));
        assert!(insensitive.matches("Error: disk full"));
    }

    #[test]
    fn test_matches_any_short_circuit() {
        let matcher = PatternMatcher::new("level", false).unwrap();
        assert!(matcher.matches_any(["level", "msg"]));
        assert!(matcher.matches_any(["msg", "level"]));
        assert!(!matcher.matches_any(["msg", "time"]));
    }

    #[test]
    fn test_matches_any_empty() {
        let matcher = PatternMatcher::new(".*", false).unwrap();
        let empty: Vec<String> = Vec::new();
        assert!(!matcher.matches_any(empty));
    }

    #[test]
    fn test_invalid_pattern() {
        let result = PatternMatcher::new("[invalid", false);
        assert!(result.is_err());
    }
}
