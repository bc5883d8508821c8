//! 라인 매칭 모듈
//!
//! 라인 단위 검색의 핵심 제어 로직을 담당합니다. 라인을 순서대로 디코딩하고,
//! 검색 대상 후보를 추출한 뒤 패턴 매칭 결과를 누적합니다.

use crate::decoder::DecodedRecord;
use crate::error::Result;
use crate::pattern::PatternMatcher;
use crate::stats::Statistics;

/// 검색 옵션
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// 객체 키에서만 검색
    pub search_keys: bool,
    /// 객체 값에서만 검색
    pub search_values: bool,
    /// 유효하지 않은 JSON 라인 무시
    pub ignore_invalid_json: bool,
    /// 매칭된 라인 수만 반환
    pub count_only: bool,
    /// 매칭 반전
    pub invert_match: bool,
}

impl SearchOptions {
    /// 기본 옵션 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 키 검색 설정
    pub fn with_keys(mut self, search_keys: bool) -> Self {
        self.search_keys = search_keys;
        self
    }

    /// 값 검색 설정
    pub fn with_values(mut self, search_values: bool) -> Self {
        self.search_values = search_values;
        self
    }

    /// 유효하지 않은 JSON 무시 설정
    pub fn with_ignore_invalid_json(mut self, ignore_invalid_json: bool) -> Self {
        self.ignore_invalid_json = ignore_invalid_json;
        self
    }

    /// 라인 수만 반환 설정
    pub fn with_count_only(mut self, count_only: bool) -> Self {
        self.count_only = count_only;
        self
    }

    /// 매칭 반전 설정
    pub fn with_invert_match(mut self, invert_match: bool) -> Self {
        self.invert_match = invert_match;
        self
    }
}

/// 검색 결과
#[derive(Debug, PartialEq)]
pub enum MatchResult {
    /// 매칭된 라인 수
    Count(usize),
    /// 매칭된 라인 목록 (파일 순서, 라인별 최대 한 번)
    Lines(Vec<String>),
}

/// 라인 시퀀스를 순서대로 검색
///
/// # Arguments
/// * `lines` - 원본 라인 시퀀스 (각 라인은 자신의 끝 개행을 포함)
/// * `matcher` - 컴파일된 패턴 매처
/// * `options` - 검색 옵션
/// * `stats` - 처리 통계 누적 대상
///
/// # Returns
/// `count_only`에 따라 `MatchResult::Count` 또는 `MatchResult::Lines`
///
/// 유효하지 않은 JSON 라인은 `ignore_invalid_json`이 켜져 있으면 건너뛰고,
/// 꺼져 있으면 해당 라인 번호를 담은 에러로 즉시 중단합니다.
pub fn evaluate<'a, I>(
    lines: I,
    matcher: &PatternMatcher,
    options: &SearchOptions,
    stats: &mut Statistics,
) -> Result<MatchResult>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut matches: Vec<String> = Vec::new();
    let mut count = 0;

    for (index, line) in lines.into_iter().enumerate() {
        let line_number = index + 1;
        stats.record_scanned();

        let record = match DecodedRecord::decode(line, line_number) {
            Ok(record) => record,
            Err(err) => {
                if options.ignore_invalid_json {
                    stats.record_invalid();
                    continue;
                }
                return Err(err);
            }
        };

        // 키 검색이 값 검색보다 우선
        let is_match = if options.search_keys {
            matcher.matches_any(record.keys())
        } else if options.search_values {
            matcher.matches_any(record.values())
        } else {
            matcher.matches(&record.canonical())
        };

        if is_match {
            matches.push(line.to_string());
        }

        // 반전 모드는 라인을 처리할 때마다 누적 목록 전체를 비운다
        if options.invert_match {
            matches.clear();
        }

        count = matches.len();
    }

    stats.set_matched(count);

    if options.count_only {
        Ok(MatchResult::Count(count))
    } else {
        Ok(MatchResult::Lines(matches))
    }
}
