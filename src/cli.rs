//! CLI 인자 파싱 모듈
//!
//! clap을 사용한 명령줄 인자 정의 및 파싱을 담당합니다.

use clap::Parser;
use std::path::PathBuf;

/// jgrep CLI 인자 구조체
#[derive(Parser, Debug)]
#[command(
    name = "jgrep",
    author = "YourName <your@email.com>",
    version,
    about = "JSON LINES GREP - JSONL 로그 파일에서 패턴을 검색하는 CLI 도구",
    long_about = r#"
JSON LINES GREP
===============

JSONL (JSON Lines) 파일의 각 라인을 JSON으로 디코딩하고,
정규식 패턴과 일치하는 라인을 출력합니다.

특징:
  • 정규식 기반 부분 일치 검색
  • 키 전용 / 값 전용 검색 모드
  • 유효하지 않은 JSON 라인 무시 옵션
  • 대소문자 구분 없는 검색
  • 매칭 라인 수만 출력하는 카운트 모드

예제:
  jgrep disk logs.jsonl
  jgrep -k level logs.jsonl
  jgrep -v ERROR logs.jsonl
  jgrep -i error -c logs.jsonl
  jgrep -x disk logs.jsonl
"#
)]
pub struct Args {
    /// 검색할 정규식 패턴
    pub pattern: String,

    /// 검색 대상 JSONL 로그 파일 경로
    pub file: PathBuf,

    /// JSON 객체의 키에서만 검색
    #[arg(short = 'k', long = "keys")]
    pub keys: bool,

    /// JSON 객체의 값에서만 검색
    #[arg(short = 'v', long = "values")]
    pub values: bool,

    /// 유효하지 않은 JSON 라인 무시
    #[arg(short = 'x', long = "ignore-invalid-json")]
    pub ignore_invalid_json: bool,

    /// 대소문자 구분 없이 검색
    #[arg(short = 'i', long = "case-insensitive")]
    pub case_insensitive: bool,

    /// 매칭된 라인 수만 출력
    #[arg(short = 'c', long = "count-only")]
    pub count_only: bool,

    /// 패턴과 일치하지 않는 라인 선택
    #[arg(short = 'd', long = "invert-match")]
    pub invert_match: bool,

    /// 검색 통계를 표준 에러로 출력
    #[arg(long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positionals() {
        let args = Args::parse_from(["jgrep", "disk", "logs.jsonl"]);
        assert_eq!(args.pattern, "disk");
        assert_eq!(args.file, PathBuf::from("logs.jsonl"));
        assert!(!args.keys);
        assert!(!args.values);
        assert!(!args.ignore_invalid_json);
        assert!(!args.case_insensitive);
        assert!(!args.count_only);
        assert!(!args.invert_match);
        assert!(!args.verbose);
    }

    #[test]
    fn test_parse_short_flags() {
        let args = Args::parse_from(["jgrep", "-k", "-x", "-i", "-c", "-d", "level", "a.jsonl"]);
        assert!(args.keys);
        assert!(args.ignore_invalid_json);
        assert!(args.case_insensitive);
        assert!(args.count_only);
        assert!(args.invert_match);
    }

    #[test]
    fn test_parse_long_flags() {
        let args = Args::parse_from([
            "jgrep",
            "--values",
            "--ignore-invalid-json",
            "--verbose",
            "ERROR",
            "a.jsonl",
        ]);
        assert!(args.values);
        assert!(args.ignore_invalid_json);
        assert!(args.verbose);
    }

    #[test]
    fn test_missing_positionals_rejected() {
        assert!(Args::try_parse_from(["jgrep", "disk"]).is_err());
        assert!(Args::try_parse_from(["jgrep"]).is_err());
    }
}
