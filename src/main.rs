//! jgrep - JSON LINES GREP
//!
//! 메인 엔트리포인트

use anyhow::Result;
use clap::Parser;
use memmap2::Mmap;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use jgrep::{
    cli::Args,
    error::JGrepError,
    matcher::{evaluate, MatchResult, SearchOptions},
    pattern::PatternMatcher,
    stats::Statistics,
};

/// 메모리 매핑을 사용하는 파일 크기 임계값 (10MB)
const MMAP_THRESHOLD: u64 = 10 * 1024 * 1024;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    // 입력 파일 확인
    validate_input(args)?;

    // 패턴 매처 초기화
    let matcher = PatternMatcher::new(&args.pattern, args.case_insensitive)?;

    // 통계 초기화
    let mut stats = Statistics::new();

    // 입력 파일 읽기
    let text = read_input(&args.file)?;
    stats.add_bytes_read(text.len() as u64);

    // 검색 옵션 구성
    let options = SearchOptions::new()
        .with_keys(args.keys)
        .with_values(args.values)
        .with_ignore_invalid_json(args.ignore_invalid_json)
        .with_count_only(args.count_only)
        .with_invert_match(args.invert_match);

    // 라인 단위 검색 (각 라인은 자신의 끝 개행을 유지)
    let result = evaluate(text.split_inclusive('\n'), &matcher, &options, &mut stats)?;

    // 결과 출력
    write_result(&result)?;

    // 통계 출력
    if args.verbose {
        stats.print_summary();
    }

    Ok(())
}

/// 입력 경로 유효성 검사
fn validate_input(args: &Args) -> Result<()> {
    if !args.file.exists() {
        anyhow::bail!("입력 파일이 존재하지 않습니다: {:?}", args.file);
    }

    if !args.file.is_file() {
        anyhow::bail!("입력 경로가 파일이 아닙니다: {:?}", args.file);
    }

    Ok(())
}

/// 입력 파일 전체를 텍스트로 읽기
fn read_input(path: &Path) -> jgrep::error::Result<String> {
    let file_size = fs::metadata(path)
        .map(|m| m.len())
        .map_err(|e| JGrepError::FileOpen {
            file: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    if file_size >= MMAP_THRESHOLD {
        // 대용량 파일: 메모리 매핑 사용
        read_with_mmap(path)
    } else {
        // 일반 파일: 전체 읽기
        read_with_buffer(path)
    }
}

/// 일반 파일 읽기
fn read_with_buffer(path: &Path) -> jgrep::error::Result<String> {
    fs::read_to_string(path).map_err(|e| JGrepError::FileOpen {
        file: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// 메모리 매핑을 사용한 읽기 (대용량 파일용)
fn read_with_mmap(path: &Path) -> jgrep::error::Result<String> {
    let file = File::open(path).map_err(|e| JGrepError::FileOpen {
        file: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mmap = unsafe {
        Mmap::map(&file).map_err(|e| JGrepError::FileOpen {
            file: path.to_path_buf(),
            reason: format!("메모리 매핑 실패: {}", e),
        })?
    };

    Ok(String::from_utf8_lossy(&mmap).into_owned())
}

/// 검색 결과 출력
fn write_result(result: &MatchResult) -> io::Result<()> {
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());

    match result {
        MatchResult::Count(count) => {
            writeln!(writer, "Total number of lines matched: {}", count)?;
        }
        MatchResult::Lines(lines) => {
            // 매칭 라인은 원본 그대로 출력 (추가 구분자 없음)
            for line in lines {
                writer.write_all(line.as_bytes())?;
            }
        }
    }

    writer.flush()
}
