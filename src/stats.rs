//! 통계 및 유틸리티 모듈
//!
//! 검색 통계 수집 및 포맷팅을 담당합니다.

use colored::Colorize;
use std::time::{Duration, Instant};

/// 검색 통계 구조체
#[derive(Debug)]
pub struct Statistics {
    /// 검사한 라인 수
    pub lines_scanned: usize,
    /// 매칭된 라인 수
    pub lines_matched: usize,
    /// 무시된 유효하지 않은 JSON 라인 수
    pub invalid_skipped: usize,
    /// 읽은 총 바이트
    pub bytes_read: u64,
    /// 처리 시작 시간
    start_time: Instant,
}

impl Default for Statistics {
    fn default() -> Self {
        Self::new()
    }
}

impl Statistics {
    /// 새 통계 인스턴스 생성
    pub fn new() -> Self {
        Self {
            lines_scanned: 0,
            lines_matched: 0,
            invalid_skipped: 0,
            bytes_read: 0,
            start_time: Instant::now(),
        }
    }

    /// 검사한 라인 수 증가
    pub fn record_scanned(&mut self) {
        self.lines_scanned += 1;
    }

    /// 무시된 라인 수 증가
    pub fn record_invalid(&mut self) {
        self.invalid_skipped += 1;
    }

    /// 최종 매칭 라인 수 기록
    pub fn set_matched(&mut self, matched: usize) {
        self.lines_matched = matched;
    }

    /// 읽은 바이트 추가
    pub fn add_bytes_read(&mut self, bytes: u64) {
        self.bytes_read += bytes;
    }

    /// 경과 시간 반환
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// 검색 통계 요약 출력
    ///
    /// 표준 출력은 검색 결과 전용이므로 요약은 표준 에러로 내보냅니다.
    pub fn print_summary(&self) {
        let elapsed = self.elapsed();

        eprintln!("\n{}", "═".repeat(50).bright_blue());
        eprintln!("{}", " 📊 검색 통계".bright_white().bold());
        eprintln!("{}", "═".repeat(50).bright_blue());

        eprintln!(
            "  {} 검사한 라인:  {}",
            "📄".bright_cyan(),
            self.lines_scanned
        );
        eprintln!(
            "  {} 매칭:         {}",
            "✅".bright_green(),
            self.lines_matched.to_string().green()
        );

        if self.invalid_skipped > 0 {
            eprintln!(
                "  {} 무시된 라인:  {}",
                "⚠️".bright_yellow(),
                self.invalid_skipped.to_string().yellow()
            );
        } else {
            eprintln!("  {} 무시된 라인:  {}", "✅".bright_green(), "0".green());
        }

        eprintln!(
            "  {} 입력 용량:    {}",
            "📥".bright_yellow(),
            format_bytes(self.bytes_read)
        );

        if self.lines_scanned > 0 {
            let match_rate = (self.lines_matched as f64 / self.lines_scanned as f64) * 100.0;
            eprintln!("  {} 매칭률:       {:.1}%", "📈".bright_white(), match_rate);
        }

        eprintln!(
            "  {} 처리 시간:    {}",
            "⏱️".bright_cyan(),
            format_duration(elapsed)
        );

        eprintln!("{}", "═".repeat(50).bright_blue());
    }
}

/// 바이트를 읽기 쉬운 형식으로 변환
///
/// # Arguments
/// * `bytes` - 바이트 수
///
/// # Returns
/// 형식화된 문자열 (예: "1.25 MB")
///
/// # Examples
/// ```
/// use jgrep::stats::format_bytes;
///
/// assert_eq!(format_bytes(500), "500 B");
/// assert_eq!(format_bytes(1024), "1.00 KB");
/// assert_eq!(format_bytes(1048576), "1.00 MB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// 경과 시간을 읽기 쉬운 형식으로 변환
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    let millis = duration.subsec_millis();

    if secs >= 3600 {
        let hours = secs / 3600;
        let mins = (secs % 3600) / 60;
        format!("{}시간 {}분", hours, mins)
    } else if secs >= 60 {
        let mins = secs / 60;
        let remaining_secs = secs % 60;
        format!("{}분 {}초", mins, remaining_secs)
    } else if secs > 0 {
        format!("{}.{:03}초", secs, millis)
    } else {
        format!("{}ms", millis)
    }
}
