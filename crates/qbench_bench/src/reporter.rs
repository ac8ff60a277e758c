//! Benchmark reporting
//!
//! Gantree: L3_Bench → Reporter
//!
//! Provides various output formats for benchmark records.

use crate::suite::{BenchmarkRecord, BenchmarkStatistics};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Markdown table
    Markdown,
    /// JSON
    Json,
    /// CSV
    Csv,
    /// Plain text summary
    Text,
}

/// Benchmark reporter
/// Gantree: Reporter // 결과 리포팅
pub struct Reporter;

impl Reporter {
    // ========================================================================
    // Format Converters
    // ========================================================================

    /// Generate report in specified format
    pub fn report(results: &[BenchmarkRecord], format: ReportFormat) -> String {
        match format {
            ReportFormat::Markdown => Self::to_markdown(results),
            ReportFormat::Json => Self::to_json(results),
            ReportFormat::Csv => Self::to_csv(results),
            ReportFormat::Text => Self::to_text(results),
        }
    }

    /// Convert results to Markdown table
    pub fn to_markdown(results: &[BenchmarkRecord]) -> String {
        Self::markdown(results).unwrap_or_default()
    }

    /// Convert results to JSON
    pub fn to_json(results: &[BenchmarkRecord]) -> String {
        let stats = BenchmarkStatistics::from_results(results);

        let report = serde_json::json!({
            "statistics": stats,
            "results": results,
        });

        serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".to_string())
    }

    /// Convert results to CSV
    pub fn to_csv(results: &[BenchmarkRecord]) -> String {
        Self::csv(results).unwrap_or_default()
    }

    /// Convert results to plain text summary
    pub fn to_text(results: &[BenchmarkRecord]) -> String {
        Self::text(results).unwrap_or_default()
    }

    /// Depth and gate growth per qubit count
    pub fn qubit_scaling_report(results: &[BenchmarkRecord]) -> String {
        Self::qubit_scaling(results).unwrap_or_default()
    }

    // ========================================================================
    // Writers
    // ========================================================================

    fn markdown(results: &[BenchmarkRecord]) -> Result<String, fmt::Error> {
        let mut output = String::new();
        let stats = BenchmarkStatistics::from_results(results);

        writeln!(output, "# QBench Benchmark Results\n")?;

        writeln!(output, "## Summary\n")?;
        writeln!(output, "- **Benchmarks**: {}", stats.count)?;
        writeln!(output, "- **Avg Depth**: {:.1}", stats.avg_depth)?;
        writeln!(output, "- **Max Depth**: {}", stats.max_depth)?;
        writeln!(output, "- **Avg 2Q Gates**: {:.1}", stats.avg_gates_2q)?;
        writeln!(output, "- **Total Time**: {}us\n", stats.total_time_us)?;

        writeln!(output, "## Detailed Results\n")?;
        writeln!(
            output,
            "| Name | Qubits | Params | Depth | Size | 1Q | 2Q | Meas | Mirror | Time(us) |"
        )?;
        writeln!(
            output,
            "|------|--------|--------|-------|------|----|----|------|--------|----------|"
        )?;

        for r in results {
            writeln!(
                output,
                "| {} | {} | {} | {} | {} | {} | {} | {} | {} | {} |",
                r.name,
                r.qubits,
                r.parameters,
                r.depth,
                r.size,
                r.gates_1q,
                r.gates_2q,
                r.measurements,
                if r.mirror { "✓" } else { "-" },
                r.time_us
            )?;
        }

        Ok(output)
    }

    fn csv(results: &[BenchmarkRecord]) -> Result<String, fmt::Error> {
        let mut output = String::new();

        writeln!(
            output,
            "name,qubits,parameters,depth,size,gates_1q,gates_2q,measurements,mirror,time_us"
        )?;

        for r in results {
            writeln!(
                output,
                "{},{},{},{},{},{},{},{},{},{}",
                r.name,
                r.qubits,
                r.parameters,
                r.depth,
                r.size,
                r.gates_1q,
                r.gates_2q,
                r.measurements,
                r.mirror,
                r.time_us
            )?;
        }

        Ok(output)
    }

    fn text(results: &[BenchmarkRecord]) -> Result<String, fmt::Error> {
        let mut output = String::new();
        let stats = BenchmarkStatistics::from_results(results);

        writeln!(output, "QBench Benchmark Results")?;
        writeln!(output, "========================\n")?;

        writeln!(output, "Summary:")?;
        writeln!(output, "  Benchmarks run: {}", stats.count)?;
        writeln!(output, "  Average depth: {:.1}", stats.avg_depth)?;
        writeln!(output, "  Average 2Q gates: {:.1}", stats.avg_gates_2q)?;
        writeln!(output, "  Total parameters: {}", stats.total_parameters)?;
        writeln!(output, "  Total time: {}us\n", stats.total_time_us)?;

        writeln!(output, "Individual Results:")?;
        for r in results {
            writeln!(
                output,
                "  {} ({}Q): {} params, depth {}, {} 2Q gates, {}us{}",
                r.name,
                r.qubits,
                r.parameters,
                r.depth,
                r.gates_2q,
                r.time_us,
                if r.mirror { " [mirror]" } else { "" }
            )?;
        }

        Ok(output)
    }

    fn qubit_scaling(results: &[BenchmarkRecord]) -> Result<String, fmt::Error> {
        let mut output = String::new();

        writeln!(output, "# Qubit Scaling Analysis\n")?;
        writeln!(output, "| Benchmark | Qubits | Params | Depth | 2Q | 2Q/Qubit |")?;
        writeln!(output, "|-----------|--------|--------|-------|----|----------|")?;

        for r in results {
            let per_qubit = r.gates_2q as f64 / r.qubits.max(1) as f64;
            writeln!(
                output,
                "| {} | {} | {} | {} | {} | {:.1} |",
                r.name, r.qubits, r.parameters, r.depth, r.gates_2q, per_qubit
            )?;
        }

        Ok(output)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_results() -> Vec<BenchmarkRecord> {
        vec![
            BenchmarkRecord {
                name: "vqerealamprandom".to_string(),
                qubits: 4,
                parameters: 16,
                depth: 22,
                size: 38,
                gates_1q: 16,
                gates_2q: 18,
                measurements: 4,
                mirror: false,
                time_us: 120,
            },
            BenchmarkRecord {
                name: "vqesu2random_mirror".to_string(),
                qubits: 3,
                parameters: 48,
                depth: 30,
                size: 69,
                gates_1q: 48,
                gates_2q: 18,
                measurements: 3,
                mirror: true,
                time_us: 200,
            },
        ]
    }

    #[test]
    fn test_to_markdown() {
        let results = make_test_results();
        let md = Reporter::to_markdown(&results);

        assert!(md.contains("# QBench Benchmark Results"));
        assert!(md.contains("| Name |"));
        assert!(md.contains("| vqerealamprandom | 4 | 16 |"));
        assert!(md.contains("vqesu2random_mirror"));
    }

    #[test]
    fn test_to_json() {
        let results = make_test_results();
        let json = Reporter::to_json(&results);

        assert!(json.contains("\"statistics\""));
        assert!(json.contains("\"results\""));
        assert!(json.contains("\"total_parameters\": 64"));
    }

    #[test]
    fn test_to_csv() {
        let results = make_test_results();
        let csv = Reporter::to_csv(&results);

        assert!(csv.starts_with("name,qubits,parameters"));
        assert!(csv.contains("vqerealamprandom,4,16,22,38,16,18,4,false,120"));
        assert_eq!(csv.lines().count(), 3);
    }

    #[test]
    fn test_to_text() {
        let results = make_test_results();
        let text = Reporter::to_text(&results);

        assert!(text.contains("Summary:"));
        assert!(text.contains("Total parameters: 64"));
        assert!(text.contains("[mirror]"));
    }

    #[test]
    fn test_report_format() {
        let results = make_test_results();

        assert!(Reporter::report(&results, ReportFormat::Markdown).contains("# QBench"));
        assert!(Reporter::report(&results, ReportFormat::Json).contains('{'));
        assert!(Reporter::report(&results, ReportFormat::Csv).contains(','));
        assert!(Reporter::report(&results, ReportFormat::Text).contains("QBench"));
    }

    #[test]
    fn test_qubit_scaling_report() {
        let report = Reporter::qubit_scaling_report(&make_test_results());

        assert!(report.contains("Qubit Scaling"));
        assert!(report.contains("| 4 | 16 |"));
        assert!(report.contains("| 4.5 |"));
    }

    #[test]
    fn test_empty_results() {
        let results: Vec<BenchmarkRecord> = vec![];

        let md = Reporter::to_markdown(&results);
        assert!(md.contains("Benchmarks**: 0"));

        let json = Reporter::to_json(&results);
        assert!(json.contains("\"count\": 0"));
    }
}
