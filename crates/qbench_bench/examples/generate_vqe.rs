//! QBench VQE benchmark generation
//!
//! Generates `vqerealamprandom` and `vqesu2random` for a range of qubit
//! counts, prints a report and optionally writes OpenQASM files.
//!
//! ```text
//! RUST_LOG=info cargo run --example generate_vqe -- [max_qubits] [out_dir] [--mirror]
//! ```

use qbench_bench::prelude::*;

fn main() -> QbenchResult<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mirror = args.iter().any(|a| a == "--mirror");
    let positional: Vec<&String> = args.iter().filter(|a| !a.starts_with("--")).collect();

    let max_qubits = match positional.first() {
        Some(s) => s
            .parse::<usize>()
            .map_err(|e| QbenchError::InvalidConfig(format!("max_qubits '{}': {}", s, e)))?,
        None => 6,
    };
    let out_dir = positional.get(1);

    println!("╔══════════════════════════════════════════════════════════════════════╗");
    println!("║                  QBench VQE Benchmark Generation                     ║");
    println!("╚══════════════════════════════════════════════════════════════════════╝\n");

    println!("Configuration:");
    println!("  • Benchmarks: {:?}", supported_benchmarks());
    println!("  • Qubits: 2..={}", max_qubits);
    println!("  • {}", GeneratorConfig::default());
    println!("  • Mirror: {}", mirror);
    println!();

    let mut suite = if mirror {
        BenchSuite::new().mirror()
    } else {
        BenchSuite::new()
    };
    let results = suite.run_all(2..=max_qubits)?;

    println!("{}", Reporter::to_text(&results));
    println!("{}", Reporter::qubit_scaling_report(&results));

    if let Some(dir) = out_dir {
        let paths = suite.export_qasm(dir.as_str())?;
        println!("Wrote {} OpenQASM files to {}", paths.len(), dir);
    }

    Ok(())
}
