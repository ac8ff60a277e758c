//! Mirror circuits
//!
//! Gantree: L3_Bench → Mirror
//!
//! `U · U†` with the original measurements kept at the end. An ideal
//! device returns the all-zero state for every mirror circuit, which makes
//! them useful as self-verifying benchmarks.

use qbench_core::{bench, Circuit, QbenchResult};

/// Build the mirror version of `circuit`
///
/// Measurements are lifted out, the unitary part is followed by a barrier
/// and its inverse, and the measurements are re-appended.
/// Gantree: create_mirror_circuit(&Circuit) -> Result<Circuit> // 미러 회로
pub fn create_mirror_circuit(circuit: &Circuit) -> QbenchResult<Circuit> {
    let (mut mirrored, measurements) = circuit.split_measurements();
    let inverse = mirrored.inverse()?;

    mirrored.barrier()?;
    mirrored.compose(&inverse)?;
    mirrored.set_name(format!(
        "{}{}",
        circuit.name().unwrap_or("circuit"),
        bench::MIRROR_SUFFIX
    ));
    mirrored.add_gates(measurements)?;

    log::debug!(
        "Mirrored {:?}: {} -> {} gates",
        circuit.name(),
        circuit.gate_count(),
        mirrored.gate_count()
    );

    Ok(mirrored)
}
