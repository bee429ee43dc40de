//! Simulator invocation
//!
//! Runs the philosophers binary with the configured parameters and collects
//! its stdout. A simulator that cannot be started, fails, or runs past the
//! timeout yields no lines at all; the decoder then reports empty input.

use crate::config::SimulationConfig;
use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Duration;
use wait_timeout::ChildExt;

/// Run the simulator and return its output lines
pub fn run(binary: &Path, sim: &SimulationConfig) -> Vec<String> {
    let args = sim.arguments();
    log::info!("Running simulation: {:?} {}", binary, args.join(" "));

    let mut child = match Command::new(binary)
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .spawn()
    {
        Ok(child) => child,
        Err(e) => {
            log::warn!("Failed to start simulator {:?}: {}", binary, e);
            return Vec::new();
        }
    };

    // Drain stdout in a thread so a chatty simulator cannot block on a full pipe
    let stdout = child.stdout.take();
    let reader_thread = std::thread::spawn(move || {
        stdout.map(|mut stdout| {
            let mut output = Vec::new();
            let _ = stdout.read_to_end(&mut output);
            output
        })
    });

    let timeout = Duration::from_secs(sim.timeout_secs);
    match child.wait_timeout(timeout) {
        Ok(Some(status)) => {
            let output = reader_thread.join().ok().flatten().unwrap_or_default();
            if !status.success() {
                log::warn!("Simulator exited with status: {}", status);
            }
            split_output(&output)
        }
        Ok(None) => {
            log::warn!("Simulation timed out after {:?}", timeout);
            let _ = child.kill();
            let _ = child.wait();
            let _ = reader_thread.join();
            Vec::new()
        }
        Err(e) => {
            log::warn!("Failed to wait for simulator: {}", e);
            let _ = child.kill();
            let _ = child.wait();
            let _ = reader_thread.join();
            Vec::new()
        }
    }
}

fn split_output(output: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(output)
        .lines()
        .map(str::to_string)
        .collect()
}
