//! GNU-style human readable sizes (`ls -h`, `du -h`).

const BASE: f64 = 1024.0;
const SUFFIXES: [char; 8] = ['K', 'M', 'G', 'T', 'P', 'E', 'Z', 'Y'];

/// Formats a byte count with binary prefixes and a single-letter suffix.
///
/// Values below 1024 print as whole bytes (`512B`); larger values get one
/// decimal (`1.0G`, `512.0M`). Anything past yottabytes stays in `Y`.
pub fn natural_size(bytes: i64) -> String {
    let value = bytes as f64;
    if value.abs() < BASE {
        return format!("{}B", bytes);
    }

    let mut unit = BASE;
    for suffix in SUFFIXES {
        unit *= BASE;
        if value.abs() < unit {
            return format!("{:.1}{}", BASE * value / unit, suffix);
        }
    }
    format!("{:.1}Y", BASE * value / unit)
}
