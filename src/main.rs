use std::path::PathBuf;

/// Entry point for the vendor prefix probe.
///
/// Loads a captured computed-style snapshot, detects the browser's vendor prefix and prints
/// the result record as JSON.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be loaded or the result cannot be written.
///
/// # Examples
///
/// ```bash
/// cargo run -- snapshot.json
/// VENDOR_PREFIX_SNAPSHOT=snapshot.json cargo run
/// cat snapshot.json | RUST_LOG=debug cargo run
/// ```
fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let arg = std::env::args_os().nth(1).map(PathBuf::from);
    let source = vendor_prefix::SnapshotSource::resolve(arg);
    let info = vendor_prefix::run(&source)?;
    println!("{}", serde_json::to_string(&info)?);
    Ok(())
}
