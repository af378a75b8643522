use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use shamir_recover::process_file;

fn main() -> ExitCode {
    let paths: Vec<PathBuf> = env::args_os().skip(1).map(PathBuf::from).collect();
    if paths.is_empty() {
        eprintln!("usage: shamir-recover <record.json>...");
        return ExitCode::FAILURE;
    }

    // A bad record is diagnosed and skipped; the remaining files still run.
    let mut failed = false;
    for path in &paths {
        match process_file(path) {
            Ok(secret) => println!("{}: {}", path.display(), secret),
            Err(error) => {
                eprintln!("{}: {}", path.display(), error);
                failed = true;
            }
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}
