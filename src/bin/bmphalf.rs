//! Shrink a BMP file to half resolution: `bmphalf <path>` writes
//! `<path>.half.bmp` alongside the input.

use std::process::ExitCode;

fn main() -> ExitCode {
    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "bmphalf".into());
    let (Some(path), None) = (args.next(), args.next()) else {
        eprintln!("usage: {program} <path-to-bmp>");
        return ExitCode::from(1);
    };

    let bitmap = match bmphalf::load_path(&path) {
        Ok(bitmap) => bitmap,
        Err(e) => {
            eprintln!("{program}: {path}: {e}");
            return ExitCode::from(2);
        }
    };

    let half = match bmphalf::shrink_half(&bitmap) {
        Ok(half) => half,
        Err(e) => {
            eprintln!("{program}: {path}: {e}");
            return ExitCode::from(3);
        }
    };

    let out_path = format!("{path}.half.bmp");
    if let Err(e) = bmphalf::store_path(&half, &out_path) {
        eprintln!("{program}: {out_path}: {e}");
        return ExitCode::from(4);
    }
    ExitCode::SUCCESS
}
