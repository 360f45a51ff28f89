//! Round-trip a BMP file through the codec: `bmpcopy <path>` writes
//! `<path>.copy.bmp` alongside the input. Useful for checking that a file
//! survives decode/encode byte-for-byte.

use std::process::ExitCode;

fn main() -> ExitCode {
    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "bmpcopy".into());
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

    let out_path = format!("{path}.copy.bmp");
    if let Err(e) = bmphalf::store_path(&bitmap, &out_path) {
        eprintln!("{program}: {out_path}: {e}");
        return ExitCode::from(3);
    }
    ExitCode::SUCCESS
}
