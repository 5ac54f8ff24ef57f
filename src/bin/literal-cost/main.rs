use std::{env, fs, io::Result, path::PathBuf, time::Instant};

use tracing::{info, warn, Level};

use litcost::{helpers::order0_entropy_bits, helpers::range_cost, par_estimate_bit_costs};

/// Matches the largest meta-block an LZ encoder would cost in one call
const DEFAULT_BLOCK_SIZE: usize = 1 << 24;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        print_usage_and_panic("Invocation doesn't match usage! Provide 1 or 2 arguments.");
    }
    let path = PathBuf::from(&args[1]);
    let block_size = match args.get(2).map(|arg| arg.parse::<usize>()) {
        None => DEFAULT_BLOCK_SIZE,
        Some(Ok(block_size)) => block_size,
        Some(Err(_)) => {
            print_usage_and_panic("<BlockSize> must be a non-negative integer!");
            unreachable!();
        }
    };

    if path.is_dir() {
        for file in fs::read_dir(path)? {
            let file_path = file?.path();
            if file_path.is_file() {
                run(file_path, block_size)?;
            }
        }
    } else if path.is_file() {
        run(path, block_size)?;
    } else {
        panic!("Path must be a file or a directory!");
    }

    Ok(())
}

fn run(file_path: PathBuf, block_size: usize) -> Result<()> {
    let buf = fs::read(&file_path)?;
    if buf.is_empty() {
        warn!(file = %file_path.display(), "skipping empty file");
        return Ok(());
    }

    let timer = Instant::now();
    let cost = par_estimate_bit_costs(&buf, block_size);
    let time = timer.elapsed();

    let literal_bytes = range_cost(&cost, 0, buf.len(), usize::MAX) / 8.0;
    let order0_bytes = order0_entropy_bits(&buf) / 8.0;
    info!(
        file = %file_path.display(),
        size = buf.len(),
        literal_bytes = literal_bytes.round() as u64,
        ratio = %format!("{:.3}", literal_bytes / buf.len() as f64),
        order0_bytes = order0_bytes.round() as u64,
        time = ?time,
        per_byte = ?time.div_f64(buf.len() as f64),
        "estimated literal costs"
    );

    Ok(())
}

fn print_usage_and_panic(panic_msg: &str) {
    println!("Usage: literal-cost <Path> [BlockSize]");
    println!("<Path> can be a single file or a directory");
    println!("[BlockSize] bytes per independently costed block, 0 for the whole file");
    println!("Note: Directories are shallow traversed");
    panic!("{panic_msg}");
}
