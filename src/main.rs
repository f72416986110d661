use std::io::Write;
use rand_ranluxpp::*;

// Streams raw RANLUX++ output to stdout for statistical testing, for example:
// rand_ranluxpp 314159265 | RNG_test stdin64

fn main() -> std::io::Result<()> {

    let seed = std::env::args().nth(1).and_then(|arg| arg.parse::<u64>().ok()).unwrap_or(DEFAULT_SEED);
    let mut rnd = Ranluxpp::new(seed);
    let mut stdout = std::io::stdout();

    // A multiple of the 6-byte word size, so that no bits are dropped.
    let mut v = [0u8; 6 * 0x2000];

    loop {
        rnd.fill_bytes(&mut v);
        stdout.write_all(&v)?;
    }
}
