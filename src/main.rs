use log::*;

fn main() {
    // initialize env_logger if not in silent release mode
    #[cfg(not(all(not(debug_assertions), feature = "silent-release")))]
    {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
        debug!("envlogger init");
    }
    log::info!("Starting benchmark");

    if let Err(e) = queue_benchmark::start_benchmark() {
        eprintln!("Benchmark received error: {}", e);
        std::process::exit(1);
    }
}
